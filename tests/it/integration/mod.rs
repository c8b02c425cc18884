//! Integration tests for the pointer controller.
//!
//! These drive complete event sequences through a replay session and check
//! what the in-memory collaborators observed.

mod filter_tests;
mod hover_tests;
mod replay_tests;
