//! Manual timer queue: timers fire only when the owner pops them.

use crate::grid::{AutoscrollScheduler, AutoscrollTicket};
use std::collections::VecDeque;
use std::time::Duration;

/// A timer requested through [`AutoscrollScheduler::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub delay: Duration,
    pub ticket: AutoscrollTicket,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryScheduler {
    pending: VecDeque<ScheduledTick>,
    scheduled: usize,
}

impl MemoryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Oldest pending timer, removed from the queue.
    pub fn pop(&mut self) -> Option<ScheduledTick> {
        self.pending.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn peek(&self) -> Option<&ScheduledTick> {
        self.pending.front()
    }

    /// Total timers ever requested.
    pub fn scheduled(&self) -> usize {
        self.scheduled
    }
}

impl AutoscrollScheduler for MemoryScheduler {
    fn schedule(&mut self, delay: Duration, ticket: AutoscrollTicket) {
        self.scheduled += 1;
        self.pending.push_back(ScheduledTick { delay, ticket });
    }
}
