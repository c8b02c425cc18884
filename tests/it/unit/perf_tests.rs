//! Unit tests for perf module.

use crate::helpers::{body_point, default_session};
use gridpointer::perf::{HANDLER_BUDGET, HandlerStats, HandlerTimer, timed};
use std::time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn test_empty_stats() {
    let stats = HandlerStats::default();
    assert_eq!(stats.calls(), 0);
    assert_eq!(stats.mean(), Duration::ZERO);
    assert_eq!(stats.percentile(0.95), Duration::ZERO);
    assert_eq!(stats.over_budget(), 0);
}

#[test]
fn test_stats_mean_percentile_and_budget() {
    let mut stats = HandlerStats::default();
    for value in [2, 4, 30, 1] {
        stats.record(ms(value));
    }

    assert_eq!(stats.calls(), 4);
    assert_eq!(stats.mean(), Duration::from_micros(9_250));
    assert_eq!(stats.slowest(), ms(30));
    assert_eq!(stats.percentile(0.5), ms(2));
    assert_eq!(stats.percentile(1.0), ms(30));
    // Only the 30ms call misses a frame
    assert_eq!(stats.over_budget(), 1);
}

#[test]
fn test_stats_window_drops_old_calls() {
    let mut stats = HandlerStats::default();
    stats.record(HANDLER_BUDGET * 10);
    for _ in 0..128 {
        stats.record(ms(1));
    }
    assert_eq!(stats.calls(), 129);
    assert_eq!(stats.mean(), ms(1));
    assert_eq!(stats.over_budget(), 0);
    assert_eq!(stats.slowest(), HANDLER_BUDGET * 10);
}

#[test]
fn test_handler_timer_drops_quietly() {
    let timer = HandlerTimer::start("test_op", Duration::from_secs(1));
    assert_eq!(timer.name(), "test_op");
    assert!(timer.elapsed() < Duration::from_secs(60));
}

#[test]
fn test_timed_returns_result() {
    let (value, _elapsed) = timed(|| 6 * 7);
    assert_eq!(value, 42);
}

#[test]
fn test_session_times_each_event_kind() {
    let mut session = default_session();
    let (x, y) = body_point(3, 2);
    for event in [
        gridpointer::replay::ReplayEvent::Move { x, y, shift: false, accel: false },
        gridpointer::replay::ReplayEvent::Move { x, y: y + 20.0, shift: false, accel: false },
        gridpointer::replay::ReplayEvent::Leave,
    ] {
        session.apply(&event);
    }
    let timings = session.timings();
    assert_eq!(timings.get("move").map(|s| s.calls()), Some(2));
    assert_eq!(timings.get("leave").map(|s| s.calls()), Some(1));
    assert!(!timings.contains_key("down"));
}
