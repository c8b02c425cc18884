//! Handler timing.
//!
//! Pointer moves arrive at display rate during drags and autoscroll ticks
//! fire every few milliseconds, so the handlers have a frame budget. Two
//! tools live here:
//!
//! - `profile_scope!` times a scope and reports it through `tracing`. It
//!   compiles to nothing unless the `profiling` feature is enabled.
//! - [`HandlerStats`] keeps a rolling window of durations for one handler;
//!   the replay session fills one per event kind.
//!
//! ```ignore
//! use gridpointer::profile_scope;
//!
//! fn pointer_move() {
//!     profile_scope!("pointer_move");
//! }
//! ```

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
#[cfg(feature = "profiling")]
use tracing::trace;
#[cfg(not(feature = "profiling"))]
use tracing::warn;

/// One 60Hz frame
pub const HANDLER_BUDGET: Duration = Duration::from_micros(16_667);

/// Threshold used by `profile_scope!` without an explicit one
pub const PROFILING_THRESHOLD: Duration = Duration::from_millis(1);

/// Durations kept per handler
const WINDOW: usize = 128;

static PROFILING_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "profiling"));

/// Time the rest of the scope. Zero-cost without the `profiling` feature.
///
/// The optional second argument is the reporting threshold in milliseconds.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::HandlerTimer::start($name, $crate::perf::PROFILING_THRESHOLD);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::HandlerTimer::start(
            $name,
            ::std::time::Duration::from_secs_f64($threshold_ms as f64 / 1000.0),
        );
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// Turn scope reports on or off at runtime (profiling builds only).
pub fn set_profiling_enabled(enabled: bool) {
    PROFILING_ENABLED.store(enabled, Ordering::Relaxed);
}

#[inline]
pub fn is_profiling_enabled() -> bool {
    PROFILING_ENABLED.load(Ordering::Relaxed)
}

/// Rolling durations of one handler.
#[derive(Debug, Clone, Default)]
pub struct HandlerStats {
    window: VecDeque<Duration>,
    calls: u64,
    slowest: Duration,
}

impl HandlerStats {
    pub fn record(&mut self, elapsed: Duration) {
        if self.window.len() == WINDOW {
            self.window.pop_front();
        }
        self.window.push_back(elapsed);
        self.calls += 1;
        self.slowest = self.slowest.max(elapsed);
    }

    /// Calls recorded, including those that left the window.
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Slowest call ever recorded.
    pub fn slowest(&self) -> Duration {
        self.slowest
    }

    pub fn mean(&self) -> Duration {
        match u32::try_from(self.window.len()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(len) => self.window.iter().sum::<Duration>() / len,
        }
    }

    /// Nearest-rank percentile of the window, `p` in `0.0..=1.0`.
    pub fn percentile(&self, p: f64) -> Duration {
        if self.window.is_empty() {
            return Duration::ZERO;
        }
        let mut sorted: Vec<Duration> = self.window.iter().copied().collect();
        sorted.sort_unstable();
        let rank = (p.clamp(0.0, 1.0) * sorted.len() as f64).ceil() as usize;
        sorted[rank.saturating_sub(1).min(sorted.len() - 1)]
    }

    /// Windowed calls over [`HANDLER_BUDGET`].
    pub fn over_budget(&self) -> usize {
        self.window.iter().filter(|d| **d > HANDLER_BUDGET).count()
    }
}

/// Reports its lifetime on drop when it ran longer than `threshold`.
pub struct HandlerTimer {
    name: &'static str,
    started: Instant,
    threshold: Duration,
}

impl HandlerTimer {
    pub fn start(name: &'static str, threshold: Duration) -> Self {
        Self {
            name,
            started: Instant::now(),
            threshold,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for HandlerTimer {
    fn drop(&mut self) {
        // Over-budget handlers are always reported, finer thresholds only when enabled
        if self.threshold < HANDLER_BUDGET && !is_profiling_enabled() {
            return;
        }
        let elapsed = self.elapsed();
        if elapsed <= self.threshold {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!(handler = self.name, elapsed_us = elapsed.as_micros() as u64, "Handler timing");

        #[cfg(not(feature = "profiling"))]
        warn!(
            handler = self.name,
            elapsed_us = elapsed.as_micros() as u64,
            threshold_us = self.threshold.as_micros() as u64,
            "Slow pointer handler"
        );
    }
}

/// Run `f` and return its result with how long it took.
#[inline]
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let result = f();
    (result, started.elapsed())
}
