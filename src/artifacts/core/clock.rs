use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use derive_new::new;
use std::sync::atomic::{AtomicI32, Ordering};

/// Time source read once per commit
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, new)]
pub struct FixedClock {
    at: DateTime<FixedOffset>,
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.at
    }
}

/// Starts at a given instant and moves forward by `step` on every read
///
/// Handy for reproducible histories where every commit needs a distinct time.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<FixedOffset>,
    step: TimeDelta,
    ticks: AtomicI32,
}

impl SteppingClock {
    pub fn new(start: DateTime<FixedOffset>, step: TimeDelta) -> Self {
        SteppingClock {
            start,
            step,
            ticks: AtomicI32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    /// Once the representable range is exceeded, reads stay pinned at its edge
    fn now(&self) -> DateTime<FixedOffset> {
        let tick = self
            .ticks
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |tick| {
                Some(tick.saturating_add(1))
            })
            .unwrap_or(i32::MAX);

        self.step
            .checked_mul(tick)
            .and_then(|offset| self.start.checked_add_signed(offset))
            .unwrap_or_else(|| {
                if self.step < TimeDelta::zero() {
                    DateTime::<Utc>::MIN_UTC.fixed_offset()
                } else {
                    DateTime::<Utc>::MAX_UTC.fixed_offset()
                }
            })
    }
}
