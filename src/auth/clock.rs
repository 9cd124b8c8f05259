//! Time source for request timestamps.
//!
//! Binance rejects signed requests whose `timestamp` falls outside the
//! receive window, so the clock is read fresh for every request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing the current time in milliseconds since UNIX epoch.
pub trait Clock: Send + Sync {
    /// Current epoch time in milliseconds.
    fn now_millis(&self) -> u64;
}

/// Clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// A clock that returns a settable fixed instant.
///
/// Useful for tests that need deterministic timestamps and signatures.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: AtomicU64,
}

impl FixedClock {
    /// Create a clock frozen at `millis`.
    pub fn new(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    /// Move the clock to `millis`.
    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_in_milliseconds() {
        let now = SystemClock.now_millis();
        // 2020-01-01 in ms; a seconds or micros value would be far off.
        assert!(now > 1_577_836_800_000);
        assert!(now < 1_577_836_800_000 * 100);
    }

    #[test]
    fn test_system_clock_is_read_each_time() {
        let first = SystemClock.now_millis();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(SystemClock.now_millis() > first);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(1_499_827_319_559);
        assert_eq!(clock.now_millis(), 1_499_827_319_559);
        clock.set(42);
        assert_eq!(clock.now_millis(), 42);
    }
}
