//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Fake clock for tests.
///
/// The clock stands still until a test moves it with [`advance()`](Self::advance)
/// or [`set_elapsed()`](Self::set_elapsed). Clones share the same time state, so a
/// test can keep one clone and move time forward while the code under test reads
/// another clone.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    /// Creates a fake clock positioned at its origin.
    pub(crate) fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Moves the clock forward by `delta`.
    pub(crate) fn advance(&self, delta: Duration) {
        let mut offset = self
            .offset
            .lock()
            .expect("FakePlatform state lock should not be poisoned");
        *offset = offset
            .checked_add(delta)
            .expect("fake clock offsets in tests never overflow");
    }

    /// Positions the clock at `elapsed` after its origin.
    pub(crate) fn set_elapsed(&self, elapsed: Duration) {
        *self
            .offset
            .lock()
            .expect("FakePlatform state lock should not be poisoned") = elapsed;
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Instant {
        let offset = *self
            .offset
            .lock()
            .expect("FakePlatform state lock should not be poisoned");

        self.origin
            .checked_add(offset)
            .expect("fake clock offsets in tests never overflow")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn stands_still_until_advanced() {
        let platform = FakePlatform::new();

        assert_eq!(platform.now(), platform.now());
    }

    #[test]
    fn advance_accumulates() {
        let platform = FakePlatform::new();
        let start = platform.now();

        platform.advance(Duration::from_millis(10));
        platform.advance(Duration::from_millis(5));

        assert_eq!(platform.now().duration_since(start), Duration::from_millis(15));
    }

    #[test]
    fn set_elapsed_can_move_backwards() {
        let platform = FakePlatform::new();
        let start = platform.now();

        platform.set_elapsed(Duration::from_millis(40));
        platform.set_elapsed(Duration::from_millis(25));

        assert_eq!(platform.now().duration_since(start), Duration::from_millis(25));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        platform1.advance(Duration::from_millis(100));

        assert_eq!(platform1.now(), platform2.now());
    }
}
