use std::time::Instant;

use crate::pal::Platform;

/// The operating system monotonic clock.
#[derive(Debug, Default)]
pub(crate) struct RealPlatform;

pub(crate) static REAL_PLATFORM: RealPlatform = RealPlatform;

impl Platform for RealPlatform {
    #[cfg_attr(test, mutants::skip)] // Real time cannot be asserted exactly.
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn clock_does_not_go_backwards() {
        let first = REAL_PLATFORM.now();
        let second = REAL_PLATFORM.now();

        assert!(second >= first);
    }
}
