use std::fmt::{self, Debug};
#[cfg(test)]
use std::sync::Arc;
use std::time::{Duration, Instant};

#[cfg(test)]
use crate::pal::FakePlatform;
use crate::pal::Platform;
use crate::pal::real::{REAL_PLATFORM, RealPlatform};

/// Dispatches clock reads to either the real clock or, in tests, a fake one.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static RealPlatform),

    #[cfg(test)]
    Fake(Arc<FakePlatform>),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&REAL_PLATFORM)
    }

    #[cfg(test)]
    pub(crate) fn fake(platform: FakePlatform) -> Self {
        Self::Fake(Arc::new(platform))
    }

    /// Runs `f` and returns its result together with the wall-clock time it took.
    pub(crate) fn measure<F, R>(&self, f: F) -> (R, Duration)
    where
        F: FnOnce() -> R,
    {
        let started = self.now();
        let result = f();
        let elapsed = self.now().saturating_duration_since(started);

        (result, elapsed)
    }
}

impl Platform for PlatformFacade {
    fn now(&self) -> Instant {
        match self {
            Self::Real(p) => p.now(),
            #[cfg(test)]
            Self::Fake(p) => p.now(),
        }
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Fake(p) => p.fmt(f),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn measure_returns_value_and_fake_elapsed_time() {
        let fake = FakePlatform::new();
        let facade = PlatformFacade::fake(fake.clone());

        let (value, elapsed) = facade.measure(|| {
            fake.advance(Duration::from_millis(12));
            "done"
        });

        assert_eq!(value, "done");
        assert_eq!(elapsed, Duration::from_millis(12));
    }

    #[test]
    fn measure_with_real_clock_is_nonnegative() {
        let facade = PlatformFacade::real();

        let ((), elapsed) = facade.measure(|| ());

        assert!(elapsed >= Duration::ZERO);
    }
}
