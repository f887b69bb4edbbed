//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides the wall clock that timed calls are measured against.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Samples the current point on the monotonic wall clock.
    fn now(&self) -> Instant;
}
