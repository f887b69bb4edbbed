//! Platform abstraction layer for wall-clock sampling.
//!
//! Production code reads the monotonic clock of the operating system through
//! `std::time::Instant`. Tests swap in a fake clock whose current time is set
//! explicitly, so measured durations are exact.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
