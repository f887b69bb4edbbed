//! Configuration of new sessions.

use crate::pal::PlatformFacade;
use crate::{Session, Timer};

/// Builder for [`Session`] and [`Timer`] instances with non-default settings.
///
/// # Examples
///
/// ```
/// use block_timer::Session;
///
/// // Plain text output, e.g. for writing the summary to a log file.
/// let mut session = Session::builder().colors(false).build();
/// session.record_as("noop", || ());
/// session.pack("setup");
///
/// assert!(!session.render().contains('\u{1b}'));
/// ```
#[derive(Debug)]
#[must_use]
pub struct SessionBuilder {
    colors: bool,
    platform: PlatformFacade,
}

impl SessionBuilder {
    pub(crate) fn new() -> Self {
        Self {
            colors: true,
            platform: PlatformFacade::real(),
        }
    }

    /// Whether rendered output carries ANSI styling. Defaults to `true`.
    ///
    /// Even when enabled, styling is left out if the environment asks for it via
    /// `NO_COLOR` or `CLICOLOR=0`.
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Replaces the clock the session measures against.
    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Creates a session owned by the caller.
    #[must_use]
    pub fn build(self) -> Session {
        Session::from_parts(self.platform, self.colors)
    }

    /// Creates a thread-safe timer, for sharing one session between call sites.
    ///
    /// The timer is independent of [`Timer::global()`].
    #[must_use]
    pub fn build_timer(self) -> Timer {
        Timer::from(self.build())
    }
}
