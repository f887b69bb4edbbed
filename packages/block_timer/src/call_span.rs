//! Drop-guard timing of code regions.

use std::time::Instant;

use crate::pal::Platform;
use crate::{Session, TimedCall};

/// A region of code timed from creation until drop, recorded as one pending call.
///
/// Created by [`Session::span()`].
///
/// # Examples
///
/// ```
/// use block_timer::Session;
///
/// let mut session = Session::new();
/// {
///     let _span = session.span("sort");
///     let mut values = vec![5, 3, 9, 1];
///     values.sort_unstable();
/// } // The elapsed time is recorded here
///
/// session.pack("collections");
/// assert_eq!(session.block("collections").unwrap().calls()[0].name(), "sort");
/// ```
#[derive(Debug)]
#[must_use = "Measurements are taken between creation and drop"]
pub struct CallSpan<'a> {
    session: &'a mut Session,
    label: String,
    started: Instant,
}

impl<'a> CallSpan<'a> {
    pub(crate) fn new(session: &'a mut Session, label: String) -> Self {
        let started = session.platform().now();

        Self {
            session,
            label,
            started,
        }
    }
}

impl Drop for CallSpan<'_> {
    fn drop(&mut self) {
        let elapsed = self
            .session
            .platform()
            .now()
            .saturating_duration_since(self.started);

        let label = std::mem::take(&mut self.label);
        self.session.push_call(TimedCall::new(label, elapsed));
    }
}
