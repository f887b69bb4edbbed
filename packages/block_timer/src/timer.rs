//! Shared, thread-safe access to a session.

use std::fmt;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::Result;
use crate::pal::PlatformFacade;
use crate::timed_call::label_of;
use crate::{BlockId, Session, TimedCall};

static GLOBAL: OnceLock<Timer> = OnceLock::new();

/// A session behind a lock, shareable between call sites and threads.
///
/// [`Timer::global()`] returns the one process-wide instance, created empty on first
/// access. Independent instances can be created with [`Timer::new()`] and handed to
/// call sites explicitly, e.g. wrapped in an `Arc`.
///
/// The callable passed to [`record()`](Self::record) runs without the lock held, so
/// timed code may itself use the timer. Concurrent `record` and `pack` calls never
/// lose measurements: each call lands either in the block being packed or in the
/// pending buffer that remains.
///
/// # Examples
///
/// ```
/// use block_timer::Timer;
///
/// fn load() -> Vec<u32> {
///     (0..1000).collect()
/// }
///
/// let values = Timer::global().record(load);
/// assert_eq!(values.len(), 1000);
/// Timer::global().pack("loading");
///
/// Timer::global().show();
/// ```
#[derive(Debug)]
pub struct Timer {
    session: Mutex<Session>,
    platform: PlatformFacade,
}

impl Timer {
    /// The process-wide timer. Every call returns the same instance.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Creates an independent timer with an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::from(Session::new())
    }

    // User code never runs with the lock held, so a poisoned lock still guards a
    // consistent session.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f`, records how long it took and returns its result unchanged.
    ///
    /// See [`Session::record()`] for how the call is labelled.
    pub fn record<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.record_as(label_of::<F>(), f)
    }

    /// Runs `f`, records how long it took under `label` and returns its result unchanged.
    ///
    /// A panic in `f` propagates to the caller and nothing is recorded.
    pub fn record_as<F, R>(&self, label: impl Into<String>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let (result, elapsed) = self.platform.measure(f);
        self.lock().push_call(TimedCall::new(label, elapsed));

        result
    }

    /// Moves all pending calls into a new block with the given title.
    pub fn pack(&self, title: impl Into<String>) {
        self.lock().pack(title);
    }

    /// The number of packed blocks.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.lock().blocks().len()
    }

    /// The number of calls recorded since the last pack.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.lock().pending().len()
    }

    /// Gives `f` read access to the session, with the lock held.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_timer::Timer;
    ///
    /// let timer = Timer::new();
    /// timer.record_as("step", || ());
    /// timer.pack("steps");
    ///
    /// let total = timer.with_session(|session| session.total());
    /// println!("steps took {total:?}");
    /// ```
    pub fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&*self.lock())
    }

    /// Renders the calls of one block, as [`Session::render_block()`] does.
    ///
    /// # Errors
    ///
    /// Returns the lookup error if `id` does not address a packed block.
    pub fn render_block(&self, id: impl Into<BlockId>) -> Result<String> {
        self.lock().render_block(id)
    }

    /// Prints the calls of one block to stdout.
    ///
    /// # Errors
    ///
    /// Returns the lookup error if `id` does not address a packed block; nothing is
    /// printed then.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn show_block(&self, id: impl Into<BlockId>) -> Result<()> {
        let rendered = self.render_block(id)?;
        print!("{rendered}");

        Ok(())
    }

    /// Renders the whole session, as [`Session::render()`] does.
    #[must_use]
    pub fn render(&self) -> String {
        self.lock().render()
    }

    /// Prints the whole session to stdout. Prints nothing if nothing was recorded.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn show(&self) {
        let rendered = self.render();
        print!("{rendered}");
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Session> for Timer {
    fn from(session: Session) -> Self {
        Self {
            platform: session.platform().clone(),
            session: Mutex::new(session),
        }
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.lock())
    }
}
