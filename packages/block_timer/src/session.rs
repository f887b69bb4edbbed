use std::fmt;
use std::time::Duration;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::error::Result;
use crate::pal::PlatformFacade;
use crate::report::{BlockReport, SessionReport};
use crate::timed_call::{as_millis_f64, label_of};
use crate::{Block, BlockId, CallSpan, SessionBuilder, TimedCall};

/// Collects timed calls into named blocks and renders them as a summary.
///
/// Calls are first recorded into a pending buffer. [`pack()`](Self::pack) moves the
/// pending calls into a new [`Block`]. Rendering never changes the session.
///
/// A `Session` is owned by one caller and is mutated through `&mut self`. For one
/// instance shared across the process, use [`Timer::global()`](crate::Timer::global).
///
/// # Examples
///
/// ```
/// use block_timer::Session;
///
/// fn checksum(data: &[u8]) -> u32 {
///     data.iter().map(|b| u32::from(*b)).sum()
/// }
///
/// let mut session = Session::new();
///
/// let sum = session.record_as("checksum", || checksum(b"hello"));
/// assert_eq!(sum, 532);
/// session.record_as("format", || format!("{sum:08x}"));
/// session.pack("hashing");
///
/// session.show();
/// ```
#[derive(Debug)]
pub struct Session {
    blocks: Vec<Block>,
    pending: Vec<TimedCall>,
    platform: PlatformFacade,
    colors: bool,
}

impl Session {
    /// Creates an empty session that measures against the system clock and renders
    /// colored output.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts configuring a session.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub(crate) fn from_parts(platform: PlatformFacade, colors: bool) -> Self {
        Self {
            blocks: Vec::new(),
            pending: Vec::new(),
            platform,
            colors,
        }
    }

    /// Runs `f`, records how long it took and returns its result unchanged.
    ///
    /// The call is labelled with the name of `f` when it is a function item. Closures
    /// have no name of their own, so prefer [`record_as()`](Self::record_as) or the
    /// [`timed!`](crate::timed) macro for them.
    ///
    /// A panic in `f` propagates to the caller and nothing is recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_timer::Session;
    ///
    /// fn warm_up() -> u64 {
    ///     (1..=10).product()
    /// }
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.record(warm_up), 3_628_800);
    /// assert_eq!(session.pending()[0].name(), "warm_up");
    /// ```
    pub fn record<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        self.record_as(label_of::<F>(), f)
    }

    /// Runs `f`, records how long it took under `label` and returns its result unchanged.
    ///
    /// A panic in `f` propagates to the caller and nothing is recorded.
    pub fn record_as<F, R>(&mut self, label: impl Into<String>, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let (result, elapsed) = self.platform.measure(f);
        self.push_call(TimedCall::new(label, elapsed));

        result
    }

    /// Starts timing a region of code that ends when the returned span is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use block_timer::Session;
    ///
    /// let mut session = Session::new();
    /// {
    ///     let _span = session.span("allocate");
    ///     let buffer = vec![0_u8; 4096];
    ///     std::hint::black_box(buffer);
    /// }
    ///
    /// assert_eq!(session.pending().len(), 1);
    /// ```
    pub fn span(&mut self, label: impl Into<String>) -> CallSpan<'_> {
        CallSpan::new(self, label.into())
    }

    pub(crate) fn push_call(&mut self, call: TimedCall) {
        trace!(
            label = call.name(),
            elapsed_ms = call.elapsed_ms(),
            "recorded timed call"
        );

        self.pending.push(call);
    }

    /// Moves all pending calls into a new block with the given title.
    ///
    /// Titles do not need to be unique; lookups by title find the first block packed
    /// with that title. Packing with no pending calls creates an empty block.
    pub fn pack(&mut self, title: impl Into<String>) {
        let block = Block::pack(title, std::mem::take(&mut self.pending));

        debug!(
            title = block.title(),
            calls = block.len(),
            total_ms = as_millis_f64(block.total()),
            "packed block"
        );

        self.blocks.push(block);
    }

    /// The packed blocks, in packing order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The calls recorded since the last pack.
    #[must_use]
    pub fn pending(&self) -> &[TimedCall] {
        &self.pending
    }

    /// Looks up a packed block by position or by title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockNotFound`](crate::Error::BlockNotFound) if no block has the
    /// title and [`Error::IndexOutOfRange`](crate::Error::IndexOutOfRange) if the
    /// position does not address a block.
    pub fn block(&self, id: impl Into<BlockId>) -> Result<&Block> {
        let id = id.into();

        id.resolve(&self.blocks).inspect_err(|error| {
            debug!(%id, %error, "block lookup failed");
        })
    }

    /// The sum of the totals of all packed blocks. Pending calls are not included.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.blocks.iter().map(Block::total).sum()
    }

    /// Whether nothing has been packed or recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty() && self.pending.is_empty()
    }

    pub(crate) fn colors(&self) -> bool {
        self.colors
    }

    pub(crate) fn platform(&self) -> &PlatformFacade {
        &self.platform
    }

    /// Renders the calls of one block, one aligned row per call, without title or total.
    ///
    /// # Errors
    ///
    /// Returns the lookup error of [`block()`](Self::block); nothing is rendered then.
    pub fn render_block(&self, id: impl Into<BlockId>) -> Result<String> {
        let block = self.block(id)?;

        Ok(BlockReport::new(block, self.colors).to_string())
    }

    /// Prints the calls of one block to stdout.
    ///
    /// # Errors
    ///
    /// Returns the lookup error of [`block()`](Self::block); nothing is printed then.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn show_block(&self, id: impl Into<BlockId>) -> Result<()> {
        let rendered = self.render_block(id)?;
        print!("{rendered}");

        Ok(())
    }

    /// Renders every block with its calls and total, the total of all packed blocks
    /// and any calls still pending.
    ///
    /// Returns an empty string if nothing was recorded.
    #[must_use]
    pub fn render(&self) -> String {
        SessionReport::new(self).to_string()
    }

    /// Prints the rendering of [`render()`](Self::render) to stdout.
    ///
    /// Prints nothing, not even an empty line, if nothing was recorded.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn show(&self) {
        if self.is_empty() {
            return;
        }

        print!("{}", self.render());
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Short description: the number of packed blocks and, per block, its call labels.
impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timer class with {} blocks packed:", self.blocks.len())?;

        for block in &self.blocks {
            let labels = block.calls().iter().map(TimedCall::name).join(", ");
            write!(f, "\n\t- {} ({labels})", block.title())?;
        }

        Ok(())
    }
}
