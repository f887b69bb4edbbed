use std::time::Duration;

use crate::TimedCall;
use crate::report::char_width;

/// A named group of timed calls, created by packing a session.
///
/// Blocks are write-once: the calls and the total are fixed when the block is packed.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use block_timer::Session;
///
/// let mut session = Session::new();
/// session.record_as("parse", || "42".parse::<u32>().is_ok());
/// session.record_as("render", || format!("{}", 42));
/// session.pack("startup");
///
/// let block = session.block("startup").unwrap();
/// assert_eq!(block.title(), "startup");
/// assert_eq!(block.len(), 2);
/// assert_eq!(
///     block.total(),
///     block.calls().iter().map(|call| call.elapsed()).sum::<Duration>()
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    title: String,
    calls: Vec<TimedCall>,
    total: Duration,
}

impl Block {
    /// Seals `calls` into a block, computing the total once.
    #[must_use]
    pub(crate) fn pack(title: impl Into<String>, calls: Vec<TimedCall>) -> Self {
        let total = calls.iter().map(TimedCall::elapsed).sum();

        Self {
            title: title.into(),
            calls,
            total,
        }
    }

    /// The title the block was packed under.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The calls of the block, in recording order.
    #[must_use]
    pub fn calls(&self) -> &[TimedCall] {
        &self.calls
    }

    /// The sum of the elapsed time of all calls, as computed when the block was packed.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// The number of calls in the block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the block was packed from an empty pending buffer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The length in characters of the longest call label, or zero for an empty block.
    pub(crate) fn label_width(&self) -> usize {
        self.calls
            .iter()
            .map(|call| char_width(call.name()))
            .max()
            .unwrap_or_default()
    }
}
