use thiserror::Error;

/// Errors that can occur when looking up a packed block.
///
/// A failed lookup never produces partial output: the rendering methods return
/// the error before anything is written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// No packed block carries the requested title.
    #[error("timer block not found: '{title}'")]
    BlockNotFound {
        /// The title that was looked up.
        title: String,
    },

    /// The requested index does not address a packed block.
    #[error("block index {index} is out of range for {block_count} packed blocks")]
    IndexOutOfRange {
        /// The index that was looked up. Negative values count from the end.
        index: isize,

        /// How many blocks were packed at the time of the lookup.
        block_count: usize,
    },
}

/// A specialized `Result` type for block lookups, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
