use std::fmt;

use crate::error::Result;
use crate::{Block, Error};

/// Identifies a packed block, either by position or by title.
///
/// Integers and strings convert into a `BlockId`, so lookups accept either directly:
///
/// ```
/// use block_timer::Session;
///
/// let mut session = Session::new();
/// session.pack("first");
/// session.pack("second");
///
/// assert_eq!(session.block(0).unwrap().title(), "first");
/// assert_eq!(session.block(-1).unwrap().title(), "second");
/// assert_eq!(session.block("second").unwrap().title(), "second");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BlockId {
    /// The block at this position in packing order. Negative values count from the
    /// end, so `-1` is the most recently packed block.
    Index(isize),

    /// The first block packed with this title.
    Title(String),
}

impl BlockId {
    /// The most recently packed block.
    pub const LAST: Self = Self::Index(-1);

    pub(crate) fn resolve<'a>(&self, blocks: &'a [Block]) -> Result<&'a Block> {
        match self {
            Self::Index(index) => resolve_index(*index, blocks),
            Self::Title(title) => blocks
                .iter()
                .find(|block| block.title() == title)
                .ok_or_else(|| Error::BlockNotFound {
                    title: title.clone(),
                }),
        }
    }
}

fn resolve_index(index: isize, blocks: &[Block]) -> Result<&Block> {
    let position = if index < 0 {
        blocks.len().checked_sub(index.unsigned_abs())
    } else {
        Some(index.unsigned_abs())
    };

    position
        .and_then(|position| blocks.get(position))
        .ok_or(Error::IndexOutOfRange {
            index,
            block_count: blocks.len(),
        })
}

impl From<isize> for BlockId {
    fn from(index: isize) -> Self {
        Self::Index(index)
    }
}

impl From<i32> for BlockId {
    fn from(index: i32) -> Self {
        // isize is at least 32 bits wide on every platform the crate builds for.
        Self::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl From<usize> for BlockId {
    fn from(index: usize) -> Self {
        // Positions past isize::MAX cannot address a block anyway.
        Self::Index(isize::try_from(index).unwrap_or(isize::MAX))
    }
}

impl From<&str> for BlockId {
    fn from(title: &str) -> Self {
        Self::Title(title.to_owned())
    }
}

impl From<String> for BlockId {
    fn from(title: String) -> Self {
        Self::Title(title)
    }
}

impl From<&String> for BlockId {
    fn from(title: &String) -> Self {
        Self::Title(title.clone())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "#{index}"),
            Self::Title(title) => write!(f, "'{title}'"),
        }
    }
}
