//! Wall-clock timing of function calls, grouped into named blocks and printed as an
//! aligned summary.
//!
//! The core functionality includes:
//! - [`Session`] - Records timed calls, packs them into blocks and renders them
//! - [`Timer`] - A lock-protected session, including the process-wide [`Timer::global()`]
//! - [`Block`] - A titled group of timed calls with their total
//! - [`BlockId`] - Looks up a block by position or by title
//! - [`timed!`] - Records a function call labelled with the function's name
//!
//! This package is a development tool for finding out where time goes in a program,
//! not a statistics or benchmarking framework.
//!
//! # Simple Usage
//!
//! Record calls, pack them into a block and print the summary:
//!
//! ```
//! use block_timer::{Timer, timed};
//!
//! fn parse(input: &str) -> Vec<u32> {
//!     input.split(',').filter_map(|part| part.parse().ok()).collect()
//! }
//!
//! fn sum(values: &[u32]) -> u32 {
//!     values.iter().sum()
//! }
//!
//! # fn main() {
//! let timer = Timer::global();
//!
//! let values = timed!(timer, parse("1,2,3"));
//! let total = timed!(timer, sum(&values));
//! timer.pack("numbers");
//!
//! assert_eq!(total, 6);
//!
//! // Every block with its calls and total, then the total of all blocks.
//! timer.show();
//! # }
//! ```
//!
//! # Blocks
//!
//! Calls accumulate in a pending buffer until [`Session::pack()`] moves them into a new
//! block. Blocks keep the order they were packed in and never change afterwards.
//! [`Session::show()`] prints calls that are still pending in a separate section,
//! outside the total.
//!
//! A single block can be rendered on its own, looked up by position or by title:
//!
//! ```
//! use block_timer::{Error, Session};
//!
//! let mut session = Session::builder().colors(false).build();
//! session.record_as("connect", || ());
//! session.pack("network");
//!
//! assert!(session.render_block("network").is_ok());
//! assert!(session.render_block(-1).is_ok());
//! assert!(matches!(
//!     session.render_block("disk"),
//!     Err(Error::BlockNotFound { .. })
//! ));
//! ```
//!
//! # Threading
//!
//! [`Session`] is owned by one caller. [`Timer`] wraps a session in a lock so that it
//! can be shared between call sites and threads; the timed callable itself runs
//! without the lock held.
//!
//! # Logging
//!
//! Recorded calls and packed blocks are reported as `tracing` events at trace and
//! debug level. No subscriber is installed by this package.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod block;
mod block_id;
mod call_span;
mod error;
mod macros;
mod pal;
mod report;
mod session;
mod session_builder;
mod timed_call;
mod timer;

pub use block::Block;
pub use block_id::BlockId;
pub use call_span::CallSpan;
pub use error::Error;
#[doc(hidden)]
pub use macros::__private;
pub use session::Session;
pub use session_builder::SessionBuilder;
pub use timed_call::TimedCall;
pub use timer::Timer;
