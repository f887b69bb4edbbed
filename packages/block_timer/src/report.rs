//! Column-aligned text rendering of blocks and sessions.

use std::fmt::{self, Write as _};
use std::time::Duration;

use colored::{ColoredString, Colorize};

use crate::timed_call::as_millis_f64;
use crate::{Block, Session, TimedCall};

const TOTAL_LABEL: &str = "TOTAL (packed)";
const UNPACKED_TITLE: &str = "UNPACKED";
const TIME_GAP: &str = "   ";

/// Display width of `text` as counted by the `{:<width$}` padding, in characters.
pub(crate) fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Visual emphasis applied to a whole rendered row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowStyle {
    Plain,
    Bold,
    Success,
    BoldSuccess,
    Warning,
}

impl RowStyle {
    fn paint(self, text: &str) -> ColoredString {
        match self {
            Self::Plain => text.normal(),
            Self::Bold => text.bold(),
            Self::Success => text.green(),
            Self::BoldSuccess => text.bold().green(),
            Self::Warning => text.yellow(),
        }
    }
}

/// One output line made of two padded text columns and an optional time.
///
/// The left column is padded to `left_width + 1` characters and is left out
/// entirely when `left_width` is zero. The right column is padded to `right_width`.
/// A zero time is not printed.
#[derive(Debug)]
struct Row<'a> {
    left: &'a str,
    right: &'a str,
    time: Option<Duration>,
    left_width: usize,
    right_width: usize,
    style: RowStyle,
}

impl Row<'_> {
    fn write(&self, f: &mut fmt::Formatter<'_>, colors: bool) -> fmt::Result {
        let mut line = String::new();

        if self.left_width != 0 {
            let width = self.left_width.saturating_add(1);
            write!(line, "{:<width$}", self.left)?;
        }

        let width = self.right_width;
        write!(line, "{:<width$}", self.right)?;

        if let Some(time) = self.time.filter(|time| !time.is_zero()) {
            write!(line, "{TIME_GAP}{:7.2}ms", as_millis_f64(time))?;
        }

        if colors {
            writeln!(f, "{}", self.style.paint(&line))
        } else {
            writeln!(f, "{line}")
        }
    }
}

/// Rendering of the calls of a single block, without title or total.
#[derive(Debug)]
pub(crate) struct BlockReport<'a> {
    block: &'a Block,
    colors: bool,
}

impl<'a> BlockReport<'a> {
    pub(crate) fn new(block: &'a Block, colors: bool) -> Self {
        Self { block, colors }
    }
}

impl fmt::Display for BlockReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.block.label_width();

        for call in self.block.calls() {
            Row {
                left: "",
                right: call.name(),
                time: Some(call.elapsed()),
                left_width: 0,
                right_width: label_width,
                style: RowStyle::Plain,
            }
            .write(f, self.colors)?;
        }

        Ok(())
    }
}

/// Rendering of a whole session: every block with its calls and total, the grand
/// total of all packed blocks and, if any, the calls that are still pending.
#[derive(Debug)]
pub(crate) struct SessionReport<'a> {
    session: &'a Session,
}

impl<'a> SessionReport<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Longest call label across packed blocks. Without packed blocks, the longest
    /// pending label.
    fn label_width(&self) -> usize {
        let blocks = self.session.blocks();

        if blocks.is_empty() {
            return self
                .session
                .pending()
                .iter()
                .map(|call| char_width(call.name()))
                .max()
                .unwrap_or_default();
        }

        blocks.iter().map(Block::label_width).max().unwrap_or_default()
    }

    /// Longest block title. Without packed blocks, the width of the unpacked
    /// section header.
    ///
    /// Pending labels and the unpacked header do not widen the columns of packed
    /// blocks; they overflow their padding instead.
    fn title_width(&self) -> usize {
        let blocks = self.session.blocks();

        if blocks.is_empty() {
            return char_width(UNPACKED_TITLE);
        }

        blocks
            .iter()
            .map(|block| char_width(block.title()))
            .max()
            .unwrap_or_default()
    }

    fn write_calls(
        f: &mut fmt::Formatter<'_>,
        calls: &[TimedCall],
        title_width: usize,
        label_width: usize,
        colors: bool,
    ) -> fmt::Result {
        for call in calls {
            Row {
                left: " ",
                right: call.name(),
                time: Some(call.elapsed()),
                left_width: title_width,
                right_width: label_width,
                style: RowStyle::Plain,
            }
            .write(f, colors)?;
        }

        Ok(())
    }

    fn write_title(
        f: &mut fmt::Formatter<'_>,
        title: &str,
        title_width: usize,
        colors: bool,
    ) -> fmt::Result {
        Row {
            left: title,
            right: "",
            time: None,
            left_width: title_width,
            right_width: 0,
            style: RowStyle::Bold,
        }
        .write(f, colors)
    }
}

impl fmt::Display for SessionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks = self.session.blocks();
        let pending = self.session.pending();
        let colors = self.session.colors();

        let label_width = self.label_width();
        let title_width = self.title_width();

        for block in blocks {
            Self::write_title(f, block.title(), title_width, colors)?;
            Self::write_calls(f, block.calls(), title_width, label_width, colors)?;

            Row {
                left: "",
                right: " ",
                time: Some(block.total()),
                left_width: title_width,
                right_width: label_width,
                style: RowStyle::Success,
            }
            .write(f, colors)?;
        }

        if !blocks.is_empty() {
            let separator = "-".repeat(label_width);

            Row {
                left: "",
                right: &separator,
                time: None,
                left_width: title_width,
                right_width: label_width,
                style: RowStyle::Plain,
            }
            .write(f, colors)?;

            Row {
                left: "",
                right: TOTAL_LABEL,
                time: Some(self.session.total()),
                left_width: title_width,
                right_width: label_width,
                style: RowStyle::BoldSuccess,
            }
            .write(f, colors)?;
        }

        if !pending.is_empty() {
            if !blocks.is_empty() {
                writeln!(f)?;
            }

            for message in [
                "Warning: some timed calls are not packed yet.",
                "Call pack() to stack them before reading the total.",
            ] {
                Row {
                    left: "",
                    right: message,
                    time: None,
                    left_width: 0,
                    right_width: 0,
                    style: RowStyle::Warning,
                }
                .write(f, colors)?;
            }

            Self::write_title(f, UNPACKED_TITLE, title_width, colors)?;
            Self::write_calls(f, pending, title_width, label_width, colors)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::pal::{FakePlatform, PlatformFacade};

    fn plain_session() -> (Session, FakePlatform) {
        let fake = FakePlatform::new();
        let session = Session::builder()
            .colors(false)
            .platform(PlatformFacade::fake(fake.clone()))
            .build();

        (session, fake)
    }

    fn record(session: &mut Session, fake: &FakePlatform, name: &str, millis: u64) {
        session.record_as(name, || fake.advance(Duration::from_millis(millis)));
    }

    #[test]
    fn block_rows_align_labels_and_omit_title() {
        let (mut session, fake) = plain_session();
        record(&mut session, &fake, "f", 10);
        record(&mut session, &fake, "load_all", 5);
        session.pack("block1");

        let rendered = session.render_block("block1").unwrap();

        assert_eq!(
            rendered,
            "f            10.00ms\nload_all      5.00ms\n"
        );
    }

    #[test]
    fn session_rendering_matches_layout() {
        let (mut session, fake) = plain_session();
        record(&mut session, &fake, "f", 10);
        record(&mut session, &fake, "g", 5);
        session.pack("block1");
        record(&mut session, &fake, "parse", 1);
        session.pack("io");

        let expected = [
            "block1 ",
            "       f         10.00ms",
            "       g          5.00ms",
            "                 15.00ms",
            "io     ",
            "       parse      1.00ms",
            "                  1.00ms",
            "       -----",
            "       TOTAL (packed)     16.00ms",
            "",
        ]
        .join("\n");

        assert_eq!(session.render(), expected);
    }

    #[test]
    fn pending_calls_follow_warning_and_are_not_in_total() {
        let (mut session, fake) = plain_session();
        record(&mut session, &fake, "f", 2);
        session.pack("b");
        record(&mut session, &fake, "late", 7);

        let rendered = session.render();

        assert!(rendered.contains("TOTAL (packed)      2.00ms"), "{rendered}");
        assert!(rendered.contains("\n\nWarning: some timed calls are not packed yet.\n"));

        let unpacked = rendered
            .split_once("UNPACKED")
            .map(|(_, tail)| tail)
            .unwrap();
        assert!(unpacked.contains("late      7.00ms"), "{unpacked}");
        assert!(!unpacked.contains("TOTAL"));
    }

    #[test]
    fn empty_session_renders_nothing() {
        let (session, _) = plain_session();

        assert_eq!(session.render(), "");
    }

    #[test]
    fn pending_without_blocks_renders_only_unpacked_section() {
        let (mut session, fake) = plain_session();
        record(&mut session, &fake, "solo", 3);

        let rendered = session.render();

        assert!(!rendered.contains("TOTAL"));
        assert!(rendered.starts_with("Warning:"));
        assert!(rendered.ends_with("UNPACKED \n         solo      3.00ms\n"), "{rendered:?}");
    }

    #[test]
    fn zero_duration_calls_omit_time() {
        let (mut session, _) = plain_session();
        session.record_as("instant", || ());
        session.pack("b");

        assert_eq!(session.render_block(0).unwrap(), "instant\n");
    }

    #[test]
    fn empty_block_renders_divider_without_time() {
        let (mut session, _) = plain_session();
        session.pack("empty");

        assert_eq!(
            session.render(),
            "empty \n       \n      \n      TOTAL (packed)\n"
        );
    }

    #[test]
    fn pending_calls_leave_packed_rows_unchanged() {
        let (mut session, fake) = plain_session();
        record(&mut session, &fake, "f", 1);
        session.pack("b");
        let packed_only = session.render();

        record(&mut session, &fake, "very_long_pending_label", 2);
        let rendered = session.render();

        assert!(rendered.starts_with(&packed_only), "{rendered}");
        assert!(
            rendered.ends_with("UNPACKED\n  very_long_pending_label      2.00ms\n"),
            "{rendered:?}"
        );
    }

    #[test]
    fn non_ascii_labels_are_padded_by_characters() {
        let (mut session, fake) = plain_session();
        record(&mut session, &fake, "naïve", 1);
        record(&mut session, &fake, "ab", 1);
        session.pack("bloc été");

        assert_eq!(
            session.render_block(0).unwrap(),
            "naïve      1.00ms\nab         1.00ms\n"
        );

        let rendered = session.render();
        assert!(rendered.starts_with("bloc été \n"), "{rendered:?}");
        assert!(rendered.contains("\n         -----\n"), "{rendered:?}");
    }

    #[test]
    fn colors_wrap_rows_in_escape_sequences() {
        colored::control::set_override(true);

        let fake = FakePlatform::new();
        let mut session = Session::builder()
            .platform(PlatformFacade::fake(fake.clone()))
            .build();
        record(&mut session, &fake, "f", 1);
        session.pack("b");

        let rendered = session.render();

        // Bold title, green block total and bold green grand total.
        assert!(rendered.contains("\u{1b}[1mb "), "{rendered:?}");
        assert!(rendered.contains("\u{1b}[32m"), "{rendered:?}");
        assert!(rendered.contains("\u{1b}[0m"), "{rendered:?}");
    }
}
