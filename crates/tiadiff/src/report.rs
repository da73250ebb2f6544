//! Plain-text comparison report.
//!
//! One line per compared frame:
//!
//! ```text
//! good 0 [0, 0, 0, 0, 5, 0] [0, 0, 0, 0, 5, 0] SS0 ORD0 ROW0 SYS0
//! ---- 1 [0, 0, 9, 0, 3, 0] [0, 0, 0, 0, 3, 0] SS0 ORD0 ROW1 SYS0
//! ```

use std::io::{self, Write};

use crate::{CompareConfig, FrameComparison, FrameVerdict};

/// Label for an equivalent frame.
pub const GOOD_LABEL: &str = "good";
/// Label for a mismatching frame.
pub const MISMATCH_LABEL: &str = "----";

/// Format a single frame line.
#[must_use]
pub fn format_frame(frame: &FrameVerdict) -> String {
    let label = if frame.verdict.is_good() {
        GOOD_LABEL
    } else {
        MISMATCH_LABEL
    };
    let line = format!("{label} {} {} {}", frame.index, frame.actual, frame.expected);
    match &frame.row_id {
        Some(row) => format!("{line} {row}"),
        None => line,
    }
}

/// Write the per-frame report.
pub fn write_report<W: Write>(
    out: &mut W,
    comparison: &FrameComparison,
    config: &CompareConfig,
) -> io::Result<()> {
    for frame in &comparison.frames {
        if config.mismatches_only && frame.verdict.is_good() {
            continue;
        }
        writeln!(out, "{}", format_frame(frame))?;
    }
    Ok(())
}
