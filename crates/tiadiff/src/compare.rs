//! Frame comparison with muted-channel tolerance.
//!
//! A channel whose volume is zero produces no sound, so its control and
//! frequency registers may hold anything. Two snapshots are equivalent when,
//! for each channel, the volumes match and, if that volume is non-zero, the
//! frequency and control registers match as well.

use std::fmt;

use tiadiff_tia::{Channel, Register, Snapshot};
use tracing::{debug, info, warn};

use crate::FrameSequence;

/// Register that made two snapshots diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divergence {
    /// Volumes differ.
    Volume(Channel),
    /// Channel audible and frequencies differ.
    Frequency(Channel),
    /// Channel audible and control (waveform) registers differ.
    Control(Channel),
}

impl Divergence {
    #[must_use]
    pub const fn register(self) -> Register {
        match self {
            Self::Volume(ch) => ch.volume(),
            Self::Frequency(ch) => ch.frequency(),
            Self::Control(ch) => ch.control(),
        }
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volume(ch) => write!(f, "{ch} volume mismatch ({})", self.register()),
            Self::Frequency(ch) => write!(f, "{ch} frequency mismatch ({})", self.register()),
            Self::Control(ch) => write!(f, "{ch} control mismatch ({})", self.register()),
        }
    }
}

/// Outcome of comparing one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Good,
    Mismatch(Divergence),
}

impl Verdict {
    #[must_use]
    pub const fn is_good(self) -> bool {
        matches!(self, Self::Good)
    }
}

/// Compare two snapshots channel by channel.
///
/// Volume is checked first; a zero volume in `actual` (and therefore in
/// `expected`) skips the channel's tone registers.
#[must_use]
pub fn compare_snapshots(actual: &Snapshot, expected: &Snapshot) -> Verdict {
    for ch in Channel::ALL {
        let volume = ch.volume();
        if actual[volume] != expected[volume] {
            return Verdict::Mismatch(Divergence::Volume(ch));
        }
        if actual[volume] == 0 {
            continue;
        }
        if actual[ch.frequency()] != expected[ch.frequency()] {
            return Verdict::Mismatch(Divergence::Frequency(ch));
        }
        if actual[ch.control()] != expected[ch.control()] {
            return Verdict::Mismatch(Divergence::Control(ch));
        }
    }
    Verdict::Good
}

/// True if the snapshots sound the same.
#[must_use]
pub fn registers_equivalent(actual: &Snapshot, expected: &Snapshot) -> bool {
    compare_snapshots(actual, expected).is_good()
}

/// Comparison result for one aligned frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameVerdict {
    /// Index into the trimmed sequences.
    pub index: usize,
    pub actual: Snapshot,
    pub expected: Snapshot,
    /// Row identifier of the expected frame.
    pub row_id: Option<String>,
    pub verdict: Verdict,
}

/// Configuration for comparison and reporting.
#[derive(Debug, Clone, Default)]
pub struct CompareConfig {
    /// Stop at the first mismatching frame.
    pub stop_on_first: bool,
    /// Only report mismatching frames.
    pub mismatches_only: bool,
}

/// Result of comparing two trimmed frame sequences.
#[derive(Debug, Clone)]
pub struct FrameComparison {
    /// Per-frame verdicts, in index order.
    pub frames: Vec<FrameVerdict>,
    /// Length of the trimmed actual sequence.
    pub actual_len: usize,
    /// Length of the trimmed expected sequence.
    pub expected_len: usize,
}

impl FrameComparison {
    /// True if every compared frame is equivalent.
    #[must_use]
    pub fn all_equivalent(&self) -> bool {
        self.frames.iter().all(|f| f.verdict.is_good())
    }

    pub fn mismatches(&self) -> impl Iterator<Item = &FrameVerdict> {
        self.frames.iter().filter(|f| !f.verdict.is_good())
    }

    #[must_use]
    pub fn first_mismatch(&self) -> Option<&FrameVerdict> {
        self.mismatches().next()
    }
}

/// Compare two trimmed sequences index by index.
///
/// Index 0 of each sequence is that log's first significant frame; only the
/// overlapping prefix is compared. Row identifiers come from `expected`.
#[must_use]
pub fn compare_frames(
    actual: &FrameSequence,
    expected: &FrameSequence,
    config: &CompareConfig,
) -> FrameComparison {
    if actual.is_empty() || expected.is_empty() {
        warn!(
            actual = actual.len(),
            expected = expected.len(),
            "no significant writes to compare"
        );
    } else if actual.len() != expected.len() {
        info!(
            actual = actual.len(),
            expected = expected.len(),
            "frame counts differ, comparing common prefix"
        );
    }

    let mut frames = Vec::with_capacity(actual.len().min(expected.len()));
    let rows = expected.row_ids();
    for (index, (a, b)) in actual.frames().iter().zip(expected.frames()).enumerate() {
        let verdict = compare_snapshots(a, b);
        let good = verdict.is_good();
        if let Verdict::Mismatch(divergence) = verdict {
            debug!(index, %divergence, "frame mismatch");
        }
        frames.push(FrameVerdict {
            index,
            actual: *a,
            expected: *b,
            row_id: rows.get(index).cloned().flatten(),
            verdict,
        });
        if !good && config.stop_on_first {
            break;
        }
    }

    FrameComparison {
        frames,
        actual_len: actual.len(),
        expected_len: expected.len(),
    }
}
