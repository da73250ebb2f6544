//! Per-frame register state reconstruction.
//!
//! Logs only record the writes that happened. [`FrameBuilder`] replays them
//! into a dense sequence holding one [`Snapshot`] per video frame, carrying
//! each register forward until it is written again. Within a frame the last
//! write to a register wins.

use tiadiff_log::WriteEvent;
use tiadiff_tia::Snapshot;
use tracing::{debug, warn};

/// Dense, per-frame register snapshots of one log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<Snapshot>,
    row_ids: Vec<Option<String>>,
    /// Absolute frame number of `frames[0]`.
    start_frame: usize,
    first_significant: Option<usize>,
}

impl FrameSequence {
    /// Replay a sequence of write events.
    pub fn from_events<I: IntoIterator<Item = WriteEvent>>(events: I) -> Self {
        let mut builder = FrameBuilder::new();
        for event in events {
            builder.push(event);
        }
        builder.finish()
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn frames(&self) -> &[Snapshot] {
        &self.frames
    }

    /// Row identifiers, parallel to [`frames`](Self::frames).
    #[must_use]
    pub fn row_ids(&self) -> &[Option<String>] {
        &self.row_ids
    }

    /// Absolute frame number of the first entry.
    #[must_use]
    pub const fn start_frame(&self) -> usize {
        self.start_frame
    }

    /// Absolute frame number of the first snapshot with a non-zero register.
    #[must_use]
    pub const fn first_significant(&self) -> Option<usize> {
        self.first_significant
    }

    /// Drop every frame before the first significant one.
    ///
    /// A log that never writes a non-zero value trims to an empty sequence.
    #[must_use]
    pub fn trimmed(mut self) -> Self {
        let Some(first) = self.first_significant else {
            self.start_frame += self.frames.len();
            self.frames.clear();
            self.row_ids.clear();
            return self;
        };
        let skip = first - self.start_frame;
        self.frames.drain(..skip);
        self.row_ids.drain(..skip);
        self.start_frame = first;
        self
    }
}

/// Incremental frame reconstructor.
///
/// Events must arrive in log order. The builder starts from the all-zero
/// power-on snapshot at frame 0.
#[derive(Debug)]
pub struct FrameBuilder {
    frames: Vec<Snapshot>,
    row_ids: Vec<Option<String>>,
    current: Snapshot,
}

impl FrameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            frames: vec![Snapshot::ZERO],
            row_ids: vec![None],
            current: Snapshot::ZERO,
        }
    }

    /// Highest frame represented so far.
    #[must_use]
    pub fn latest_frame(&self) -> usize {
        self.frames.len() - 1
    }

    /// Apply one write.
    pub fn push(&mut self, event: WriteEvent) {
        let latest = self.latest_frame();
        let frame = event.frame;
        if frame < latest {
            warn!(frame, latest, "write out of frame order");
        }

        if frame > latest {
            let carried = self.row_ids[latest].clone();
            self.frames.resize(frame + 1, self.current);
            self.row_ids.resize(frame, carried);
            self.row_ids.push(None);
        }
        if self.row_ids[frame].is_none() {
            self.row_ids[frame] = event.row_id;
        }

        self.current = self.current.with(event.register, event.value);
        self.frames[frame] = self.current;
    }

    /// Finish reconstruction.
    #[must_use]
    pub fn finish(self) -> FrameSequence {
        let first_significant = self.frames.iter().position(Snapshot::is_significant);
        debug!(
            frames = self.frames.len(),
            first_significant = ?first_significant,
            "reconstructed frames"
        );
        FrameSequence {
            frames: self.frames,
            row_ids: self.row_ids,
            start_frame: 0,
            first_significant,
        }
    }
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self::new()
    }
}
