//! tiadiff - TIA audio register trace comparator
//!
//! Checks an emulator's register-write trace against a reference dump,
//! frame by frame.
//!
//! 1. Each log is parsed into [`WriteEvent`]s (see `tiadiff-log`).
//! 2. [`FrameBuilder`] rebuilds one register [`Snapshot`] per video frame.
//! 3. Both sequences are trimmed to their first non-zero frame, which aligns
//!    them without any absolute time reference.
//! 4. [`compare_frames`] checks each aligned pair, ignoring the tone
//!    registers of muted channels.
//!
//! # Example
//!
//! ```ignore
//! use tiadiff::{compare_dir, CompareConfig, LogFiles};
//! use tiadiff_tia::RegisterMap;
//!
//! let result = compare_dir(dir, &LogFiles::default(), &RegisterMap::tia(), &CompareConfig::default())?;
//! assert!(result.comparison.all_equivalent());
//! ```

mod compare;
mod error;
mod frames;
pub mod report;

pub use compare::{
    CompareConfig, Divergence, FrameComparison, FrameVerdict, Verdict, compare_frames,
    compare_snapshots, registers_equivalent,
};
pub use error::{Error, Result};
pub use frames::{FrameBuilder, FrameSequence};

pub use tiadiff_log::{DumpParser, LogParser, TraceParser, WriteEvent};
pub use tiadiff_tia::{Channel, Register, RegisterMap, Snapshot};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

/// Emulator trace file name.
pub const TRACE_FILE: &str = "stella.log.out";
/// Reference dump file name.
pub const DUMP_FILE: &str = "RegisterDump.txt";

/// Names of the two logs inside a test directory.
#[derive(Debug, Clone)]
pub struct LogFiles {
    /// Emulator trace (actual).
    pub actual: PathBuf,
    /// Reference dump (expected).
    pub expected: PathBuf,
}

impl Default for LogFiles {
    fn default() -> Self {
        Self {
            actual: PathBuf::from(TRACE_FILE),
            expected: PathBuf::from(DUMP_FILE),
        }
    }
}

/// Outcome of comparing the logs in one directory.
#[derive(Debug)]
pub struct DirComparison {
    /// Frames reconstructed from the trace, before trimming.
    pub actual_frames: usize,
    /// Frames reconstructed from the dump, before trimming.
    pub expected_frames: usize,
    pub comparison: FrameComparison,
}

/// Parse a log file and rebuild its frames.
pub fn load_frames<P: LogParser>(parser: &P, path: &Path) -> Result<FrameSequence> {
    let _span = info_span!("load", path = %path.display()).entered();

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut events = parser.events(BufReader::new(file));
    let mut builder = FrameBuilder::new();
    let mut count = 0usize;
    for event in &mut events {
        let event = event.map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        builder.push(event);
        count += 1;
    }

    debug!(
        lines = events.lines_read(),
        skipped = events.skipped(),
        writes = count,
        "parsed log"
    );
    Ok(builder.finish())
}

/// Compare the trace and dump found in `dir`.
pub fn compare_dir(
    dir: &Path,
    files: &LogFiles,
    map: &RegisterMap,
    config: &CompareConfig,
) -> Result<DirComparison> {
    let actual = load_frames(&TraceParser::new(map.clone()), &dir.join(&files.actual))?;
    let expected = load_frames(&DumpParser::new(map.clone()), &dir.join(&files.expected))?;
    let (actual_frames, expected_frames) = (actual.len(), expected.len());

    let actual = actual.trimmed();
    let expected = expected.trimmed();
    debug!(
        actual_start = actual.start_frame(),
        expected_start = expected.start_frame(),
        "aligned at first significant write"
    );

    Ok(DirComparison {
        actual_frames,
        expected_frames,
        comparison: compare_frames(&actual, &expected, config),
    })
}
