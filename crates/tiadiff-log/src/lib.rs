//! Register-write log parsers.
//!
//! Two textual formats carry the same information, a time-ordered list of
//! writes to the TIA audio registers:
//!
//! - Stella debugger traces (`stella.log.out`), one line per watch trigger,
//!   where the written value is the accumulator about to be stored.
//! - Register dumps (`RegisterDump.txt`) from the tracker export, with a
//!   fractional frame timestamp, a row identifier, and an absolute address.
//!
//! Both parsers turn lines into [`WriteEvent`]s. Lines that do not match the
//! format are skipped, never reported; only a matched line that names an
//! unmapped trigger or address is an error.
//!
//! ```ignore
//! use tiadiff_log::{LogParser, TraceParser};
//! use tiadiff_tia::RegisterMap;
//!
//! let parser = TraceParser::new(RegisterMap::tia());
//! for event in parser.events(std::io::BufReader::new(file)) {
//!     let event = event?;
//! }
//! ```

mod dump;
mod event;
mod events;
mod trace;

pub use dump::{DumpLine, DumpParser};
pub use event::WriteEvent;
pub use events::Events;
pub use trace::{TraceLine, TraceParser};

use std::io::BufRead;

use thiserror::Error;
use tiadiff_tia::RegisterError;

/// Log parsing errors.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("line {line}: {source}")]
    Register {
        line: usize,
        #[source]
        source: RegisterError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// A line-oriented register-write log format.
pub trait LogParser {
    /// Parse one line.
    ///
    /// Returns `Ok(None)` for lines that are not register writes.
    fn parse_line(&self, line: &str) -> tiadiff_tia::Result<Option<WriteEvent>>;

    /// Lazily parse every line of `reader`.
    fn events<R: BufRead>(&self, reader: R) -> Events<'_, Self, R>
    where
        Self: Sized,
    {
        Events::new(self, reader)
    }
}

#[cfg(test)]
mod tests;
