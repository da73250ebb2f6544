use std::io::{BufRead, Lines};

use tracing::trace;

use crate::{LogParser, ParseError, Result, WriteEvent};

/// Streaming iterator of write events over a reader.
///
/// Yields one item per recognized line and stops being useful after the
/// first `Err`.
pub struct Events<'p, P, R> {
    parser: &'p P,
    lines: Lines<R>,
    line_no: usize,
    skipped: usize,
}

impl<'p, P: LogParser, R: BufRead> Events<'p, P, R> {
    pub fn new(parser: &'p P, reader: R) -> Self {
        Self {
            parser,
            lines: reader.lines(),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Lines read so far.
    pub const fn lines_read(&self) -> usize {
        self.line_no
    }

    /// Lines read so far that were not register writes.
    pub const fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<P: LogParser, R: BufRead> Iterator for Events<'_, P, R> {
    type Item = Result<WriteEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            match self.parser.parse_line(&line) {
                Ok(Some(event)) => return Some(Ok(event)),
                Ok(None) => {
                    self.skipped += 1;
                    trace!(line = self.line_no, "skipping unrelated line");
                }
                Err(source) => {
                    return Some(Err(ParseError::Register {
                        line: self.line_no,
                        source,
                    }));
                }
            }
        }
    }
}
