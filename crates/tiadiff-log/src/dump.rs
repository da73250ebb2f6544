use std::sync::OnceLock;

use regex::Regex;
use tiadiff_tia::RegisterMap;

use crate::{LogParser, WriteEvent};

/// One annotated write of a register dump.
///
/// ```text
/// ; 562 T9.382958 F563.0: SS0 ORD4 ROW23 SYS0> 23 = 31
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DumpLine<'a> {
    /// Running write counter.
    pub write_index: u64,
    /// Elapsed time in ticks.
    pub ticks: f64,
    /// Elapsed time in (fractional) video frames.
    pub frame_partial: f64,
    /// Subsong/order/row/system identifier, kept verbatim.
    pub row_id: &'a str,
    /// Absolute register address, decimal.
    pub address: u32,
    /// Raw written value, decimal.
    pub value: u32,
}

impl<'a> DumpLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        if !line.starts_with(';') {
            return None;
        }

        let pattern = DUMP_PATTERN.get_or_init(|| {
            Regex::new(concat!(
                r"^; (?P<write_index>\d+) T(?P<ticks>[0-9.]+) F(?P<frame>[0-9.]+): ",
                r"(?P<row_id>[^>]+)> (?P<address>\d+) = (?P<value>\d+)$",
            ))
            .unwrap()
        });
        let caps = pattern.captures(line)?;

        Some(DumpLine {
            write_index: caps.name("write_index")?.as_str().parse().ok()?,
            ticks: caps.name("ticks")?.as_str().parse().ok()?,
            frame_partial: caps.name("frame")?.as_str().parse().ok()?,
            row_id: caps.name("row_id")?.as_str(),
            address: caps.name("address")?.as_str().parse().ok()?,
            value: caps.name("value")?.as_str().parse().ok()?,
        })
    }

    /// Whole frame the write falls in; sub-frame timing is discarded.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn frame(&self) -> usize {
        self.frame_partial.floor() as usize
    }
}

/// Parser for tracker register dumps.
#[derive(Debug, Clone, Default)]
pub struct DumpParser {
    map: RegisterMap,
}

impl DumpParser {
    #[must_use]
    pub const fn new(map: RegisterMap) -> Self {
        Self { map }
    }
}

impl LogParser for DumpParser {
    fn parse_line(&self, line: &str) -> tiadiff_tia::Result<Option<WriteEvent>> {
        let Some(record) = DumpLine::parse(line) else {
            return Ok(None);
        };
        let register = self.map.register_at(record.address)?;

        Ok(Some(WriteEvent {
            frame: record.frame(),
            register,
            value: self.map.masked(register, record.value),
            row_id: Some(record.row_id.to_string()),
        }))
    }
}

static DUMP_PATTERN: OnceLock<Regex> = OnceLock::new();
