use std::sync::OnceLock;

use regex::Regex;
use tiadiff_tia::RegisterMap;

use crate::{LogParser, WriteEvent};

/// One watch-trigger line of a Stella debugger trace.
///
/// ```text
/// Trigger:  Frame Scn Cy Pxl | PS       A  X  Y  SP | Addr Code     Disam
/// WTrap[05]:   69  32 29  19 | nV-BdIzc 00 5a 00 59 | f008 d0 fb    bne    Lf005
/// ```
///
/// Only the trigger, frame, scanline, cycle and accumulator are kept; the
/// remaining fields must be present for the line to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceLine<'a> {
    pub trigger: &'a str,
    pub frame: usize,
    pub scanline: u32,
    pub cycle: u32,
    /// Accumulator before the store, i.e. the raw value being written.
    pub accumulator: u8,
}

impl<'a> TraceLine<'a> {
    /// Match a trace line, returning `None` for anything that is not a
    /// watch-trigger record.
    pub fn parse(line: &'a str) -> Option<Self> {
        if !line.starts_with("WTrap") {
            return None;
        }

        let pattern = TRACE_PATTERN.get_or_init(|| {
            Regex::new(concat!(
                r"^(?P<trigger>WTrap\S*): +(?P<frame>\d+) +(?P<scanline>\d+) +(?P<cycle>\d+)",
                r" +\S+ +[|] \S+ (?P<accumulator>[0-9a-f]+) .*$",
            ))
            .unwrap()
        });
        let caps = pattern.captures(line)?;

        Some(TraceLine {
            trigger: caps.name("trigger")?.as_str(),
            frame: caps.name("frame")?.as_str().parse().ok()?,
            scanline: caps.name("scanline")?.as_str().parse().ok()?,
            cycle: caps.name("cycle")?.as_str().parse().ok()?,
            accumulator: u8::from_str_radix(caps.name("accumulator")?.as_str(), 16).ok()?,
        })
    }
}

/// Parser for Stella watch-trigger traces.
#[derive(Debug, Clone, Default)]
pub struct TraceParser {
    map: RegisterMap,
}

impl TraceParser {
    #[must_use]
    pub const fn new(map: RegisterMap) -> Self {
        Self { map }
    }
}

impl LogParser for TraceParser {
    fn parse_line(&self, line: &str) -> tiadiff_tia::Result<Option<WriteEvent>> {
        let Some(record) = TraceLine::parse(line) else {
            return Ok(None);
        };
        let register = self.map.trigger(record.trigger)?;

        Ok(Some(WriteEvent {
            frame: record.frame,
            register,
            value: self.map.masked(register, record.accumulator.into()),
            row_id: None,
        }))
    }
}

static TRACE_PATTERN: OnceLock<Regex> = OnceLock::new();
