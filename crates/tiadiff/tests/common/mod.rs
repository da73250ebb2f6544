//! Fixture logs shared by the integration tests.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tiadiff::{DUMP_FILE, TRACE_FILE};

const TRACE_HEADER: &str =
    "Trigger:  Frame Scn Cy Pxl | PS       A  X  Y  SP | Addr Code     Disam\n";

/// Register writes as (frame, register index, value).
pub type Writes<'a> = &'a [(usize, u32, u32)];

/// Render writes as a Stella watch-trigger trace.
pub fn trace_log(writes: Writes<'_>) -> String {
    let mut log = String::from(TRACE_HEADER);
    for &(frame, index, value) in writes {
        writeln!(
            log,
            "WTrap[{index:02}]: {frame:4} {:3} {:2} {:3} | nv-BdIzc {value:02x} 00 00 fd | f010 85 {:02x}    sta    REG",
            12, 40, -20, 0x15 + index
        )
        .unwrap();
        // Unrelated disassembly between triggers
        log.push_str("f012 a9 00    lda    #$00\n");
    }
    log
}

/// Render writes as a tracker register dump.
pub fn dump_log(writes: Writes<'_>) -> String {
    let mut log = String::from("; Name: fixture\n; Author: tests\n\n");
    for (i, &(frame, index, value)) in writes.iter().enumerate() {
        writeln!(
            log,
            "; {i} T{:.6} F{frame}.{}: SS0 ORD0 ROW{frame} SYS0> {} = {value}",
            frame as f64 / 60.0,
            i % 10,
            21 + index
        )
        .unwrap();
    }
    log
}

pub fn write_fixture(dir: &Path, trace: &str, dump: &str) {
    fs::write(dir.join(TRACE_FILE), trace).unwrap();
    fs::write(dir.join(DUMP_FILE), dump).unwrap();
}

/// A short two-channel tune starting at `offset`.
pub fn song(offset: usize) -> Vec<(usize, u32, u32)> {
    vec![
        (offset, 4, 8),     // AUDV0
        (offset, 0, 4),     // AUDC0
        (offset, 2, 17),    // AUDF0
        (offset + 2, 2, 12),
        (offset + 3, 5, 6), // AUDV1
        (offset + 3, 1, 12),
        (offset + 3, 3, 30),
        (offset + 5, 4, 0),
        (offset + 5, 2, 3), // tone change on a muted channel
    ]
}

/// The same tune in both logs, with the trace starting five frames later
/// behind a couple of zero writes.
pub fn write_offset_fixture(dir: &Path) {
    let mut trace_writes = vec![(1, 4, 0), (2, 0, 0)];
    trace_writes.extend(song(7));
    write_fixture(dir, &trace_log(&trace_writes), &dump_log(&song(2)));
}
