use std::io::Cursor;

use tiadiff_tia::{Register, RegisterError, RegisterMap};

use super::*;

const TRACE_LINE: &str =
    "WTrap[05]:   69  32 29  19 | nV-BdIzc 0a 5a 00 59 | f008 d0 fb    bne    Lf005";

#[test]
fn test_parse_trace_line() {
    let line = TraceLine::parse(TRACE_LINE).unwrap();

    assert_eq!(line.trigger, "WTrap[05]");
    assert_eq!(line.frame, 69);
    assert_eq!(line.scanline, 32);
    assert_eq!(line.cycle, 29);
    assert_eq!(line.accumulator, 0x0a);
}

#[test]
fn test_parse_trace_line_rejects_noise() {
    // Header and plain disassembly lines carry no trigger
    assert!(TraceLine::parse("Trigger:  Frame Scn Cy Pxl | PS       A  X  Y  SP | Addr").is_none());
    assert!(TraceLine::parse("f008 d0 fb    bne    Lf005").is_none());
    assert!(TraceLine::parse("").is_none());
    // Truncated trigger line
    assert!(TraceLine::parse("WTrap[05]:   69  32 29").is_none());
}

#[test]
fn test_trace_parser_masks_value() {
    let parser = TraceParser::new(RegisterMap::tia());
    // AUDV1 keeps the low nibble of 0xff
    let line = "WTrap[05]:    3   0 12  -3 | nv-BdIzc ff 00 00 fd | f010 85 1a    sta    AUDV1";
    let event = parser.parse_line(line).unwrap().unwrap();

    assert_eq!(
        event,
        WriteEvent {
            frame: 3,
            register: Register::Audv1,
            value: 0x0f,
            row_id: None,
        }
    );
}

#[test]
fn test_trace_parser_frequency_mask() {
    let parser = TraceParser::new(RegisterMap::tia());
    let line = "WTrap[02]:   10  40 50  80 | nv-BdIzc 3f 00 00 fd | f020 85 17    sta    AUDF0";
    let event = parser.parse_line(line).unwrap().unwrap();

    assert_eq!(event.register, Register::Audf0);
    assert_eq!(event.value, 0x1f);
}

#[test]
fn test_trace_parser_skips_unrelated_lines() {
    let parser = TraceParser::new(RegisterMap::tia());
    assert_eq!(parser.parse_line("  f008 d0 fb    bne    Lf005"), Ok(None));
    assert_eq!(parser.parse_line("Break at $f000"), Ok(None));
}

#[test]
fn test_trace_parser_unknown_trigger() {
    let parser = TraceParser::new(RegisterMap::tia());
    let line = "WTrap[07]:   69  32 29  19 | nV-BdIzc 00 5a 00 59 | f008 d0 fb    bne    Lf005";

    assert_eq!(
        parser.parse_line(line),
        Err(RegisterError::UnknownTrigger("WTrap[07]".to_string()))
    );
}

#[test]
fn test_parse_dump_line() {
    let line = DumpLine::parse("; 562 T9.382958 F563.7: SS0 ORD4 ROW23 SYS0> 23 = 31").unwrap();

    assert_eq!(line.write_index, 562);
    assert!((line.ticks - 9.382_958).abs() < 1e-9);
    assert_eq!(line.row_id, "SS0 ORD4 ROW23 SYS0");
    assert_eq!(line.address, 23);
    assert_eq!(line.value, 31);
    // Sub-frame position is dropped
    assert_eq!(line.frame(), 563);
}

#[test]
fn test_dump_parser_event() {
    let parser = DumpParser::new(RegisterMap::tia());
    let event = parser
        .parse_line("; 1 T0.0 F0.0: SS0 ORD0 ROW0 SYS0> 25 = 5")
        .unwrap()
        .unwrap();

    assert_eq!(event.frame, 0);
    assert_eq!(event.register, Register::Audv0);
    assert_eq!(event.value, 5);
    assert_eq!(event.row_id.as_deref(), Some("SS0 ORD0 ROW0 SYS0"));
}

#[test]
fn test_dump_parser_masks_value() {
    let parser = DumpParser::new(RegisterMap::tia());
    let event = parser
        .parse_line("; 9 T0.5 F30.2: SS0 ORD1 ROW2 SYS0> 21 = 255")
        .unwrap()
        .unwrap();

    assert_eq!(event.register, Register::Audc0);
    assert_eq!(event.value, 0x0f);
}

#[test]
fn test_dump_parser_skips_comments() {
    let parser = DumpParser::new(RegisterMap::tia());
    assert_eq!(parser.parse_line("; Song: demo"), Ok(None));
    assert_eq!(parser.parse_line("; Author: nobody"), Ok(None));
    assert_eq!(parser.parse_line("1 2 3:SS0 ORD0 ROW0 SYS0> 25 = 5"), Ok(None));
}

#[test]
fn test_dump_parser_invalid_address() {
    let parser = DumpParser::new(RegisterMap::tia());
    let result = parser.parse_line("; 1 T0.0 F0.0: SS0 ORD0 ROW0 SYS0> 27 = 5");

    assert!(matches!(
        result,
        Err(RegisterError::InvalidRegisterAddress { address: 27, .. })
    ));
}

#[test]
fn test_events_stream() {
    let log = "\
; Song: demo
; 1 T0.0 F0.0: SS0 ORD0 ROW0 SYS0> 25 = 5
garbage
; 2 T0.1 F1.5: SS0 ORD0 ROW1 SYS0> 23 = 40
";
    let parser = DumpParser::new(RegisterMap::tia());
    let mut events = parser.events(Cursor::new(log));

    let first = events.next().unwrap().unwrap();
    assert_eq!((first.frame, first.register, first.value), (0, Register::Audv0, 5));
    let second = events.next().unwrap().unwrap();
    assert_eq!((second.frame, second.register, second.value), (1, Register::Audf0, 8));
    assert!(events.next().is_none());

    assert_eq!(events.lines_read(), 4);
    assert_eq!(events.skipped(), 2);
}

#[test]
fn test_events_reports_line_number() {
    let log = "noise\nWTrap[09]:    1   2  3   4 | nv-BdIzc 01 00 00 fd | f000 85 15    sta    AUDC0\n";
    let parser = TraceParser::new(RegisterMap::tia());
    let err = parser.events(Cursor::new(log)).next().unwrap().unwrap_err();

    match err {
        ParseError::Register { line, source } => {
            assert_eq!(line, 2);
            assert_eq!(source, RegisterError::UnknownTrigger("WTrap[09]".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}
