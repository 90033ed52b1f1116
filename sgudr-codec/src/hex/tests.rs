//! Tests for hex rendering, parsing and dumps

use super::*;
use rand::Rng;
use std::io;
use std::sync::{Arc, Mutex};

#[test]
fn test_format_hex() {
    assert_eq!(format_hex(&[0xde, 0xad, 0xbe, 0xef], ':'), "de:ad:be:ef");
    assert_eq!(format_hex(&[0x00, 0x0f, 0xf0], ' '), "00 0f f0");
    assert_eq!(format_hex(&[0x7f], ':'), "7f");
    assert_eq!(format_hex(&[], ':'), "");
}

#[test]
fn test_format_hex_multibyte_separator() {
    assert_eq!(format_hex(&[0x01, 0x02], '·'), "01·02");
}

#[test]
fn test_format_hex_long_input_is_not_truncated() {
    let bytes = vec![0xabu8; 4096];
    let text = format_hex(&bytes, ':');
    assert_eq!(text.len(), 4096 * 3 - 1);
    assert!(text.ends_with("ab:ab"));
}

#[test]
fn test_encode_hex() {
    assert_eq!(encode_hex(&[0xca, 0xfe, 0x00]), "cafe00");
}

#[test]
fn test_parse_hex_with_separator() {
    assert_eq!(
        parse_hex("de:ad:be:ef", Some(':')).unwrap(),
        vec![0xde, 0xad, 0xbe, 0xef]
    );
    assert_eq!(parse_hex("AB-cd", Some('-')).unwrap(), vec![0xab, 0xcd]);
    assert!(parse_hex("", Some(':')).unwrap().is_empty());
}

#[test]
fn test_parse_hex_contiguous() {
    assert_eq!(parse_hex("00ff10", None).unwrap(), vec![0x00, 0xff, 0x10]);
    assert!(parse_hex("", None).unwrap().is_empty());
}

#[test]
fn test_parse_hex_invalid_digit() {
    match parse_hex("de:az:be", Some(':')) {
        Err(Error::InvalidDigit {
            position, found, ..
        }) => {
            assert_eq!(position, 4);
            assert_eq!(found, 'z');
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert!(matches!(
        parse_hex("0é", None),
        Err(Error::InvalidDigit { position: 1, .. })
    ));
}

#[test]
fn test_parse_hex_bad_layout() {
    // Odd digit count
    assert!(matches!(parse_hex("abc", None), Err(Error::InvalidHex(_))));
    // Trailing separator
    assert!(matches!(parse_hex("ab:cd:", Some(':')), Err(Error::InvalidHex(_))));
    // Incomplete last pair
    assert!(matches!(parse_hex("ab:c", Some(':')), Err(Error::InvalidHex(_))));
    // Wrong separator
    assert!(matches!(parse_hex("ab-cd", Some(':')), Err(Error::InvalidHex(_))));
}

#[test]
fn test_format_parse_roundtrip_random() {
    let mut rng = rand::thread_rng();
    for separator in [':', '-', ' ', '·'] {
        for _ in 0..32 {
            let len = rng.gen_range(0..300);
            let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();

            let text = format_hex(&bytes, separator);
            assert_eq!(parse_hex(&text, Some(separator)).unwrap(), bytes);
            assert_eq!(parse_hex(&encode_hex(&bytes), None).unwrap(), bytes);
        }
    }
}

#[test]
fn test_dump_empty() {
    assert!(dump(&[]).is_empty());
    assert_eq!(HexDump(&[]).to_string(), "");
}

#[test]
fn test_dump_full_line() {
    let lines = dump(b"ABCDEFGHIJKLMNOP");
    assert_eq!(
        lines,
        vec!["00000000: 41 42 43 44 45 46 47 48  49 4a 4b 4c 4d 4e 4f 50  ABCDEFGHIJKLMNOP"]
    );
}

#[test]
fn test_dump_partial_line_padding() {
    let lines = dump(b"hi");
    assert_eq!(lines.len(), 1);
    // 14 missing bytes, the group gap and the column gap
    assert_eq!(lines[0], format!("00000000: 68 69 {}hi", " ".repeat(14 * 3 + 2)));
}

#[test]
fn test_dump_non_printable() {
    let lines = dump(&[0x00, 0x1f, 0x20, 0x7e, 0x7f, 0xff]);
    assert!(lines[0].ends_with(" .. ~.."));
}

#[test]
fn test_dump_offsets_and_alignment() {
    let bytes: Vec<u8> = (0..40).collect();
    let lines = dump(&bytes);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("00000000: 00 01"));
    assert!(lines[1].starts_with("00000010: 10 11"));
    assert!(lines[2].starts_with("00000020: 20 21"));

    // The ASCII column starts at the same place on every line
    for line in &lines {
        assert_eq!(&line[58..60], "  ");
    }
    assert_eq!(&lines[2][60..], " !\"#$%&'");
}

#[test]
fn test_dump_display_matches_lines() {
    let bytes: Vec<u8> = (0..20).collect();
    let rendered = HexDump(&bytes).to_string();
    let expected: String = dump(&bytes).into_iter().map(|l| l + "\n").collect();
    assert_eq!(rendered, expected);
}

#[test]
fn test_format_and_dump_render_bytes_alike() {
    let bytes: Vec<u8> = (0..=255).collect();
    let formatted = format_hex(&bytes, ' ');

    let dumped: Vec<String> = dump(&bytes)
        .iter()
        .map(|line| line[10..58].split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    assert_eq!(dumped.join(" "), formatted);
    assert!(formatted.starts_with("00 01 02"));
    assert!(formatted.ends_with("fd fe ff"));
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture_log_dump(bytes: &[u8]) -> String {
    let captured = CapturedLog::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || log_dump(bytes));
    captured.contents()
}

#[test]
fn test_log_dump_one_event_per_line() {
    let bytes: Vec<u8> = (0..40).collect();
    let output = capture_log_dump(&bytes);
    let events: Vec<&str> = output.lines().collect();

    let expected = dump(&bytes);
    assert_eq!(events.len(), expected.len());
    for (event, line) in events.iter().zip(&expected) {
        assert!(event.contains("DEBUG"), "{}", event);
        assert!(event.contains("sgudr::hexdump"), "{}", event);
        assert!(event.ends_with(line.as_str()), "{}", event);
    }
}

#[test]
fn test_log_dump_empty_emits_nothing() {
    assert!(capture_log_dump(&[]).is_empty());
}
