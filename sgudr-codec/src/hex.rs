//! Hexadecimal rendering and parsing
//!
//! Provides separator-delimited hex strings (`de:ad:be:ef`), their inverse,
//! and the classic offset/hex/ASCII dump used when tracing packets.

use sgudr_core::{Error, Result};
use std::fmt::{self, Write};
use tracing::debug;

/// Number of bytes rendered on each line of a hex dump
pub const DUMP_LINE_WIDTH: usize = 16;

/// Renders each byte as two lowercase hex digits with `separator` between
/// bytes. There is no separator after the last byte.
///
/// # Examples
///
/// ```
/// use sgudr_codec::hex::format_hex;
///
/// assert_eq!(format_hex(&[0xde, 0xad, 0xbe, 0xef], ':'), "de:ad:be:ef");
/// assert_eq!(format_hex(&[], ':'), "");
/// ```
pub fn format_hex(bytes: &[u8], separator: char) -> String {
    let mut out = String::with_capacity(bytes.len() * (2 + separator.len_utf8()));

    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        push_hex_byte(&mut out, byte);
    }

    out
}

fn push_hex_byte(out: &mut String, byte: u8) {
    // Writing into a String cannot fail
    let _ = write!(out, "{:02x}", byte);
}

/// Renders bytes as contiguous lowercase hex digits.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parses hex text back into bytes.
///
/// With `Some(separator)` the text must be laid out exactly as
/// [`format_hex`] produces it; with `None` it must be contiguous digit
/// pairs. Upper and lower case digits are both accepted.
///
/// # Examples
///
/// ```
/// use sgudr_codec::hex::parse_hex;
///
/// assert_eq!(parse_hex("de:ad:be:ef", Some(':')).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// assert_eq!(parse_hex("DEADBEEF", None).unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
/// ```
pub fn parse_hex(text: &str, separator: Option<char>) -> Result<Vec<u8>> {
    let digits = match separator {
        Some(separator) => strip_separators(text, separator)?,
        None => {
            if let Some((position, c)) = text
                .chars()
                .enumerate()
                .find(|(_, c)| !c.is_ascii_hexdigit())
            {
                return Err(Error::invalid_digit(text, position, c));
            }
            text.to_owned()
        }
    };

    hex::decode(&digits).map_err(|err| Error::InvalidHex(format!("'{}': {}", text, err)))
}

fn strip_separators(text: &str, separator: char) -> Result<String> {
    let mut digits = String::with_capacity(text.len());
    let mut count = 0;

    for (position, c) in text.chars().enumerate() {
        count += 1;
        if position % 3 == 2 {
            if c != separator {
                return Err(Error::InvalidHex(format!(
                    "expected separator {:?} at position {} in '{}', found {:?}",
                    separator, position, text, c
                )));
            }
        } else if c.is_ascii_hexdigit() {
            digits.push(c);
        } else {
            return Err(Error::invalid_digit(text, position, c));
        }
    }

    if count != 0 && count % 3 != 2 {
        return Err(Error::InvalidHex(format!(
            "'{}' ends with a separator or an incomplete pair",
            text
        )));
    }

    Ok(digits)
}

/// Display adapter producing a hex dump, one line per 16 bytes.
///
/// Each line holds the offset of its first byte in 8 hex digits, the bytes
/// as hex in two groups of eight, and the printable ASCII rendering of the
/// same bytes with `.` standing in for anything else:
///
/// ```text
/// 00000000: 47 45 54 20 2f 20 48 54  54 50 2f 31 2e 31 0d 0a  GET / HTTP/1.1..
/// ```
///
/// The hex columns of a short final line are padded with spaces so the
/// ASCII column stays aligned; the ASCII column itself is not padded.
pub struct HexDump<'a>(pub &'a [u8]);

impl<'a> HexDump<'a> {
    /// Iterates over the rendered lines
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        self.0
            .chunks(DUMP_LINE_WIDTH)
            .enumerate()
            .map(|(i, chunk)| dump_line(i * DUMP_LINE_WIDTH, chunk))
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn dump_line(offset: usize, chunk: &[u8]) -> String {
    let mut line = format!("{:08x}: ", offset);

    for j in 0..DUMP_LINE_WIDTH {
        match chunk.get(j) {
            Some(&byte) => {
                push_hex_byte(&mut line, byte);
                line.push(' ');
            }
            None => line.push_str("   "),
        }
        if j == 7 {
            line.push(' ');
        }
    }

    line.push(' ');
    line.extend(chunk.iter().map(|&byte| printable(byte)));
    line
}

fn printable(byte: u8) -> char {
    if (0x20..=0x7e).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Produces the hex dump of `bytes` as a list of lines.
///
/// An empty input produces no lines.
pub fn dump(bytes: &[u8]) -> Vec<String> {
    HexDump(bytes).lines().collect()
}

/// Emits the hex dump of `bytes` as `debug` events on the `sgudr::hexdump`
/// target, one event per line.
pub fn log_dump(bytes: &[u8]) {
    for line in HexDump(bytes).lines() {
        debug!(target: "sgudr::hexdump", "{}", line);
    }
}

#[cfg(test)]
mod tests;
