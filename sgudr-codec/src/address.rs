//! Textual address conversion
//!
//! Converts dotted-decimal IPv4 text and separated-hex MAC text into the
//! fixed-width byte layouts used on the wire. IPv4 output is always in
//! network byte order (most significant octet first).
//!
//! The strict parsers reject anything that does not match the expected
//! grammar. [`ipv4_to_bytes_or_zero`] keeps the historical tolerant
//! behaviour for callers that rely on an all-zero fallback.

use crate::hex::format_hex;
use crate::split::split;
use sgudr_core::{Error, Ipv4Octets, MacAddr, Result, IPV4_ADDR_LEN, MAC_ADDR_LEN, MAC_TEXT_LEN};
use std::net::Ipv4Addr;
use tracing::debug;

/// Parses dotted-decimal IPv4 text into four bytes in network byte order.
///
/// The text must consist of exactly four `.`-separated decimal components,
/// each in `0..=255`.
///
/// # Examples
///
/// ```
/// use sgudr_codec::address::ipv4_to_bytes;
///
/// assert_eq!(ipv4_to_bytes("192.168.1.10").unwrap(), [192, 168, 1, 10]);
/// assert!(ipv4_to_bytes("1.2.3").is_err());
/// ```
pub fn ipv4_to_bytes(text: &str) -> Result<Ipv4Octets> {
    let components = split(text, '.', true);
    if components.len() != IPV4_ADDR_LEN {
        debug!(input = text, found = components.len(), "rejecting IPv4 address");
        return Err(Error::malformed_address(
            text,
            format!(
                "expected {} dot-separated components, found {}",
                IPV4_ADDR_LEN,
                components.len()
            ),
        ));
    }

    let mut octets = [0u8; IPV4_ADDR_LEN];
    for (octet, component) in octets.iter_mut().zip(&components) {
        *octet = parse_octet(component).ok_or_else(|| {
            debug!(input = text, component = %component, "rejecting IPv4 component");
            Error::malformed_address(
                text,
                format!("component '{}' is not a decimal number in 0..=255", component),
            )
        })?;
    }

    Ok(octets)
}

/// Parses dotted-decimal IPv4 text into an [`Ipv4Addr`].
pub fn parse_ipv4(text: &str) -> Result<Ipv4Addr> {
    ipv4_to_bytes(text).map(Ipv4Addr::from)
}

/// Tolerant IPv4 conversion that never fails.
///
/// Text with fewer than four components yields `[0, 0, 0, 0]`. Otherwise
/// the first four components are read as leading decimal numbers (text
/// without a leading number counts as 0, extra components are ignored) and
/// packed modulo 2^32 with the first component in the most significant
/// byte. Out-of-range components therefore spill into their neighbours.
///
/// Prefer [`ipv4_to_bytes`], which reports malformed input instead of
/// degrading it.
pub fn ipv4_to_bytes_or_zero(text: &str) -> Ipv4Octets {
    let components = split(text, '.', true);
    if components.len() < IPV4_ADDR_LEN {
        return [0; IPV4_ADDR_LEN];
    }

    let packed = components
        .iter()
        .take(IPV4_ADDR_LEN)
        .fold(0u32, |acc, component| {
            (acc << 8).wrapping_add(leading_number(component))
        });

    packed.to_be_bytes()
}

/// Strict octet: one or more ASCII digits with a value of at most 255.
fn parse_octet(component: &str) -> Option<u8> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    component.parse().ok()
}

/// Leading decimal number with optional whitespace and sign, truncated to
/// 32 bits. Returns 0 when the text does not start with a number.
fn leading_number(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.wrapping_mul(10).wrapping_add((digit - b'0') as i64)
        });

    if negative {
        value.wrapping_neg() as u32
    } else {
        value as u32
    }
}

/// Textual layout of a MAC address: six two-digit hex pairs joined by a
/// single separator character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacFormat {
    /// Character between hex pairs
    pub separator: char,
}

impl Default for MacFormat {
    fn default() -> Self {
        Self::COLON
    }
}

impl MacFormat {
    /// `aa:bb:cc:dd:ee:ff`
    pub const COLON: MacFormat = MacFormat { separator: ':' };

    /// `aa-bb-cc-dd-ee-ff`
    pub const HYPHEN: MacFormat = MacFormat { separator: '-' };

    /// Create a format with a custom separator
    pub const fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Parses MAC text laid out as six hex pairs with this separator.
    ///
    /// Hex digits may be upper or lower case. Text of the wrong length or
    /// with a different separator is a [`Error::MalformedAddress`]; a
    /// non-hex character at a digit position is an [`Error::InvalidDigit`].
    pub fn parse(&self, text: &str) -> Result<MacAddr> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != MAC_TEXT_LEN {
            debug!(input = text, len = chars.len(), "rejecting MAC address");
            return Err(Error::malformed_address(
                text,
                format!(
                    "expected {} characters, found {}",
                    MAC_TEXT_LEN,
                    chars.len()
                ),
            ));
        }

        let mut bytes = [0u8; MAC_ADDR_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            let offset = i * 3;
            if i > 0 && chars[offset - 1] != self.separator {
                debug!(input = text, position = offset - 1, "unexpected MAC separator");
                return Err(Error::malformed_address(
                    text,
                    format!(
                        "expected separator {:?} at position {}, found {:?}",
                        self.separator,
                        offset - 1,
                        chars[offset - 1]
                    ),
                ));
            }

            let high = hex_nibble(text, &chars, offset)?;
            let low = hex_nibble(text, &chars, offset + 1)?;
            *byte = (high << 4) | low;
        }

        Ok(MacAddr(bytes))
    }

    /// Renders a MAC address as lowercase hex pairs with this separator.
    pub fn format(&self, mac: &MacAddr) -> String {
        format_hex(mac.as_bytes(), self.separator)
    }
}

fn hex_nibble(text: &str, chars: &[char], position: usize) -> Result<u8> {
    let c = chars[position];
    match c.to_digit(16) {
        Some(nibble) => Ok(nibble as u8),
        None => {
            debug!(input = text, position, "invalid MAC hex digit");
            Err(Error::invalid_digit(text, position, c))
        }
    }
}

/// Parses MAC text into six bytes using `separator` between hex pairs.
///
/// # Examples
///
/// ```
/// use sgudr_codec::address::mac_to_bytes;
///
/// assert_eq!(
///     mac_to_bytes("aa:bb:cc:dd:ee:ff", ':').unwrap(),
///     [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]
/// );
/// assert!(mac_to_bytes("aa:bb:cc", ':').is_err());
/// ```
pub fn mac_to_bytes(text: &str, separator: char) -> Result<[u8; MAC_ADDR_LEN]> {
    MacFormat::new(separator).parse(text).map(|mac| mac.octets())
}
