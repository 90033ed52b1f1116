//! Checksum calculations for network packets
//!
//! This module provides the Internet Checksum (RFC 1071) used in IPv4,
//! ICMP, TCP and UDP headers. Words are read in an explicit [`ByteOrder`]
//! chosen by the caller: the routine never swaps bytes on its own, so the
//! buffer must already be laid out the way the protocol expects.

use bytes::{BufMut, BytesMut};
use sgudr_core::{ByteOrder, IPV4_ADDR_LEN};

/// Sums the buffer as 16-bit words and folds the carries back in.
///
/// An odd trailing byte is padded with a zero byte after it before being
/// read, so it lands in the low half of the word for little-endian input
/// and in the high half for big-endian input.
fn ones_complement_sum(data: &[u8], order: ByteOrder) -> u16 {
    let mut sum: u64 = 0;

    let mut chunks = data.chunks_exact(2);
    for chunk in &mut chunks {
        sum += order.read_u16([chunk[0], chunk[1]]) as u64;
    }

    // Mop up an odd byte
    if let Some(&byte) = chunks.remainder().first() {
        sum += order.read_u16([byte, 0]) as u64;
    }

    while (sum >> 16) != 0 {
        sum = (sum & 0xFFFF) + (sum >> 16);
    }

    sum as u16
}

/// Calculates the Internet Checksum as defined in RFC 1071.
///
/// The data is treated as a sequence of 16-bit words in `order`, summed
/// with end-around carry, and the one's complement of the folded sum is
/// returned. An empty buffer yields `0xFFFF`.
///
/// The result is expressed in the same byte order as the input: store it
/// with [`ByteOrder::write_u16`] using the same `order` to get the bytes
/// that go on the wire.
///
/// # Examples
///
/// ```
/// use sgudr_codec::checksum::internet_checksum;
/// use sgudr_core::ByteOrder;
///
/// let data = [0x00, 0x01, 0xf2, 0x03, 0xf4, 0xf5, 0xf6, 0xf7];
/// assert_eq!(internet_checksum(&data, ByteOrder::Big), 0x220d);
/// assert_eq!(internet_checksum(&data, ByteOrder::Little), 0x0d22);
/// ```
pub fn internet_checksum(data: &[u8], order: ByteOrder) -> u16 {
    !ones_complement_sum(data, order)
}

/// Validates an Internet checksum.
///
/// The checksum computed over a buffer that already carries its checksum
/// field must be zero.
///
/// # Examples
///
/// ```
/// use sgudr_codec::checksum::{internet_checksum, validate_checksum};
/// use sgudr_core::ByteOrder;
///
/// let mut header = vec![0x45, 0x00, 0x00, 0x3c, 0x00, 0x00];
/// let checksum = internet_checksum(&header, ByteOrder::Big);
/// header[4..6].copy_from_slice(&checksum.to_be_bytes());
/// assert!(validate_checksum(&header, ByteOrder::Big));
/// ```
pub fn validate_checksum(data: &[u8], order: ByteOrder) -> bool {
    internet_checksum(data, order) == 0
}

/// Calculates the checksum for a TCP or UDP segment including the IPv4
/// pseudo-header.
///
/// All fields are laid out in network byte order, so the result is a
/// big-endian value ready for `to_be_bytes`.
///
/// # Arguments
///
/// * `src_ip` - Source IP address (network byte order)
/// * `dst_ip` - Destination IP address (network byte order)
/// * `protocol` - IP protocol number (6 for TCP, 17 for UDP)
/// * `data` - The TCP/UDP header and payload, checksum field zeroed
///
/// The pseudo-header length field is 16 bits wide, so `data` must not be
/// longer than 65535 bytes.
pub fn transport_checksum(
    src_ip: &[u8; IPV4_ADDR_LEN],
    dst_ip: &[u8; IPV4_ADDR_LEN],
    protocol: u8,
    data: &[u8],
) -> u16 {
    debug_assert!(
        data.len() <= u16::MAX as usize,
        "transport segment of {} bytes exceeds the 16-bit length field",
        data.len()
    );

    let mut pseudo_header = BytesMut::with_capacity(12 + data.len());

    pseudo_header.put_slice(src_ip);
    pseudo_header.put_slice(dst_ip);
    pseudo_header.put_u8(0);
    pseudo_header.put_u8(protocol);
    pseudo_header.put_u16(data.len() as u16);
    pseudo_header.put_slice(data);

    internet_checksum(&pseudo_header, ByteOrder::NETWORK)
}
