//! Example: Filling in an IPv4 header checksum
//!
//! This example builds a 20-byte IPv4 header from textual addresses,
//! computes its checksum in network byte order, and prints a hex dump of
//! the result.

use sgudr_codec::{internet_checksum, ipv4_to_bytes, validate_checksum, HexDump};
use sgudr_core::ByteOrder;

fn main() {
    let src_ip = ipv4_to_bytes("172.16.10.99").expect("Invalid source address");
    let dst_ip = ipv4_to_bytes("172.16.10.12").expect("Invalid destination address");

    let mut header = vec![
        0x45, 0x00, // Version/IHL, DSCP/ECN
        0x00, 0x3c, // Total length: 60
        0x1c, 0x46, // Identification
        0x40, 0x00, // Flags: DF
        0x40, 0x06, // TTL 64, protocol TCP
        0x00, 0x00, // Checksum (filled in below)
    ];
    header.extend_from_slice(&src_ip);
    header.extend_from_slice(&dst_ip);

    let checksum = internet_checksum(&header, ByteOrder::NETWORK);
    header[10..12].copy_from_slice(&ByteOrder::NETWORK.write_u16(checksum));

    println!("IPv4 header checksum: 0x{:04x}", checksum);
    println!("Header valid: {}", validate_checksum(&header, ByteOrder::NETWORK));
    print!("{}", HexDump(&header));
}
