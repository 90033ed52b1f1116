//! Example: Deriving a device fingerprint
//!
//! Splits a `mac;ip;name` record, converts the addresses to their binary
//! layouts, and digests them together with the device name.

use sgudr_codec::{digest16, format_hex, ipv4_to_bytes, split, to_bytes, MacFormat};

fn main() {
    let record = "00-1a-2b-3c-4d-5e;192.168.1.10;core-switch-01";
    let fields = split(record, ';', true);
    if fields.len() != 3 {
        eprintln!("Expected 3 fields, found {}", fields.len());
        return;
    }

    let mac = MacFormat::HYPHEN
        .parse(&fields[0])
        .expect("Invalid MAC address");
    let ip = ipv4_to_bytes(&fields[1]).expect("Invalid IPv4 address");

    let mut material = Vec::new();
    material.extend_from_slice(mac.as_bytes());
    material.extend_from_slice(&ip);
    material.extend_from_slice(&to_bytes(&fields[2]));

    let fingerprint = digest16(&material);

    println!("MAC:         {}", mac);
    println!("IP:          {}", format_hex(&ip, '.'));
    println!("Fingerprint: {}", format_hex(&fingerprint, ':'));
}
