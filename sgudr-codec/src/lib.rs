//! Binary and textual conversion primitives for sgudr
//!
//! This crate provides the low-level routines used when identifying
//! devices and building packets for them:
//!
//! - **Internet checksum** (RFC 1071) with an explicit byte order
//! - **Address conversion** from dotted-decimal IPv4 and separated-hex MAC
//!   text to fixed-width byte arrays
//! - **Hex rendering** as separator-delimited pairs and as a hex dump
//! - **String splitting** on a single delimiter
//! - **MD5 content digests**
//! - **String to byte buffer** conversion
//!
//! # Architecture
//!
//! - [`checksum`] - Internet checksum calculation utilities
//! - [`address`] - IPv4 and MAC text parsing
//! - [`hex`] - Hex strings, their inverse, and hex dumps
//! - [`split`] - Delimiter-based splitting
//! - [`digest`] - 16-byte content digests
//! - [`buffer`] - Byte-for-byte string conversion
//!
//! Every function is pure: no shared state, no I/O. The only side effect
//! in the crate is [`hex::log_dump`], which emits `tracing` events.
//!
//! # Quick Start
//!
//! ```rust
//! use sgudr_codec::{internet_checksum, ipv4_to_bytes, mac_to_bytes, format_hex};
//! use sgudr_core::ByteOrder;
//!
//! let ip = ipv4_to_bytes("192.168.1.10").unwrap();
//! let mac = mac_to_bytes("00:11:22:33:44:55", ':').unwrap();
//!
//! let mut payload = Vec::new();
//! payload.extend_from_slice(&mac);
//! payload.extend_from_slice(&ip);
//!
//! let checksum = internet_checksum(&payload, ByteOrder::NETWORK);
//! payload.extend_from_slice(&checksum.to_be_bytes());
//!
//! println!("{}", format_hex(&payload, ' '));
//! ```

pub mod address;
pub mod buffer;
pub mod checksum;
pub mod digest;
pub mod hex;
pub mod split;

// Re-export commonly used functions for convenience
pub use address::{
    ipv4_to_bytes, ipv4_to_bytes_or_zero, mac_to_bytes, parse_ipv4, MacFormat,
};
pub use buffer::{to_bytes, to_bytes_mut};
pub use checksum::{internet_checksum, transport_checksum, validate_checksum};
pub use digest::{digest16, digest16_hex};
pub use crate::hex::{dump, encode_hex, format_hex, log_dump, parse_hex, HexDump};
pub use split::split;
