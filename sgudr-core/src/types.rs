//! Common types used throughout sgudr

use std::fmt;

/// Length of an IPv4 address in bytes
pub const IPV4_ADDR_LEN: usize = 4;

/// Length of a MAC address in bytes
pub const MAC_ADDR_LEN: usize = 6;

/// Length of a MAC address in its separated text form (`aa:bb:cc:dd:ee:ff`)
pub const MAC_TEXT_LEN: usize = MAC_ADDR_LEN * 3 - 1;

/// Length of a content digest in bytes
pub const DIGEST_LEN: usize = 16;

/// IPv4 address in network byte order
pub type Ipv4Octets = [u8; IPV4_ADDR_LEN];

/// 16-byte content digest
pub type Digest16 = [u8; DIGEST_LEN];

/// MAC Address (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddr(pub [u8; MAC_ADDR_LEN]);

impl MacAddr {
    /// Create a new MAC address
    pub const fn new(bytes: [u8; MAC_ADDR_LEN]) -> Self {
        Self(bytes)
    }

    /// Get bytes as slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Convert to array
    pub fn octets(&self) -> [u8; MAC_ADDR_LEN] {
        self.0
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// Byte order used when reading 16-bit words out of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (network byte order)
    Big,
    /// Least significant byte first
    Little,
}

impl ByteOrder {
    /// Network byte order
    pub const NETWORK: ByteOrder = ByteOrder::Big;

    /// Byte order of the machine this code runs on
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Big
        } else {
            ByteOrder::Little
        }
    }

    /// Read a 16-bit word stored in this byte order
    pub fn read_u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        }
    }

    /// Store a 16-bit word in this byte order
    pub fn write_u16(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrder::Big => value.to_be_bytes(),
            ByteOrder::Little => value.to_le_bytes(),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteOrder::Big => write!(f, "big-endian"),
            ByteOrder::Little => write!(f, "little-endian"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mac_display() {
        let mac = MacAddr::new([0xAA, 0xBB, 0x0C, 0x00, 0x01, 0xFF]);
        assert_eq!(mac.to_string(), "aa:bb:0c:00:01:ff");
    }

    #[test]
    fn test_byte_order_words() {
        assert_eq!(ByteOrder::Big.read_u16([0x12, 0x34]), 0x1234);
        assert_eq!(ByteOrder::Little.read_u16([0x12, 0x34]), 0x3412);
        assert_eq!(ByteOrder::Big.write_u16(0x1234), [0x12, 0x34]);
        assert_eq!(ByteOrder::Little.write_u16(0x1234), [0x34, 0x12]);
    }

    #[test]
    fn test_byte_order_native() {
        let word = 0xA1B2u16;
        assert_eq!(
            ByteOrder::native().write_u16(word),
            word.to_ne_bytes(),
            "native order must match the host"
        );
    }

    #[test]
    fn test_text_len() {
        assert_eq!(MAC_TEXT_LEN, 17);
    }
}
