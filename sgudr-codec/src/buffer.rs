//! String to byte buffer conversion

use bytes::BytesMut;

/// Copies the UTF-8 storage of `text` byte for byte into a new buffer.
///
/// No encoding transform is applied; the result has exactly `text.len()`
/// bytes.
///
/// # Examples
///
/// ```
/// use sgudr_codec::buffer::to_bytes;
///
/// assert_eq!(to_bytes("GET"), vec![0x47, 0x45, 0x54]);
/// ```
pub fn to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Same as [`to_bytes`], but returns a growable buffer that further packet
/// fields can be appended to.
pub fn to_bytes_mut(text: &str) -> BytesMut {
    BytesMut::from(text.as_bytes())
}
