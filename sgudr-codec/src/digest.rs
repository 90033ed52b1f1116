//! Content digests
//!
//! Device fingerprints are MD5 digests of identifying data. MD5 is used
//! for interoperability with existing peers, not as a security boundary.

use crate::hex::encode_hex;
use md5::{Digest, Md5};
use sgudr_core::{Digest16, DIGEST_LEN};

/// Computes the 16-byte MD5 digest of `bytes`.
///
/// # Examples
///
/// ```
/// use sgudr_codec::digest::digest16;
///
/// let digest = digest16(b"abc");
/// assert_eq!(digest.len(), 16);
/// assert_eq!(digest[0], 0x90);
/// ```
pub fn digest16(bytes: &[u8]) -> Digest16 {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    let result = hasher.finalize();

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&result[..]);
    digest
}

/// Computes the digest of `bytes` and renders it as 32 lowercase hex digits.
pub fn digest16_hex(bytes: &[u8]) -> String {
    encode_hex(&digest16(bytes))
}
