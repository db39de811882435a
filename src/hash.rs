//! Hash related utils.

use sha1::{Digest, Sha1};

/// Hex encoded SHA1 hash.
///
/// The signature scheme transmits digests as lowercase hex.
pub fn hex_sha1(content: &[u8]) -> String {
    hex::encode(Sha1::digest(content).as_slice())
}
