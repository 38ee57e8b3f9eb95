//! Content fingerprints used as dedup keys.

use sha2::{Digest, Sha512};

/// Length of a fingerprint in hex characters.
pub const FINGERPRINT_HEX_LENGTH: usize = 128;

/// Computes the SHA-512 digest of `url` as lowercase hex.
///
/// The digest doubles as a store key, so its fixed 128-character length is
/// what keeps it apart from short keys in the shared namespace.
pub fn fingerprint(url: &str) -> String {
    hex::encode(Sha512::digest(url.as_bytes()))
}
