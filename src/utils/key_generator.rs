//! Short key generation.
//!
//! Keys are drawn from a curated alphabet that leaves out characters which are
//! easy to misread when a link is printed or typed by hand.

use rand::Rng;

/// Characters a short key may contain.
///
/// Excludes `0 O o 1 l L I 9 g q V v U u`.
pub const SAFE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTWXYZabcdefhijkmnprstwxyz2345678";

/// Default number of characters in a generated key.
pub const DEFAULT_KEY_LENGTH: usize = 6;

/// Generates a random candidate key of `length` characters.
///
/// Every character is an independent uniform draw from [`SAFE_ALPHABET`]
/// using the thread-local CSPRNG. The result is only a candidate: the caller
/// has to check it against the store before using it.
///
/// # Examples
///
/// ```
/// use kv_shortener::utils::key_generator::{SAFE_ALPHABET, generate_key};
///
/// let key = generate_key(6);
/// assert_eq!(key.len(), 6);
/// assert!(key.bytes().all(|b| SAFE_ALPHABET.contains(&b)));
/// ```
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| SAFE_ALPHABET[rng.random_range(0..SAFE_ALPHABET.len())] as char)
        .collect()
}
