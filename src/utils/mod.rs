//! Pure helpers used by the link service and the HTTP layer.
//!
//! - [`key_generator`] - Random short keys from a safe alphabet
//! - [`url_validator`] - Acceptance check for redirect targets
//! - [`fingerprint`] - SHA-512 digests used as dedup keys

pub mod fingerprint;
pub mod key_generator;
pub mod url_validator;
