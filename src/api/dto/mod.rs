//! Data Transfer Objects for requests and responses.
//!
//! Bodies are plain JSON; field order matches what clients of the service
//! already parse.

pub mod shorten;
