//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, serde_as};

/// Body of a `POST` request.
///
/// Both fields are optional on the wire: a missing field, or one that is not a
/// string, deserializes to `None` and then fails the password or URL check.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ShortenRequest {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub password: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub url: Option<String>,
}

/// Successful creation: `{"status":200,"key":"/<key>"}`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub status: u16,
    pub key: String,
}

impl ShortenResponse {
    /// Wraps a short key as a root-relative path.
    pub fn created(key: &str) -> Self {
        Self {
            status: 200,
            key: format!("/{key}"),
        }
    }
}

/// Error body: `{"status":N,"msg":"..."}`.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub status: u16,
    pub msg: &'static str,
}
