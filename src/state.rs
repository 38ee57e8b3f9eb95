//! Shared application state injected into every handler.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

use crate::application::services::LinkService;
use crate::config::Config;

/// Request-handling settings, read-only after startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_password: String,
    pub dedup_enabled: bool,
    /// Pre-encoded `Location` for `/` and unknown keys.
    pub default_redirect: HeaderValue,
}

impl Settings {
    /// Builds settings from raw values.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_redirect_url` cannot be used as a header value.
    pub fn new(
        default_redirect_url: &str,
        api_password: impl Into<String>,
        dedup_enabled: bool,
    ) -> Result<Self> {
        let default_redirect = HeaderValue::from_str(default_redirect_url)
            .context("DEFAULT_REDIRECT_URL is not a valid header value")?;

        Ok(Self {
            api_password: api_password.into(),
            dedup_enabled,
            default_redirect,
        })
    }

    /// Builds settings from the loaded configuration.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.default_redirect_url,
            config.api_password.clone(),
            config.dedup_enabled,
        )
    }
}

/// Cloned into every request; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, settings: Settings) -> Self {
        Self {
            link_service,
            settings: Arc::new(settings),
        }
    }
}
