//! Build-time client configuration.
//!
//! The backend base URL is baked in at compile time from `SCHOOL_API_URL`
//! (e.g. `SCHOOL_API_URL=https://school.example trunk build`); without it the
//! client talks to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use access::api::{DEFAULT_BASE_URL, normalize_base_url};

/// Backend base URL with any trailing slash removed.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("SCHOOL_API_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    normalize_base_url(configured.unwrap_or(DEFAULT_BASE_URL))
}
