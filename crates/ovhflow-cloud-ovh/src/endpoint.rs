//! API endpoint aliases

use crate::error::{OvhError, Result};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "ovh-eu";

const ENDPOINTS: &[(&str, &str)] = &[
    ("ovh-eu", "https://eu.api.ovh.com/1.0"),
    ("ovh-ca", "https://ca.api.ovh.com/1.0"),
    ("ovh-us", "https://api.us.ovhcloud.com/1.0"),
    ("kimsufi-eu", "https://eu.api.kimsufi.com/1.0"),
    ("kimsufi-ca", "https://ca.api.kimsufi.com/1.0"),
    ("soyoustart-eu", "https://eu.api.soyoustart.com/1.0"),
    ("soyoustart-ca", "https://ca.api.soyoustart.com/1.0"),
];

/// A resolved API endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    name: String,
    base_url: String,
}

impl Endpoint {
    /// Resolve an alias (e.g. "ovh-eu") or a literal http(s) base URL
    pub fn resolve(name: &str) -> Result<Self> {
        if let Some((alias, url)) = ENDPOINTS.iter().find(|(alias, _)| *alias == name) {
            return Ok(Self {
                name: alias.to_string(),
                base_url: url.to_string(),
            });
        }

        if name.starts_with("https://") || name.starts_with("http://") {
            return Ok(Self {
                name: name.to_string(),
                base_url: name.trim_end_matches('/').to_string(),
            });
        }

        Err(OvhError::UnknownEndpoint(name.to_string()))
    }

    /// Alias or URL this endpoint was resolved from; also the ovh.conf section name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an API path such as `/dedicated/server/ns1`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
