//! OVH provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OvhError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Missing credential: {key} (set {env} or add it to ovh.conf)")]
    MissingCredential { key: &'static str, env: &'static str },

    #[error("Credentials file error: {0}")]
    Credentials(#[from] config::ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {message}{}", query_id_suffix(.query_id))]
    Api {
        status: u16,
        message: String,
        class: Option<String>,
        query_id: Option<String>,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

fn query_id_suffix(query_id: &Option<String>) -> String {
    query_id
        .as_deref()
        .map(|q| format!(" (QueryID: {})", q))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, OvhError>;
