//! Error types for edukit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for edukit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP / API Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response whose JSON error envelope was parsed.
    /// `code` is the numeric code from the envelope body, which the
    /// remote service keeps in sync with the HTTP status line.
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        code: Option<u16>,
        status_text: Option<String>,
        message: String,
    },

    /// Non-2xx response without a parseable error envelope.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Guard Errors
    // ============================================================================
    #[error("Page limit exceeded after {pages} pages")]
    PageLimitExceeded { pages: u32 },

    #[error("Item limit exceeded after {items} items")]
    ItemLimitExceeded { items: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an API error with an envelope code
    pub fn api(status: u16, code: Option<u16>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code,
            status_text: None,
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// The HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::HttpStatus { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The error code consumed by recovery call-sites.
    ///
    /// Prefers the `code` field of a parsed error envelope and falls back
    /// to the transport-level HTTP status.
    pub fn api_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, code, .. } => (*code).or(Some(*status)),
            _ => self.status(),
        }
    }

    /// Check if this error carries a 404 (resource absent)
    pub fn is_not_found(&self) -> bool {
        self.api_code() == Some(404)
    }

    /// Check if this error carries a 409 (already exists / already enrolled)
    pub fn is_conflict(&self) -> bool {
        self.api_code() == Some(409)
    }
}

/// Result type alias for edukit
pub type Result<T> = std::result::Result<T, Error>;
