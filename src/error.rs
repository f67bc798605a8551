// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the Glasswing worker
//!
//! A forwarding failure is not recovered locally: it carries the
//! underlying network error to the requester unchanged.

use thiserror::Error;

/// Result type alias for Glasswing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Glasswing worker
#[derive(Error, Debug)]
pub enum Error {
    /// Forwarded network request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Lifecycle ordering violation (fetch before install, repeat install)
    #[error("Lifecycle error: {0}")]
    Lifecycle(String),

    /// Event dispatch error
    #[error("Dispatch error: {0}")]
    Dispatch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new lifecycle error
    pub fn lifecycle<S: Into<String>>(msg: S) -> Self {
        Error::Lifecycle(msg.into())
    }

    /// Create a new dispatch error
    pub fn dispatch<S: Into<String>>(msg: S) -> Self {
        Error::Dispatch(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a network forwarding failure
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// Check if this is a lifecycle ordering violation
    pub fn is_lifecycle(&self) -> bool {
        matches!(self, Error::Lifecycle(_))
    }

    /// Check if the forwarded request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }

    /// Get the HTTP status code of a failed forward, if the network
    /// produced one before the failure
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
