//! ponto - A terminal client for the ponto time-clock attendance service
//!
//! Users request registration, log in, check their profile, browse check-in
//! points ("pontos") and partner institutions ("faculdades"), and edit their
//! account. Everything canonical lives in the backend; this crate is the
//! screens, the router that switches between them, and a thin REST client.

pub mod api;
pub mod cli;
pub mod config;
pub mod router;
pub mod storage;
pub mod tui;

use thiserror::Error;

/// Main error type for ponto
#[derive(Error, Debug)]
pub enum PontoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status} for {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: String,
    },

    #[error("Failed to decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PontoError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "ponto";
