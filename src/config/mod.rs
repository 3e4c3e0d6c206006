//! Configuration module for ponto
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{Settings, API_URL_ENV};
