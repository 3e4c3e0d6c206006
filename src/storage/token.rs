//! Auth token persistence
//!
//! The only thing ponto keeps across restarts: the opaque token the backend
//! hands out on login, stored as a single file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Settings;

/// File-backed store for the auth token
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store under the configured data directory
    pub fn open(settings: &Settings) -> Self {
        Self::at(settings.token_path())
    }

    /// Store at a specific path (useful for testing)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored token
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, token)
            .with_context(|| format!("Failed to write token file: {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(())
    }

    /// Remove the token; returns whether one was stored
    pub fn clear(&self) -> Result<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove token file: {}", self.path.display())),
        }
    }
}
