// ABOUTME: Credential configuration loaded from a TOML file with environment overrides
// ABOUTME: Resolves the Gemini and nutrition API keys needed by the remote clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Credential Configuration
//!
//! API keys live in a small TOML file with one section per service:
//!
//! ```toml
//! [gemini_ai]
//! api_key = "..."
//!
//! [nutrition_api]
//! api_key = "..."
//! ```
//!
//! The file is looked up at `--credentials <path>`, then the
//! `SAN_AGENT_CREDENTIALS` environment variable, then
//! `<config dir>/san-agent/credentials.toml`. The `GEMINI_API_KEY` and
//! `NUTRITION_API_KEY` environment variables override file entries, so a
//! file is optional when both keys come from the environment. A key is only
//! required once the command that needs it asks for it.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Environment variable for the Gemini API key
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable for the nutrition API key
pub const NUTRITION_API_KEY_ENV: &str = "NUTRITION_API_KEY";

/// Environment variable pointing at the credentials file
pub const CREDENTIALS_PATH_ENV: &str = "SAN_AGENT_CREDENTIALS";

/// On-disk shape of the credentials file
#[derive(Debug, Default, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    gemini_ai: KeyEntry,
    #[serde(default)]
    nutrition_api: KeyEntry,
}

#[derive(Debug, Default, Deserialize)]
struct KeyEntry {
    api_key: Option<String>,
}

/// Resolved API keys for the remote collaborators
pub struct Credentials {
    gemini_api_key: Option<String>,
    nutrition_api_key: Option<String>,
}

impl Credentials {
    /// Load credentials, merging the TOML file (when present) with
    /// environment overrides.
    ///
    /// An explicitly requested file (flag or `SAN_AGENT_CREDENTIALS`) must
    /// exist; the default location is optional.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an explicitly requested file is
    /// missing or unreadable, or if the file is not valid TOML.
    pub fn load(path_override: Option<&Path>) -> AppResult<Self> {
        let explicit = path_override
            .map(Path::to_path_buf)
            .or_else(|| env::var(CREDENTIALS_PATH_ENV).ok().map(PathBuf::from));

        let file = match explicit {
            Some(path) => Self::read_file(&path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read_file(&path)?,
                _ => CredentialsFile::default(),
            },
        };

        Ok(Self {
            gemini_api_key: env::var(GEMINI_API_KEY_ENV)
                .ok()
                .or(file.gemini_ai.api_key),
            nutrition_api_key: env::var(NUTRITION_API_KEY_ENV)
                .ok()
                .or(file.nutrition_api.api_key),
        })
    }

    /// Default credentials file location under the platform config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("san-agent").join("credentials.toml"))
    }

    /// The Gemini API key
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the missing section when the key
    /// is available from neither the file nor the environment.
    pub fn gemini_api_key(&self) -> AppResult<&str> {
        self.gemini_api_key.as_deref().ok_or_else(|| {
            AppError::config(format!(
                "Gemini API key not configured: set [gemini_ai] api_key in the credentials file or {GEMINI_API_KEY_ENV}"
            ))
        })
    }

    /// The nutrition API key
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the missing section when the key
    /// is available from neither the file nor the environment.
    pub fn nutrition_api_key(&self) -> AppResult<&str> {
        self.nutrition_api_key.as_deref().ok_or_else(|| {
            AppError::config(format!(
                "nutrition API key not configured: set [nutrition_api] api_key in the credentials file or {NUTRITION_API_KEY_ENV}"
            ))
        })
    }

    fn read_file(path: &Path) -> AppResult<CredentialsFile> {
        debug!(path = %path.display(), "loading credentials file");
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!(
                "failed to read credentials file {}: {e}",
                path.display()
            ))
        })?;
        toml::from_str(&contents).map_err(|e| {
            AppError::config(format!(
                "failed to parse credentials file {}: {e}",
                path.display()
            ))
        })
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "nutrition_api_key",
                &self.nutrition_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
