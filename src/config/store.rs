// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings document persistence.
//!
//! ```text
//! SettingsStore (document path)
//!   load()  layered loader, missing document => defaults
//!   save()  toml serialize -> sibling temp file -> rename into place
//! ```
//!
//! The rename keeps saves atomic from a reader's perspective: concurrent
//! loads observe either the old or the new document in full.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use super::{SETTINGS_DOCUMENT, Settings};

/// Durable storage for the settings document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store backed by an explicit document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store using the conventional document name inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{SETTINGS_DOCUMENT}.toml")),
        }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings document.
    ///
    /// A document that does not exist yet yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be read or
    /// parsed.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        Settings::from_file(&self.path)
    }

    /// Persist the whole document atomically.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::WriteError` if serialization, the temp file
    /// write, or the final rename fails.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        let body = toml::to_string_pretty(settings).map_err(|e| self.write_error(e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        file.write_all(body.as_bytes())
            .map_err(|e| self.write_error(e))?;
        file.persist(&self.path).map_err(|e| self.write_error(e))?;
        Ok(())
    }

    fn write_error(&self, source: impl std::fmt::Display) -> ConfigError {
        ConfigError::WriteError {
            path: self.path.display().to_string(),
            message: source.to_string(),
        }
    }
}
