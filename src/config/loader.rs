// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from layered sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file(req)
//!   .add_toml_file_optional(opt)
//!   .add_toml_str()
//!   .with_env_prefix()
//!        |
//!        v
//!    build() --> Settings
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! TOOLBAR_VERSION_SOURCE=umami  → version_source = "umami"
//! TOOLBAR_VERSION_URL=/status   → version_url = "/status"
//! ```
//!
//! Environment records are list-valued and can only come from a document.

use super::Settings;
use crate::error::Result;

/// Builder for loading settings from multiple sources.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
        }
    }

    /// Adds a required TOML document to the loader.
    ///
    /// The file is read when `build()` is called; a missing file or invalid
    /// TOML makes `build()` fail.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(true));
        self
    }

    /// Adds a TOML document that may be absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml).required(false));
        self
    }

    /// Adds inline TOML content.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Enables `<PREFIX>_*` environment variable overrides for scalar keys.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Builds the settings from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required documents are missing.
    /// - A document has invalid TOML syntax.
    /// - The merged result cannot be deserialized into `Settings`.
    pub fn build(self) -> Result<Settings> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
