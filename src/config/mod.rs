// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings management for the toolbar badge.
//!
//! # Document Lifecycle
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. stored TOML document
//! 3. TOOLBAR_* env vars (optional loader prefix)
//!
//! mutation: SettingsEditor::save → whole-document atomic replace
//! ```
//!
//! The document is read once per request and only ever written through the
//! editor; readers observe either the old or the new document in full.

pub mod editor;
pub mod loader;
pub mod store;
pub mod types;


use serde::{Deserialize, Serialize};

use crate::error::Result;

use loader::SettingsLoader;
pub use types::{DEFAULT_COLOR, EnvironmentRecord, NEW_RECORD_MARKER};

/// Stem of the settings document; `<stem>.toml` on disk.
pub const SETTINGS_DOCUMENT: &str = "admin_toolbar_version.settings";

/// Complete settings document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Ordered environment records; document order decides match priority.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<EnvironmentRecord>,
    /// Machine name of the extension to read the application version from.
    /// Empty falls back to the install profile.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version_source: String,
    /// Path the rendered toolbar item links to. Empty means `/`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version_url: String,
}

impl Settings {
    /// Create a new settings loader.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use toolbar_version::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("admin_toolbar_version.settings.toml")
    ///     .with_env_prefix("TOOLBAR")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a single TOML document (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Settings` structure.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Environment record by id, if present.
    #[must_use]
    pub fn environment_by_id(&self, id: &str) -> Option<&EnvironmentRecord> {
        self.environments.iter().find(|record| record.id == id)
    }
}
