// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings editing semantics behind the administrative form.
//!
//! # Save Pipeline
//!
//! ```text
//! save(candidates, version_source)
//!   1. "new"/missing id  -> fresh UUID v4
//!   2. blank name        -> record dropped (deletion)
//!   3. remainder replaces `environments` wholesale, submitted order
//!   4. version_source stored verbatim
//!   5. atomic persist
//!   6. menu rebuild signal (best-effort, after persist)
//! ```

use uuid::Uuid;

use crate::error::Result;

use super::Settings;
use super::store::SettingsStore;
use super::types::{EnvironmentRecord, NEW_RECORD_MARKER};

/// Navigation cache invalidation fired after a successful save so the
/// toolbar picks up the new badge without a manual cache clear.
pub trait MenuRebuilder {
    /// Rebuild the host's menu/navigation caches.
    ///
    /// # Errors
    ///
    /// Implementations may fail; the editor logs the failure and keeps the
    /// save as successful, since the document is already durable.
    fn rebuild(&self) -> Result<()>;
}

/// Editing facade over the settings store.
pub struct SettingsEditor {
    store: SettingsStore,
    menu: Option<Box<dyn MenuRebuilder>>,
}

impl SettingsEditor {
    #[must_use]
    pub fn new(store: SettingsStore) -> Self {
        Self { store, menu: None }
    }

    /// Attach the menu-rebuild signal fired after successful saves.
    #[must_use]
    pub fn with_menu_rebuilder(mut self, menu: Box<dyn MenuRebuilder>) -> Self {
        self.menu = Some(menu);
        self
    }

    /// Current settings; a missing document yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document exists but cannot be loaded.
    pub fn load(&self) -> Result<Settings> {
        self.store.load()
    }

    /// Replace the stored environment list and version source.
    ///
    /// Candidates keep their submitted order. Records carrying the
    /// reserved [`NEW_RECORD_MARKER`] (or no id at all) get a fresh
    /// identity; records whose trimmed name is empty are dropped, which is
    /// how the form expresses deletion. `version_url` is not part of the
    /// form contract and survives saves untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the current document cannot be loaded or the new
    /// document cannot be persisted. A failing menu rebuild is not an
    /// error.
    pub fn save(
        &self,
        candidates: Vec<EnvironmentRecord>,
        version_source: &str,
    ) -> Result<Settings> {
        let environments: Vec<EnvironmentRecord> = candidates
            .into_iter()
            .map(assign_identity)
            .filter(|record| !record.name.trim().is_empty())
            .collect();

        let mut settings = self.store.load()?;
        settings.environments = environments;
        settings.version_source = version_source.to_string();
        self.store.save(&settings)?;
        tracing::debug!(
            environments = settings.environments.len(),
            version_source,
            "settings saved"
        );

        // The document is durable at this point; a rebuild failure only
        // delays UI freshness.
        if let Some(menu) = &self.menu
            && let Err(error) = menu.rebuild()
        {
            tracing::warn!(%error, "menu rebuild after settings save failed");
        }

        Ok(settings)
    }
}

fn assign_identity(mut record: EnvironmentRecord) -> EnvironmentRecord {
    if record.id.is_empty() || record.id == NEW_RECORD_MARKER {
        record.id = Uuid::new_v4().to_string();
    }
    record
}
