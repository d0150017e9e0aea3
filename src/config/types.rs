// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings document types.
//!
//! # Document Structure
//!
//! ```text
//! Settings: version_source, version_url, [[environments]]
//! EnvironmentRecord: id, name, domain, variable, color, git
//! ```
//!
//! Optional fields use the empty string for "not set" and disappear from
//! the serialized document.

use serde::{Deserialize, Serialize};

/// Reserved id submitted by the form for records that do not have an
/// identity yet. Replaced with a fresh UUID on save.
pub const NEW_RECORD_MARKER: &str = "new";

/// Fallback toolbar color for records that do not set one.
pub const DEFAULT_COLOR: &str = "#0000FF";

/// One configured deployment environment.
///
/// Records are evaluated in document order; the first record whose
/// non-empty selectors (`domain`, `variable`) all match the request wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentRecord {
    /// Opaque stable identifier, assigned on first save, never reused and
    /// never shown to end users.
    pub id: String,
    /// Label displayed in the toolbar. A blank name on save deletes the
    /// record.
    pub name: String,
    /// Regex matched (unanchored, operator-authored) against the request
    /// host.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,
    /// Process environment variable whose mere presence selects this
    /// record; the value is ignored.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub variable: String,
    /// CSS color token for the toolbar item background.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub color: String,
    /// Path of a git HEAD reference file, relative to the application
    /// root. Empty hides git info for this environment.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub git: String,
}

impl EnvironmentRecord {
    /// Whether any selector is present. Selector-less records can never
    /// become the active environment.
    #[must_use]
    pub fn has_selectors(&self) -> bool {
        !self.domain.is_empty() || !self.variable.is_empty()
    }

    /// Display color, falling back to [`DEFAULT_COLOR`].
    #[must_use]
    pub fn display_color(&self) -> &str {
        if self.color.is_empty() {
            DEFAULT_COLOR
        } else {
            &self.color
        }
    }
}
