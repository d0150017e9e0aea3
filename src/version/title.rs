// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Toolbar title and style composition.
//!
//! ```text
//! join_title([platform, application, environment, branch])
//!   non-empty parts joined with " - "
//! icon_slug(" QA Env! ") -> "qa_env_"
//! ```

use std::sync::OnceLock;

use regex::Regex;

/// Styling for the rendered toolbar item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// CSS background color token.
    pub color: String,
    /// Icon slug derived from the environment name.
    pub icon: String,
}

/// Joins the non-empty parts with `" - "`, keeping their order.
#[must_use]
pub fn join_title<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Icon slug for an environment name: lower-cased, trimmed, every run of
/// characters outside `[a-z0-9_]` collapsed to a single `_`.
#[must_use]
pub fn icon_slug(name: &str) -> String {
    static NON_SLUG: OnceLock<Regex> = OnceLock::new();
    let pattern = NON_SLUG.get_or_init(|| Regex::new("[^a-z0-9_]+").expect("fixed pattern"));
    pattern
        .replace_all(&name.trim().to_lowercase(), "_")
        .into_owned()
}
