// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git branch extraction from a HEAD reference file.
//!
//! ```text
//! <app_root>/<record.git>
//!   "ref: refs/heads/<branch>" --> <branch>
//!   raw commit hash (detached) --> ""
//! ```
//!
//! Reading never fails: a missing or unreadable file simply hides the git
//! info in the badge.

use std::path::{Path, PathBuf};

/// Branch name from the HEAD file at `app_root` joined with `head_path`.
///
/// Operator-authored paths conventionally start with a separator
/// (`/.git/HEAD`); the leading separator is stripped so the path stays
/// below the application root.
#[must_use]
pub fn branch_from_head(app_root: &Path, head_path: &Path) -> String {
    match std::fs::read_to_string(resolve_below(app_root, head_path)) {
        Ok(content) => branch_from_content(&content),
        Err(_) => String::new(),
    }
}

/// Extracts the branch from HEAD file content.
///
/// The content is split on `/`; everything from the third segment onward
/// is the branch, re-joined and trimmed. `ref: refs/heads/feature/x`
/// yields `feature/x`; a raw hash has fewer than three segments and
/// yields nothing (detached HEAD shows no branch).
#[must_use]
pub fn branch_from_content(content: &str) -> String {
    let segments: Vec<&str> = content.split('/').collect();
    if segments.len() < 3 {
        return String::new();
    }
    segments[2..].join("/").trim().to_string()
}

fn resolve_below(app_root: &Path, head_path: &Path) -> PathBuf {
    let relative = head_path.strip_prefix("/").unwrap_or(head_path);
    app_root.join(relative)
}
