// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment detection from request context.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentResolver (one per logical request)
//! host + env-var names --> first-match-wins scan --> OnceCell latch
//! Sources: current_env_names(), explicit sets in tests
//! ```
//!
//! The resolver is request-scoped on purpose: different requests may carry
//! different hosts, so there is no process-wide cache of the active
//! environment.

pub mod resolver;


use std::collections::BTreeSet;

pub use resolver::EnvironmentResolver;

/// Captures the names of all variables in the current process environment.
///
/// Only presence matters for record matching, so values are discarded.
/// Names that are not valid UTF-8 cannot be referenced from the settings
/// document and are skipped.
#[must_use]
pub fn current_env_names() -> BTreeSet<String> {
    std::env::vars_os()
        .filter_map(|(name, _)| name.into_string().ok())
        .collect()
}
