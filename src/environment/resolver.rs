// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! First-match-wins environment resolution with a request-scoped latch.
//!
//! ```text
//! resolve(settings)
//!   per record, in stored order:
//!     no selectors at all    -> skip
//!     domain regex mismatch  -> skip
//!     variable not present   -> skip
//!     otherwise              -> latch and stop
//! ```
//!
//! The latch covers the "no match" outcome too: one resolver serves one
//! logical request and never observes later settings mutations.

use std::cell::OnceCell;
use std::collections::BTreeSet;

use regex::Regex;

use crate::config::{EnvironmentRecord, Settings};

/// Resolves the active environment for one logical request.
#[derive(Debug)]
pub struct EnvironmentResolver {
    host: String,
    env_names: BTreeSet<String>,
    resolved: OnceCell<Option<EnvironmentRecord>>,
}

impl EnvironmentResolver {
    /// Resolver for an explicit host and environment-variable name set.
    #[must_use]
    pub fn new(host: impl Into<String>, env_names: BTreeSet<String>) -> Self {
        Self {
            host: host.into(),
            env_names,
            resolved: OnceCell::new(),
        }
    }

    /// Resolver for the given host and the current process environment.
    #[must_use]
    pub fn from_process_env(host: impl Into<String>) -> Self {
        Self::new(host, super::current_env_names())
    }

    /// Request host this resolver was built for.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The first record whose non-empty selectors all match, if any.
    ///
    /// The outcome is computed once per resolver; later calls return the
    /// latched value even when `settings` differs.
    pub fn resolve(&self, settings: &Settings) -> Option<&EnvironmentRecord> {
        self.resolved
            .get_or_init(|| {
                settings
                    .environments
                    .iter()
                    .find(|record| self.matches(record))
                    .cloned()
            })
            .as_ref()
    }

    fn matches(&self, record: &EnvironmentRecord) -> bool {
        if !record.has_selectors() {
            return false;
        }
        if !record.domain.is_empty() && !self.domain_matches(record) {
            return false;
        }
        if !record.variable.is_empty() && !self.env_names.contains(&record.variable) {
            return false;
        }
        true
    }

    /// Unanchored match of the operator-authored pattern against the host.
    /// A pattern that does not compile counts as a mismatch for this record
    /// only; resolution continues with the remaining records.
    fn domain_matches(&self, record: &EnvironmentRecord) -> bool {
        match Regex::new(&record.domain) {
            Ok(pattern) => pattern.is_match(&self.host),
            Err(error) => {
                tracing::warn!(
                    environment = %record.name,
                    pattern = %record.domain,
                    %error,
                    "invalid domain pattern; treating as non-matching"
                );
                false
            }
        }
    }
}
