// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Extension registry seam.
//!
//! The host application knows which extensions and profiles are installed
//! and what versions they declare; this crate only needs a lookup.

use std::collections::BTreeMap;

/// Read access to the host's extension and profile version declarations.
pub trait ExtensionRegistry {
    /// Declared version of `machine_name`, if any.
    fn version(&self, machine_name: &str) -> Option<String>;
}

/// Map-backed registry for hosts with a static extension set and for
/// tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    versions: BTreeMap<String, String>,
}

impl StaticRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an extension version, replacing any previous declaration.
    pub fn insert(
        &mut self,
        machine_name: impl Into<String>,
        version: impl Into<String>,
    ) -> &mut Self {
        self.versions.insert(machine_name.into(), version.into());
        self
    }
}

impl ExtensionRegistry for StaticRegistry {
    fn version(&self, machine_name: &str) -> Option<String> {
        self.versions.get(machine_name).cloned()
    }
}

impl<S, V> FromIterator<(S, V)> for StaticRegistry
where
    S: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, V)>>(iter: T) -> Self {
        Self {
            versions: iter
                .into_iter()
                .map(|(name, version)| (name.into(), version.into()))
                .collect(),
        }
    }
}
