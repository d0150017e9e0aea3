// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version info assembly for the toolbar badge.
//!
//! # Architecture
//!
//! ```text
//! VersionInfo (one per request)
//!   platform version     host-supplied
//!   application version  registry[version_source | install profile]
//!   environment name     EnvironmentResolver
//!   git branch           <app_root>/<record.git> HEAD file
//!        |
//!        v
//!   title() "10.1 - 2.4.0 - Staging - main"
//!   style() {color, icon}    url() link target
//! ```
//!
//! Every accessor degrades to an empty value; assembling the badge never
//! fails.

pub mod git;
pub mod registry;
pub mod title;


use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::environment::EnvironmentResolver;

pub use registry::{ExtensionRegistry, StaticRegistry};
pub use title::{Style, icon_slug, join_title};

/// Assembles the toolbar badge contents for one request.
pub struct VersionInfo<'a> {
    settings: &'a Settings,
    resolver: &'a EnvironmentResolver,
    registry: &'a dyn ExtensionRegistry,
    install_profile: String,
    platform_version: String,
    app_root: PathBuf,
}

impl<'a> VersionInfo<'a> {
    pub fn new(
        settings: &'a Settings,
        resolver: &'a EnvironmentResolver,
        registry: &'a dyn ExtensionRegistry,
    ) -> Self {
        Self {
            settings,
            resolver,
            registry,
            install_profile: String::new(),
            platform_version: String::new(),
            app_root: PathBuf::from("."),
        }
    }

    /// Install profile used as the version fallback when no source is
    /// configured.
    #[must_use]
    pub fn with_install_profile(mut self, profile: impl Into<String>) -> Self {
        self.install_profile = profile.into();
        self
    }

    /// Product/platform version string shown first in the title.
    #[must_use]
    pub fn with_platform_version(mut self, version: impl Into<String>) -> Self {
        self.platform_version = version.into();
        self
    }

    /// Root against which record git paths are resolved. Defaults to the
    /// current directory.
    #[must_use]
    pub fn with_app_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.app_root = root.into();
        self
    }

    /// Version of the configured source extension, falling back to the
    /// install profile. Unknown extensions yield an empty string.
    #[must_use]
    pub fn application_version(&self) -> String {
        let source = if self.settings.version_source.is_empty() {
            self.install_profile.as_str()
        } else {
            self.settings.version_source.as_str()
        };
        if source.is_empty() {
            return String::new();
        }
        self.registry.version(source).unwrap_or_default()
    }

    /// Platform version as supplied by the host.
    #[must_use]
    pub fn platform_version(&self) -> &str {
        &self.platform_version
    }

    /// Name of the active environment, or empty when none matches.
    #[must_use]
    pub fn environment(&self) -> String {
        self.resolver
            .resolve(self.settings)
            .map(|record| record.name.clone())
            .unwrap_or_default()
    }

    /// Branch from the active environment's HEAD file, or empty.
    #[must_use]
    pub fn git_branch(&self) -> String {
        self.resolver
            .resolve(self.settings)
            .filter(|record| !record.git.is_empty())
            .map(|record| git::branch_from_head(&self.app_root, Path::new(&record.git)))
            .unwrap_or_default()
    }

    /// The complete toolbar title.
    #[must_use]
    pub fn title(&self) -> String {
        let application = self.application_version();
        let environment = self.environment();
        let branch = self.git_branch();
        title::join_title([
            self.platform_version.as_str(),
            application.as_str(),
            environment.as_str(),
            branch.as_str(),
        ])
    }

    /// Toolbar item styling; `None` without a named active environment.
    #[must_use]
    pub fn style(&self) -> Option<Style> {
        self.resolver
            .resolve(self.settings)
            .filter(|record| !record.name.is_empty())
            .map(|record| Style {
                color: record.display_color().to_string(),
                icon: title::icon_slug(&record.name),
            })
    }

    /// Path the rendered toolbar item links to (`/` when unset).
    #[must_use]
    pub fn url(&self) -> &str {
        if self.settings.version_url.is_empty() {
            "/"
        } else {
            &self.settings.version_url
        }
    }
}
