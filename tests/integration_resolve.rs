// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the full request flow: stored settings through
//! environment resolution to the rendered badge contents.

use std::collections::BTreeSet;

use toolbar_version::config::{
    EnvironmentRecord, NEW_RECORD_MARKER, editor::SettingsEditor, store::SettingsStore,
};
use toolbar_version::environment::EnvironmentResolver;
use toolbar_version::logging::{LogConfig, LogLevel, init_logging};
use toolbar_version::version::{StaticRegistry, VersionInfo};

fn draft(name: &str, domain: &str, variable: &str) -> EnvironmentRecord {
    EnvironmentRecord {
        id: NEW_RECORD_MARKER.to_string(),
        name: name.to_string(),
        domain: domain.to_string(),
        variable: variable.to_string(),
        ..EnvironmentRecord::default()
    }
}

#[test]
fn badge_for_staging_request() {
    let dir = tempfile::tempdir().unwrap();

    // Administrator configures two environments.
    let editor = SettingsEditor::new(SettingsStore::in_dir(dir.path()));
    let mut staging = draft("Staging", "staging\\.", "");
    staging.color = "#FFA500".to_string();
    staging.git = "/.git/HEAD".to_string();
    editor
        .save(
            vec![staging, draft("Production", "www\\.", "PROD_RELEASE")],
            "umami",
        )
        .unwrap();

    // The checkout this deployment runs from.
    std::fs::create_dir_all(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/release/2.0\n").unwrap();

    // A request arrives.
    let settings = SettingsStore::in_dir(dir.path()).load().unwrap();
    let resolver = EnvironmentResolver::new("staging.example.org", BTreeSet::new());
    let registry: StaticRegistry = [("umami", "2.4.0")].into_iter().collect();
    let info = VersionInfo::new(&settings, &resolver, &registry)
        .with_platform_version("10.1")
        .with_app_root(dir.path());

    assert_eq!(info.title(), "10.1 - 2.4.0 - Staging - release/2.0");

    let style = info.style().unwrap();
    assert_eq!(style.color, "#FFA500");
    assert_eq!(style.icon, "staging");
    assert_eq!(info.url(), "/");
}

#[test]
fn badge_for_unmatched_request() {
    let dir = tempfile::tempdir().unwrap();

    let editor = SettingsEditor::new(SettingsStore::in_dir(dir.path()));
    editor
        .save(vec![draft("Staging", "staging\\.", "")], "")
        .unwrap();

    let settings = SettingsStore::in_dir(dir.path()).load().unwrap();
    let resolver = EnvironmentResolver::new("www.example.org", BTreeSet::new());
    let registry = StaticRegistry::new();
    let info = VersionInfo::new(&settings, &resolver, &registry).with_platform_version("10.1");

    // Only the platform version survives; no style without an environment.
    assert_eq!(info.title(), "10.1");
    assert!(info.style().is_none());
}

#[test]
fn resolution_is_stable_within_one_request() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());

    let editor = SettingsEditor::new(store.clone());
    editor
        .save(vec![draft("Staging", "staging\\.", "")], "")
        .unwrap();

    let settings = store.load().unwrap();
    let resolver = EnvironmentResolver::new("staging.example.org", BTreeSet::new());
    assert_eq!(resolver.resolve(&settings).unwrap().name, "Staging");

    // An administrator saves mid-request; this request keeps its view.
    editor
        .save(vec![draft("Renamed", "staging\\.", "")], "")
        .unwrap();
    let newer = store.load().unwrap();
    assert_eq!(resolver.resolve(&newer).unwrap().name, "Staging");

    // The next request observes the new document.
    let next = EnvironmentResolver::new("staging.example.org", BTreeSet::new());
    assert_eq!(next.resolve(&newer).unwrap().name, "Renamed");
}

#[test]
fn malformed_pattern_degrades_to_later_records() {
    let dir = tempfile::tempdir().unwrap();
    let editor = SettingsEditor::new(SettingsStore::in_dir(dir.path()));
    editor
        .save(
            vec![
                draft("Broken", "(unclosed", ""),
                draft("Staging", "staging\\.", ""),
            ],
            "",
        )
        .unwrap();

    let settings = SettingsStore::in_dir(dir.path()).load().unwrap();
    let resolver = EnvironmentResolver::new("staging.example.org", BTreeSet::new());
    assert_eq!(resolver.resolve(&settings).unwrap().name, "Staging");
}

#[test]
fn logging_writes_to_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("badge.log");

    let config = LogConfig::builder()
        .with_console_level(LogLevel::SILENT)
        .with_file_level(LogLevel::TRACE)
        .with_log_file(log_path.display().to_string())
        .build();

    let guard = init_logging(&config).unwrap();
    tracing::info!("badge logging initialized");
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("badge logging initialized"));
}
