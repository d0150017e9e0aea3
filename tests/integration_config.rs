// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the settings document lifecycle.
//!
//! Exercises loading, atomic persistence and the editor semantics with
//! realistic TOML documents.

use toolbar_version::config::{
    EnvironmentRecord, NEW_RECORD_MARKER, Settings, editor::SettingsEditor, store::SettingsStore,
};

fn draft(name: &str, domain: &str, variable: &str) -> EnvironmentRecord {
    EnvironmentRecord {
        id: NEW_RECORD_MARKER.to_string(),
        name: name.to_string(),
        domain: domain.to_string(),
        variable: variable.to_string(),
        ..EnvironmentRecord::default()
    }
}

// =============================================================================
// Loading from TOML
// =============================================================================

#[test]
fn settings_parse_minimal() {
    let settings = Settings::parse("").unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_parse_realistic_document() {
    let toml = r##"
version_source = "umami"

[[environments]]
id = "3b9f2a60-9e74-4c65-8b0a-6a7f6f1f2d11"
name = "Local"
domain = "localhost"
color = "green"

[[environments]]
id = "3b9f2a60-9e74-4c65-8b0a-6a7f6f1f2d12"
name = "Production"
domain = "www\\.example\\.org"
variable = "PROD_RELEASE"
color = "#FF0000"
git = "/.git/HEAD"
"##;
    let settings = Settings::parse(toml).unwrap();
    assert_eq!(settings.environments.len(), 2);
    assert_eq!(settings.environments[1].name, "Production");
    assert_eq!(settings.version_source, "umami");
}

#[test]
fn settings_builder_layered() {
    // Base layer
    let settings = Settings::builder()
        .add_toml_str(
            r#"
version_source = "standard"
version_url = "/status"
"#,
        )
        // Override layer
        .add_toml_str(
            r#"
version_source = "umami"
"#,
        )
        .build()
        .unwrap();

    assert_eq!(settings.version_source, "umami");
    assert_eq!(settings.version_url, "/status");
}

#[test]
fn settings_optional_file_may_be_absent() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::builder()
        .add_toml_file_optional(dir.path().join("nope.toml"))
        .build()
        .unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn settings_required_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let result = Settings::builder()
        .add_toml_file(dir.path().join("nope.toml"))
        .build();
    assert!(result.is_err());
}

// =============================================================================
// Store persistence
// =============================================================================

#[test]
fn store_roundtrip_keeps_record_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());

    let settings = Settings {
        environments: vec![
            EnvironmentRecord {
                id: "a".to_string(),
                name: "Local".to_string(),
                domain: "localhost".to_string(),
                ..EnvironmentRecord::default()
            },
            EnvironmentRecord {
                id: "b".to_string(),
                name: "Fallback".to_string(),
                domain: ".".to_string(),
                ..EnvironmentRecord::default()
            },
        ],
        ..Settings::default()
    };
    store.save(&settings).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.environments[0].name, "Local");
    assert_eq!(loaded.environments[1].name, "Fallback");
}

#[test]
fn store_save_overwrites_whole_document() {
    let dir = tempfile::tempdir().unwrap();
    let store = SettingsStore::in_dir(dir.path());

    store
        .save(&Settings {
            version_source: "standard".to_string(),
            version_url: "/status".to_string(),
            ..Settings::default()
        })
        .unwrap();
    store
        .save(&Settings {
            version_source: "umami".to_string(),
            ..Settings::default()
        })
        .unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.version_source, "umami");
    assert!(loaded.version_url.is_empty());
}

// =============================================================================
// Editor lifecycle
// =============================================================================

#[test]
fn editor_full_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let editor = SettingsEditor::new(SettingsStore::in_dir(dir.path()));

    // First save: two new environments.
    editor
        .save(
            vec![
                draft("Local", "localhost", ""),
                draft("Production", "www\\.example\\.org", "PROD_RELEASE"),
            ],
            "umami",
        )
        .unwrap();

    let first = editor.load().unwrap();
    assert_eq!(first.environments.len(), 2);
    let local_id = first.environments[0].id.clone();
    assert!(uuid::Uuid::parse_str(&local_id).is_ok());

    // Second save: rename one, delete the other by blanking its name.
    let mut candidates = first.environments.clone();
    candidates[0].name = "Development".to_string();
    candidates[1].name = String::new();
    editor.save(candidates, "umami").unwrap();

    let second = editor.load().unwrap();
    assert_eq!(second.environments.len(), 1);
    assert_eq!(second.environments[0].name, "Development");
    // Identity survives the rename.
    assert_eq!(second.environments[0].id, local_id);
}

#[test]
fn editor_version_source_stored_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let editor = SettingsEditor::new(SettingsStore::in_dir(dir.path()));

    editor.save(Vec::new(), "my_profile").unwrap();
    assert_eq!(editor.load().unwrap().version_source, "my_profile");

    // Empty means "use the install profile fallback".
    editor.save(Vec::new(), "").unwrap();
    assert!(editor.load().unwrap().version_source.is_empty());
}
