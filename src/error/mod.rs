// toolbar-version: Admin Toolbar Version - Rust Port
//
// SPDX-FileCopyrightText: 2026 The toolbar-version contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          ToolbarError (~24 bytes)
//!                  |
//!        +---------+---------+
//!        v         v         v
//!      Config      Io      Other
//!       Box        Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Config  ReadError, ParseError, WriteError, InvalidValue
//!
//! All variants boxed => ToolbarError stays small on the stack.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ToolbarError`].
pub type ToolbarResult<T> = std::result::Result<T, ToolbarError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ToolbarError {
    /// Settings document error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ToolbarError {
                fn from(err: $error) -> Self {
                    ToolbarError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Settings-document errors.
///
/// These are the only real failures this crate produces; everything else
/// degrades to empty display values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings document.
    #[error("failed to read settings '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the settings document.
    #[error("failed to parse settings '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Failed to serialize or persist the settings document.
    #[error("failed to write settings '{path}': {message}")]
    WriteError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
