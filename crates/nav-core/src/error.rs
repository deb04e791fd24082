//! Workspace-wide base error type.
//!
//! Sub-crates define their own error enums; the ones that read configuration
//! or files wrap `NavError` as a variant.

use thiserror::Error;

/// The top-level error type for `nav-core`.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
