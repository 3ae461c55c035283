//! Crate-level error types.
//!
//! Only the loading and presentation edges return errors. The per-frame
//! path swallows failures so a tick never stops the render loop.

use std::fmt;

/// Errors produced by the orrery crate.
#[derive(Debug)]
pub enum OrreryError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Body catalog parsing failure.
    CatalogParse(String),
    /// The scene adapter failed to present a frame.
    Render(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
