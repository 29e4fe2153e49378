// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{DocumentError, RenderError};
use std::fmt;

/// Top-level error type for the crate.
///
/// Controller-boundary errors ([`DocumentError`], [`RenderError`]) are
/// wrapped as-is; `Io` and `Config` cover the configuration subsystem.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Document(DocumentError),
    Render(RenderError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Document(e) => write!(f, "Document Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<DocumentError> for Error {
    fn from(err: DocumentError) -> Self {
        Error::Document(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Render(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
