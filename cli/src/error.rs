//! Errors of the command-line runner.

use displaydoc::Display;
use std::io;
use thiserror::Error;

/// All kinds of errors in this program.
#[derive(Debug, Display, Error)]
pub(crate) enum Error {
    /// Unable to read {0}: {1}.
    Io(String, #[source] io::Error),
    /// Invalid JSON configuration: {0}
    Json(#[from] serde_json::Error),
    /// Invalid YAML configuration: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Invalid TOML configuration: {0}
    Toml(#[from] toml::de::Error),
    /// Unknown file format: {0:?}.
    UnknownFormat(String),
    /// {0}
    Lib(#[from] lifegrid_lib::Error),
}
