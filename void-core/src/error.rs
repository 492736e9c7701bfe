//! Error types for void-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::FetchError;
use crate::provision::ProvisionError;

/// All errors that can arise from registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A project with the derived name is already installed.
    #[error("project '{name}' already exists in sanctum")]
    AlreadyExists { name: String },

    /// The named project is not present in the projects directory.
    #[error("project '{name}' not found in sanctum")]
    NotFound { name: String },

    /// `copy` refused to overwrite an existing path.
    #[error("destination {path} already exists")]
    DestinationExists { path: PathBuf },

    /// The projects directory has never been created.
    #[error("no sanctum detected at {path}; create it first with `void create sanc`")]
    NoSanctum { path: PathBuf },

    /// The fetcher could not clone `source`.
    #[error("failed to clone repository {source_url}: {source}")]
    FetchFailed {
        source_url: String,
        #[source]
        source: FetchError,
    },

    /// No usable project name could be derived from the source.
    #[error("cannot derive a project name from '{source_url}'")]
    InvalidSource { source_url: String },

    /// A user-supplied name is not a valid project name.
    #[error("'{name}' is not a valid project name")]
    InvalidName { name: String },

    /// The shared environment could not be created.
    #[error("failed to create shared environment at {path}: {source}")]
    EnvFailed {
        path: PathBuf,
        #[source]
        source: ProvisionError,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (lock snapshot write path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error (config write path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A persisted file (lock snapshot or config) could not be parsed.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`RegistryError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RegistryError {
    RegistryError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`RegistryError::Parse`].
pub(crate) fn parse_err(path: impl Into<PathBuf>, source: impl std::fmt::Display) -> RegistryError {
    RegistryError::Parse {
        path: path.into(),
        message: source.to_string(),
    }
}
