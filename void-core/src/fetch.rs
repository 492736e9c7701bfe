//! Repository fetching.
//!
//! The registry never shells out itself; it asks a [`Fetcher`] to materialize
//! a source at a destination path. [`GitFetcher`] is the production
//! implementation; tests substitute their own.

use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::{debug, info};

/// Why a fetch failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The fetch program could not be started at all.
    #[error("could not run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The fetch program ran and reported failure.
    #[error("'{program}' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    /// Any other failure reported by a custom fetcher.
    #[error("{0}")]
    Other(String),
}

/// Clones a remote repository into a local directory.
///
/// Implementations may leave a partial tree at `dest` on failure; the
/// registry stages fetches and discards whatever is left behind.
pub trait Fetcher {
    fn fetch(&self, source: &str, dest: &Path) -> Result<(), FetchError>;
}

/// Runs `<program> clone <source> <dest>`.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    program: String,
}

impl GitFetcher {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_GIT)
    }
}

impl Fetcher for GitFetcher {
    fn fetch(&self, source: &str, dest: &Path) -> Result<(), FetchError> {
        info!("cloning repository: {} -> {}", source, dest.display());

        debug!("running: {} clone", self.program);
        let output = Command::new(&self.program)
            .arg("clone")
            .arg(source)
            .arg(dest)
            .output()
            .map_err(|source| FetchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FetchError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!("repository cloned successfully");
        Ok(())
    }
}
