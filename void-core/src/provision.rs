//! Shared environment provisioning (the sanctum's `.qvenv`).

use std::path::Path;
use std::process::Command;

use thiserror::Error;
use tracing::info;

/// Why the shared environment could not be created.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("could not run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program} -m venv' exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Creates the shared environment at a path that does not exist yet.
pub trait EnvProvisioner {
    fn provision(&self, dest: &Path) -> Result<(), ProvisionError>;
}

/// Runs `<interpreter> -m venv <dest>`.
#[derive(Debug, Clone)]
pub struct VenvProvisioner {
    interpreter: String,
}

impl VenvProvisioner {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Default for VenvProvisioner {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PYTHON)
    }
}

impl EnvProvisioner for VenvProvisioner {
    fn provision(&self, dest: &Path) -> Result<(), ProvisionError> {
        info!("creating virtual environment at {}", dest.display());
        let output = Command::new(&self.interpreter)
            .args(["-m", "venv"])
            .arg(dest)
            .output()
            .map_err(|source| ProvisionError::Spawn {
                program: self.interpreter.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProvisionError::Failed {
                program: self.interpreter.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // The directory marks the environment as initialized.
        std::fs::create_dir_all(dest)?;
        Ok(())
    }
}
