//! The sanctum registry.
//!
//! # Storage layout
//!
//! ```text
//! <root>/
//!   .qvenv/                       (shared environment, provisioned once)
//!   projects/
//!     <name>/                     (one cloned repository per project)
//!     .<name>.void-staging/       (in-flight clone, renamed on success)
//!   lock.json                     (last lock snapshot, atomic write)
//! ```
//!
//! Clone and copy are staged in a dot-prefixed sibling and renamed into
//! place, so a failure never leaves a partial project behind. Dot-prefixed
//! entries are never reported as projects.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{ConfigFile, SanctumConfig};
use crate::error::{io_err, parse_err, RegistryError};
use crate::fetch::{Fetcher, GitFetcher};
use crate::paths::staging_path;
use crate::provision::{EnvProvisioner, VenvProvisioner};
use crate::tree;
use crate::types::{Listing, LockSnapshot, ProjectName, SanctumStatus};

/// A sanctum plus the collaborators that populate it.
#[derive(Debug, Clone)]
pub struct Registry<F = GitFetcher, E = VenvProvisioner> {
    config: SanctumConfig,
    fetcher: F,
    provisioner: E,
}

impl Registry<GitFetcher, VenvProvisioner> {
    /// Registry wired to the programs named in `file` (or their defaults).
    pub fn from_config_file(config: SanctumConfig, file: &ConfigFile) -> Self {
        Self::new(
            config,
            GitFetcher::new(file.git_program()),
            VenvProvisioner::new(file.python_program()),
        )
    }
}

impl<F: Fetcher, E: EnvProvisioner> Registry<F, E> {
    pub fn new(config: SanctumConfig, fetcher: F, provisioner: E) -> Self {
        Self {
            config,
            fetcher,
            provisioner,
        }
    }

    pub fn config(&self) -> &SanctumConfig {
        &self.config
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    // -----------------------------------------------------------------------
    // 1. Sanctum bootstrap
    // -----------------------------------------------------------------------

    /// Create the root and projects directories, then the shared environment
    /// if it does not exist yet.
    pub fn ensure_sanctum(&self) -> Result<SanctumStatus, RegistryError> {
        create_dir_all(&self.config.root)?;
        create_dir_all(&self.config.projects_dir)?;

        let env_dir = &self.config.env_dir;
        if tree::entry_exists(env_dir) {
            debug!("shared environment already present at {}", env_dir.display());
            return Ok(SanctumStatus::AlreadyInitialized);
        }

        if let Err(source) = self.provisioner.provision(env_dir) {
            discard(env_dir);
            return Err(RegistryError::EnvFailed {
                path: env_dir.clone(),
                source,
            });
        }
        info!("sanctum created at {}", self.config.root.display());
        Ok(SanctumStatus::Created)
    }

    // -----------------------------------------------------------------------
    // 2. Install
    // -----------------------------------------------------------------------

    /// Clone `source` into the projects directory under its derived name.
    pub fn install(&self, source: &str) -> Result<ProjectName, RegistryError> {
        let name = ProjectName::from_source(source)?;
        self.ensure_sanctum()?;

        let project_path = self.config.project_path(name.as_str());
        if tree::entry_exists(&project_path) {
            return Err(RegistryError::AlreadyExists {
                name: name.to_string(),
            });
        }

        let staging = staging_path(&project_path);
        if tree::entry_exists(&staging) {
            warn!("removing stale staging directory {}", staging.display());
            tree::remove_tree(&staging)?;
        }

        if let Err(source_err) = self.fetcher.fetch(source, &staging) {
            discard(&staging);
            return Err(RegistryError::FetchFailed {
                source_url: source.to_owned(),
                source: source_err,
            });
        }

        if let Err(e) = std::fs::rename(&staging, &project_path) {
            discard(&staging);
            return Err(io_err(&project_path, e));
        }
        info!("installed '{}' into {}", name, project_path.display());
        Ok(name)
    }

    // -----------------------------------------------------------------------
    // 3. List
    // -----------------------------------------------------------------------

    /// Project names in the projects directory, sorted ascending.
    pub fn list(&self) -> Result<Listing, RegistryError> {
        let dir = &self.config.projects_dir;
        if !dir.is_dir() {
            return Ok(Listing::NoSanctum);
        }
        let mut names: Vec<ProjectName> = std::fs::read_dir(dir)
            .map_err(|e| io_err(dir, e))?
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type()
                    .map(|t| t.is_dir() || t.is_symlink())
                    .unwrap_or(false)
            })
            .filter_map(|e| e.file_name().to_str().map(str::to_owned))
            .filter_map(|name| ProjectName::parse(&name).ok())
            .collect();
        names.sort();
        Ok(Listing::Projects(names))
    }

    // -----------------------------------------------------------------------
    // 4. Delete / copy
    // -----------------------------------------------------------------------

    /// Remove the named project's tree. Symlinks are unlinked, never followed.
    pub fn delete(&self, name: &str) -> Result<(), RegistryError> {
        let project_path = self.existing_project(name)?;
        tree::remove_tree(&project_path)?;
        info!("deleted '{}'", name);
        Ok(())
    }

    /// Deep-copy the named project to `destination`, which must not exist.
    pub fn copy(&self, name: &str, destination: &Path) -> Result<PathBuf, RegistryError> {
        let project_path = self.existing_project(name)?;
        if tree::entry_exists(destination) {
            return Err(RegistryError::DestinationExists {
                path: destination.to_path_buf(),
            });
        }
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }

        let staging = staging_path(destination);
        if tree::entry_exists(&staging) {
            tree::remove_tree(&staging)?;
        }
        let result = tree::copy_tree(&project_path, &staging).and_then(|()| {
            std::fs::rename(&staging, destination).map_err(|e| io_err(destination, e))
        });
        if let Err(e) = result {
            discard(&staging);
            return Err(e);
        }
        info!("copied '{}' to {}", name, destination.display());
        Ok(destination.to_path_buf())
    }

    // -----------------------------------------------------------------------
    // 5. Lock snapshot
    // -----------------------------------------------------------------------

    /// Replace the lock file with a snapshot of the current project set.
    ///
    /// Write flow: serialize → `lock.json.tmp` → `rename`.
    pub fn lock(&self) -> Result<LockSnapshot, RegistryError> {
        let names = match self.list()? {
            Listing::NoSanctum => {
                return Err(RegistryError::NoSanctum {
                    path: self.config.projects_dir.clone(),
                })
            }
            Listing::Projects(names) => names,
        };
        let snapshot = LockSnapshot::new(names);

        let path = self.config.lock_path();
        create_dir_all(&self.config.root)?;
        let json = serde_json::to_string_pretty(&snapshot)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(&path, e));
        }
        info!("locked {} project(s) to {}", snapshot.projects.len(), path.display());
        Ok(snapshot)
    }

    /// Read the last lock snapshot, if any.
    pub fn read_lock(&self) -> Result<Option<LockSnapshot>, RegistryError> {
        let path = self.config.lock_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| parse_err(path, e))
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    fn existing_project(&self, name: &str) -> Result<PathBuf, RegistryError> {
        let name = ProjectName::parse(name)?;
        let path = self.config.project_path(name.as_str());
        if !tree::entry_exists(&path) {
            return Err(RegistryError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(path)
    }
}

fn create_dir_all(path: &Path) -> Result<(), RegistryError> {
    std::fs::create_dir_all(path).map_err(|e| io_err(path, e))
}

/// Best-effort cleanup after a failed staged operation.
fn discard(path: &Path) {
    if tree::entry_exists(path) {
        if let Err(e) = tree::remove_tree(path) {
            warn!("could not clean up {}: {}", path.display(), e);
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
