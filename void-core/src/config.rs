//! Sanctum configuration.
//!
//! [`SanctumConfig`] is the explicit layout handed to a
//! [`Registry`](crate::Registry). It is usually resolved from the optional
//! YAML file at `~/.void/config.yaml` ([`ConfigFile`]), with a root override
//! from the command line taking precedence.
//!
//! Home-dependent functions take an explicit `home` (`_at(home)`) so tests can
//! use a temp dir; callers resolve the real one with [`home`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, parse_err, RegistryError};
use crate::paths;

pub const DEFAULT_GIT: &str = "git";
pub const DEFAULT_PYTHON: &str = "python3";

/// Paths owned by one sanctum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanctumConfig {
    pub root: PathBuf,
    pub projects_dir: PathBuf,
    pub env_dir: PathBuf,
}

impl SanctumConfig {
    /// Standard layout under `root`: `projects/` and `.qvenv/`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            projects_dir: paths::projects_dir(&root),
            env_dir: paths::env_dir(&root),
            root,
        }
    }

    /// `<root>/lock.json`
    pub fn lock_path(&self) -> PathBuf {
        paths::lock_path(&self.root)
    }

    /// Path of the named project's directory (pure, no I/O).
    pub fn project_path(&self, name: &str) -> PathBuf {
        self.projects_dir.join(name)
    }
}

/// Contents of `~/.void/config.yaml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanctum_root: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_dir: Option<PathBuf>,
    /// Program used by the git fetcher.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    /// Interpreter used to run `-m venv`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,
}

impl ConfigFile {
    /// Load `<home>/.void/config.yaml`.
    ///
    /// A missing file yields the defaults; a malformed one is a
    /// `RegistryError::Parse` carrying the path.
    pub fn load_at(home: &Path) -> Result<Self, RegistryError> {
        let path = paths::config_path(home);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&contents).map_err(|e| parse_err(path, e))
    }

    /// Write `<home>/.void/config.yaml`, creating the directory if needed.
    pub fn save_at(&self, home: &Path) -> Result<(), RegistryError> {
        let path = paths::config_path(home);
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let tmp = path.with_extension("yaml.tmp");
        std::fs::write(&tmp, yaml).map_err(|e| io_err(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
        Ok(())
    }

    /// Resolve the sanctum layout.
    ///
    /// Precedence for the root: `root_override` > `sanctum_root` >
    /// `<home>/sanctum`. `projects_dir`/`env_dir` fall back to the standard
    /// layout under the resolved root.
    pub fn sanctum_at(&self, home: &Path, root_override: Option<&Path>) -> SanctumConfig {
        let root = root_override
            .map(Path::to_path_buf)
            .or_else(|| self.sanctum_root.clone())
            .unwrap_or_else(|| paths::sanctum_root(home));
        let mut config = SanctumConfig::from_root(root);
        if let Some(dir) = &self.projects_dir {
            config.projects_dir = dir.clone();
        }
        if let Some(dir) = &self.env_dir {
            config.env_dir = dir.clone();
        }
        config
    }

    pub fn git_program(&self) -> &str {
        self.git.as_deref().unwrap_or(DEFAULT_GIT)
    }

    pub fn python_program(&self) -> &str {
        self.python.as_deref().unwrap_or(DEFAULT_PYTHON)
    }
}

/// The user's home directory, or `RegistryError::HomeNotFound`.
pub fn home() -> Result<PathBuf, RegistryError> {
    dirs::home_dir().ok_or(RegistryError::HomeNotFound)
}
