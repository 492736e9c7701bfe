//! Subcommand implementations.

pub mod copy;
pub mod create;
pub mod delete;
pub mod install;
pub mod lock;
pub mod manifest;
pub mod scan;

use std::path::Path;

use anyhow::{Context as _, Result};

use void_core::{config, ConfigFile, Registry, SanctumConfig};

/// Resolved configuration shared by every subcommand.
#[derive(Debug)]
pub struct Context {
    pub file: ConfigFile,
    pub sanctum: SanctumConfig,
}

impl Context {
    /// Load `~/.void/config.yaml` and resolve the sanctum layout, letting
    /// `root_override` win over the file.
    pub fn resolve(root_override: Option<&Path>) -> Result<Self> {
        let home = config::home()?;
        let file = ConfigFile::load_at(&home).context("failed to load ~/.void/config.yaml")?;
        let sanctum = file.sanctum_at(&home, root_override);
        Ok(Self { file, sanctum })
    }

    pub fn registry(&self) -> Registry {
        Registry::from_config_file(self.sanctum.clone(), &self.file)
    }
}
