//! `void copy <name> <destination>`

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Project name as shown by `void manifest`.
    pub name: String,

    /// Path to copy the project to. Must not exist yet.
    pub destination: PathBuf,
}

impl CopyArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let dest = ctx
            .registry()
            .copy(&self.name, &self.destination)
            .with_context(|| {
                format!(
                    "failed to copy '{}' to {}",
                    self.name,
                    self.destination.display()
                )
            })?;

        output::success(format!("Project '{}' copied to {}.", self.name, dest.display()));
        Ok(())
    }
}
