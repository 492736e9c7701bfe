//! `void install <source-url>`

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Repository to clone (https, ssh, scp-style or local path).
    pub source: String,
}

impl InstallArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let name = ctx
            .registry()
            .install(&self.source)
            .with_context(|| format!("install of '{}' failed", self.source))?;

        output::success(format!("Project '{name}' installed into sanctum."));
        Ok(())
    }
}
