//! `void manifest [--json]`

use anyhow::{Context as _, Result};
use clap::Args;

use void_core::{Listing, RegistryError};

use super::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ManifestArgs {
    /// Emit the project names as a JSON array.
    #[arg(long)]
    pub json: bool,
}

impl ManifestArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        let listing = ctx.registry().list().context("failed to read projects")?;
        let names = match listing {
            Listing::NoSanctum => {
                return Err(RegistryError::NoSanctum {
                    path: ctx.sanctum.projects_dir.clone(),
                }
                .into())
            }
            Listing::Projects(names) => names,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&names)?);
            return Ok(());
        }

        output::header("Manifesting current sanctum state:");
        if names.is_empty() {
            output::warn("No projects found. The void is empty.");
        }
        for name in &names {
            output::item(name);
        }
        Ok(())
    }
}
