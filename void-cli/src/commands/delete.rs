//! `void delete <name>`

use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Project name as shown by `void manifest`.
    pub name: String,
}

impl DeleteArgs {
    pub fn run(self, ctx: &Context) -> Result<()> {
        ctx.registry()
            .delete(&self.name)
            .with_context(|| format!("failed to delete '{}'", self.name))?;

        output::success(format!("Project '{}' has been dissolved from the sanctum.", self.name));
        Ok(())
    }
}
