//! `void create sanc`

use anyhow::{Context as _, Result};
use clap::Subcommand;

use void_core::SanctumStatus;

use super::Context;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum CreateCommand {
    /// Create the sanctum and its shared virtual environment (qvenv).
    Sanc,
}

pub fn run(ctx: &Context, cmd: CreateCommand) -> Result<()> {
    match cmd {
        CreateCommand::Sanc => sanc(ctx),
    }
}

fn sanc(ctx: &Context) -> Result<()> {
    let status = ctx
        .registry()
        .ensure_sanctum()
        .with_context(|| format!("failed to create sanctum at {}", ctx.sanctum.root.display()))?;

    match status {
        SanctumStatus::Created => output::success(format!(
            "Sanctum created at {} and qvenv initialized.",
            ctx.sanctum.root.display()
        )),
        SanctumStatus::AlreadyInitialized => {
            output::header("Sanctum already exists. qvenv is active.")
        }
    }
    Ok(())
}
