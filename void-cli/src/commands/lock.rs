//! `void lock`

use anyhow::{Context as _, Result};

use super::Context;
use crate::output;

pub fn run(ctx: &Context) -> Result<()> {
    output::header("Locking the current state of the sanctum...");
    let snapshot = ctx.registry().lock().context("failed to lock sanctum")?;

    output::success(format!(
        "Sanctum state {}: {} project(s) written to {}.",
        snapshot.status,
        snapshot.projects.len(),
        ctx.sanctum.lock_path().display()
    ));
    Ok(())
}
