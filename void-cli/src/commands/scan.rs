//! `void scan errors`

use anyhow::{Context as _, Result};
use clap::Subcommand;

use void_core::ScanReport;

use super::Context;
use crate::output;

#[derive(Subcommand, Debug)]
pub enum ScanCommand {
    /// Check every project and compare the set against the last lock.
    Errors,
}

pub fn run(ctx: &Context, cmd: ScanCommand) -> Result<()> {
    match cmd {
        ScanCommand::Errors => errors(ctx),
    }
}

fn errors(ctx: &Context) -> Result<()> {
    output::header("Scanning all projects...");
    let report = ctx.registry().scan().context("scan failed")?;
    print_report(&report);
    Ok(())
}

fn print_report(report: &ScanReport) {
    for project in report.projects.iter().filter(|p| !p.findings.is_empty()) {
        for finding in &project.findings {
            output::warn(format!("{}: {}", project.name, finding.describe()));
        }
    }

    match &report.drift {
        None => output::header("No lock snapshot yet; run `void lock` to record one."),
        Some(drift) => {
            for name in &drift.added {
                output::warn(format!("{name}: installed since last lock"));
            }
            for name in &drift.removed {
                output::warn(format!("{name}: locked but no longer present"));
            }
        }
    }

    if report.is_clean() {
        output::success(format!(
            "Scan complete. {} project(s), no problems detected.",
            report.projects.len()
        ));
    } else {
        output::header("Scan complete.");
    }
}
