//! void: manage a sanctum of cloned projects sharing one environment.
//!
//! # Usage
//!
//! ```text
//! void create sanc
//! void install <source-url>
//! void manifest [--json]
//! void delete <name>
//! void copy <name> <destination>
//! void lock
//! void scan errors
//! void help
//! ```
//!
//! Every command accepts `--sanctum <PATH>` (or `VOID_SANCTUM`) to point at a
//! sanctum other than the configured one.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    copy::CopyArgs, create::CreateCommand, delete::DeleteArgs, install::InstallArgs,
    manifest::ManifestArgs, scan::ScanCommand, Context,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "void",
    version,
    about = "Manage a sanctum of cloned projects sharing one virtual environment",
    long_about = None,
    arg_required_else_help = true,
)]
struct Cli {
    /// Sanctum root directory (default: ~/sanctum, or `sanctum_root` in ~/.void/config.yaml).
    #[arg(long, global = true, env = "VOID_SANCTUM", value_name = "PATH")]
    sanctum: Option<PathBuf>,

    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create sanctum structures.
    Create {
        #[command(subcommand)]
        command: CreateCommand,
    },

    /// Clone a repository into the sanctum.
    Install(InstallArgs),

    /// List every project in the sanctum.
    Manifest(ManifestArgs),

    /// Remove a project from the sanctum.
    Delete(DeleteArgs),

    /// Copy a project to a new destination outside the sanctum.
    Copy(CopyArgs),

    /// Snapshot the current project set to lock.json.
    Lock,

    /// Inspect the sanctum.
    Scan {
        #[command(subcommand)]
        command: ScanCommand,
    },
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::resolve(cli.sanctum.as_deref())?;
    match cli.command {
        Commands::Create { command } => commands::create::run(&ctx, command),
        Commands::Install(args) => args.run(&ctx),
        Commands::Manifest(args) => args.run(&ctx),
        Commands::Delete(args) => args.run(&ctx),
        Commands::Copy(args) => args.run(&ctx),
        Commands::Lock => commands::lock::run(&ctx),
        Commands::Scan { command } => commands::scan::run(&ctx, command),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
