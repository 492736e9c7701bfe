//! Terminal output helpers. Every status line carries the `[VOID]: ` prefix.

use colored::Colorize;

const PREFIX: &str = "[VOID]:";

pub fn header(message: impl AsRef<str>) {
    println!("{}", format!("{PREFIX} {}", message.as_ref()).cyan());
}

pub fn success(message: impl AsRef<str>) {
    println!("{}", format!("{PREFIX} {}", message.as_ref()).green());
}

pub fn warn(message: impl AsRef<str>) {
    println!("{}", format!("{PREFIX} {}", message.as_ref()).yellow());
}

pub fn item(text: impl AsRef<str>) {
    println!("  - {}", text.as_ref());
}

/// Print an error and its cause chain on stderr.
pub fn error(err: &anyhow::Error) {
    eprintln!("{}", format!("{PREFIX} {err:#}").red());
}
