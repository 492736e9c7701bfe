//! Sanctum health scan: per-project findings plus drift since the last lock.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::RegistryError;
use crate::fetch::Fetcher;
use crate::provision::EnvProvisioner;
use crate::registry::Registry;
use crate::types::{Listing, ProjectName};

/// Something wrong with a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Finding {
    /// No `.git` entry: the directory was not produced by a clone.
    MissingVcs,
    /// The project directory has no entries at all.
    Empty,
    /// A symlink whose target does not exist.
    BrokenLink,
    /// The entry exists but cannot be listed as a directory.
    Unreadable,
}

impl Finding {
    pub fn describe(&self) -> &'static str {
        match self {
            Finding::MissingVcs => "not a git checkout (no .git)",
            Finding::Empty => "project directory is empty",
            Finding::BrokenLink => "symlink points at a missing target",
            Finding::Unreadable => "not a readable directory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectReport {
    pub name: ProjectName,
    pub findings: Vec<Finding>,
}

/// Difference between the current project set and the last lock snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Drift {
    pub added: Vec<ProjectName>,
    pub removed: Vec<ProjectName>,
}

impl Drift {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub projects: Vec<ProjectReport>,
    /// `None` when no lock snapshot has been written yet.
    pub drift: Option<Drift>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.projects.iter().all(|p| p.findings.is_empty())
            && self.drift.as_ref().map_or(true, Drift::is_empty)
    }
}

impl<F: Fetcher, E: EnvProvisioner> Registry<F, E> {
    /// Inspect every project and compare the set against `lock.json`.
    pub fn scan(&self) -> Result<ScanReport, RegistryError> {
        let names = match self.list()? {
            Listing::NoSanctum => {
                return Err(RegistryError::NoSanctum {
                    path: self.config().projects_dir.clone(),
                })
            }
            Listing::Projects(names) => names,
        };

        let mut projects = Vec::with_capacity(names.len());
        for name in &names {
            let path = self.config().project_path(name.as_str());
            projects.push(ProjectReport {
                name: name.clone(),
                findings: inspect(&path),
            });
        }

        let drift = self.read_lock()?.map(|snapshot| Drift {
            added: names
                .iter()
                .filter(|n| !snapshot.projects.contains(n))
                .cloned()
                .collect(),
            removed: snapshot
                .projects
                .iter()
                .filter(|n| !names.contains(n))
                .cloned()
                .collect(),
        });

        Ok(ScanReport { projects, drift })
    }
}

/// Findings for one project entry. Never fails: an entry that cannot be
/// inspected is itself a finding.
fn inspect(path: &Path) -> Vec<Finding> {
    let is_symlink = std::fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if is_symlink && std::fs::metadata(path).is_err() {
        return vec![Finding::BrokenLink];
    }

    let mut entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot read {}: {}", path.display(), e);
            return vec![Finding::Unreadable];
        }
    };
    if entries.next().is_none() {
        vec![Finding::Empty]
    } else if std::fs::symlink_metadata(path.join(".git")).is_err() {
        vec![Finding::MissingVcs]
    } else {
        vec![]
    }
}
