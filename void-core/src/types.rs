//! Domain types for the sanctum registry.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A validated project name: a single directory entry under the projects dir.
///
/// Never empty, never `.`/`..`, never dot-prefixed (reserved for staging
/// directories), never containing a path separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `name` as a project name.
    pub fn parse(name: &str) -> Result<Self, RegistryError> {
        if Self::is_valid(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(RegistryError::InvalidName {
                name: name.to_owned(),
            })
        }
    }

    /// Derive a project name from a repository source.
    ///
    /// Trailing slashes are trimmed, the last `/`- or `:`-separated segment
    /// is taken, and one trailing `.git` is stripped.
    pub fn from_source(source: &str) -> Result<Self, RegistryError> {
        let trimmed = source.trim().trim_end_matches('/');
        let segment = trimmed.rsplit(['/', ':']).next().unwrap_or_default();
        let name = segment.strip_suffix(".git").unwrap_or(segment);
        if Self::is_valid(name) {
            Ok(Self(name.to_owned()))
        } else {
            Err(RegistryError::InvalidSource {
                source_url: source.to_owned(),
            })
        }
    }

    pub fn is_valid(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(['/', '\\', '\0'])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Operation outcomes
// ---------------------------------------------------------------------------

/// Outcome of [`Registry::ensure_sanctum`](crate::Registry::ensure_sanctum).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanctumStatus {
    /// The shared environment was created by this call.
    Created,
    /// The shared environment already existed; nothing was provisioned.
    AlreadyInitialized,
}

/// Result of listing the projects directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The projects directory has never been created.
    NoSanctum,
    /// Project names, sorted ascending. May be empty.
    Projects(Vec<ProjectName>),
}

impl Listing {
    /// Project names, treating a missing sanctum as empty.
    pub fn names(&self) -> &[ProjectName] {
        match self {
            Listing::NoSanctum => &[],
            Listing::Projects(names) => names,
        }
    }
}

// ---------------------------------------------------------------------------
// Lock snapshot
// ---------------------------------------------------------------------------

/// Status recorded in a lock snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LockStatus {
    #[default]
    Locked,
}

impl fmt::Display for LockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockStatus::Locked => write!(f, "locked"),
        }
    }
}

/// On-disk payload of `<root>/lock.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockSnapshot {
    pub status: LockStatus,
    pub projects: Vec<ProjectName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_at: Option<DateTime<Utc>>,
}

impl LockSnapshot {
    pub fn new(projects: Vec<ProjectName>) -> Self {
        Self {
            status: LockStatus::Locked,
            projects,
            locked_at: Some(Utc::now()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
