//! void core library: sanctum layout, project registry, lock snapshots.
//!
//! Public API surface:
//! - [`types`]: project names, lock snapshot, operation outcomes
//! - [`config`]: [`SanctumConfig`] and the optional `~/.void/config.yaml`
//! - [`registry`]: [`Registry`]: ensure_sanctum / install / list / delete / copy / lock
//! - [`scan`]: project health and drift against the last lock
//! - [`fetch`] / [`provision`]: the external collaborators the registry drives
//! - [`error`]: [`RegistryError`]

pub mod config;
pub mod error;
pub mod fetch;
pub mod paths;
pub mod provision;
pub mod registry;
pub mod scan;
pub mod tree;
pub mod types;

pub use config::{ConfigFile, SanctumConfig};
pub use error::RegistryError;
pub use fetch::{FetchError, Fetcher, GitFetcher};
pub use provision::{EnvProvisioner, ProvisionError, VenvProvisioner};
pub use registry::Registry;
pub use scan::{Drift, Finding, ProjectReport, ScanReport};
pub use types::{Listing, LockSnapshot, LockStatus, ProjectName, SanctumStatus};
