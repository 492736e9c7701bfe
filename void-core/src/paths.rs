//! Default on-disk layout, rooted at the user's home directory.
//!
//! ```text
//! ~/.void/config.yaml     (optional configuration)
//! ~/sanctum/
//!   .qvenv/               (shared environment, created once)
//!   projects/<name>/      (one directory per installed project)
//!   lock.json             (last lock snapshot)
//! ```

use std::path::{Path, PathBuf};

pub const SANCTUM_DIR: &str = "sanctum";
pub const PROJECTS_DIR: &str = "projects";
pub const ENV_DIR: &str = ".qvenv";
pub const LOCK_FILE: &str = "lock.json";
pub const CONFIG_DIR: &str = ".void";
pub const CONFIG_FILE: &str = "config.yaml";

pub fn sanctum_root(home: &Path) -> PathBuf {
    home.join(SANCTUM_DIR)
}

pub fn projects_dir(root: &Path) -> PathBuf {
    root.join(PROJECTS_DIR)
}

pub fn env_dir(root: &Path) -> PathBuf {
    root.join(ENV_DIR)
}

pub fn lock_path(root: &Path) -> PathBuf {
    root.join(LOCK_FILE)
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Dot-prefixed sibling of `target` used to stage a clone or copy before the
/// final rename. Lives in the same directory so the rename never crosses
/// filesystems.
pub fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target.with_file_name(format!(".{name}.void-staging"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let home = Path::new("/home/u");
        let root = sanctum_root(home);
        assert_eq!(projects_dir(&root), Path::new("/home/u/sanctum/projects"));
        assert_eq!(env_dir(&root), Path::new("/home/u/sanctum/.qvenv"));
        assert_eq!(lock_path(&root), Path::new("/home/u/sanctum/lock.json"));
        assert_eq!(config_path(home), Path::new("/home/u/.void/config.yaml"));
    }

    #[test]
    fn staging_is_hidden_sibling() {
        let staged = staging_path(Path::new("/tmp/out/foo"));
        assert_eq!(staged, Path::new("/tmp/out/.foo.void-staging"));
    }
}
