//! State directory layout.

use std::path::{Path, PathBuf};

/// Directory under the working directory holding orchestrator files.
pub const OMC_DIR: &str = ".omc";

/// Subdirectory of [`OMC_DIR`] holding runtime state.
pub const STATE_DIR: &str = "state";

/// Path of the state root for a working directory (`<cwd>/.omc/state`).
///
/// Pure path composition: the directory is neither created nor checked.
pub fn resolve_state_root(cwd: impl AsRef<Path>) -> PathBuf {
    cwd.as_ref().join(OMC_DIR).join(STATE_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_state_root() {
        assert_eq!(
            resolve_state_root("/home/x"),
            Path::new("/home/x").join(".omc").join("state")
        );
    }

    #[test]
    fn test_resolve_state_root_relative() {
        let root = resolve_state_root("repo");
        assert!(root.ends_with(".omc/state"));
        assert!(root.starts_with("repo"));
    }
}
