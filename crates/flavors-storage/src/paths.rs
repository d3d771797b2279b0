//! Storage path resolution

use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

/// Directory under the data home that holds the ledger
pub const DATA_DIR_NAME: &str = "cc-flavors";

/// Ledger database file name
pub const DB_FILE_NAME: &str = "events.sqlite";

/// Path resolver for the ledger database location
pub struct PathResolver;

impl PathResolver {
    /// Resolve the database path.
    ///
    /// Priority:
    /// 1. Explicit override (must be non-blank)
    /// 2. $XDG_DATA_HOME/cc-flavors/events.sqlite
    /// 3. ~/.local/share/cc-flavors/events.sqlite
    pub fn resolve_db_path(override_path: Option<&str>) -> StorageResult<PathBuf> {
        if let Some(path) = override_path {
            if path.trim().is_empty() {
                return Err(StorageError::path_resolution_error(
                    "database path override is empty",
                ));
            }
            return Ok(PathBuf::from(path));
        }

        let data_home = match std::env::var("XDG_DATA_HOME") {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::home_dir()
                .map(|home| home.join(".local").join("share"))
                .ok_or_else(|| {
                    StorageError::path_resolution_error("could not determine home directory")
                })?,
        };

        if data_home.to_string_lossy().trim().is_empty() {
            return Err(StorageError::env_var_error(
                "XDG_DATA_HOME",
                "resolved data directory is blank",
            ));
        }

        Ok(data_home.join(DATA_DIR_NAME).join(DB_FILE_NAME))
    }

    /// Create the database's parent directory if it does not exist.
    ///
    /// Idempotent; creating an existing directory is not an error.
    pub fn ensure_parent_dir(db_path: &Path) -> StorageResult<()> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| {
                    StorageError::directory_creation_failed(parent.to_path_buf(), source)
                })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn test_explicit_override_wins() {
        let path = PathResolver::resolve_db_path(Some("/tmp/custom/events.sqlite"))
            .expect("override should resolve");
        assert_eq!(path, PathBuf::from("/tmp/custom/events.sqlite"));
    }

    #[test]
    fn test_blank_override_is_rejected() {
        let result = PathResolver::resolve_db_path(Some("   "));
        assert!(matches!(
            result,
            Err(StorageError::PathResolutionError { .. })
        ));
    }

    #[test]
    #[serial]
    fn test_xdg_data_home_drives_default_path() {
        std::env::set_var("XDG_DATA_HOME", "/tmp/flavors-test-data");
        let path = PathResolver::resolve_db_path(None).expect("should resolve");
        assert_eq!(
            path,
            PathBuf::from("/tmp/flavors-test-data/cc-flavors/events.sqlite")
        );
        std::env::remove_var("XDG_DATA_HOME");
    }

    #[test]
    #[serial]
    fn test_blank_xdg_data_home_is_an_error() {
        std::env::set_var("XDG_DATA_HOME", "   ");
        let result = PathResolver::resolve_db_path(None);
        assert!(matches!(result, Err(StorageError::EnvVarError { .. })));
        std::env::remove_var("XDG_DATA_HOME");
    }

    #[test]
    #[serial]
    fn test_unset_xdg_data_home_falls_back_to_home() {
        std::env::remove_var("XDG_DATA_HOME");
        let path = PathResolver::resolve_db_path(None).expect("should resolve");
        let rendered = path.to_string_lossy();
        assert!(rendered.contains(".local"));
        assert!(rendered.ends_with("cc-flavors/events.sqlite"));
    }

    #[test]
    fn test_ensure_parent_dir_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let db_path = dir.path().join("nested").join("deeper").join("events.sqlite");
        PathResolver::ensure_parent_dir(&db_path).expect("first create");
        PathResolver::ensure_parent_dir(&db_path).expect("second create");
        assert!(db_path.parent().unwrap().exists());
    }
}
