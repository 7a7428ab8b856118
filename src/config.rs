//! # Configuration Module
//!
//! Locates the favorites file and decides which catalog the process runs with.
//!
//! ## Data Storage
//!
//! Favorites live in a single dotfile in the user's home directory:
//! - Linux: `/home/<user>/.moodmusic_favs.txt`
//! - macOS: `/Users/<user>/.moodmusic_favs.txt`
//! - Windows: `C:\Users\<user>\.moodmusic_favs.txt`
//!
//! The location is fixed; it is not a runtime option.
//!
//! ## Catalog
//!
//! The built-in catalog is used unless a JSON catalog file is supplied at
//! startup (see [`crate::catalog`]).

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::favorites::FavoritesStore;
use log::debug;
use std::path::PathBuf;

/// File name of the favorites store inside the home directory.
pub const FAVORITES_FILE_NAME: &str = ".moodmusic_favs.txt";

/// Returns the path of the favorites file.
///
/// # Errors
///
/// Returns [`Error::HomeDirUnavailable`] if the home directory cannot be
/// determined.
///
/// # Examples
///
/// ```no_run
/// use moodmusic::config::favorites_path;
///
/// let path = favorites_path()?;
/// println!("Favorites location: {}", path.display());
/// # Ok::<(), moodmusic::Error>(())
/// ```
pub fn favorites_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::HomeDirUnavailable)?;
    Ok(home.join(FAVORITES_FILE_NAME))
}

/// Configuration for one run of the application.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Path to the favorites file
    pub favorites_path: PathBuf,
    /// Optional JSON catalog replacing the built-in one
    pub catalog_path: Option<PathBuf>,
}

impl RuntimeConfig {
    /// Configuration with the standard favorites location.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HomeDirUnavailable`] if there is no home directory.
    pub fn new(catalog_path: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            favorites_path: favorites_path()?,
            catalog_path,
        })
    }

    /// Create configuration with explicit paths
    pub fn with_paths(favorites_path: PathBuf, catalog_path: Option<PathBuf>) -> Self {
        Self {
            favorites_path,
            catalog_path,
        }
    }

    /// Builds the catalog this run uses.
    ///
    /// # Errors
    ///
    /// Returns an error if a catalog file was configured and cannot be loaded.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                debug!("Loading catalog from {}", path.display());
                Catalog::from_json_file(path)
            }
            None => Ok(Catalog::builtin()),
        }
    }

    #[must_use]
    pub fn favorites_store(&self) -> FavoritesStore {
        FavoritesStore::new(self.favorites_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_favorites_path_in_home() {
        let path = favorites_path().expect("home directory available in tests");
        assert_eq!(path.file_name().unwrap(), FAVORITES_FILE_NAME);
        assert_eq!(path.parent(), dirs::home_dir().as_deref());
    }

    #[test]
    fn test_favorites_path_consistent_results() {
        let path1 = favorites_path().expect("First call should succeed");
        let path2 = favorites_path().expect("Second call should succeed");
        assert_eq!(path1, path2);
    }

    #[test]
    fn test_default_catalog_is_builtin() -> anyhow::Result<()> {
        let config = RuntimeConfig::with_paths(PathBuf::from("favs.txt"), None);
        assert_eq!(config.load_catalog()?, Catalog::builtin());
        assert_eq!(config.favorites_store().path(), std::path::Path::new("favs.txt"));
        Ok(())
    }

    #[test]
    fn test_catalog_file_overrides_builtin() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let catalog_path = dir.path().join("catalog.json");
        fs::write(
            &catalog_path,
            r#"[{"mood": "Focus", "songs": [{"title": "Clair de Lune", "url": ""}]}]"#,
        )?;

        let config = RuntimeConfig::with_paths(dir.path().join("favs.txt"), Some(catalog_path));
        let catalog = config.load_catalog()?;
        assert_eq!(catalog.moods().collect::<Vec<_>>(), ["Focus"]);
        Ok(())
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let config = RuntimeConfig::with_paths(
            PathBuf::from("favs.txt"),
            Some(PathBuf::from("/nonexistent/catalog.json")),
        );
        assert!(matches!(config.load_catalog(), Err(Error::CatalogFile { .. })));
    }
}
