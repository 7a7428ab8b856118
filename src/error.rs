//! # Error Module
//!
//! Typed failures for the recommendation core. Informational outcomes of the
//! favorites store (already present, not found) are not errors; see
//! [`crate::favorites::AddOutcome`] and [`crate::favorites::RemoveOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Ad hoc search with a blank query. Informational, not fatal.
    #[error("empty search query")]
    EmptyQuery,

    /// Reading or writing the favorites file failed.
    #[error("favorites file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS refused to open a link.
    #[error("could not open link {url}: {reason}")]
    LinkOpen { url: String, reason: String },

    /// A catalog violated its invariants.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// A catalog file could not be read or parsed.
    #[error("failed to load catalog from {}: {source}", .path.display())]
    CatalogFile {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not determine the home directory")]
    HomeDirUnavailable,
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for outcomes the shell reports as plain information.
    #[must_use]
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptyQuery)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_carries_underlying_message() {
        let err = Error::io(
            "/tmp/favs.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/favs.txt"));
        assert!(message.contains("permission denied"));
        assert!(!err.is_informational());
    }

    #[test]
    fn test_empty_query_is_informational() {
        assert!(Error::EmptyQuery.is_informational());
    }
}
