//! # Link Opener Module
//!
//! Hands a song's url to the operating system's default handler through the
//! `open` crate. The url is passed through unmodified; blank urls are skipped.

use crate::error::{Error, Result};
use log::{debug, info};

/// Something that can open a link for the user.
pub trait LinkOpener {
    /// Opens `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LinkOpen`] if the link could not be handed off.
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links with the host's default handler.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            debug!("Skipping blank url");
            return Ok(());
        }

        open::that(url).map_err(|e| Error::LinkOpen {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        info!("Opened {url}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_url_is_a_no_op() {
        assert!(SystemOpener.open("").is_ok());
        assert!(SystemOpener.open("   ").is_ok());
    }
}
