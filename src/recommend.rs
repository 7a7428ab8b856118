//! # Recommendation Module
//!
//! Turns a mood into a short playlist drawn from the [`Catalog`], and free
//! text into a one-off search "song".
//!
//! ## Playlist Construction
//!
//! 1. Copy the distinct songs listed under the requested mood into a pool.
//! 2. If the pool is short of the playlist length, backfill it from every mood
//!    in catalog order, skipping songs already in the pool.
//! 3. Shuffle the pool.
//! 4. Keep the first `playlist_len` songs.
//!
//! An unknown mood starts from an empty pool and is filled entirely by
//! backfill.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::song::Song;
use log::{debug, trace};
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

/// Web search endpoint ad hoc queries are appended to.
pub const SEARCH_URL_PREFIX: &str = "https://www.youtube.com/results?search_query=";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Upper bound on the number of songs in a playlist.
    pub playlist_len: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self { playlist_len: 5 }
    }
}

/// Builds playlists from a borrowed catalog.
#[derive(Debug, Clone)]
pub struct Recommender<'a> {
    catalog: &'a Catalog,
    config: RecommendConfig,
}

impl<'a> Recommender<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, RecommendConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: &'a Catalog, config: RecommendConfig) -> Self {
        Self { catalog, config }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Recommends up to `playlist_len` distinct songs for `mood`.
    ///
    /// Order is random and differs between calls.
    #[must_use]
    pub fn recommend(&self, mood: &str) -> Vec<Song> {
        self.recommend_with_rng(mood, &mut thread_rng())
    }

    /// Same as [`Recommender::recommend`] with a caller-supplied random source.
    pub fn recommend_with_rng<R: Rng + ?Sized>(&self, mood: &str, rng: &mut R) -> Vec<Song> {
        let mut pool = self.pool_for(mood);
        pool.shuffle(rng);
        pool.truncate(self.config.playlist_len);
        debug!("Recommended {} songs for \"{mood}\"", pool.len());
        pool
    }

    /// The unshuffled candidate pool for `mood`, backfilled from the rest of
    /// the catalog when the mood alone is too small.
    #[must_use]
    pub fn pool_for(&self, mood: &str) -> Vec<Song> {
        let target = self.config.playlist_len;
        let mut pool: Vec<Song> = Vec::new();
        for song in self.catalog.songs_for(mood) {
            if !pool.contains(song) {
                pool.push(song.clone());
            }
        }

        if pool.len() < target {
            trace!("Pool for \"{mood}\" has {} songs, backfilling", pool.len());
            let candidates = self
                .catalog
                .entries()
                .iter()
                .flat_map(|entry| entry.songs.iter());
            for song in candidates {
                if pool.len() >= target {
                    break;
                }
                if !pool.contains(song) {
                    pool.push(song.clone());
                }
            }
        }

        pool
    }
}

/// Wraps free text in a synthetic song pointing at a web search for it.
///
/// The query is trimmed; the title is the trimmed text and the url embeds its
/// percent-encoded form.
///
/// # Errors
///
/// Returns [`Error::EmptyQuery`] for an empty or whitespace-only query.
pub fn ad_hoc_search(query: &str) -> Result<Song> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::EmptyQuery);
    }
    let url = format!("{SEARCH_URL_PREFIX}{}", urlencoding::encode(query));
    Ok(Song::new(query, url))
}
