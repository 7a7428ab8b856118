//! # Application Module
//!
//! The entry point a front end drives: one [`MoodMusic`] value owns the catalog,
//! the favorites store and the link opener, and exposes each user action as a
//! direct synchronous call.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::favorites::{AddOutcome, FavoritesStore, RemoveOutcome};
use crate::opener::{LinkOpener, SystemOpener};
use crate::recommend::{self, Recommender};
use crate::song::Song;
use log::info;

/// Songs recommended for one mood, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub mood: String,
    pub songs: Vec<Song>,
}

impl Playlist {
    /// The 1-based `position`-th song.
    #[must_use]
    pub fn pick(&self, position: usize) -> Option<&Song> {
        position.checked_sub(1).and_then(|index| self.songs.get(index))
    }
}

pub struct MoodMusic<O: LinkOpener = SystemOpener> {
    catalog: Catalog,
    favorites: FavoritesStore,
    opener: O,
}

impl MoodMusic<SystemOpener> {
    #[must_use]
    pub fn new(catalog: Catalog, favorites: FavoritesStore) -> Self {
        Self::with_opener(catalog, favorites, SystemOpener)
    }
}

impl<O: LinkOpener> MoodMusic<O> {
    pub fn with_opener(catalog: Catalog, favorites: FavoritesStore, opener: O) -> Self {
        Self {
            catalog,
            favorites,
            opener,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn favorites_store(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// Mood selected when the user has not picked one.
    pub fn default_mood(&self) -> Option<&str> {
        self.catalog.first_mood()
    }

    pub fn recommend(&self, mood: &str) -> Playlist {
        let songs = Recommender::new(&self.catalog).recommend(mood);
        info!("Recommended {} songs for \"{mood}\"", songs.len());
        Playlist {
            mood: mood.to_string(),
            songs,
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::EmptyQuery`] for a blank query.
    pub fn search(&self, query: &str) -> Result<Song> {
        recommend::ad_hoc_search(query)
    }

    /// Opens the song's link; songs without a url are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LinkOpen`] if the OS handler fails.
    pub fn open(&self, song: &Song) -> Result<()> {
        if !song.has_url() {
            return Ok(());
        }
        self.opener.open(&song.url)
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the favorites file cannot be updated.
    pub fn add_favorite(&self, song: &Song) -> Result<AddOutcome> {
        self.favorites.add(song)
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the favorites file cannot be read.
    pub fn favorites(&self) -> Result<Vec<Song>> {
        self.favorites.list()
    }

    /// The 1-based `position`-th favorite, if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the favorites file cannot be read.
    pub fn favorite_at(&self, position: usize) -> Result<Option<Song>> {
        let favorites = self.favorites()?;
        Ok(position
            .checked_sub(1)
            .and_then(|index| favorites.into_iter().nth(index)))
    }

    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the favorites file cannot be rewritten.
    pub fn remove_favorite(&self, song: &Song) -> Result<RemoveOutcome> {
        self.favorites.remove(song)
    }
}
