//! # Catalog Module
//!
//! The fixed mood → songs mapping recommendations are drawn from.
//!
//! A [`Catalog`] is built once at startup and handed by reference to whatever
//! needs it; nothing mutates it afterwards. The built-in data ships with the
//! binary, and a JSON file can replace it:
//!
//! ```json
//! [
//!   { "mood": "Happy", "songs": [ { "title": "Golden", "url": "https://..." } ] }
//! ]
//! ```
//!
//! Mood order is significant: it is the order moods are listed in and the
//! order backfill scans them in.

use crate::error::{Error, Result};
use crate::recommend::SEARCH_URL_PREFIX;
use crate::song::Song;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One mood and its songs, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    pub songs: Vec<Song>,
}

/// Ordered, validated mapping from mood to songs.
///
/// Every mood is non-blank and unique, and maps to at least one song with a
/// non-empty title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MoodEntry>,
}

impl Catalog {
    /// Builds a catalog from `(mood, songs)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCatalog`] if a mood is blank or repeated, has no
    /// songs, or contains a song with an empty title.
    pub fn from_moods<I, S>(moods: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<Song>)>,
        S: Into<String>,
    {
        let entries = moods
            .into_iter()
            .map(|(mood, songs)| MoodEntry {
                mood: mood.into(),
                songs,
            })
            .collect();
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<MoodEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.mood.trim().is_empty() {
                return Err(Error::InvalidCatalog("mood names must not be blank".into()));
            }
            if !seen.insert(entry.mood.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "mood \"{}\" appears more than once",
                    entry.mood
                )));
            }
            if entry.songs.is_empty() {
                return Err(Error::InvalidCatalog(format!(
                    "mood \"{}\" has no songs",
                    entry.mood
                )));
            }
            if entry.songs.iter().any(|song| song.title.is_empty()) {
                return Err(Error::InvalidCatalog(format!(
                    "mood \"{}\" contains a song without a title",
                    entry.mood
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CatalogFile`] if the file cannot be read or parsed,
    /// and [`Error::InvalidCatalog`] if its contents break the invariants.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::CatalogFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        let entries: Vec<MoodEntry> = serde_json::from_str(&raw).map_err(|e| Error::CatalogFile {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        debug!("Loaded {} moods from {}", entries.len(), path.display());
        Self::from_entries(entries)
    }

    /// The catalog that ships with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let song = |title: &str, query: &str| Song::new(title, format!("{SEARCH_URL_PREFIX}{query}"));

        let entries = vec![
            MoodEntry {
                mood: "Happy".into(),
                songs: vec![
                    song("Golden – HUNTR/X", "HUNTRX+Golden"),
                    song("Ordinary – Alex Warren", "Ordinary+Alex+Warren"),
                    song("Flowers – Miley Cyrus (2023)", "Flowers+Miley+Cyrus"),
                ],
            },
            MoodEntry {
                mood: "Energetic".into(),
                songs: vec![
                    song("Just Keep Watching – Tate McRae", "Just+Keep+Watching+Tate+McRae"),
                    song("Born Again – Lisa ft. Doja Cat & Raye", "Born+Again+Lisa+Doja+Cat+Raye"),
                    song("Levitating – Dua Lipa (2020)", "Levitating+Dua+Lipa"),
                ],
            },
            MoodEntry {
                mood: "Chill".into(),
                songs: vec![
                    song("Weightless – Marconi Union", "Weightless+Marconi+Union"),
                    song("Blinding Lights – The Weeknd (2020)", "Blinding+Lights+The+Weeknd"),
                    song("As It Was – Harry Styles (2022)", "As+It+Was+Harry+Styles"),
                ],
            },
            MoodEntry {
                mood: "Romantic".into(),
                songs: vec![
                    song("Manchild – Sabrina Carpenter", "Manchild+Sabrina+Carpenter"),
                    song(
                        "What I Want – Morgan Wallen ft. Tate McRae",
                        "What+I+Want+Morgan+Wallen+Tate+McRae",
                    ),
                    song("Save Your Tears – The Weeknd (2021)", "Save+Your+Tears+The+Weeknd"),
                ],
            },
            MoodEntry {
                mood: "Hit Singles".into(),
                songs: vec![
                    song("Vampire – Olivia Rodrigo (2023)", "Vampire+Olivia+Rodrigo"),
                    song("Espresso – Sabrina Carpenter (2024)", "Espresso+Sabrina+Carpenter"),
                    song("Ordinary – Alex Warren", "Ordinary+Alex+Warren"),
                ],
            },
        ];

        Self { entries }
    }

    /// Mood names in catalog order.
    pub fn moods(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.mood.as_str())
    }

    /// First mood in the catalog, the default selection.
    #[must_use]
    pub fn first_mood(&self) -> Option<&str> {
        self.entries.first().map(|entry| entry.mood.as_str())
    }

    #[must_use]
    pub fn contains_mood(&self, mood: &str) -> bool {
        self.entries.iter().any(|entry| entry.mood == mood)
    }

    /// Songs for `mood`, or an empty slice for an unknown mood.
    #[must_use]
    pub fn songs_for(&self, mood: &str) -> &[Song] {
        self.entries
            .iter()
            .find(|entry| entry.mood == mood)
            .map(|entry| entry.songs.as_slice())
            .unwrap_or_default()
    }

    /// All moods with their songs, in catalog order.
    #[must_use]
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Number of distinct songs across every mood.
    #[must_use]
    pub fn unique_song_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|entry| entry.songs.iter())
            .collect::<HashSet<_>>()
            .len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
