//! # Favorites Module
//!
//! A tiny line-oriented database of favorite songs backed by one text file.
//!
//! Each line is a [`Song`] encoded as `title|url` (see [`Song::encode_line`]).
//! Lines are unique by exact string match. Adding appends a single line and
//! creates the file on first use; removing rewrites the whole file.
//!
//! ## Durability
//!
//! Rewrites go to a temporary file in the same directory which is then renamed
//! over the favorites file, so a failed rewrite leaves the previous contents in
//! place rather than a truncated file.

use crate::error::{Error, Result};
use crate::song::Song;
use log::{debug, info};
use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Result of [`FavoritesStore::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Result of [`FavoritesStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Favorites persisted at a fixed path.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, `None` if the file does not exist yet.
    fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }

    /// Distinct non-blank lines in file order.
    ///
    /// A missing file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read.
    pub fn load_all(&self) -> Result<Vec<String>> {
        Ok(self.read_raw()?.map(|raw| distinct_lines(&raw)).unwrap_or_default())
    }

    /// Every favorite, decoded, in file order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read.
    pub fn list(&self) -> Result<Vec<Song>> {
        Ok(self
            .load_all()?
            .iter()
            .map(|line| Song::decode_line(line))
            .collect())
    }

    /// Whether the encoded form of `song` is already stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read.
    pub fn contains(&self, song: &Song) -> Result<bool> {
        let line = song.encode_line();
        Ok(self.load_all()?.contains(&line))
    }

    /// Appends `song` unless an identical line is already stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, created or appended to.
    pub fn add(&self, song: &Song) -> Result<AddOutcome> {
        let line = song.encode_line();
        let raw = self.read_raw()?;

        if raw.as_deref().is_some_and(|raw| distinct_lines(raw).contains(&line)) {
            debug!("Favorite already stored: {line}");
            return Ok(AddOutcome::AlreadyExists);
        }

        // A hand-edited file may lack its final newline.
        let needs_break = raw.as_deref().is_some_and(|raw| !raw.is_empty() && !raw.ends_with('\n'));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        let mut record = String::with_capacity(line.len() + 2);
        if needs_break {
            record.push('\n');
        }
        record.push_str(&line);
        record.push('\n');
        file.write_all(record.as_bytes())
            .map_err(|e| Error::io(&self.path, e))?;

        info!("Added favorite \"{}\" to {}", song.title, self.path.display());
        Ok(AddOutcome::Added)
    }

    /// Removes every favorite equal to `song` and rewrites the file with the
    /// rest, in order. Nothing is written when no favorite matches.
    ///
    /// Hand-edited files can hold several lines that decode to the same song
    /// (`A` and `A|`); all of them go.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read or rewritten. On a
    /// failed rewrite the previous file is left untouched.
    pub fn remove(&self, song: &Song) -> Result<RemoveOutcome> {
        let mut songs = self.list()?;
        let before = songs.len();
        songs.retain(|stored| stored != song);

        if songs.len() == before {
            debug!("No favorite matches \"{}\"", song.title);
            return Ok(RemoveOutcome::NotFound);
        }

        self.rewrite(&songs)?;
        info!("Removed favorite \"{}\", {} left", song.title, songs.len());
        Ok(RemoveOutcome::Removed)
    }

    /// Atomically replaces the file so it holds exactly `songs`.
    fn rewrite(&self, songs: &[Song]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.rewrite_via(dir, songs)
    }

    /// Writes `songs` to a temporary file in `tmp_dir`, then renames it over
    /// the favorites file. The existing file keeps its permissions.
    fn rewrite_via(&self, tmp_dir: &Path, songs: &[Song]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(tmp_dir).map_err(|e| Error::io(&self.path, e))?;
        for song in songs {
            writeln!(tmp, "{}", song.encode_line()).map_err(|e| Error::io(&self.path, e))?;
        }

        match fs::metadata(&self.path) {
            Ok(meta) => tmp
                .as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| Error::io(&self.path, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(Error::io(&self.path, e)),
        }

        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::io(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::io(&self.path, e.error))?;

        debug!("Rewrote {} with {} entries", self.path.display(), songs.len());
        Ok(())
    }
}

/// Non-blank lines with later duplicates dropped.
fn distinct_lines(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, FavoritesStore) {
        let dir = TempDir::new().expect("temp dir");
        let store = FavoritesStore::new(dir.path().join(".moodmusic_favs.txt"));
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() -> anyhow::Result<()> {
        let (_dir, store) = store();
        assert!(store.load_all()?.is_empty());
        assert!(store.list()?.is_empty());
        assert!(!store.path().exists(), "reading must not create the file");
        Ok(())
    }

    #[test]
    fn test_add_twice_keeps_one_copy() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let song = Song::new("Golden – HUNTR/X", "https://example.com/golden");

        assert_eq!(store.add(&song)?, AddOutcome::Added);
        assert_eq!(store.add(&song)?, AddOutcome::AlreadyExists);

        let listed = store.list()?;
        assert_eq!(listed, vec![song.clone()]);
        assert!(store.contains(&song)?);
        Ok(())
    }

    #[test]
    fn test_add_appends_in_insertion_order() -> anyhow::Result<()> {
        let (_dir, store) = store();
        store.add(&Song::new("B", "u2"))?;
        store.add(&Song::new("A", "u1"))?;

        let raw = fs::read_to_string(store.path())?;
        assert_eq!(raw, "B|u2\nA|u1\n");
        Ok(())
    }

    #[test]
    fn test_remove_rewrites_remaining_entries() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let a = Song::new("A", "u1");
        let b = Song::new("B", "u2");
        let c = Song::new("C", "");
        for song in [&a, &b, &c] {
            store.add(song)?;
        }

        assert_eq!(store.remove(&b)?, RemoveOutcome::Removed);
        assert_eq!(store.list()?, vec![a, c]);
        assert_eq!(fs::read_to_string(store.path())?, "A|u1\nC|\n");
        assert!(!store.contains(&b)?);
        Ok(())
    }

    #[test]
    fn test_remove_last_entry_leaves_empty_file() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let song = Song::new("Only", "u");
        store.add(&song)?;
        store.remove(&song)?;
        assert_eq!(fs::read_to_string(store.path())?, "");
        assert!(store.list()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_remove_unknown_song_writes_nothing() -> anyhow::Result<()> {
        let (_dir, store) = store();
        assert_eq!(store.remove(&Song::new("Ghost", ""))?, RemoveOutcome::NotFound);
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    fn test_blank_and_duplicate_lines_collapse() -> anyhow::Result<()> {
        let (_dir, store) = store();
        fs::write(store.path(), "A|u1\n\n   \nB|u2\nA|u1\nC\n")?;

        assert_eq!(store.load_all()?, vec!["A|u1", "B|u2", "C"]);
        assert_eq!(store.list()?[2], Song::new("C", ""));

        // A rewrite drops the stale duplicate and blank lines.
        store.remove(&Song::new("B", "u2"))?;
        assert_eq!(fs::read_to_string(store.path())?, "A|u1\nC|\n");
        Ok(())
    }

    #[test]
    fn test_add_after_missing_trailing_newline() -> anyhow::Result<()> {
        let (_dir, store) = store();
        fs::write(store.path(), "A|u1")?;
        store.add(&Song::new("B", "u2"))?;
        assert_eq!(store.load_all()?, vec!["A|u1", "B|u2"]);
        Ok(())
    }

    #[test]
    fn test_add_escapes_line_breaks() -> anyhow::Result<()> {
        let (_dir, store) = store();
        let song = Song::new("Line\nBreak", "u\r");
        store.add(&song)?;

        let listed = store.list()?;
        assert_eq!(listed, vec![Song::new("Line Break", "u ")]);
        // The escaped form is what is stored, so it counts as a duplicate.
        assert_eq!(store.add(&Song::new("Line Break", "u "))?, AddOutcome::AlreadyExists);
        Ok(())
    }

    #[test]
    fn test_remove_drops_every_line_decoding_to_song() -> anyhow::Result<()> {
        let (_dir, store) = store();
        fs::write(store.path(), "A\nB|u2\nA|\n")?;
        assert_eq!(store.load_all()?.len(), 3);

        let song = Song::new("A", "");
        assert_eq!(store.remove(&song)?, RemoveOutcome::Removed);
        assert!(!store.list()?.contains(&song));
        assert_eq!(fs::read_to_string(store.path())?, "B|u2\n");
        Ok(())
    }

    #[test]
    fn test_failed_rewrite_keeps_previous_file() -> anyhow::Result<()> {
        let (dir, store) = store();
        store.add(&Song::new("A", "u1"))?;
        store.add(&Song::new("B", "u2"))?;
        let before = fs::read(store.path())?;

        let result = store.rewrite_via(&dir.path().join("no-such-dir"), &[Song::new("B", "u2")]);

        assert!(matches!(result, Err(Error::Io { .. })));
        assert_eq!(fs::read(store.path())?, before);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_rewrite_keeps_file_permissions() -> anyhow::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, store) = store();
        store.add(&Song::new("A", "u1"))?;
        store.add(&Song::new("B", "u2"))?;
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644))?;

        store.remove(&Song::new("A", "u1"))?;

        let mode = fs::metadata(store.path())?.permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        Ok(())
    }

    #[test]
    fn test_unwritable_location_is_io_error() {
        let dir = TempDir::new().expect("temp dir");
        let store = FavoritesStore::new(dir.path().join("missing-dir").join("favs.txt"));
        let result = store.add(&Song::new("A", ""));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
