//! Mood-based song recommendations with a small persisted favorites list.
//!
//! Core modules:
//! - [`catalog`] - Fixed mood → songs mapping
//! - [`recommend`] - Playlist selection and ad hoc search
//! - [`favorites`] - Line-oriented favorites file
//! - [`opener`] - Hand-off of links to the OS
//! - [`app`] - One facade over all of the above for front ends
//!
//! ### Supporting Modules
//!
//! - [`song`] - Song value and favorites-file line codec
//! - [`config`] - Favorites location and catalog selection
//! - [`cli`] - Command-line interface definitions with clap integration
//! - [`completion`] - Shell completion generation
//! - [`error`] - Error types
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use moodmusic::{Catalog, FavoritesStore, Recommender};
//!
//! let catalog = Catalog::builtin();
//! let playlist = Recommender::new(&catalog).recommend("Chill");
//! for song in &playlist {
//!     println!("{song}");
//! }
//!
//! let store = FavoritesStore::new(moodmusic::config::favorites_path()?);
//! store.add(&playlist[0])?;
//! # Ok::<(), moodmusic::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`Result`], whose [`Error`] separates the
//! informational empty-query case from I/O, link-opening and catalog
//! failures. Duplicate favorites and removals of unknown songs are reported
//! through [`AddOutcome`] and [`RemoveOutcome`] rather than as errors.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod favorites;
pub mod opener;
pub mod recommend;
pub mod song;

pub use app::{MoodMusic, Playlist};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use favorites::{AddOutcome, FavoritesStore, RemoveOutcome};
pub use opener::{LinkOpener, SystemOpener};
pub use recommend::{ad_hoc_search, RecommendConfig, Recommender};
pub use song::Song;
