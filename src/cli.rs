//! # Command-Line Interface Module
//!
//! This module defines the command-line interface for Mood Music using Clap
//! derive macros.
//!
//! ## Commands
//!
//! - `moods`: List the moods in the catalog
//! - `recommend`: Build a playlist for a mood
//! - `search`: Turn free text into a web search link
//! - `open`: Open a link in the default browser
//! - `favorites`: List, add, remove and open saved songs
//!
//! ## Examples
//!
//! ```bash
//! moodmusic recommend Chill
//! moodmusic recommend Happy --pick 2 --favorite
//! moodmusic search daft punk --open
//! moodmusic favorites list
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Shell types supported for completion generation
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

/// Main application arguments structure.
#[derive(Parser, Debug)]
#[command(name = "moodmusic")]
#[command(about = "Mood Music: mood-based song recommendations & favorites")]
#[command(version)]
pub struct Args {
    /// JSON catalog to use instead of the built-in one
    ///
    /// The file is a list of `{"mood": ..., "songs": [{"title": ..., "url": ...}]}`
    /// objects; mood order is preserved.
    #[arg(long, global = true, env = "MOODMUSIC_CATALOG", value_hint = clap::ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Actions applied to the selected playlist entry.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SelectionActions {
    /// Open the selected song in the default browser
    #[arg(long)]
    pub open: bool,

    /// Add the selected song to favorites
    #[arg(long)]
    pub favorite: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the moods available for recommendations
    Moods,

    /// Recommend up to five songs for a mood
    ///
    /// Songs listed under the mood are topped up from other moods when the
    /// mood alone has fewer than five, then shuffled.
    Recommend {
        /// Mood to recommend for (defaults to the first mood in the catalog)
        #[arg(value_hint = clap::ValueHint::Other)]
        mood: Option<String>,

        /// Playlist entry to act on (1-based)
        #[arg(long, default_value_t = 1)]
        pick: usize,

        #[command(flatten)]
        actions: SelectionActions,
    },

    /// Search the web for an artist, song or mood
    Search {
        /// Free-text query
        query: Vec<String>,

        #[command(flatten)]
        actions: SelectionActions,
    },

    /// Open a link with the system's default handler
    Open {
        url: String,
    },

    /// Manage favorite songs
    ///
    /// Favorites are stored one per line in ~/.moodmusic_favs.txt.
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Generate shell completions
    ///
    /// Usage: moodmusic completion bash > ~/.local/share/bash-completion/completions/moodmusic
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },

    /// List moods for completion (hidden command)
    #[command(hide = true)]
    CompleteMoods,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesAction {
    /// Show all favorites
    List,

    /// Save a song
    Add {
        title: String,

        /// Link to open for this song
        #[arg(long, default_value = "")]
        url: String,
    },

    /// Remove the favorite at a list position (1-based)
    Remove {
        position: usize,
    },

    /// Open the favorite at a list position (1-based)
    Open {
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_recommend_defaults() {
        let args = Args::parse_from(["moodmusic", "recommend"]);
        match args.command {
            Command::Recommend { mood, pick, actions } => {
                assert!(mood.is_none());
                assert_eq!(pick, 1);
                assert!(!actions.open && !actions.favorite);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_search_joins_words() {
        let args = Args::parse_from(["moodmusic", "search", "--open", "daft", "punk"]);
        match args.command {
            Command::Search { query, actions } => {
                assert_eq!(query.join(" "), "daft punk");
                assert!(actions.open);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_catalog_flag() {
        let args = Args::parse_from(["moodmusic", "moods", "--catalog", "/tmp/c.json"]);
        assert_eq!(args.catalog, Some(PathBuf::from("/tmp/c.json")));
    }
}
