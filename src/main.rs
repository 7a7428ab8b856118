//! # Mood Music
//!
//! Recommends a short playlist for a mood, turns free text into a web search
//! link and keeps a small list of favorite songs in `~/.moodmusic_favs.txt`.
//!
//! ## Usage
//!
//! ```bash
//! # List moods
//! moodmusic moods
//!
//! # Recommend songs and save the second one
//! moodmusic recommend Chill --pick 2 --favorite
//!
//! # Search and open the result in the browser
//! moodmusic search "Tate McRae" --open
//!
//! # Manage favorites
//! moodmusic favorites list
//! moodmusic favorites remove 1
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser};
use log::{debug, warn};
use moodmusic::cli::{self, SelectionActions};
use moodmusic::config::RuntimeConfig;
use moodmusic::{completion, AddOutcome, MoodMusic, RemoveOutcome, Song};

/// Main entry point for the Mood Music application.
///
/// Initializes logging, parses command-line arguments, and routes commands to
/// the application facade. Every failure ends the current command only.
///
/// # Logging
///
/// Initializes environment logger which can be controlled via `RUST_LOG`:
/// - `RUST_LOG=debug moodmusic recommend` - Enable debug logging
/// - `RUST_LOG=moodmusic::favorites=trace moodmusic favorites list` - Module-specific logging
fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    if let cli::Command::Completion { shell } = &args.command {
        let mut cmd = cli::Args::command();
        completion::generate_completions(completion::shell_to_completion_shell(shell), &mut cmd);
        return Ok(());
    }

    let config = RuntimeConfig::new(args.catalog.clone())
        .context("Failed to determine where favorites are stored")?;
    let catalog = config
        .load_catalog()
        .context("Failed to load the song catalog")?;
    debug!("Favorites file: {}", config.favorites_path.display());
    let app = MoodMusic::new(catalog, config.favorites_store());

    match args.command {
        cli::Command::Moods => {
            for mood in app.catalog().moods() {
                println!("{mood}");
            }
        }
        cli::Command::Recommend { mood, pick, actions } => {
            let mood = match mood.or_else(|| app.default_mood().map(str::to_string)) {
                Some(mood) => mood,
                None => return Err(anyhow!("The catalog has no moods")),
            };
            if !app.catalog().contains_mood(&mood) {
                warn!("Unknown mood \"{mood}\", filling the playlist from other moods");
            }

            let playlist = app.recommend(&mood);
            print_songs(&playlist.songs);
            println!("Recommended {} songs for \"{}\"", playlist.songs.len(), playlist.mood);

            if actions.open || actions.favorite {
                let song = playlist
                    .pick(pick)
                    .ok_or_else(|| anyhow!("No song at position {pick} in the playlist"))?;
                apply_actions(&app, song, &actions)?;
            }
        }
        cli::Command::Search { query, actions } => {
            let query = query.join(" ");
            let song = match app.search(&query) {
                Ok(song) => song,
                Err(e) if e.is_informational() => {
                    println!("Type an artist, song or mood to search.");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            print_songs(std::slice::from_ref(&song));
            println!("Search results for: {}", song.title);
            apply_actions(&app, &song, &actions)?;
        }
        cli::Command::Open { url } => {
            app.open(&Song::new(url.clone(), url))
                .context("Could not open link")?;
        }
        cli::Command::Favorites { action } => match action {
            cli::FavoritesAction::List => {
                let favorites = app.favorites().context("Failed to load favorites")?;
                if favorites.is_empty() {
                    println!("No favorites yet.");
                } else {
                    print_songs(&favorites);
                }
            }
            cli::FavoritesAction::Add { title, url } => {
                if title.trim().is_empty() {
                    return Err(anyhow!("A favorite needs a title"));
                }
                add_favorite(&app, &Song::new(title, url))?;
            }
            cli::FavoritesAction::Remove { position } => {
                let song = favorite_at(&app, position)?;
                match app
                    .remove_favorite(&song)
                    .context("Failed to update favorites")?
                {
                    RemoveOutcome::Removed => println!("Favorites updated"),
                    RemoveOutcome::NotFound => println!("Not in favorites: {song}"),
                }
            }
            cli::FavoritesAction::Open { position } => {
                let song = favorite_at(&app, position)?;
                app.open(&song).context("Could not open favorite")?;
            }
        },
        cli::Command::CompleteMoods => {
            completion::print_mood_completions(app.catalog())?;
        }
        // Generated before the catalog is loaded.
        cli::Command::Completion { .. } => {}
    }

    Ok(())
}

/// Numbered listing with each song's link underneath.
fn print_songs(songs: &[Song]) {
    for (index, song) in songs.iter().enumerate() {
        println!("{:>2}. {song}", index + 1);
        if song.has_url() {
            println!("    {}", song.url);
        }
    }
}

/// Saves before opening so a failed browser launch still keeps the favorite.
fn apply_actions(app: &MoodMusic, song: &Song, actions: &SelectionActions) -> Result<()> {
    if actions.favorite {
        add_favorite(app, song)?;
    }
    if actions.open {
        app.open(song).context("Could not open link")?;
    }
    Ok(())
}

fn add_favorite(app: &MoodMusic, song: &Song) -> Result<()> {
    match app.add_favorite(song).context("Failed to add favorite")? {
        AddOutcome::Added => println!("Added to favorites: {song}"),
        AddOutcome::AlreadyExists => println!("Already in favorites"),
    }
    Ok(())
}

fn favorite_at(app: &MoodMusic, position: usize) -> Result<Song> {
    app.favorite_at(position)
        .context("Failed to load favorites")?
        .ok_or_else(|| anyhow!("No favorite at position {position}"))
}
