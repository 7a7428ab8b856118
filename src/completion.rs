//! # Shell Completion Module
//!
//! Completion scripts for the supported shells, plus the mood list used for
//! dynamic completion of `moodmusic recommend <MOOD>`.
//!
//! ## Usage
//!
//! ```bash
//! # Generate bash completions
//! moodmusic completion bash > ~/.local/share/bash-completion/completions/moodmusic
//!
//! # Generate zsh completions
//! moodmusic completion zsh > ~/.config/zsh/completions/_moodmusic
//! ```

use crate::catalog::Catalog;
use clap::Command;
use clap_complete::{generate, Generator, Shell as CompletionShell};
use std::io::{self, Write};

/// Generate shell completions for the given shell
pub fn generate_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Convert our Shell enum to clap_complete's Shell enum
pub fn shell_to_completion_shell(shell: &crate::cli::Shell) -> CompletionShell {
    match shell {
        crate::cli::Shell::Bash => CompletionShell::Bash,
        crate::cli::Shell::Zsh => CompletionShell::Zsh,
        crate::cli::Shell::Fish => CompletionShell::Fish,
        crate::cli::Shell::PowerShell => CompletionShell::PowerShell,
        crate::cli::Shell::Elvish => CompletionShell::Elvish,
    }
}

/// Moods formatted one per line for a completion script.
///
/// Moods containing whitespace are quoted.
pub fn mood_completions(catalog: &Catalog) -> Vec<String> {
    catalog
        .moods()
        .map(|mood| {
            if mood.contains(char::is_whitespace) {
                format!("\"{}\"", mood.replace('"', "\\\""))
            } else {
                mood.to_string()
            }
        })
        .collect()
}

/// Print available moods for completion
pub fn print_mood_completions(catalog: &Catalog) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for completion in mood_completions(catalog) {
        writeln!(out, "{completion}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_conversion() {
        assert_eq!(
            shell_to_completion_shell(&crate::cli::Shell::Bash),
            CompletionShell::Bash
        );
        assert_eq!(
            shell_to_completion_shell(&crate::cli::Shell::Zsh),
            CompletionShell::Zsh
        );
    }

    #[test]
    fn test_mood_completions_quote_spaces() {
        let completions = mood_completions(&Catalog::builtin());
        assert_eq!(completions.first().map(String::as_str), Some("Happy"));
        assert!(completions.contains(&"\"Hit Singles\"".to_string()));
    }
}
