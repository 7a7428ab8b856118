use serde::{Deserialize, Serialize};
use std::fmt;

/// A recommendable song: a display title plus a web search link.
///
/// Two songs are the same song when both title and url match. The url may be
/// empty, in which case there is nothing to open.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// Separates the title from the url in a stored line.
pub const FIELD_SEPARATOR: char = '|';

impl Song {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Whether there is a link worth handing to the OS opener.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Serializes the song into its favorites-file line, without terminator.
    ///
    /// Line breaks inside either field become spaces, so the result is
    /// always exactly one line. This makes the encoding lossy for fields
    /// containing `\n` or `\r`.
    #[must_use]
    pub fn encode_line(&self) -> String {
        format!("{}{FIELD_SEPARATOR}{}", escape(&self.title), escape(&self.url))
    }

    /// Parses a favorites-file line.
    ///
    /// Splits on the first `|` only; a line without one is a title with an
    /// empty url.
    #[must_use]
    pub fn decode_line(line: &str) -> Self {
        match line.split_once(FIELD_SEPARATOR) {
            Some((title, url)) => Self::new(title, url),
            None => Self::new(line, ""),
        }
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

/// Replaces every `\n` and `\r` with a single space.
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}
