// src/queue.rs
//! Builds the playback queue from command-line targets

use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};

/// A single queue entry. Anything with a URL scheme is handed over
/// untouched; everything else is treated as a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    Url(String),
}

impl Target {
    pub fn classify(raw: &str) -> Self {
        if has_scheme(raw) {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

fn has_scheme(raw: &str) -> bool {
    raw.split_once("://").is_some_and(|(scheme, rest)| {
        !scheme.is_empty()
            && !rest.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Ordered playback queue. Order is playback order.
#[derive(Debug, Default, PartialEq)]
pub struct Queue {
    entries: Vec<Target>,
}

impl Queue {
    pub fn from_targets(targets: &[String]) -> Self {
        let entries = targets.iter().map(|t| Target::classify(t)).collect();
        Self { entries }
    }

    /// Fallback for a bare invocation: read a playlist file with one
    /// track per line, skipping blanks.
    #[instrument]
    pub fn from_playlist(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Couldn't read playlist {}: {e}", path.display());
                return Self::default();
            },
        };

        let entries = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(Target::classify)
            .collect::<Vec<_>>();

        debug!("Queued {} tracks from {}", entries.len(), path.display());
        Self { entries }
    }

    pub fn entries(&self) -> &[Target] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn schemes_classify_as_urls() {
        assert_eq!(
            Target::classify("https://radio.example/stream"),
            Target::Url("https://radio.example/stream".to_string())
        );
        assert_eq!(
            Target::classify("file:///music/a.mp3"),
            Target::Url("file:///music/a.mp3".to_string())
        );
    }

    #[test]
    fn plain_tokens_classify_as_files() {
        assert_eq!(
            Target::classify("/music/a.mp3"),
            Target::File(PathBuf::from("/music/a.mp3"))
        );
        assert_eq!(
            Target::classify("b.flac"),
            Target::File(PathBuf::from("b.flac"))
        );
        // a lone separator is not a scheme
        assert_eq!(
            Target::classify("://nope"),
            Target::File(PathBuf::from("://nope"))
        );
    }

    #[test]
    fn queue_preserves_target_order() {
        let targets = ["z.mp3".to_string(), "a.mp3".to_string(), "m.mp3".to_string()];
        let queue = Queue::from_targets(&targets);
        let names: Vec<String> = queue.entries().iter().map(Target::to_string).collect();
        assert_eq!(names, targets);
    }

    #[test]
    fn playlist_fallback_skips_blank_lines() {
        let path = env::temp_dir().join("playq-test-playlist.tpl");
        fs::write(&path, "/music/one.mp3\n\n  \nhttps://radio.example/two\n")
            .expect("test playlist should write");

        let queue = Queue::from_playlist(&path);
        fs::remove_file(&path).expect("test playlist should remove");

        assert_eq!(queue.len(), 2);
        assert_eq!(
            queue.entries()[0],
            Target::File(PathBuf::from("/music/one.mp3"))
        );
        assert_eq!(
            queue.entries()[1],
            Target::Url("https://radio.example/two".to_string())
        );
    }

    #[test]
    fn missing_playlist_yields_an_empty_queue() {
        let path = env::temp_dir().join("playq-test-no-such-playlist.tpl");
        let queue = Queue::from_playlist(&path);
        assert!(queue.is_empty());
    }
}
