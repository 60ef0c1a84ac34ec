//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an mdoutline.toml, and if present we load settings from there.
//! This provides outline depth, ordering and file extension preferences.

use crate::kind::MAX_HEADER_LEVEL;
use crate::outline::OutlineOptions;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File read from the working directory when present.
pub const CONFIG_FILE: &str = "mdoutline.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from mdoutline.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 6)]
    /// Deepest heading level shown in outlines.
    pub max_level: u8,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = false)]
    /// Order outline entries by title instead of document order.
    pub sort: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_level: MAX_HEADER_LEVEL,
            file_extensions: vec!["md".to_string()],
            sort: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from mdoutline.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from the given file, falling back to defaults when it is missing or
    /// malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring malformed config: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Outline settings derived from these preferences, with the level clamped to 1..=6.
    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            max_level: self.max_level.clamp(1, MAX_HEADER_LEVEL),
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
