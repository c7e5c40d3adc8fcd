//! Persistence for the UI theme flag.
//!
//! The browser UI kept a single `"light"`/`"dark"` value in local storage;
//! the terminal client keeps the same flag in a one-line file. Unreadable
//! or unrecognized contents fall back to the default rather than erroring,
//! so a corrupt file can never keep the client from starting.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::Theme;

/// Loads and stores the theme flag at a fixed path.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored theme, falling back to the default when the file
    /// is missing or holds anything unrecognized.
    pub fn load_or_default(&self) -> Theme {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_default()
    }

    /// Writes the theme to the backing file.
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{theme}\n"))?;
        Ok(())
    }

    /// Flips the stored theme and returns the new value.
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load_or_default().toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store(name: &str) -> ThemeStore {
        let path = std::env::temp_dir().join(format!(
            "liaison-theme-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::remove_file(&path).ok();
        ThemeStore::new(path)
    }

    #[test]
    fn missing_file_defaults_to_dark() {
        let store = scratch_store("missing");
        assert_eq!(store.load_or_default(), Theme::Dark);
    }

    #[test]
    fn save_and_load_round_trip() {
        let store = scratch_store("round-trip");
        store.save(Theme::Light).unwrap();
        assert_eq!(store.load_or_default(), Theme::Light);
        std::fs::remove_file(store.path()).ok();
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = scratch_store("toggle");
        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.load_or_default(), Theme::Dark);
        std::fs::remove_file(store.path()).ok();
    }

    #[test]
    fn garbage_contents_fall_back_to_default() {
        let store = scratch_store("garbage");
        std::fs::write(store.path(), "neon\n").unwrap();
        assert_eq!(store.load_or_default(), Theme::Dark);
        std::fs::remove_file(store.path()).ok();
    }
}
