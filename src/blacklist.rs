//! Blacklist management module
//!
//! Loads the list of common passwords that a [`crate::BlacklistScorer`]
//! refuses regardless of their estimated entropy.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding a custom blacklist location.
pub const BLACKLIST_PATH_ENV: &str = "STORYBOOK_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `STORYBOOK_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Case-insensitive set of common passwords.
///
/// Built once at startup and handed to the scorer that needs it.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Loads the blacklist from [`blacklist_path`].
    pub fn from_env() -> Result<Self, BlacklistError> {
        Self::from_path(blacklist_path())
    }

    /// Loads a newline-separated blacklist file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: FileNotFound {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let blacklist = Self::from_entries(content.lines());

        if blacklist.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist initialization FAILED: Empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Blacklist initialized: {} passwords from {:?}",
            blacklist.len(),
            path
        );

        Ok(blacklist)
    }

    /// Builds a blacklist from in-memory entries. Blank entries are skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
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
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_blacklist_path_default() {
        remove_env(BLACKLIST_PATH_ENV);

        let path = blacklist_path();
        assert_eq!(path, PathBuf::from("./assets/blacklist.txt"));
    }

    #[test]
    #[serial]
    fn test_blacklist_path_from_env() {
        let custom_path = "/custom/path/blacklist.txt";
        set_env(BLACKLIST_PATH_ENV, custom_path);

        let path = blacklist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(BLACKLIST_PATH_ENV, "/nonexistent/path/blacklist.txt");

        let result = Blacklist::from_env();
        assert!(matches!(result, Err(BlacklistError::FileNotFound(_))));

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_success() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password123").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env(BLACKLIST_PATH_ENV, path);

        let blacklist = Blacklist::from_env().expect("Blacklist should load");
        assert_eq!(blacklist.len(), 2);

        remove_env(BLACKLIST_PATH_ENV);
    }

    #[test]
    fn test_from_path_empty_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "\n   \n").expect("Failed to write blank content");

        let result = Blacklist::from_path(temp_file.path());
        assert!(matches!(result, Err(BlacklistError::EmptyFile)));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let blacklist = Blacklist::from_entries(["  TestPassword ", "", "letmein"]);
        assert_eq!(blacklist.len(), 2);
        assert!(blacklist.contains("testpassword"));
        assert!(blacklist.contains("TESTPASSWORD"));
        assert!(!blacklist.contains("veryuncommonpassword987"));
    }
}
