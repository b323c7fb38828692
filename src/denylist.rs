//! Common password denylist
//!
//! Holds the passwords the common-password check rejects.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a custom denylist file.
pub const DENYLIST_PATH_VAR: &str = "PWD_POLICY_DENYLIST_PATH";

const BUILTIN: [&str; 20] = [
    "password", "123456", "12345678", "qwerty", "abc123",
    "monkey", "1234567", "letmein", "trustno1", "dragon",
    "baseball", "iloveyou", "master", "sunshine", "ashley",
    "bailey", "passw0rd", "shadow", "123123", "654321",
];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Lowercased set of passwords considered too common to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    entries: HashSet<String>,
}

impl Default for Denylist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Denylist {
    /// The fixed list of 20 well-known weak passwords.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Loads a denylist from the file named by `PWD_POLICY_DENYLIST_PATH`.
    ///
    /// Falls back to [`Denylist::builtin`] when the variable is not set.
    ///
    /// # Errors
    ///
    /// Same as [`Denylist::from_path`] when the variable is set.
    pub fn from_env() -> Result<Self, DenylistError> {
        match std::env::var_os(DENYLIST_PATH_VAR) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin()),
        }
    }

    /// Loads a newline-separated denylist. Entries are trimmed and lowercased;
    /// blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: file not found {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist load FAILED: empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let list: Self = content.lines().collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Denylist loaded: {} passwords from {:?}", list.len(), path);

        Ok(list)
    }

    /// Case-insensitive whole-string match.
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

impl<S: AsRef<str>> FromIterator<S> for Denylist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|l| l.as_ref().trim().to_lowercase())
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }
}
