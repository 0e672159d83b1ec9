//! Common password deny-list.
//!
//! A small built-in list is always active. A larger list can be loaded once
//! at startup from a newline-separated file; after that the set is read-only.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Widely known weak passwords, always rejected.
pub const BUILTIN_COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "123456",
    "qwerty",
    "admin",
    "welcome",
    "123456789",
    "12345678",
    "abc123",
    "password1",
    "1234567",
];

pub const BLACKLIST_PATH_ENV: &str = "PWD_BLACKLIST_PATH";
const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

static LOADED_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

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
/// 1. Environment variable `PWD_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var(BLACKLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
}

/// Loads the extended blacklist from the configured path.
///
/// Optional: [`is_blacklisted`] works with the built-in list alone.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or is empty.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    init_blacklist_from_path(get_blacklist_path())
}

/// Loads the extended blacklist from a specific file path.
///
/// Idempotent: once a list is loaded, later calls return its size without
/// touching the filesystem.
pub fn init_blacklist_from_path<P: AsRef<Path>>(path: P) -> Result<usize, BlacklistError> {
    {
        let guard = LOADED_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: FileNotFound {}", path.display());
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Blacklist initialization FAILED: Empty file {}", path.display());
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let mut guard = LOADED_PASSWORDS.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have won the race while we were reading.
    let count = guard.get_or_insert(set).len();

    #[cfg(feature = "tracing")]
    tracing::info!("Blacklist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns the effective deny-list: built-in entries plus any loaded file.
pub fn get_blacklist() -> HashSet<String> {
    let mut set: HashSet<String> = BUILTIN_COMMON_PASSWORDS
        .iter()
        .map(|p| p.to_string())
        .collect();
    let guard = LOADED_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
    if let Some(loaded) = guard.as_ref() {
        set.extend(loaded.iter().cloned());
    }
    set
}

/// Checks whether the lowercase form of `password` is on the deny-list.
pub fn is_blacklisted(password: &str) -> bool {
    let lowered = password.to_lowercase();
    if BUILTIN_COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return true;
    }
    let guard = LOADED_PASSWORDS.read().unwrap_or_else(PoisonError::into_inner);
    guard
        .as_ref()
        .map(|bl| bl.contains(&lowered))
        .unwrap_or(false)
}

#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = LOADED_PASSWORDS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}
