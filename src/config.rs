//! Backing file resolution
//!
//! Order: explicit `--file` flag, then `CONTACTBOOK_FILE`, then
//! `contacts.json` in the working directory.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "contacts.json";
pub const ENV_BOOK_FILE: &str = "CONTACTBOOK_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookConfig {
    pub path: PathBuf,
}

impl BookConfig {
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        Self::resolve_with(flag, env::var_os(ENV_BOOK_FILE).map(PathBuf::from))
    }

    fn resolve_with(flag: Option<PathBuf>, from_env: Option<PathBuf>) -> Self {
        let path = flag
            .or(from_env)
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME));
        Self { path }
    }
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}
