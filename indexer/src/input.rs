//! Validation of user-supplied filenames and search words. Everything here is
//! recoverable: callers report the error and ask again.

use concord_core::Grammar;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Filename '{0}' must end with .TXT (case-insensitive). Please try again.")]
    NotTxt(String),
    #[error("File '{name}' not found in {}. Please try again.", .dir.display())]
    NotFound { name: String, dir: PathBuf },
    #[error("You already entered '{0}'.")]
    Duplicate(String),
    #[error("At most {0} files can be indexed.")]
    TooManyFiles(usize),
    #[error("Error opening file '{name}': {source}")]
    Unreadable {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("Empty input not allowed; please enter a legal word.")]
    EmptyWord,
    #[error("Invalid word '{0}'. A legal word contains only letters and internal hyphen(s) (e.g., 'first-base').")]
    IllegalWord(String),
}

pub fn is_txt_filename(name: &str) -> bool {
    name.to_ascii_lowercase().ends_with(".txt")
}

/// Check a filename typed by the user against the files accepted so far.
/// Returns the path to read, resolved against `base`.
pub fn validate_filename(raw: &str, accepted: &[String], base: &Path, max_files: usize) -> Result<PathBuf, InputError> {
    let name = raw.trim();
    if accepted.len() >= max_files {
        return Err(InputError::TooManyFiles(max_files));
    }
    if !is_txt_filename(name) {
        return Err(InputError::NotTxt(name.to_string()));
    }
    if accepted.iter().any(|a| a == name) {
        return Err(InputError::Duplicate(name.to_string()));
    }
    let path = base.join(name);
    if !path.is_file() {
        return Err(InputError::NotFound { name: name.to_string(), dir: base.to_path_buf() });
    }
    Ok(path)
}

/// Read a validated file as UTF-8 text.
pub fn read_document(name: &str, path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Unreadable { name: name.to_string(), source })
}

/// Trim and check a search word. Case is preserved for display; matching
/// normalizes later.
pub fn validate_search_word(raw: &str) -> Result<String, InputError> {
    let word = raw.trim();
    if word.is_empty() {
        return Err(InputError::EmptyWord);
    }
    if !Grammar::shared().is_legal(word) {
        return Err(InputError::IllegalWord(word.to_string()));
    }
    Ok(word.to_string())
}

/// `yes`/`y`/`no`/`n` in any case; anything else is `None`.
pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" => Some(true),
        "no" | "n" => Some(false),
        _ => None,
    }
}
