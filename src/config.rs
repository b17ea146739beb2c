use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::error::HanmarkError;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Path to the CC-CEDICT dictionary file.
    pub dictionary_path: String,
    /// Directory holding the corpus XML files to annotate.
    pub corpus_dir: String,
}

/// Reads and parses the config file. Validation of `corpus_dir` is separate
/// (`validate_corpus_dir`) so callers can apply command-line overrides first
/// and validate the value that will actually be used.
pub fn load_config_from_file(file_path: &str) -> Result<Config, HanmarkError> {
    let config_err = |reason: String| HanmarkError::Config {
        path: file_path.to_string(),
        reason,
    };

    let contents = fs::read_to_string(file_path)
        .map_err(|e| config_err(format!("failed to read: {}. Please ensure it exists.", e)))?;
    toml::from_str(&contents).map_err(|e| config_err(format!("failed to parse: {}", e)))
}

/// Checks that a resolved corpus directory exists; `origin` names where the
/// value came from (config file path or flag) for the error message.
pub fn validate_corpus_dir(corpus_dir: &str, origin: &str) -> Result<(), HanmarkError> {
    if PathBuf::from(corpus_dir).is_dir() {
        Ok(())
    } else {
        Err(HanmarkError::Config {
            path: origin.to_string(),
            reason: format!("corpus_dir ('{}') is not a valid directory", corpus_dir),
        })
    }
}
