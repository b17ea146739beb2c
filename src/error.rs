use std::io;
use thiserror::Error;

/// Crate-wide error type. Per-sentence annotation itself is total and never
/// returns one of these; they only arise from configuration, dictionary
/// construction and file I/O around the pipeline.
#[derive(Debug, Error)]
pub enum HanmarkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary line that does not split into the four expected fields,
    /// or whose romanization cannot be recovered. Fatal: an incomplete index
    /// would silently degrade every downstream segmentation.
    #[error("malformed dictionary entry at line {line_no}: {line:?}")]
    MalformedEntry { line_no: usize, line: String },

    #[error("failed to load config {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
