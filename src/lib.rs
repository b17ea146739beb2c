// Declare all modules that are part of this library
pub mod annotate;
pub mod config;
pub mod corpus;
pub mod dictionary;
pub mod error;

// Re-export key items so main.rs and external callers don't need deep paths
pub use annotate::{annotate_sentence, annotate_sentences, AnnotatedSentences};
pub use config::Config;
pub use dictionary::{DictEntry, DictIndex};
pub use error::HanmarkError;
