use std::fs;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::annotate::{annotate_sentences, AnnotatedSentences};
use crate::dictionary::DictIndex;
use crate::error::HanmarkError;

lazy_static! {
    /// Chinese sentence elements: `<se ... lang="...zh...">text</se>`.
    static ref RE_SENTENCE: Regex =
        Regex::new(r#"<se\b[^>]*lang="[^"]*zh[^"]*"[^>]*>([^<]+)</se>"#).unwrap();
}

/// Pulls the text of every Chinese `<se>` element, in document order.
pub fn extract_sentences(document: &str) -> Vec<String> {
    RE_SENTENCE
        .captures_iter(document)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Replaces each extracted sentence occurrence with its markup, walking the
/// mapping in extraction order. Substitution is literal text replacement:
/// sentences that are substrings of other sentences, or that repeat with
/// different surroundings, patch imprecisely. Known limitation of the host
/// format, kept rather than guessed around.
pub fn patch_document(document: &str, annotated: &AnnotatedSentences) -> String {
    let mut text = document.to_string();
    for (sentence, markup) in annotated.iter() {
        text = text.replace(sentence.as_str(), markup);
    }
    text
}

/// Extract + annotate + patch in one step; also hands back the mapping so
/// callers can dump or inspect it.
pub fn annotate_document(document: &str, index: &DictIndex) -> (AnnotatedSentences, String) {
    let sentences = extract_sentences(document);
    let annotated = annotate_sentences(sentences.iter().map(|s| s.as_str()), index);
    let patched = patch_document(document, &annotated);
    (annotated, patched)
}

/// Corpus files are anything ending in `ml` (xml/html), skipping our own
/// `_processed` outputs. Sorted for a stable processing order.
pub fn scan_corpus_dir(dir: &Path) -> Result<Vec<PathBuf>, HanmarkError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.ends_with("ml") && !name.contains("_processed") {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

/// `corpus.xml` -> `corpus_processed.xml`, next to the original.
pub fn processed_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("corpus");
    path.with_file_name(format!("{}_processed.xml", stem))
}
