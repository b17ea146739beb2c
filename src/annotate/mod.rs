pub mod fragment;
pub mod gloss;
pub mod markup;
pub mod segment;

// Re-export the pipeline stages for direct use and for tests
pub use fragment::{split_sentence, Fragment, FragmentedSentence};
pub use markup::build_sentence_markup;
pub use segment::{match_fragment, Token};

use std::collections::HashMap;

use serde::Serialize;

use crate::dictionary::DictIndex;

/// Sentence -> markup mapping with insertion order retained, so downstream
/// document patching walks sentences in the order they were extracted.
/// Verbatim duplicate sentences collapse to a single entry.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AnnotatedSentences {
    pub markup: HashMap<String, String>,
    pub order: Vec<String>,
}

impl AnnotatedSentences {
    pub fn new() -> Self {
        AnnotatedSentences::default()
    }

    pub fn insert(&mut self, sentence: &str, markup: String) {
        if !self.markup.contains_key(sentence) {
            self.order.push(sentence.to_string());
            self.markup.insert(sentence.to_string(), markup);
        }
    }

    pub fn get(&self, sentence: &str) -> Option<&String> {
        self.markup.get(sentence)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.order.iter().map(move |s| (s, &self.markup[s]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Runs the whole per-sentence pipeline: fragment, segment, annotate,
/// reassemble. Total — every sentence produces a markup string, degenerating
/// to all-literal tokens under an empty dictionary.
pub fn annotate_sentence(sentence: &str, index: &DictIndex) -> String {
    build_sentence_markup(&split_sentence(sentence), index)
}

pub fn annotate_sentences<'a, I>(sentences: I, index: &DictIndex) -> AnnotatedSentences
where
    I: IntoIterator<Item = &'a str>,
{
    let mut annotated = AnnotatedSentences::new();
    for sentence in sentences {
        if annotated.markup.contains_key(sentence) {
            continue;
        }
        let markup = annotate_sentence(sentence, index);
        annotated.insert(sentence, markup);
    }
    annotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictEntry;

    fn hello_index() -> DictIndex {
        let mut index = DictIndex::new();
        index.insert(
            "你好".to_string(),
            DictEntry {
                citation: "你好".to_string(),
                transcription: "[ni3 hao3]".to_string(),
                translation: "/hello/hi/".to_string(),
            },
        );
        index
    }

    #[test]
    fn pipeline_is_deterministic() {
        let index = hello_index();
        let first = annotate_sentence("你好！再见。", &index);
        let second = annotate_sentence("你好！再见。", &index);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_dictionary_still_produces_markup() {
        let markup = annotate_sentence("我爱你。", &DictIndex::new());
        assert_eq!(markup.matches("<w>").count(), 3);
        assert!(markup.ends_with("。"));
    }

    #[test]
    fn duplicates_collapse_preserving_order() {
        let index = hello_index();
        let annotated = annotate_sentences(vec!["你好！", "再见。", "你好！"], &index);
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated.order, vec!["你好！", "再见。"]);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let index = DictIndex::new();
        let annotated = annotate_sentences(vec!["乙。", "甲。"], &index);
        let keys: Vec<&String> = annotated.iter().map(|(s, _)| s).collect();
        assert_eq!(keys, vec!["乙。", "甲。"]);
    }
}
