use crate::dictionary::{DictEntry, DictIndex};

/// A segmented unit of a fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Dictionary-backed span with every sense that matched it.
    Matched {
        surface: String,
        entries: Vec<DictEntry>,
    },
    /// Single character no dictionary key covers.
    Literal(char),
}

impl Token {
    pub fn surface(&self) -> String {
        match self {
            Token::Matched { surface, .. } => surface.clone(),
            Token::Literal(c) => c.to_string(),
        }
    }
}

/// Greedy left-anchored longest-prefix matching with right-shrink fallback.
///
/// The candidate starts as the whole remaining fragment and loses its last
/// character until it is a dictionary key; an empty candidate emits the
/// fragment's first character as a literal. Quadratic in the worst case and
/// never re-optimizes across token boundaries: once a span is accepted the
/// segmentation to its left is final. Runs of ambiguous single characters
/// therefore segment greedily, not optimally.
pub fn match_fragment(fragment: &str, index: &DictIndex) -> Vec<Token> {
    let chars: Vec<char> = fragment.chars().collect();
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let mut end = chars.len();
        let mut matched = false;
        while end > pos {
            let candidate: String = chars[pos..end].iter().collect();
            if let Some(entries) = index.get(&candidate) {
                tokens.push(Token::Matched {
                    surface: candidate,
                    entries: entries.to_vec(),
                });
                matched = true;
                break;
            }
            end -= 1;
        }
        if matched {
            pos = end;
        } else {
            tokens.push(Token::Literal(chars[pos]));
            pos += 1;
        }
    }
    tokens
}
