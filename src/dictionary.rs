use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::HanmarkError;

/// One dictionary sense for a surface token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    /// Canonical/traditional written form (first field of a CEDICT line).
    pub citation: String,
    /// Bracketed romanization as it appears in the file, e.g. `[ni3 hao3]`.
    pub transcription: String,
    /// Raw slash-delimited translation block, cleaned lazily by the gloss
    /// resolver when markup is emitted.
    pub translation: String,
}

/// In-memory dictionary: surface token -> senses in file order.
///
/// Built once from a CC-CEDICT style file and read-only afterwards; the
/// annotation pipeline only ever borrows it, so callers are free to share it
/// across threads when batching sentences.
#[derive(Debug, Default)]
pub struct DictIndex {
    entries: HashMap<String, Vec<DictEntry>>,
}

impl DictIndex {
    pub fn new() -> Self {
        DictIndex {
            entries: HashMap::new(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, HanmarkError> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    /// Appends a sense under `surface`, preserving insertion order. Homograph
    /// lines accumulate; the first inserted sense is the one cross-reference
    /// resolution substitutes.
    pub fn insert(&mut self, surface: String, entry: DictEntry) {
        self.entries.entry(surface).or_default().push(entry);
    }

    pub fn contains(&self, surface: &str) -> bool {
        self.entries.contains_key(surface)
    }

    pub fn get(&self, surface: &str) -> Option<&[DictEntry]> {
        self.entries.get(surface).map(|v| v.as_slice())
    }

    /// First sense of a headword, used as cross-reference target.
    pub fn first(&self, surface: &str) -> Option<&DictEntry> {
        self.entries.get(surface).and_then(|v| v.first())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses the whole dictionary text. Lines starting with `#` are comments;
/// every other non-empty line must parse, otherwise the build aborts with
/// the offending line.
impl FromStr for DictIndex {
    type Err = HanmarkError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut index = DictIndex::new();
        for (line_idx, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (surface, entry) = parse_line(line, line_idx + 1)?;
            index.insert(surface, entry);
        }
        Ok(index)
    }
}

/// Parses one data line: `TRAD SIMP [romanization] /sense/sense/`.
///
/// The naive 4-way split breaks multi-syllable romanizations (`[shen2 me5]`
/// splits after `[shen2`), leaving the closing bracket inside what was parsed
/// as the translation. When the romanization field lacks its `]`, the head of
/// the translation up to the first `]` is moved back into the romanization
/// and the remainder becomes the translation.
fn parse_line(line: &str, line_no: usize) -> Result<(String, DictEntry), HanmarkError> {
    let malformed = || HanmarkError::MalformedEntry {
        line_no,
        line: line.to_string(),
    };

    let mut fields = line.splitn(4, ' ');
    let citation = fields.next().ok_or_else(malformed)?;
    let surface = fields.next().ok_or_else(malformed)?;
    let mut transcription = fields.next().ok_or_else(malformed)?.to_string();
    let mut translation = fields.next().ok_or_else(malformed)?.to_string();

    if !transcription.ends_with(']') {
        let close = translation.find(']').ok_or_else(malformed)?;
        let (head, rest) = translation.split_at(close + 1);
        transcription = format!("{} {}", transcription, head);
        translation = rest.to_string();
    }

    Ok((
        surface.to_string(),
        DictEntry {
            citation: citation.to_string(),
            transcription,
            translation,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_line() {
        let index: DictIndex = "老 老 [lao3] /old/aged/".parse().unwrap();
        let entries = index.get("老").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].citation, "老");
        assert_eq!(entries[0].transcription, "[lao3]");
        assert_eq!(entries[0].translation, "/old/aged/");
    }

    #[test]
    fn recovers_mis_split_romanization() {
        let index = DictIndex::from_str("什麼 什么 [shen2 me5] /what?/").unwrap();
        let entry = index.first("什么").unwrap();
        assert_eq!(entry.transcription, "[shen2 me5]");
        assert_eq!(entry.translation, " /what?/");
    }

    #[test]
    fn recovers_three_syllable_romanization() {
        let index = DictIndex::from_str("為什麼 为什么 [wei4 shen2 me5] /why/").unwrap();
        let entry = index.first("为什么").unwrap();
        assert_eq!(entry.transcription, "[wei4 shen2 me5]");
        assert_eq!(entry.translation, " /why/");
    }

    #[test]
    fn homographs_accumulate_in_file_order() {
        let text = "長 长 [chang2] /long/\n長 长 [zhang3] /to grow/";
        let index = DictIndex::from_str(text).unwrap();
        let entries = index.get("长").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].translation, "/long/");
        assert_eq!(entries[1].translation, "/to grow/");
        assert_eq!(index.first("长").unwrap().transcription, "[chang2]");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# CC-CEDICT\n# comment\n\n好 好 [hao3] /good/\n";
        let index = DictIndex::from_str(text).unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.contains("好"));
    }

    #[test]
    fn too_few_fields_is_malformed() {
        let err = DictIndex::from_str("好 好 [hao3]").unwrap_err();
        match err {
            HanmarkError::MalformedEntry { line_no, .. } => assert_eq!(line_no, 1),
            other => panic!("expected MalformedEntry, got {:?}", other),
        }
    }

    #[test]
    fn unterminated_bracket_is_malformed() {
        let err = DictIndex::from_str("什麼 什么 [shen2 me5 /what?/").unwrap_err();
        assert!(matches!(err, HanmarkError::MalformedEntry { .. }));
    }
}
