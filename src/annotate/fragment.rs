/// Punctuation and filler characters stripped from content runs before
/// segmentation. One explicit list so tests can assert membership; digits and
/// whitespace are handled by `is_punctuation` alongside it.
pub const PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '：', '；', '、', // sentence marks
    '“', '”', '‘', '’', // quotation marks
    '…', '—', '－', '-', '·', // ellipsis, dashes, middle dot
    'ａ', // full-width placeholder glyph seen in the source corpora
];

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
        || c.is_ascii_digit()
        || ('０'..='９').contains(&c)
        || c.is_whitespace()
}

/// One content run plus the punctuation run that immediately follows it in
/// the sentence. `trailing` is empty for a fragment at the very end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub trailing: String,
}

/// A sentence split into punctuation-free content runs, with every removed
/// mark kept at its original position: marks before the first content run
/// land in `leading`, all others in the `trailing` run of the fragment they
/// follow. `leading + concat(text + trailing)` reproduces the sentence
/// character for character.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FragmentedSentence {
    pub leading: String,
    pub fragments: Vec<Fragment>,
}

impl FragmentedSentence {
    /// All removed marks in original left-to-right order.
    pub fn marks(&self) -> String {
        let mut marks = self.leading.clone();
        for fragment in &self.fragments {
            marks.push_str(&fragment.trailing);
        }
        marks
    }
}

/// Splits `sentence` on runs of the punctuation class. Consecutive marks
/// accumulate into one trailing run; empty content runs are never emitted.
pub fn split_sentence(sentence: &str) -> FragmentedSentence {
    let mut split = FragmentedSentence::default();
    let mut current = String::new();
    for c in sentence.chars() {
        if is_punctuation(c) {
            if current.is_empty() {
                match split.fragments.last_mut() {
                    Some(fragment) => fragment.trailing.push(c),
                    None => split.leading.push(c),
                }
            } else {
                split.fragments.push(Fragment {
                    text: std::mem::take(&mut current),
                    trailing: c.to_string(),
                });
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        split.fragments.push(Fragment {
            text: current,
            trailing: String::new(),
        });
    }
    split
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(split: &FragmentedSentence) -> Vec<&str> {
        split.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    fn reassemble(split: &FragmentedSentence) -> String {
        let mut out = split.leading.clone();
        for fragment in &split.fragments {
            out.push_str(&fragment.text);
            out.push_str(&fragment.trailing);
        }
        out
    }

    #[test]
    fn splits_on_sentence_marks() {
        let split = split_sentence("我爱你，你好。");
        assert_eq!(texts(&split), vec!["我爱你", "你好"]);
        assert_eq!(split.fragments[0].trailing, "，");
        assert_eq!(split.fragments[1].trailing, "。");
        assert_eq!(split.marks(), "，。");
    }

    #[test]
    fn consecutive_marks_accumulate_in_one_run() {
        let split = split_sentence("你好！？哈");
        assert_eq!(texts(&split), vec!["你好", "哈"]);
        assert_eq!(split.fragments[0].trailing, "！？");
        assert_eq!(split.fragments[1].trailing, "");
    }

    #[test]
    fn leading_marks_keep_their_position() {
        let split = split_sentence("“你好”");
        assert_eq!(split.leading, "“");
        assert_eq!(texts(&split), vec!["你好"]);
        assert_eq!(split.fragments[0].trailing, "”");
    }

    #[test]
    fn all_mark_sentence_has_no_fragments() {
        let split = split_sentence("！？…");
        assert_eq!(split.leading, "！？…");
        assert!(split.fragments.is_empty());
    }

    #[test]
    fn digits_and_whitespace_are_marks() {
        let split = split_sentence("第1章 开始");
        assert_eq!(texts(&split), vec!["第", "章", "开始"]);
        assert_eq!(split.marks(), "1 ");
    }

    #[test]
    fn split_reassembles_to_the_original() {
        for sentence in [
            "“你好！”——再见……123\nａ完",
            "！！你好",
            "你好",
            "我爱你，你好。",
        ] {
            let split = split_sentence(sentence);
            assert_eq!(reassemble(&split), sentence);
        }
    }

    #[test]
    fn empty_sentence_yields_nothing() {
        assert_eq!(split_sentence(""), FragmentedSentence::default());
    }

    #[test]
    fn class_membership() {
        for &c in &['，', '。', '！', '？', '…', '—', 'ａ', '7', '９', ' ', '\n'] {
            assert!(is_punctuation(c), "{:?} should be punctuation", c);
        }
        for &c in &['你', '好', '爱', 'x', '«'] {
            assert!(!is_punctuation(c), "{:?} should not be punctuation", c);
        }
    }
}
