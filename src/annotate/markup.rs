use super::fragment::FragmentedSentence;
use super::gloss;
use super::segment::{match_fragment, Token};
use crate::dictionary::DictIndex;

/// Emits `<w>` markup for every token of every fragment and reinserts the
/// removed punctuation at its original positions: the leading run first,
/// then each fragment's tokens followed by its trailing run. Stripping the
/// tags therefore reconstructs the sentence character for character.
pub fn build_sentence_markup(split: &FragmentedSentence, index: &DictIndex) -> String {
    let mut out = String::new();
    out.push_str(&split.leading);
    for fragment in &split.fragments {
        for token in match_fragment(&fragment.text, index) {
            push_token(&mut out, &token, index);
        }
        out.push_str(&fragment.trailing);
    }
    out
}

/// One word container. Matched tokens carry one `<ana/>` record per sense
/// (citation form, romanization with the enclosing brackets stripped,
/// resolved gloss); literal tokens carry only the character itself.
fn push_token(out: &mut String, token: &Token, index: &DictIndex) {
    out.push_str("\n<w>");
    match token {
        Token::Matched { surface, entries } => {
            for entry in entries {
                let transcr = entry
                    .transcription
                    .strip_prefix('[')
                    .unwrap_or(&entry.transcription);
                let transcr = transcr.strip_suffix(']').unwrap_or(transcr);
                out.push_str(&format!(
                    "<ana lex=\"{}\" transcr=\"{}\" sem=\"{}\"/>",
                    entry.citation,
                    transcr,
                    gloss::resolved(&entry.translation, index)
                ));
            }
            out.push_str(surface);
        }
        Token::Literal(c) => out.push(*c),
    }
    out.push_str("</w>");
}
