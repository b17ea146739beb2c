use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::dictionary::DictIndex;

lazy_static! {
    /// Cross-reference marker + headword, with optional `|disambiguator` and
    /// optional `[qualifier]`. Alternation order matters: `see_also_` must
    /// be tried before its prefix `see_`.
    static ref RE_XREF: Regex =
        Regex::new(r"(see_also_|see_|same_as_|variant_of_)([^,|\[]+)(?:\|([^,\[]+))?(?:\[[^\]]*\])?")
            .unwrap();
}

/// Normalizes a raw slash-delimited translation block into display form.
///
/// Straight double quotes become guillemets based on their immediate
/// context, `&` is spelled out, `/`-separated senses turn into a
/// comma-separated list and internal spaces collapse to the `_` joiner (this
/// joiner is what later exposes cross-reference markers such as
/// `see_also_`). A space directly after a comma is separator spacing and is
/// left alone, which makes the whole pass idempotent. Empty senses — in
/// particular the artifact leading sense a recovered romanization leaves
/// behind — are dropped, and trailing commas/whitespace trimmed.
pub fn clean(raw: &str) -> String {
    let quoted = orient_quotes(raw);
    let mut senses: Vec<String> = Vec::new();
    for sense in quoted.split('/') {
        let sense = sense.trim();
        if sense.is_empty() {
            continue;
        }
        senses.push(join_spaces(&sense.replace('&', "and")));
    }
    let mut out = senses.join(", ");
    while out.ends_with(',') || out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Classifies each straight double quote by its neighbors in one pass:
/// opening after a slash, space, comma or `(`; closing before a slash,
/// space, comma or `)`. Quotes in any other context are left untouched.
fn orient_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '"' {
            out.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|j| chars[j]);
        let next = chars.get(i + 1).copied();
        if prev.is_some_and(|p| matches!(p, '/' | ' ' | ',' | '(')) {
            out.push('«');
        } else if next.is_some_and(|n| matches!(n, '/' | ' ' | ',' | ')')) {
            out.push('»');
        } else {
            out.push('"');
        }
    }
    out
}

fn join_spaces(sense: &str) -> String {
    let mut out = String::with_capacity(sense.len());
    let mut prev: Option<char> = None;
    for c in sense.chars() {
        if c == ' ' && prev != Some(',') {
            out.push('_');
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Resolves cross-reference markers in an already-cleaned gloss.
///
/// A resolvable reference is replaced by the cleaned gloss of the target
/// headword's *first* sense, marker included in the replacement span so no
/// marker text survives. An absent headword leaves the reference untouched:
/// gloss enrichment is best effort, not an error. Single pass, never
/// recursive — substituted text is not rescanned for further markers.
pub fn resolve_links(gloss: &str, index: &DictIndex) -> String {
    RE_XREF
        .replace_all(gloss, |caps: &Captures| {
            let target = caps
                .get(3)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            match index.first(target) {
                Some(entry) => clean(&entry.translation),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Full gloss treatment as the markup builder needs it.
pub fn resolved(raw: &str, index: &DictIndex) -> String {
    resolve_links(&clean(raw), index)
}
