// ============================================================
// Layer 5 — Sentence Segmenter
// ============================================================
// Splits document text into sentences.
//
// A sentence ends at '.', '!', '?' or '…' (plus any closing
// quotes or brackets right after it) when:
//   - the terminator is followed by whitespace or end of text
//   - the next word does not start with a lowercase letter
//   - for a single '.', the word before it is not a known
//     abbreviation ("Dr.", "e.g.") or a capital initial ("J.")
//
// A blank line always ends a sentence, so PDF headings
// without punctuation don't swallow the paragraph below.
//
// Each sentence is trimmed and its whitespace collapsed, which
// also joins the hard line wraps PDFs put inside sentences.

use std::collections::HashSet;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g",
    "i.e", "cf", "al", "inc", "ltd", "co", "corp", "dept", "univ", "est", "approx",
    "no", "nos", "fig", "figs", "vol", "vols", "ch", "sec", "pp", "ed", "eds",
    "gen", "gov", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec", "u.s", "u.k", "a.m", "p.m",
];

pub struct SentenceSegmenter {
    abbreviations: HashSet<&'static str>,
}

impl SentenceSegmenter {
    pub fn new() -> Self {
        Self { abbreviations: ABBREVIATIONS.iter().copied().collect() }
    }

    /// Split `text` into trimmed, whitespace-collapsed sentences.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences = Vec::new();
        let mut start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let (pos, c) = chars[i];

            // ── Paragraph break: '\n', optional spaces, '\n' ─────────────────
            if c == '\n' {
                let mut j = i + 1;
                while j < chars.len() && chars[j].1 != '\n' && chars[j].1.is_whitespace() {
                    j += 1;
                }
                if j < chars.len() && chars[j].1 == '\n' {
                    push_sentence(&mut sentences, &text[start..pos]);
                    start = chars[j].0;
                    i = j + 1;
                } else {
                    i += 1;
                }
                continue;
            }

            if !is_terminator(c) {
                i += 1;
                continue;
            }

            // ── Terminator run, then closing quotes/brackets ─────────────────
            let mut j = i + 1;
            while j < chars.len() && is_terminator(chars[j].1) {
                j += 1;
            }
            let single_period = c == '.' && j == i + 1;
            while j < chars.len() && is_closer(chars[j].1) {
                j += 1;
            }

            let followed_by_space = j >= chars.len() || chars[j].1.is_whitespace();

            if followed_by_space
                && !next_word_is_lowercase(&chars[j..])
                && !(single_period && self.is_abbreviation(&text[start..pos]))
            {
                let end = chars.get(j).map(|&(p, _)| p).unwrap_or(text.len());
                push_sentence(&mut sentences, &text[start..end]);
                start = end;
            }
            i = j;
        }

        push_sentence(&mut sentences, &text[start..]);
        sentences
    }

    /// Does the text before a '.' end in an abbreviation or initial?
    fn is_abbreviation(&self, before: &str) -> bool {
        let word = before
            .split_whitespace()
            .last()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        let mut letters = word.chars();
        if let (Some(first), None) = (letters.next(), letters.next()) {
            return first.is_uppercase();
        }
        self.abbreviations.contains(word.to_lowercase().as_str())
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

fn next_word_is_lowercase(rest: &[(usize, char)]) -> bool {
    rest.iter()
        .map(|&(_, c)| c)
        .find(|c| !c.is_whitespace())
        .map(|c| c.is_lowercase())
        .unwrap_or(false)
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        sentences.push(collapsed);
    }
}
