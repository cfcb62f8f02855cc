// ============================================================
// Layer 5 — Part-of-Speech Tagger
// ============================================================
// Assigns a Universal POS tag to every token of a sentence.
//
// Per token, first match wins:
//   1. No letters or digits → PUNCT (or SYM for $, %, +, ...)
//   2. Numeric              → NUM
//   3. Known to the lexicon → its most frequent tag, with a
//                             capitalised mid-sentence NOUN
//                             promoted to PROPN
//   4. Unknown              → capitalisation and suffix rules
//
// A second pass fixes two common verb patterns the per-token
// rules get wrong:
//   "the fox jumps over"  unknown -s word after a noun → VERB
//   "to study", "can fly" word after to/modal → VERB

use crate::domain::traits::PosTag;
use crate::nlp::lexicon::{Lexicon, MODALS};
use crate::nlp::tokenizer::is_word;

const SYMBOLS: &[char] = &[
    '$', '%', '&', '+', '=', '<', '>', '@', '#', '*', '©', '®', '°', '€', '£', '¥', '§',
    '^', '~', '|', '/', '\\', '±', '×', '÷',
];

const ADVERB_SUFFIXES: &[&str] = &["ly"];
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify"];
const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "less", "ish", "istic",
];

#[derive(Debug, Clone, Copy)]
struct Guess {
    tag:   PosTag,
    known: bool,
}

pub struct Tagger {
    lexicon: Lexicon,
}

impl Tagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// One tag per token, same order as `tokens`.
    pub fn tag(&self, tokens: &[&str]) -> Vec<PosTag> {
        let first_word = tokens.iter().position(|t| is_word(t));

        let mut guesses: Vec<Guess> = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| self.tag_token(t, Some(i) == first_word))
            .collect();

        self.apply_context(tokens, &mut guesses);
        guesses.into_iter().map(|g| g.tag).collect()
    }

    fn tag_token(&self, token: &str, sentence_initial: bool) -> Guess {
        if !is_word(token) {
            let tag = if token.chars().all(|c| SYMBOLS.contains(&c)) {
                PosTag::Sym
            } else {
                PosTag::Punct
            };
            return Guess { tag, known: true };
        }

        if is_numeric(token) {
            return Guess { tag: PosTag::Num, known: true };
        }

        let capitalised = starts_uppercase(token);

        if let Some(counts) = self.lexicon.lookup(token) {
            let mut tag = counts.best().unwrap_or(PosTag::X);
            if capitalised && !sentence_initial && (tag == PosTag::Noun || counts.has(PosTag::PropNoun)) {
                tag = PosTag::PropNoun;
            } else if !capitalised && tag == PosTag::PropNoun {
                tag = PosTag::Noun;
            }
            return Guess { tag, known: true };
        }

        let tag = if (capitalised && !sentence_initial) || is_acronym(token) {
            PosTag::PropNoun
        } else {
            match suffix_tag(&token.to_lowercase()) {
                Some(tag) => tag,
                None if capitalised => PosTag::PropNoun,
                None => PosTag::Noun,
            }
        };
        Guess { tag, known: false }
    }

    fn apply_context(&self, tokens: &[&str], guesses: &mut [Guess]) {
        for i in 1..tokens.len() {
            let word = tokens[i];
            let prev = tokens[i - 1].to_lowercase();

            // "the fox jumps over the dog"
            let third_person = !guesses[i].known
                && guesses[i].tag == PosTag::Noun
                && word.len() > 3
                && word.ends_with('s')
                && !word.ends_with("ss")
                && matches!(guesses[i - 1].tag, PosTag::Noun | PosTag::PropNoun | PosTag::Pron)
                && guesses.get(i + 1).map_or(false, |next| {
                    matches!(
                        next.tag,
                        PosTag::Det | PosTag::Adp | PosTag::Adv | PosTag::Pron | PosTag::Num
                    )
                });
            if third_person {
                guesses[i].tag = PosTag::Verb;
                continue;
            }

            // "to study", "can photosynthesise"
            let after_modal = MODALS.contains(&prev.as_str());
            if after_modal || prev == "to" {
                let seen_as_verb = self
                    .lexicon
                    .lookup(word)
                    .map_or(false, |c| c.has(PosTag::Verb));
                let bare_unknown = after_modal && !guesses[i].known && !starts_uppercase(word);
                if seen_as_verb || bare_unknown {
                    guesses[i].tag = PosTag::Verb;
                }
            }
        }
    }
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().map_or(false, char::is_uppercase)
}

fn is_acronym(token: &str) -> bool {
    let letters: Vec<char> = token.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

fn is_numeric(token: &str) -> bool {
    token.chars().next().map_or(false, |c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | ':' | '-'))
}

fn suffix_tag(lower: &str) -> Option<PosTag> {
    let len = lower.chars().count();
    let matches_any = |suffixes: &[&str]| {
        suffixes
            .iter()
            .any(|s| lower.ends_with(s) && len >= s.chars().count() + 3)
    };

    if matches_any(ADVERB_SUFFIXES) {
        Some(PosTag::Adv)
    } else if matches_any(VERB_SUFFIXES) {
        Some(PosTag::Verb)
    } else if matches_any(ADJECTIVE_SUFFIXES) {
        Some(PosTag::Adj)
    } else {
        None
    }
}
