// ============================================================
// Layer 5 — Lexicon
// ============================================================
// Maps a lowercased word to how often it was seen with each
// Universal POS tag.
//
// Two sources feed it:
//
//   1. A built-in English vocabulary: the closed word classes
//      (determiners, pronouns, prepositions, conjunctions,
//      auxiliaries) plus common verbs, adjectives and adverbs.
//      Each built-in entry counts once.
//
//   2. An optional CoNLL-U treebank (e.g. UD English-EWT),
//      parsed with rs-conllu. Every token adds one to the
//      count of its UPOS tag, so treebank evidence quickly
//      outweighs the built-in defaults.
//
// Words that appear in neither source are left to the
// tagger's suffix rules.
//
// Reference: Universal Dependencies, CoNLL-U format

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use rs_conllu::UPOS;

use crate::domain::traits::PosTag;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "these", "those", "each", "every", "either", "neither",
    "some", "any", "no", "another", "all", "both", "such", "which", "whose", "my",
    "your", "his", "her", "its", "our", "their", "whatever", "whichever",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
    "mine", "yours", "hers", "ours", "theirs", "who", "whom", "what", "someone",
    "anyone", "everyone", "nobody", "somebody", "anybody", "everybody", "something",
    "anything", "everything", "nothing", "one",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up",
    "down", "over", "under", "around", "among", "across", "along", "behind", "beyond",
    "near", "within", "without", "upon", "toward", "towards", "via", "per", "despite",
    "except", "inside", "outside", "onto", "off", "past", "since", "until", "throughout",
    "beneath", "beside", "besides", "like", "unlike", "than", "amid", "versus",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

const SUBORDINATORS: &[&str] = &[
    "because", "although", "though", "while", "whereas", "if", "unless", "whether",
    "that", "as", "once", "so",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "will", "would", "shall", "should", "can", "could",
    "may", "might", "must", "ought", "'s", "'re", "'ve", "'ll", "'d", "'m",
];

/// Auxiliaries that are always followed by a bare verb
pub const MODALS: &[&str] = &[
    "will", "would", "shall", "should", "can", "could", "may", "might", "must",
];

const PARTICLES: &[&str] = &["not", "n't", "'"];

const INTERJECTIONS: &[&str] = &[
    "oh", "ok", "okay", "yes", "hello", "hi", "wow", "please", "hey", "alas",
];

const ADVERBS: &[&str] = &[
    "very", "also", "just", "only", "even", "still", "already", "often", "never",
    "always", "sometimes", "usually", "really", "quite", "rather", "too", "almost",
    "here", "there", "now", "then", "today", "tomorrow", "yesterday", "soon", "again",
    "ever", "perhaps", "maybe", "however", "therefore", "thus", "hence", "instead",
    "indeed", "more", "most", "less", "least", "well", "much", "far", "away", "back",
    "when", "where", "why", "how", "together", "else", "not", "yet", "later", "once",
    "ago", "abroad", "anyway", "otherwise", "moreover", "furthermore", "nevertheless",
];

const ADJECTIVES: &[&str] = &[
    "good", "bad", "new", "old", "great", "big", "small", "large", "little", "long",
    "short", "high", "low", "young", "early", "late", "important", "different", "same",
    "other", "few", "many", "several", "own", "right", "first", "last", "next",
    "certain", "possible", "public", "able", "free", "full", "whole", "real", "best",
    "better", "main", "major", "minor", "simple", "hard", "easy", "clear", "strong",
    "weak", "true", "false", "quick", "slow", "fast", "lazy", "brown", "red", "blue",
    "green", "black", "white", "yellow", "dark", "bright", "hot", "cold", "warm",
    "cool", "happy", "sad", "rich", "poor", "human", "local", "national", "general",
    "social", "political", "economic", "natural", "common", "similar", "various",
    "recent", "current", "specific", "particular", "basic", "open", "final", "entire",
    "deep", "wide", "narrow", "heavy", "tiny", "huge", "modern", "ancient", "famous",
    "available", "likely", "necessary", "single", "complex", "average", "total", "quiet",
];

const VERBS: &[&str] = &[
    "go", "goes", "went", "gone", "make", "makes", "made", "take", "takes", "took",
    "taken", "get", "gets", "got", "give", "gives", "gave", "given", "see", "sees",
    "saw", "seen", "know", "knows", "knew", "known", "think", "thinks", "thought",
    "come", "comes", "came", "say", "says", "said", "tell", "tells", "told", "find",
    "finds", "found", "use", "uses", "become", "becomes", "became", "show", "shows",
    "shown", "leave", "leaves", "left", "feel", "feels", "felt", "bring", "brings",
    "brought", "begin", "begins", "began", "begun", "keep", "keeps", "kept", "hold",
    "holds", "held", "write", "writes", "wrote", "written", "stand", "stands", "stood",
    "hear", "hears", "heard", "let", "lets", "mean", "means", "meant", "meet", "meets",
    "met", "run", "runs", "ran", "pay", "pays", "paid", "sit", "sits", "sat", "speak",
    "speaks", "spoke", "spoken", "lead", "leads", "led", "grow", "grows", "grew",
    "grown", "lose", "loses", "lost", "fall", "falls", "fell", "fallen", "send",
    "sends", "sent", "build", "builds", "built", "understand", "understands",
    "understood", "draw", "draws", "drew", "drawn", "break", "breaks", "broke",
    "broken", "spend", "spends", "spent", "rise", "rises", "rose", "risen", "drive",
    "drives", "drove", "driven", "buy", "buys", "bought", "wear", "wears", "wore",
    "choose", "chooses", "chose", "chosen", "eat", "eats", "ate", "eaten", "fly",
    "flies", "flew", "flown", "sing", "sings", "sang", "sung", "produce", "produces",
    "include", "includes", "contain", "contains", "provide", "provides", "allow",
    "allows", "help", "helps", "consider", "considers", "describe", "describes",
    "explain", "explains", "require", "requires", "remain", "remains", "suggest",
    "suggests", "appear", "appears", "create", "creates", "follow", "follows", "occur",
    "occurs", "convert", "converts", "jump", "jumps", "live", "lives", "move", "moves",
    "seem", "seems", "want", "wants", "need", "needs", "try", "tries", "ask", "asks",
    "work", "works", "call", "calls", "play", "plays", "turn", "turns", "start",
    "starts", "happen", "happens", "become", "learn", "learns", "change", "changes",
    // irregular forms the suffix rules can't see as verbs
    "sleep", "sleeps", "slept", "swim", "swims", "swam", "swum", "sell", "sells",
    "sold", "teach", "teaches", "taught", "catch", "catches", "caught", "fight",
    "fights", "fought", "seek", "seeks", "sought", "win", "wins", "won", "hide",
    "hides", "hid", "hidden", "shake", "shakes", "shook", "forget", "forgets",
    "forgot", "forgotten", "freeze", "freezes", "froze", "frozen", "bite", "bites",
    "bitten", "dig", "digs", "dug", "hung", "shone", "sank", "sunk", "steal",
    "steals", "stole", "stolen", "struck", "swung", "throw", "throws", "threw",
    "thrown", "tore", "torn", "woke", "woken", "bent", "fed", "fled", "lent", "laid",
    "bled", "bred", "clung", "crept", "dealt", "knelt", "leapt", "lain", "swept",
    "wept", "spun", "stuck", "stung", "stank", "wove", "woven", "slid",
    "bore", "borne", "forbade", "forgave", "forgiven", "overcame", "undertook",
];

/// Nouns the suffix rules would otherwise tag as adverbs or verbs
const NOUNS: &[&str] = &[
    "family", "supply", "reply", "assembly", "butterfly", "ally", "rally", "jelly",
    "anomaly", "monopoly", "italy", "bed", "seed", "speed", "need", "thing", "king",
    "ring", "spring", "string", "wing", "evening", "morning", "ceiling", "building",
    "meeting", "feeling", "painting", "hundred", "shed", "sled",
];

/// Per-tag frequency counts for one word form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts {
    counts: BTreeMap<PosTag, u32>,
}

impl TagCounts {
    pub fn add(&mut self, tag: PosTag, n: u32) {
        *self.counts.entry(tag).or_insert(0) += n;
    }

    pub fn count(&self, tag: PosTag) -> u32 {
        self.counts.get(&tag).copied().unwrap_or(0)
    }

    pub fn has(&self, tag: PosTag) -> bool {
        self.count(tag) > 0
    }

    /// Most frequent tag. Ties go to the tag declared first in
    /// PosTag, which puts NOUN ahead of everything else.
    pub fn best(&self) -> Option<PosTag> {
        let mut best: Option<(PosTag, u32)> = None;
        for (&tag, &n) in &self.counts {
            if best.map_or(true, |(_, top)| n > top) {
                best = Some((tag, n));
            }
        }
        best.map(|(tag, _)| tag)
    }

}

/// What a treebank load contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreebankStats {
    pub sentences: usize,
    pub tokens:    usize,
    pub skipped:   usize,
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, TagCounts>,
}

impl Lexicon {
    /// An empty lexicon; every word is unknown
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English vocabulary
    pub fn builtin() -> Self {
        let mut lex = Self::new();
        let groups: [(&[&str], PosTag); 13] = [
            (DETERMINERS, PosTag::Det),
            (PRONOUNS, PosTag::Pron),
            (ADPOSITIONS, PosTag::Adp),
            (COORDINATORS, PosTag::CConj),
            (SUBORDINATORS, PosTag::SConj),
            (AUXILIARIES, PosTag::Aux),
            (PARTICLES, PosTag::Part),
            (INTERJECTIONS, PosTag::Intj),
            (ADVERBS, PosTag::Adv),
            (ADJECTIVES, PosTag::Adj),
            (VERBS, PosTag::Verb),
            (NOUNS, PosTag::Noun),
            (MODALS, PosTag::Aux),
        ];
        for (words, tag) in groups {
            for word in words {
                lex.add(word, tag, 1);
            }
        }
        lex
    }

    pub fn add(&mut self, word: &str, tag: PosTag, n: u32) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .add(tag, n);
    }

    /// Counts for `word`, case-insensitively
    pub fn lookup(&self, word: &str) -> Option<&TagCounts> {
        self.entries.get(&word.to_lowercase())
    }

    /// Number of distinct word forms
    pub fn word_forms(&self) -> usize {
        self.entries.len()
    }

    /// Add every tagged token of a CoNLL-U file.
    /// Sentences the parser rejects are skipped and counted.
    pub fn merge_treebank(&mut self, path: &Path) -> Result<TreebankStats> {
        let file = File::open(path)
            .with_context(|| format!("Cannot open treebank '{}'", path.display()))?;

        let sentences = rs_conllu::parse_file(file).map(|parsed| {
            parsed.map(|sentence| {
                sentence
                    .tokens
                    .into_iter()
                    .map(|token| (token.form, upos_to_tag(&token.upos)))
            })
        });
        let stats = self.merge_sentences(sentences);

        if stats.skipped > 0 {
            tracing::warn!(
                "Skipped {} unparsable sentences in '{}'",
                stats.skipped,
                path.display()
            );
        }
        tracing::info!(
            "Treebank '{}': {} sentences, {} tokens",
            path.display(),
            stats.sentences,
            stats.tokens
        );
        Ok(stats)
    }

    /// Count parsed sentences of (form, tag) pairs. An `Err` item
    /// is one rejected sentence; untagged tokens are ignored.
    pub fn merge_sentences<I, S, E>(&mut self, sentences: I) -> TreebankStats
    where
        I: IntoIterator<Item = std::result::Result<S, E>>,
        S: IntoIterator<Item = (String, Option<PosTag>)>,
    {
        let mut stats = TreebankStats::default();
        for parsed in sentences {
            let Ok(tokens) = parsed else {
                stats.skipped += 1;
                continue;
            };
            stats.sentences += 1;

            for (form, tag) in tokens {
                if let Some(tag) = tag {
                    self.add(&form, tag, 1);
                    stats.tokens += 1;
                }
            }
        }
        stats
    }
}

/// Map an rs-conllu tag onto ours. Multiword range lines carry
/// no UPOS and are ignored.
fn upos_to_tag(upos: &Option<UPOS>) -> Option<PosTag> {
    let tag = match upos {
        Some(UPOS::NOUN)  => PosTag::Noun,
        Some(UPOS::PROPN) => PosTag::PropNoun,
        Some(UPOS::VERB)  => PosTag::Verb,
        Some(UPOS::AUX)   => PosTag::Aux,
        Some(UPOS::ADJ)   => PosTag::Adj,
        Some(UPOS::ADV)   => PosTag::Adv,
        Some(UPOS::ADP)   => PosTag::Adp,
        Some(UPOS::DET)   => PosTag::Det,
        Some(UPOS::PRON)  => PosTag::Pron,
        Some(UPOS::CCONJ) => PosTag::CConj,
        Some(UPOS::SCONJ) => PosTag::SConj,
        Some(UPOS::NUM)   => PosTag::Num,
        Some(UPOS::PART)  => PosTag::Part,
        Some(UPOS::INTJ)  => PosTag::Intj,
        Some(UPOS::PUNCT) => PosTag::Punct,
        Some(UPOS::SYM)   => PosTag::Sym,
        Some(UPOS::X)     => PosTag::X,
        None              => return None,
    };
    Some(tag)
}
