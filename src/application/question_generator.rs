// ============================================================
// Layer 2 — Question Generator
// ============================================================
// Turns document text into quiz questions.
//
//   1. Segment the text into sentences (LanguageModel)
//   2. Keep sentences with more than 6 words
//   3. None left → a single placeholder question
//   4. Otherwise, `count` times:
//        pick a sentence at random (with replacement)
//        tag it, keep NOUN/PROPN tokens longer than 2 chars
//        keyword found → blank its first occurrence
//        no keyword    → ask for the main idea
//
// The random source is passed in, so a seeded StdRng gives
// the same quiz for the same text every time.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::question::Question;
use crate::domain::traits::LanguageModel;

/// A sentence needs at least this many words to be asked about.
pub const MIN_SENTENCE_WORDS: usize = 7;

/// A keyword needs at least this many characters.
pub const MIN_KEYWORD_CHARS: usize = 3;

pub struct QuestionGenerator<M> {
    model: M,
}

impl<M: LanguageModel> QuestionGenerator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Sentences long enough to build a question from.
    pub fn eligible_sentences(&self, text: &str) -> Vec<String> {
        self.model
            .segment(text)
            .into_iter()
            .filter(|s| s.split_whitespace().count() >= MIN_SENTENCE_WORDS)
            .collect()
    }

    /// Nouns of `sentence` usable as answers, in order, duplicates kept.
    pub fn keyword_candidates(&self, sentence: &str) -> Vec<String> {
        self.model
            .tag(sentence)
            .into_iter()
            .filter(|t| t.is_noun() && t.text.chars().count() >= MIN_KEYWORD_CHARS)
            .map(|t| t.text)
            .collect()
    }

    pub fn generate<R: Rng + ?Sized>(&self, text: &str, count: usize, rng: &mut R) -> Vec<Question> {
        let sentences = self.eligible_sentences(text);
        if sentences.is_empty() {
            tracing::info!("No sentence with {}+ words, returning placeholder", MIN_SENTENCE_WORDS);
            return vec![Question::Placeholder];
        }
        tracing::debug!("{} eligible sentences", sentences.len());

        (0..count)
            .map(|_| {
                let sentence = &sentences[rng.gen_range(0..sentences.len())];
                let keywords = self.keyword_candidates(sentence);
                match keywords.choose(rng) {
                    Some(keyword) => Question::fill_in_blank(sentence, keyword),
                    None          => Question::main_idea(sentence.as_str()),
                }
            })
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::question::{BLANK, MAIN_IDEA_PROMPT};
    use crate::domain::traits::{PosTag, TaggedToken};
    use crate::nlp::pipeline::EnglishPipeline;
    use crate::nlp::segmenter::SentenceSegmenter;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    /// Real segmentation, but only the listed words count as nouns.
    struct FixedNouns(&'static [&'static str]);

    impl LanguageModel for FixedNouns {
        fn segment(&self, text: &str) -> Vec<String> {
            SentenceSegmenter::new().segment(text)
        }

        fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
            sentence
                .split_whitespace()
                .map(|w| {
                    let pos = if self.0.contains(&w) { PosTag::Noun } else { PosTag::Verb };
                    TaggedToken::new(w, pos)
                })
                .collect()
        }
    }

    const PANGRAM: &str = "The quick brown fox jumps over the lazy dog near the river.";

    const ESSAY: &str = "Photosynthesis converts light energy into chemical energy inside plants. \
        The chloroplast contains chlorophyll that absorbs mostly red and blue light. \
        Oxygen is released into the atmosphere as a useful by-product of the process. \
        Plants store the resulting sugar as starch for later growth.";

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_fixed_keyword_scenario() {
        let gen = QuestionGenerator::new(FixedNouns(&["fox"]));
        let questions = gen.generate(PANGRAM, 1, &mut rng(7));
        assert_eq!(
            questions,
            vec![Question::FillInBlank {
                prompt: "The quick brown _____ jumps over the lazy dog near the river.".into(),
                answer: "fox".into(),
            }]
        );
    }

    #[test]
    fn test_short_sentences_give_placeholder() {
        let gen = QuestionGenerator::new(EnglishPipeline::builtin());
        for n in [1, 5, 15] {
            assert_eq!(gen.generate("Ok. Go now.", n, &mut rng(1)), vec![Question::Placeholder]);
        }
    }

    #[test]
    fn test_empty_text_gives_placeholder() {
        let gen = QuestionGenerator::new(EnglishPipeline::builtin());
        assert_eq!(gen.generate("", 5, &mut rng(1)), vec![Question::Placeholder]);
        assert_eq!(gen.generate(" \n\t ", 5, &mut rng(1)), vec![Question::Placeholder]);
    }

    #[test]
    fn test_returns_requested_count() {
        let gen = QuestionGenerator::new(EnglishPipeline::builtin());
        assert_eq!(gen.generate(PANGRAM, 1, &mut rng(3)).len(), 1);
        assert_eq!(gen.generate(PANGRAM, 15, &mut rng(3)).len(), 15);
        assert_eq!(gen.generate(ESSAY, 5, &mut rng(3)).len(), 5);
    }

    #[test]
    fn test_sentence_of_exactly_six_words_is_skipped() {
        let gen = QuestionGenerator::new(EnglishPipeline::builtin());
        assert!(gen.eligible_sentences("One two three four five six.").is_empty());
        assert_eq!(gen.eligible_sentences("One two three four five six seven.").len(), 1);
    }

    #[test]
    fn test_noun_free_sentence_is_main_idea() {
        let gen = QuestionGenerator::new(FixedNouns(&[]));
        let sentence = "It was very quiet and then it was not.";
        for q in gen.generate(sentence, 4, &mut rng(11)) {
            assert_eq!(q, Question::main_idea(sentence));
            assert_eq!(q.prompt(), MAIN_IDEA_PROMPT);
        }
    }

    #[test]
    fn test_short_nouns_are_not_keywords() {
        let gen = QuestionGenerator::new(FixedNouns(&["ox", "fox"]));
        let text = "An ox and a fox rest near the barn today.";
        assert_eq!(gen.keyword_candidates(text), vec!["fox"]);
        for q in gen.generate(text, 10, &mut rng(5)) {
            assert_eq!(q.answer(), Some("fox"));
        }
    }

    #[test]
    fn test_filling_blank_reconstructs_sentence() {
        let gen = QuestionGenerator::new(EnglishPipeline::builtin());
        let sentences = gen.eligible_sentences(ESSAY);

        for q in gen.generate(ESSAY, 40, &mut rng(42)) {
            match &q {
                Question::FillInBlank { prompt, answer } => {
                    assert!(prompt.contains(BLANK));
                    let rebuilt = prompt.replacen(BLANK, answer, 1);
                    assert!(sentences.contains(&rebuilt), "not a source sentence: {rebuilt}");
                }
                Question::MainIdea { sentence } => {
                    assert_eq!(q.prompt(), MAIN_IDEA_PROMPT);
                    assert!(sentences.contains(sentence));
                }
                Question::Placeholder => panic!("unexpected placeholder"),
            }
        }
    }

    #[test]
    fn test_same_seed_same_questions() {
        let gen = QuestionGenerator::new(EnglishPipeline::builtin());
        let a = gen.generate(ESSAY, 10, &mut rng(99));
        let b = gen.generate(ESSAY, 10, &mut rng(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_covers_several_sentences() {
        let gen = QuestionGenerator::new(EnglishPipeline::builtin());
        let covered: HashSet<String> = gen
            .generate(ESSAY, 100, &mut rng(2024))
            .iter()
            .map(|q| match q {
                Question::FillInBlank { prompt, answer } => prompt.replacen(BLANK, answer, 1),
                Question::MainIdea { sentence } => sentence.clone(),
                Question::Placeholder => String::new(),
            })
            .collect();
        assert!(covered.len() > 1);
    }

    #[test]
    fn test_keyword_choice_varies_within_sentence() {
        let gen = QuestionGenerator::new(FixedNouns(&["quick", "fox", "dog"]));
        assert_eq!(gen.keyword_candidates(PANGRAM), vec!["quick", "fox", "dog"]);

        let answers: HashSet<String> = gen
            .generate(PANGRAM, 60, &mut rng(31))
            .iter()
            .filter_map(|q| q.answer().map(str::to_string))
            .collect();
        assert!(answers.len() > 1, "only saw {answers:?}");
        assert!(answers.iter().all(|a| ["quick", "fox", "dog"].contains(&a.as_str())));
    }

    #[test]
    fn test_duplicate_keyword_blanks_first_occurrence_only() {
        let gen = QuestionGenerator::new(FixedNouns(&["cat"]));
        let text = "The cat watched another cat sleep in the sun.";
        let q = gen.generate(text, 1, &mut rng(0)).remove(0);
        assert_eq!(q.prompt(), "The _____ watched another cat sleep in the sun.");
    }
}
