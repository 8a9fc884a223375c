// File: src/learning.rs
use crate::core::tokenizer::tokenize_str;
use crate::core::types::{SemanticMatcher, SpellChecker};

/// Feeds training phrases into the spelling and context models.
pub struct LearningEngine<'a> {
    spell_checker: &'a dyn SpellChecker,
    semantic_matcher: &'a dyn SemanticMatcher,
}

impl<'a> LearningEngine<'a> {
    pub fn new(spell_checker: &'a dyn SpellChecker, semantic_matcher: &'a dyn SemanticMatcher) -> Self {
        Self { spell_checker, semantic_matcher }
    }

    /// Tokenizes `phrase`, adds its words to the vocabulary and records every
    /// adjacent pair as (context, follower). Returns the number of words.
    pub fn learn_phrase(&self, phrase: &str) -> usize {
        let words = tokenize_str(phrase);
        self.spell_checker.train(&words);

        for pair in words.windows(2) {
            self.semantic_matcher.train(&pair[0], &pair[1]);
        }
        words.len()
    }

    pub fn learn<I, S>(&self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut phrase_count = 0usize;
        let mut word_count = 0usize;
        for phrase in phrases {
            word_count += self.learn_phrase(phrase.as_ref());
            phrase_count += 1;
        }
        log::debug!("trained on {} phrases ({} words)", phrase_count, word_count);
    }
}
