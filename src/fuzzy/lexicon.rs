// File: src/fuzzy/lexicon.rs
use crate::core::types::{Candidates, Snapshot, SpellChecker};
use crate::error::Result;
use crate::fuzzy::levenshtein::within_one_edit;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Words shorter than this are never learned or corrected.
pub const MIN_WORD_LEN: usize = 2;

/// Corrections are limited to a single insertion, deletion or substitution.
pub const MAX_EDIT_DISTANCE: usize = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct LexiconState {
    /// Maps a length in code points to the words of that length, in the
    /// order they were first trained.
    buckets: HashMap<usize, IndexSet<String>>,
}

/// A length-bucketed vocabulary that suggests single-edit corrections.
#[derive(Debug, Default)]
pub struct Lexicon {
    state: RwLock<LexiconState>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct trained words.
    pub fn len(&self) -> usize {
        self.read().buckets.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, LexiconState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LexiconState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LexiconState {
    /// Candidate order: the word itself if known, then single-edit matches of
    /// the same length, then one shorter, then one longer. Each bucket keeps
    /// training order.
    fn check(&self, word: &str) -> Candidates {
        let length = word.chars().count();
        if self.buckets.is_empty() || length < MIN_WORD_LEN {
            return Candidates::single(word);
        }

        let mut found = Vec::new();

        if let Some(bucket) = self.buckets.get(&length) {
            if bucket.contains(word) {
                found.push(word.to_string());
            }
            collect_near(bucket, word, &mut found);
        }

        if length > MIN_WORD_LEN {
            if let Some(bucket) = self.buckets.get(&(length - 1)) {
                collect_near(bucket, word, &mut found);
            }
        }

        if let Some(bucket) = self.buckets.get(&(length + 1)) {
            collect_near(bucket, word, &mut found);
        }

        Candidates::from_vec(found).unwrap_or_else(|| Candidates::single(word))
    }

    fn insert(&mut self, word: &str) -> bool {
        let length = word.chars().count();
        if length < MIN_WORD_LEN {
            return false;
        }
        self.buckets.entry(length).or_default().insert(word.to_string())
    }
}

fn collect_near(bucket: &IndexSet<String>, word: &str, found: &mut Vec<String>) {
    found.extend(
        bucket
            .iter()
            .filter(|entry| within_one_edit(word, entry))
            .cloned(),
    );
}

impl SpellChecker for Lexicon {
    fn check(&self, word: &str) -> Candidates {
        let candidates = self.read().check(word);
        log::trace!("check {:?} -> {:?}", word, candidates);
        candidates
    }

    fn train(&self, words: &[String]) {
        let mut state = self.write();
        let added = words.iter().filter(|w| state.insert(w)).count();
        log::debug!("lexicon trained: {} new of {} words", added, words.len());
    }

    fn snapshot(&self) -> Option<&dyn Snapshot> {
        Some(self)
    }
}

impl Snapshot for Lexicon {
    fn save(&self, writer: &mut dyn Write) -> Result<()> {
        bincode::serialize_into(writer, &*self.read())?;
        Ok(())
    }

    fn load(&self, reader: &mut dyn Read) -> Result<()> {
        let restored: LexiconState = bincode::deserialize_from(reader)?;
        *self.write() = restored;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained(words: &[&str]) -> Lexicon {
        let lexicon = Lexicon::new();
        let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        lexicon.train(&words);
        lexicon
    }

    #[test]
    fn empty_lexicon_passes_words_through() {
        let lexicon = Lexicon::new();
        assert!(!lexicon.check("").is_empty());
        assert_eq!(lexicon.check("anything").into_vec(), vec!["anything"]);
        assert_eq!(lexicon.check("").into_vec(), vec![""]);
    }

    #[test]
    fn known_word_comes_first() {
        let lexicon = trained(&["quality", "quantity", "quantify"]);
        assert_eq!(lexicon.check("quantity").into_vec(), vec!["quantity", "quantify"]);
    }

    #[test]
    fn misspelling_collects_every_single_edit_match() {
        let lexicon = trained(&["quality", "quantity", "quantify"]);
        // same-length bucket before the shorter one
        assert_eq!(lexicon.check("quanlity").into_vec(), vec!["quantity", "quality"]);
    }

    #[test]
    fn unknown_word_falls_back_to_itself() {
        let lexicon = trained(&["quality", "quantity", "quantify"]);
        assert_eq!(lexicon.check("unknown").into_vec(), vec!["unknown"]);
    }

    #[test]
    fn longer_bucket_is_searched() {
        let lexicon = trained(&["band"]);
        assert_eq!(lexicon.check("bad").into_vec(), vec!["band"]);
    }

    #[test]
    fn two_letter_words_do_not_search_single_letters() {
        let lexicon = trained(&["ab", "abc"]);
        assert_eq!(lexicon.check("ax").into_vec(), vec!["ab"]);
        assert_eq!(lexicon.check("a").into_vec(), vec!["a"]);
    }

    #[test]
    fn short_words_are_not_learned() {
        let lexicon = trained(&["a", "\u{0628}", "ok"]);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn training_is_idempotent() {
        let lexicon = trained(&["bass", "bass", "guitar"]);
        lexicon.train(&["bass".to_string()]);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn candidates_are_never_empty() {
        let lexicon = trained(&["bass", "guitar", "stone"]);
        for word in ["", "x", "bas", "bass", "stones", "zzzzzzzzzz"] {
            let candidates = lexicon.check(word);
            assert!(!candidates.is_empty(), "{:?}", word);
            assert!(candidates.len() >= 1, "{:?}", word);
        }
    }

    #[test]
    fn snapshot_restores_order() {
        let lexicon = trained(&["cart", "card", "care"]);
        let mut bytes = Vec::new();
        lexicon.save(&mut bytes).unwrap();

        let restored = Lexicon::new();
        restored.load(&mut bytes.as_slice()).unwrap();
        assert_eq!(restored.check("carx").into_vec(), vec!["cart", "card", "care"]);
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let lexicon = trained(&["bass"]);
        assert!(lexicon.load(&mut [0xFFu8, 0xFF].as_slice()).is_err());
        assert_eq!(lexicon.check("base").into_vec(), vec!["bass"]);
    }
}
