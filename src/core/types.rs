// src/core/types.rs
use crate::error::Result;
use std::io::{Read, Write};

/// Coarse script bucket of a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    LatinLetter,
    LatinDigit,
    ScriptLetter,
    ScriptDigit,
    /// Arabic/Farsi marks that are dropped from words.
    Diacritic,
    Unknown,
}

/// Classification record for one code point.
/// `canonical` is the form substituted into words; it is the identity for
/// `Unknown` and meaningless for `Diacritic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    pub class: ScriptClass,
    pub canonical: char,
}

/// A non-empty, ordered list of correction candidates.
///
/// The first entry is the default pick when no context decides otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates(Vec<String>);

impl Candidates {
    /// A candidate list holding only `word`.
    pub fn single(word: impl Into<String>) -> Self {
        Self(vec![word.into()])
    }

    /// Wraps `words`, returning `None` if it is empty.
    pub fn from_vec(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self(words))
        }
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.iter().any(|c| c == word)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// State that can be written to and restored from a byte stream.
pub trait Snapshot {
    /// Encodes the current state into `writer`.
    fn save(&self, writer: &mut dyn Write) -> Result<()>;

    /// Replaces the current state with the one decoded from `reader`.
    /// On error the previous state is left untouched.
    fn load(&self, reader: &mut dyn Read) -> Result<()>;
}

/// Produces spelling corrections for a word.
pub trait SpellChecker: Send + Sync {
    /// Correction candidates for `word`. Never empty.
    fn check(&self, word: &str) -> Candidates;

    /// Adds `words` to the known vocabulary.
    fn train(&self, words: &[String]);

    /// The persistence capability, if this checker has one.
    fn snapshot(&self) -> Option<&dyn Snapshot> {
        None
    }
}

/// Picks the candidate that best follows a context word.
pub trait SemanticMatcher: Send + Sync {
    /// Returns the first candidate observed after `context` together with
    /// `true`, or the first candidate and `false` if none was observed.
    fn match_context(&self, context: &str, candidates: &Candidates) -> (String, bool);

    /// Records that `word` followed `context`.
    fn train(&self, context: &str, word: &str);

    fn snapshot(&self) -> Option<&dyn Snapshot> {
        None
    }
}
