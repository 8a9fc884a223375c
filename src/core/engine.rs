// File: src/core/engine.rs
use crate::core::context::ContextTable;
use crate::core::tokenizer::tokenize;
use crate::core::types::{Candidates, SemanticMatcher, SpellChecker};
use crate::error::{Error, Result};
use crate::fuzzy::lexicon::Lexicon;
use crate::learning::LearningEngine;
use crate::persistence::{load_from_disk, save_to_disk, CONTEXT_MEMBER, LEXICON_MEMBER};
use std::io::{BufRead, Cursor, ErrorKind};
use std::path::{Path, PathBuf};

/// Reconstructs phrases from noisy text using a spelling model and a
/// context model.
///
/// Both models guard their own state, so a `Processor` can be shared across
/// threads; it adds no locking of its own.
pub struct Processor {
    spell_checker: Box<dyn SpellChecker>,
    semantic_matcher: Box<dyn SemanticMatcher>,
    snapshot_path: Option<PathBuf>,
}

/// Assembles a [`Processor`], filling in [`Lexicon`] and [`ContextTable`]
/// for any collaborator that is not supplied.
#[derive(Default)]
pub struct ProcessorBuilder {
    spell_checker: Option<Box<dyn SpellChecker>>,
    semantic_matcher: Option<Box<dyn SemanticMatcher>>,
    snapshot_path: Option<PathBuf>,
}

impl ProcessorBuilder {
    pub fn spell_checker(mut self, spell_checker: impl SpellChecker + 'static) -> Self {
        self.spell_checker = Some(Box::new(spell_checker));
        self
    }

    pub fn semantic_matcher(mut self, semantic_matcher: impl SemanticMatcher + 'static) -> Self {
        self.semantic_matcher = Some(Box::new(semantic_matcher));
        self
    }

    /// Where [`Processor::save_snapshot`] writes.
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    pub fn build(self) -> Processor {
        Processor {
            spell_checker: self.spell_checker.unwrap_or_else(|| Box::new(Lexicon::new())),
            semantic_matcher: self.semantic_matcher.unwrap_or_else(|| Box::new(ContextTable::new())),
            snapshot_path: self.snapshot_path,
        }
    }
}

impl Processor {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ProcessorBuilder {
        ProcessorBuilder::default()
    }

    /// Loads the snapshot at `path`, or starts untrained if no file exists
    /// there. Either way `path` becomes the snapshot path. Any other load
    /// failure is returned so a damaged snapshot is never saved over.
    pub fn from_file_or_new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let engine = Self::builder().snapshot_path(path).build();
        match engine.load(path) {
            Ok(()) => {}
            Err(Error::Io(err)) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no snapshot at {}, starting untrained", path.display());
            }
            Err(err) => return Err(err),
        }
        Ok(engine)
    }

    /// Trains both models on `phrases`.
    pub fn train<I, S>(&self, phrases: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LearningEngine::new(self.spell_checker.as_ref(), self.semantic_matcher.as_ref()).learn(phrases);
    }

    /// Spelling candidates for a single normalized word.
    pub fn check(&self, word: &str) -> Candidates {
        self.spell_checker.check(word)
    }

    /// Splits `reader` into corrected phrases.
    ///
    /// Segmentation is greedy and never backtracks: each word either extends
    /// the open phrase, when the context model has seen one of its candidates
    /// after the phrase's last word, or closes it and starts a new one.
    pub fn process<R: BufRead>(&self, reader: R) -> Result<Vec<String>> {
        let words = tokenize(reader)?;

        let mut phrases = Vec::new();
        let mut current_phrase: Vec<String> = Vec::new();

        for word in &words {
            let candidates = self.spell_checker.check(word);

            let Some(context) = current_phrase.last() else {
                current_phrase.push(candidates.first().to_string());
                continue;
            };

            let (best, matched) = self.semantic_matcher.match_context(context, &candidates);
            if matched {
                current_phrase.push(best);
            } else {
                log::trace!("phrase boundary before {:?}", best);
                phrases.push(current_phrase.join(" "));
                current_phrase = vec![best];
            }
        }

        if !current_phrase.is_empty() {
            phrases.push(current_phrase.join(" "));
        }

        log::debug!("{} words -> {} phrases", words.len(), phrases.len());
        Ok(phrases)
    }

    pub fn process_str(&self, text: &str) -> Vec<String> {
        // Reading from memory cannot fail.
        self.process(Cursor::new(text)).unwrap_or_default()
    }

    /// Writes both models to an archive at `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_to_disk(
            path.as_ref(),
            &[
                (LEXICON_MEMBER, self.spell_checker.snapshot()),
                (CONTEXT_MEMBER, self.semantic_matcher.snapshot()),
            ],
        )
    }

    /// Replaces model state with the archive at `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<()> {
        load_from_disk(
            path.as_ref(),
            &[
                (LEXICON_MEMBER, self.spell_checker.snapshot()),
                (CONTEXT_MEMBER, self.semantic_matcher.snapshot()),
            ],
        )
    }

    /// Saves to the configured snapshot path; does nothing without one.
    pub fn save_snapshot(&self) -> Result<()> {
        match &self.snapshot_path {
            Some(path) => self.save(path),
            None => Ok(()),
        }
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}
