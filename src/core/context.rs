// File: src/core/context.rs
use crate::core::types::{Candidates, SemanticMatcher, Snapshot};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::io::{Read, Write};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ContextState {
    /// Maps a context word to every word seen directly after it.
    follows: HashMap<String, HashSet<String>>,
}

/// A bigram lookup table used to choose between spelling candidates.
#[derive(Debug, Default)]
pub struct ContextTable {
    state: RwLock<ContextState>,
}

impl ContextTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct (context, word) pairs.
    pub fn len(&self) -> usize {
        self.read().follows.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.read().follows.is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, ContextState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ContextState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SemanticMatcher for ContextTable {
    /// Scans `candidates` in order and returns the first one that has
    /// followed `context` in training.
    fn match_context(&self, context: &str, candidates: &Candidates) -> (String, bool) {
        let state = self.read();
        let best = state
            .follows
            .get(context)
            .and_then(|seen| candidates.iter().find(|c| seen.contains(*c)));

        match best {
            Some(word) => (word.to_string(), true),
            None => (candidates.first().to_string(), false),
        }
    }

    /// O(1) amortized.
    fn train(&self, context: &str, word: &str) {
        self.write()
            .follows
            .entry(context.to_string())
            .or_default()
            .insert(word.to_string());
    }

    fn snapshot(&self) -> Option<&dyn Snapshot> {
        Some(self)
    }
}

impl Snapshot for ContextTable {
    fn save(&self, writer: &mut dyn Write) -> Result<()> {
        bincode::serialize_into(writer, &*self.read())?;
        Ok(())
    }

    fn load(&self, reader: &mut dyn Read) -> Result<()> {
        let restored: ContextState = bincode::deserialize_from(reader)?;
        *self.write() = restored;
        Ok(())
    }
}
