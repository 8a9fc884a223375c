// src/lib.rs

pub mod core;
pub mod error;
pub mod fuzzy;
pub mod learning;
pub mod persistence;

pub use crate::core::context::ContextTable;
pub use crate::core::engine::{Processor, ProcessorBuilder};
pub use crate::core::types::{Candidates, SemanticMatcher, Snapshot, SpellChecker};
pub use crate::error::{Error, Result};
pub use crate::fuzzy::levenshtein::levenshtein;
pub use crate::fuzzy::lexicon::Lexicon;
