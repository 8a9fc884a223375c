// src/fuzzy/mod.rs
pub mod levenshtein;
pub mod lexicon;
