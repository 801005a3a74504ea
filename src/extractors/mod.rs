// src/extractors/mod.rs
pub mod term;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use term::{extract_terms, Occurrence, TermIndex};
