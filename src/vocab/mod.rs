//! Vocabulary corpus and grade-weighted word selection.
//!
//! - [`entry`]: vocabulary entries and corpus file loading
//! - [`selector`]: the tier-weighted sampler

pub mod entry;
pub mod selector;

pub use entry::{load_vocabulary, VocabEntry, VocabError};
pub use selector::VocabSelector;
