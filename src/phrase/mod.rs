//! PMI-based phrase (bigram/trigram) mining and the phrase index it feeds.

pub mod index;
pub mod pmi;

pub use index::{build_phrase_index, PhraseIndex};
pub use pmi::mine_ngrams;
