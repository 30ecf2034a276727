//! Tolerant retrieval: a raw-vocabulary dictionary, the k-gram index that
//! powers wildcard expansion, and the Soundex index that powers phonetic
//! correction.

pub mod kgram;
pub mod soundex;
pub mod wildcard;

use crate::normalize::Normalizer;
use crate::types::Documents;
use std::collections::HashMap;

/// The raw (lowercased, tokenized, apt, **un-stemmed**) vocabulary of the
/// corpus, kept as a frequency counter. Only `.keys()` is load-bearing for
/// the tolerance layer; the counts are retained because the original
/// dictionary is itself a frequency counter.
pub type RawVocabulary = HashMap<String, u32>;

/// Builds the raw vocabulary from every document's text.
pub fn build_dictionary(documents: &Documents, normalizer: &Normalizer) -> RawVocabulary {
  let mut dictionary = RawVocabulary::new();
  for text in documents.values() {
    for word in normalizer.tokenize_raw(text) {
      *dictionary.entry(word).or_insert(0) += 1;
    }
  }
  dictionary
}

pub use kgram::{build_k_gram_index, KGramIndex};
pub use soundex::{build_soundex_index, soundex_code, SoundexIndex};
pub use wildcard::expand_wildcard;
