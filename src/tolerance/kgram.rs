//! The k-gram index used to answer wildcard queries (book §3.2.2).

use super::RawVocabulary;
use std::collections::{HashMap, HashSet};

/// Mapping from a `$`-padded k-gram to the set of raw-vocabulary words that
/// contain it.
pub type KGramIndex = HashMap<String, HashSet<String>>;

/// Builds a k-gram index over `dictionary`'s words. Each word is padded as
/// `$word$` before being split into overlapping k-grams; words whose padded
/// form is shorter than `k` are skipped (there is no valid gram to take).
pub fn build_k_gram_index(dictionary: &RawVocabulary, k: usize) -> KGramIndex {
  let mut index = KGramIndex::new();

  for word in dictionary.keys() {
    let padded = format!("${word}$");
    let padded_chars: Vec<char> = padded.chars().collect();
    if padded_chars.len() < k {
      continue;
    }
    for window in padded_chars.windows(k) {
      let gram: String = window.iter().collect();
      index.entry(gram).or_default().insert(word.clone());
    }
  }

  index
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_gram_of_a_word_maps_back_to_it() {
    let mut dict = RawVocabulary::new();
    dict.insert("apple".to_string(), 1);
    let index = build_k_gram_index(&dict, 2);

    let padded = "$apple$";
    let chars: Vec<char> = padded.chars().collect();
    for window in chars.windows(2) {
      let gram: String = window.iter().collect();
      assert!(index[&gram].contains("apple"), "missing gram {gram}");
    }
  }

  #[test]
  fn short_words_are_skipped() {
    let mut dict = RawVocabulary::new();
    dict.insert("a".to_string(), 1); // padded "$a$" has 3 chars, k=2 still fits
    dict.insert("".to_string(), 1); // padded "$$" has 2 chars, k=3 does not fit
    let index = build_k_gram_index(&dict, 3);
    assert!(!index.values().any(|words| words.contains("")));
  }
}
