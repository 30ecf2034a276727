//! The phrase index: per-document occurrence counts of a fixed surviving
//! n-gram set.
//!
//! Mirrors the two-pass split in the original phrase miner: [`super::pmi`]
//! decides *which* n-grams matter, and this module re-counts, from scratch,
//! how often exactly those n-grams occur in each document. The counts are
//! not reused from the mining pass because mining runs per-document or over
//! a pooled sample, while indexing always runs over the full corpus.

use crate::types::{DocId, PostingList, Term};
use std::collections::HashMap;

/// Mapping from a surviving n-gram to the documents it occurs in.
pub type PhraseIndex = HashMap<Vec<Term>, PostingList>;

/// Builds the phrase index over `tokenized_documents`, restricted to the
/// n-grams in `ngrams`. `ngrams` is expected to contain n-grams of a single
/// length (all bigrams, or all trigrams); mixing lengths is harmless but
/// unusual.
pub fn build_phrase_index(
  tokenized_documents: &HashMap<DocId, Vec<Term>>,
  ngrams: &[Vec<Term>],
) -> PhraseIndex {
  let wanted: std::collections::HashSet<&Vec<Term>> = ngrams.iter().collect();
  let mut index = PhraseIndex::new();

  let mut doc_ids: Vec<&DocId> = tokenized_documents.keys().collect();
  doc_ids.sort();

  for doc_id in doc_ids {
    let tokens = &tokenized_documents[doc_id];
    let mut doc_counts: HashMap<&Vec<Term>, u32> = HashMap::new();

    for n in [2usize, 3usize] {
      if tokens.len() < n {
        continue;
      }
      for window in tokens.windows(n) {
        if let Some(ngram) = wanted.get(&window.to_vec()) {
          *doc_counts.entry(*ngram).or_insert(0) += 1;
        }
      }
    }

    for (ngram, count) in doc_counts {
      index.entry(ngram.clone()).or_default().push(*doc_id, count);
    }
  }

  index
}

#[cfg(test)]
mod tests {
  use super::*;

  fn terms(words: &[&str]) -> Vec<Term> {
    words.iter().map(|w| Term(w.to_string())).collect()
  }

  #[test]
  fn counts_only_the_surviving_ngrams() {
    let mut docs = HashMap::new();
    docs.insert(
      DocId(1),
      terms(&["democrat", "parti", "leader", "democrat", "parti"]),
    );
    docs.insert(DocId(2), terms(&["unrelated", "words", "here"]));

    let ngrams = vec![terms(&["democrat", "parti"])];
    let index = build_phrase_index(&docs, &ngrams);

    let postings = &index[&terms(&["democrat", "parti"])];
    assert_eq!(postings.df, 1);
    assert_eq!(postings.postings[0].doc_id, DocId(1));
    assert_eq!(postings.postings[0].tf, 2);
  }

  #[test]
  fn ngrams_not_present_do_not_appear_in_the_index() {
    let mut docs = HashMap::new();
    docs.insert(DocId(1), terms(&["a", "b", "c"]));
    let ngrams = vec![terms(&["x", "y"])];
    let index = build_phrase_index(&docs, &ngrams);
    assert!(index.is_empty());
  }
}
