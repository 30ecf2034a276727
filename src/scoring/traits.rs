//! The [`PostingsView`] abstraction unifying exact and approximate retrieval.

use crate::index::high_low::HighLowIndex;
use crate::index::inverted::InvertedIndex;
use crate::types::{DocId, Term};

/// A read-only view over a term's postings, implemented once for the exact
/// [`InvertedIndex`] and once for the approximate [`HighLowIndex`], so every
/// scorer in this module works unmodified against either.
pub trait PostingsView {
  /// Document frequency of `term`; `0` if the term is out-of-vocabulary.
  fn doc_freq(&self, term: &Term) -> u32;

  /// Term frequency of `term` in `doc_id`; `0` if absent.
  fn term_freq(&self, term: &Term, doc_id: DocId) -> u32;

  /// Every document that contains `term` at all.
  fn candidate_docs(&self, term: &Term) -> Vec<DocId>;

  /// Total occurrences of `term` across the whole collection, used by the
  /// Jelinek-Mercer language-model smoothing term.
  fn collection_freq(&self, term: &Term) -> u64 {
    self
      .candidate_docs(term)
      .iter()
      .map(|&doc_id| self.term_freq(term, doc_id) as u64)
      .sum()
  }
}

impl PostingsView for InvertedIndex {
  fn doc_freq(&self, term: &Term) -> u32 {
    self.get(term).map(|list| list.df).unwrap_or(0)
  }

  fn term_freq(&self, term: &Term, doc_id: DocId) -> u32 {
    self
      .get(term)
      .and_then(|list| list.postings.iter().find(|p| p.doc_id == doc_id))
      .map(|p| p.tf)
      .unwrap_or(0)
  }

  fn candidate_docs(&self, term: &Term) -> Vec<DocId> {
    self
      .get(term)
      .map(|list| list.postings.iter().map(|p| p.doc_id).collect())
      .unwrap_or_default()
  }
}

impl PostingsView for HighLowIndex {
  fn doc_freq(&self, term: &Term) -> u32 {
    self.get(term).map(|entry| entry.df).unwrap_or(0)
  }

  fn term_freq(&self, term: &Term, doc_id: DocId) -> u32 {
    self
      .get(term)
      .and_then(|entry| entry.high.get(&doc_id).or_else(|| entry.low.get(&doc_id)))
      .copied()
      .unwrap_or(0)
  }

  fn candidate_docs(&self, term: &Term) -> Vec<DocId> {
    match self.get(term) {
      Some(entry) => entry.high.keys().chain(entry.low.keys()).copied().collect(),
      None => Vec::new(),
    }
  }
}
