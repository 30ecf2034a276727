//! Core data types shared across the index, scoring and orchestration layers.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A normalized index/query term: lowercased, tokenized, alphabetic,
/// stop-words removed, and (for this type) stemmed.
///
/// A dedicated newtype keeps stemmed terms from being accidentally compared
/// against raw vocabulary words, which live in the tolerance layer as plain
/// `String`s.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Term(pub String);

impl Term {
  /// Borrows the normalized term as a string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<String> for Term {
  fn from(value: String) -> Self {
    Term(value)
  }
}

impl From<&str> for Term {
  fn from(value: &str) -> Self {
    Term(value.to_string())
  }
}

impl std::fmt::Display for Term {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A stable document identifier, supplied by the corpus loader.
///
/// Unique within a single build; this crate never mutates an index after
/// construction, so `DocId` values never need to be reassigned or recycled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub u32);

impl std::fmt::Display for DocId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// A single `(document, term frequency)` entry within a term's posting list.
///
/// Invariant: `tf >= 1`. A term that does not occur in a document has no
/// posting for it at all, rather than a posting with `tf == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
  pub doc_id: DocId,
  pub tf: u32,
}

/// The posting list for one term: its document frequency plus the postings
/// themselves, in document-id-sorted insertion order (never re-sorted by
/// score — that is the scorer's job, not the index's).
///
/// Invariant: `df == postings.len()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostingList {
  pub df: u32,
  pub postings: Vec<Posting>,
}

impl PostingList {
  /// Appends a posting and keeps `df` in sync.
  pub fn push(&mut self, doc_id: DocId, tf: u32) {
    self.postings.push(Posting { doc_id, tf });
    self.df = self.postings.len() as u32;
  }
}

/// A query, or an n-gram/word, reduced to term weights — the shape every
/// scorer and the tolerance layer consumes.
///
/// Weights are `f64`, not `u32`: a freshly tokenized query carries integral
/// term frequencies, but a PRF-expanded query carries the real Rocchio
/// centroid weight for its injected terms, and both must live in the same
/// map.
pub type Counter = HashMap<Term, f64>;

/// Builds a [`Counter`] of term frequencies from a sequence of terms.
pub fn counter_from_terms(terms: impl IntoIterator<Item = Term>) -> Counter {
  let mut counter = Counter::new();
  for term in terms {
    *counter.entry(term).or_insert(0.0) += 1.0;
  }
  counter
}

/// Mapping from [`DocId`] to the total number of normalized tokens in that
/// document (not distinct terms — total positions).
pub type DocLengths = HashMap<DocId, u32>;

/// Mapping from [`DocId`] to the document's raw (concatenated title + body)
/// text, retained to support result snippets and PRF re-vectorization.
pub type Documents = HashMap<DocId, String>;
