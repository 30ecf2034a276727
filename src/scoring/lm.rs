//! Unigram language-model scoring with additive or Jelinek-Mercer smoothing.
//! Grounded on `language_model.py`'s `lm_rank_documents`.

use super::PostingsView;
use crate::types::{Counter, DocId, DocLengths};
use std::collections::HashMap;

/// The two smoothing strategies `lm_rank_documents` supports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
  /// Laplace/additive smoothing with pseudo-count `delta`.
  Additive { delta: f64 },
  /// Interpolates the document model with the collection model at weight
  /// `lambda` (`1.0` is a pure document model, `0.0` a pure collection
  /// model).
  JelinekMercer { lambda: f64 },
}

/// Ranks `candidates` against `query` by the literal running product of
/// each query term's smoothed probability under a unigram language model of
/// the document, raised to that term's query weight.
///
/// `vocab_size` is the number of distinct terms in the index (additive
/// smoothing's normalizer); `collection_length` is the total token count
/// across the corpus (Jelinek-Mercer's collection-model denominator).
///
/// A query term whose smoothed probability comes out to exactly `0.0` (only
/// possible under Jelinek-Mercer, for a term absent from both the document
/// and the collection) contributes no information: the running product is
/// left unchanged for that term rather than collapsed to zero.
pub fn score_candidates(
  query: &Counter,
  candidates: &[DocId],
  view: &impl PostingsView,
  doc_lengths: &DocLengths,
  vocab_size: u64,
  collection_length: u64,
  smoothing: Smoothing,
) -> HashMap<DocId, f64> {
  let mut scores = HashMap::new();

  for &doc_id in candidates {
    let doc_len = *doc_lengths.get(&doc_id).unwrap_or(&0) as f64;
    let mut score = 1.0;

    for (term, &q_weight) in query {
      let tf = view.term_freq(term, doc_id) as f64;

      let probability = match smoothing {
        Smoothing::Additive { delta } => (tf + delta) / (doc_len + delta * vocab_size as f64),
        Smoothing::JelinekMercer { lambda } => {
          let doc_model = if doc_len > 0.0 { tf / doc_len } else { 0.0 };
          let collection_model = if collection_length > 0 {
            view.collection_freq(term) as f64 / collection_length as f64
          } else {
            0.0
          };
          lambda * doc_model + (1.0 - lambda) * collection_model
        }
      };

      if probability > 0.0 {
        score *= probability.powf(q_weight);
      }
    }

    scores.insert(doc_id, score);
  }

  scores
}
