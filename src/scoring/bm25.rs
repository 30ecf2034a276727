//! Okapi BM25 scoring, over any [`PostingsView`].

use super::PostingsView;
use crate::types::{Counter, DocId, DocLengths};
use std::collections::HashMap;

/// BM25 tuning parameters. Defaults (`k1 = 1.2`, `b = 0.75`) are the
/// standard Okapi defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25Params {
  pub k1: f32,
  pub b: f32,
}

impl Default for Bm25Params {
  fn default() -> Self {
    Bm25Params { k1: 1.2, b: 0.75 }
  }
}

/// Ranks `candidates` against `query` with Okapi BM25.
///
/// A query term with `doc_freq <= 1` contributes nothing to any document's
/// score — the intentional `df - 1` IDF offset (carried over from the
/// original's posting-list layout, see DESIGN.md) means `df == 1` would
/// divide by zero, so both `df == 0` and `df == 1` are skipped uniformly.
pub fn score_candidates(
  query: &Counter,
  candidates: &[DocId],
  view: &impl PostingsView,
  doc_lengths: &DocLengths,
  avg_doc_length: f64,
  params: Bm25Params,
) -> HashMap<DocId, f64> {
  let n = doc_lengths.len() as f64;
  let mut scores = HashMap::new();

  for &doc_id in candidates {
    let doc_len = *doc_lengths.get(&doc_id).unwrap_or(&0) as f64;
    let mut total = 0.0;

    for (term, _) in query {
      let df = view.doc_freq(term);
      if df <= 1 {
        continue;
      }
      let tf = view.term_freq(term, doc_id) as f64;
      if tf == 0.0 {
        continue;
      }

      let idf = (n / (df - 1) as f64).log10(); // df - 1 offset, see DESIGN.md
      let k1 = params.k1 as f64;
      let b = params.b as f64;
      let length_norm = 1.0 - b + b * (doc_len / avg_doc_length.max(1.0));
      total += idf * (tf * (k1 + 1.0)) / (tf + k1 * length_norm);
    }

    scores.insert(doc_id, total);
  }

  scores
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::inverted::build_inverted_index;
  use crate::normalize::Normalizer;
  use crate::types::counter_from_terms;

  #[test]
  fn higher_term_frequency_outscores_lower_given_equal_df() {
    // df for "apple" must be >= 2 or the df-1 IDF offset skips the term
    // entirely (see NumericDegenerate in DESIGN.md).
    let n = Normalizer::new();
    let docs = vec![
      (DocId(1), "apple apple apple product".to_string()),
      (DocId(2), "apple unrelated political news".to_string()),
      (DocId(3), "unrelated political news only".to_string()),
    ];
    let (index, doc_lengths, _) = build_inverted_index(docs, &n);
    let avg_len = doc_lengths.values().sum::<u32>() as f64 / doc_lengths.len() as f64;

    let query = counter_from_terms(n.normalize("apple"));
    let candidates = vec![DocId(1), DocId(2), DocId(3)];
    let scores = score_candidates(&query, &candidates, &index, &doc_lengths, avg_len, Bm25Params::default());

    assert!(scores[&DocId(1)] > scores[&DocId(2)]);
    assert_eq!(scores[&DocId(3)], 0.0);
  }
}
