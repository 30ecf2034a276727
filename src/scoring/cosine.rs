//! Weighted tf-idf scoring, over any [`PostingsView`].

use super::PostingsView;
use crate::types::{Counter, DocId, DocLengths};
use std::collections::HashMap;

/// Ranks `candidates` against `query` by `Σ query[term] · tf(term, doc) ·
/// idf(term)²`, normalized by the document's own length — a weighted sum
/// over the query's terms, not a normalized cosine similarity. The name is
/// inherited from the original's `cosine_scoring_docs`, which despite its
/// name never divides by the query or document vector norm.
///
/// Weight is `tf * idf * idf`, not the more usual `(1 + log tf) * idf` —
/// a deliberate quirk carried over unchanged, see DESIGN.md. `idf` reuses
/// the same `df - 1` offset as BM25, so a term with `df <= 1` contributes a
/// weight of `0.0` rather than dividing by zero.
pub fn score_candidates(
  query: &Counter,
  candidates: &[DocId],
  view: &impl PostingsView,
  doc_lengths: &DocLengths,
) -> HashMap<DocId, f64> {
  let n = doc_lengths.len() as f64;

  let idf = |df: u32| -> f64 {
    if df <= 1 {
      0.0
    } else {
      (n / (df - 1) as f64).log10()
    }
  };

  let mut scores = HashMap::new();
  for &doc_id in candidates {
    let mut total = 0.0;

    for (term, &q_weight) in query {
      let tf = view.term_freq(term, doc_id) as f64;
      if tf == 0.0 {
        continue;
      }
      let idf_weight = idf(view.doc_freq(term));
      total += q_weight * tf * idf_weight * idf_weight;
    }

    let doc_len = *doc_lengths.get(&doc_id).unwrap_or(&0) as f64;
    let score = if doc_len > 0.0 { total / doc_len } else { 0.0 };
    scores.insert(doc_id, score);
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
    // df for "apple" must be >= 2 or the df-1 offset zeroes its idf weight.
    let n = Normalizer::new();
    let docs = vec![
      (DocId(1), "apple apple apple product".to_string()),
      (DocId(2), "apple banana banana product".to_string()),
      (DocId(3), "banana banana product only".to_string()),
    ];
    let (index, doc_lengths, _) = build_inverted_index(docs, &n);
    let query = counter_from_terms(n.normalize("apple"));
    let candidates = vec![DocId(1), DocId(2), DocId(3)];
    let scores = score_candidates(&query, &candidates, &index, &doc_lengths);

    assert!(scores[&DocId(1)] > scores[&DocId(2)]);
    assert_eq!(scores[&DocId(3)], 0.0);
  }

  #[test]
  fn score_is_the_weighted_sum_divided_by_document_length() {
    let n = Normalizer::new();
    let docs = vec![
      (DocId(1), "apple apple product".to_string()),
      (DocId(2), "apple banana product".to_string()),
    ];
    let (index, doc_lengths, _) = build_inverted_index(docs, &n);
    let query = counter_from_terms(n.normalize("apple"));
    let candidates = vec![DocId(1)];
    let scores = score_candidates(&query, &candidates, &index, &doc_lengths);

    let df = index[&n.normalize("apple").remove(0)].df;
    let idf = (doc_lengths.len() as f64 / (df - 1) as f64).log10();
    let expected = (2.0 * idf * idf) / doc_lengths[&DocId(1)] as f64;
    assert!((scores[&DocId(1)] - expected).abs() < 1e-9);
  }
}
