//! Pseudo-relevance feedback via the Rocchio algorithm, grounded on
//! `query_exp.py`.

use crate::index::inverted::InvertedIndex;
use crate::types::{Counter, DocId, Term};
use std::collections::HashMap;

/// A sparse tf-idf vector over terms.
pub type Vector = HashMap<Term, f64>;

/// Rocchio blend weights for original query, relevant-document centroid and
/// non-relevant-document centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocchioParams {
  pub alpha: f64,
  pub beta: f64,
  pub gamma: f64,
  /// How many of the top-weighted expansion terms to inject into the query.
  pub top_terms: usize,
  /// Upper bound on how many top-ranked documents count as "relevant"; the
  /// actual count used is `min(ranked.len() / 2, relevant_n)`.
  pub relevant_n: usize,
}

impl Default for RocchioParams {
  fn default() -> Self {
    RocchioParams {
      alpha: 1.0,
      beta: 0.75,
      gamma: 0.15,
      top_terms: 2,
      relevant_n: 10,
    }
  }
}

fn idf(term: &Term, index: &InvertedIndex, n: u32) -> f64 {
  match index.get(term) {
    Some(list) if list.df > 0 => (n as f64 / list.df as f64).log10(),
    _ => 0.0,
  }
}

/// Builds the tf-idf vector of a single document over its own occurring
/// terms.
pub fn vectorize_document(doc_id: DocId, index: &InvertedIndex, n: u32) -> Vector {
  let mut vector = Vector::new();
  for (term, list) in index {
    if let Some(posting) = list.postings.iter().find(|p| p.doc_id == doc_id) {
      vector.insert(term.clone(), posting.tf as f64 * idf(term, index, n));
    }
  }
  vector
}

fn centroid(vectors: &[Vector]) -> Vector {
  let mut sum = Vector::new();
  for vector in vectors {
    for (term, &weight) in vector {
      *sum.entry(term.clone()).or_insert(0.0) += weight;
    }
  }
  if !vectors.is_empty() {
    for weight in sum.values_mut() {
      *weight /= vectors.len() as f64;
    }
  }
  sum
}

/// Computes the Rocchio-updated query vector from an original query vector
/// plus relevant/non-relevant document vectors. Every resulting weight is
/// floored at `0.0` (a negative weight carries no retrieval meaning here).
pub fn rocchio(query_vector: &Vector, relevant: &[Vector], nonrelevant: &[Vector], params: RocchioParams) -> Vector {
  let relevant_centroid = centroid(relevant);
  let nonrelevant_centroid = centroid(nonrelevant);

  let mut terms: std::collections::HashSet<&Term> = query_vector.keys().collect();
  terms.extend(relevant_centroid.keys());
  terms.extend(nonrelevant_centroid.keys());

  let mut updated = Vector::new();
  for term in terms {
    let q = query_vector.get(term).copied().unwrap_or(0.0);
    let rel = relevant_centroid.get(term).copied().unwrap_or(0.0);
    let nrel = nonrelevant_centroid.get(term).copied().unwrap_or(0.0);
    let weight = params.alpha * q + params.beta * rel - params.gamma * nrel;
    updated.insert(term.clone(), weight.max(0.0));
  }
  updated
}

/// The `k` highest-scoring document ids from a ranked result list.
pub fn top_k_docs(ranked: &[(DocId, f64)], k: usize) -> Vec<DocId> {
  let mut sorted = ranked.to_vec();
  sorted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
  sorted.into_iter().take(k).map(|(doc_id, _)| doc_id).collect()
}

/// Expands `query` with the top-weighted new terms from a Rocchio update
/// over the top-ranked documents (treated as relevant; there is no
/// non-relevant set in the pseudo-relevance setting). The relevant-set size
/// is `min(ranked.len() / 2, params.relevant_n)`.
///
/// Injected terms carry their real Rocchio-updated weight in the returned
/// counter, matching the original's `_cosine_scoring` reading that weight
/// straight out of the expanded query dict; terms already present in
/// `query` are left at their original weight rather than being reinforced.
pub fn pseudo_relevance_feedback(
  query: &Counter,
  ranked: &[(DocId, f64)],
  index: &InvertedIndex,
  n: u32,
  params: RocchioParams,
) -> Counter {
  let k = (ranked.len() / 2).min(params.relevant_n);
  let relevant_ids = top_k_docs(ranked, k);
  if relevant_ids.is_empty() {
    return query.clone();
  }

  let query_vector: Vector = query
    .iter()
    .map(|(term, &tf)| (term.clone(), tf * idf(term, index, n)))
    .collect();
  let relevant_vectors: Vec<Vector> = relevant_ids.iter().map(|&id| vectorize_document(id, index, n)).collect();

  let updated = rocchio(&query_vector, &relevant_vectors, &[], params);

  let mut candidates: Vec<(&Term, &f64)> = updated.iter().filter(|(term, _)| !query.contains_key(*term)).collect();
  candidates.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));

  let mut expanded = query.clone();
  for (term, &weight) in candidates.into_iter().take(params.top_terms) {
    expanded.insert(term.clone(), weight);
  }
  expanded
}
