//! Naive frequency-based extractive summarization, grounded on
//! `doc_sum.py`'s `naive_sum`.

use crate::normalize::Normalizer;
use crate::types::{counter_from_terms, Counter};
use regex::Regex;

/// Splits `text` into sentences on `.`, `!` and `?` followed by whitespace.
/// This is a coarse stand-in for a real sentence tokenizer; it is wrong on
/// abbreviations and decimal numbers, which is an accepted tradeoff for a
/// summarizer that only needs rough sentence boundaries.
fn split_sentences(text: &str) -> Vec<&str> {
  let boundary = Regex::new(r"(?:[.!?])\s+").expect("static sentence-boundary regex is valid");
  boundary
    .split(text)
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .collect()
}

/// Produces a `num_sentences`-sentence, query-biased extractive summary of
/// `text`.
///
/// Scores each sentence by `Σ term (tf[term] / max_tf) · query_terms[term]`
/// over the sentence's own normalized terms, where `tf`/`max_tf` are the
/// document's own term frequency and peak term frequency. A sentence whose
/// terms don't overlap the query scores `0.0` and only surfaces if there
/// aren't enough higher-scoring sentences to fill `num_sentences`.
///
/// Unlike the Python original, the kept sentences are re-sorted back into
/// their original document order before joining, since a summary read in
/// score order rather than narrative order is harder to follow.
pub fn naive_summary(text: &str, query_terms: &Counter, num_sentences: usize, normalizer: &Normalizer) -> String {
  let sentences = split_sentences(text);
  if sentences.is_empty() {
    return String::new();
  }

  let doc_terms = normalizer.normalize(text);
  let doc_freqs = counter_from_terms(doc_terms);
  let max_tf = doc_freqs.values().cloned().fold(0.0_f64, f64::max);

  let mut scored: Vec<(usize, &str, f64)> = sentences
    .iter()
    .enumerate()
    .map(|(idx, &sentence)| {
      let terms = normalizer.normalize(sentence);
      let score = if max_tf > 0.0 {
        terms
          .iter()
          .map(|t| {
            let tf = *doc_freqs.get(t).unwrap_or(&0.0);
            let q_weight = *query_terms.get(t).unwrap_or(&0.0);
            (tf / max_tf) * q_weight
          })
          .sum::<f64>()
      } else {
        0.0
      };
      (idx, sentence, score)
    })
    .collect();

  scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));
  let mut top: Vec<(usize, &str)> = scored.into_iter().take(num_sentences.max(1)).map(|(i, s, _)| (i, s)).collect();
  top.sort_by_key(|(idx, _)| *idx);

  top.into_iter().map(|(_, s)| s).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn summary_of_a_single_sentence_returns_it_unchanged() {
    let normalizer = Normalizer::new();
    let text = "Apple announces a new product today.";
    let query = counter_from_terms(normalizer.normalize("apple"));
    let summary = naive_summary(text, &query, 3, &normalizer);
    assert_eq!(summary, "Apple announces a new product today.");
  }

  #[test]
  fn summary_keeps_original_sentence_order() {
    let normalizer = Normalizer::new();
    let text = "Apple apple apple product. Something unrelated happens. Apple apple harvest season.";
    let query = counter_from_terms(normalizer.normalize("apple"));
    let summary = naive_summary(text, &query, 2, &normalizer);
    let first_idx = summary.find("product").unwrap_or(usize::MAX);
    let second_idx = summary.find("harvest").unwrap_or(usize::MAX);
    assert!(first_idx < second_idx);
  }

  #[test]
  fn sentences_disjoint_from_the_query_score_zero() {
    let normalizer = Normalizer::new();
    let text = "Apple apple apple product. Something unrelated happens.";
    let query = counter_from_terms(normalizer.normalize("apple"));
    let summary = naive_summary(text, &query, 1, &normalizer);
    assert!(summary.contains("product"));
    assert!(!summary.contains("unrelated"));
  }

  #[test]
  fn empty_text_produces_an_empty_summary() {
    let normalizer = Normalizer::new();
    let query = Counter::new();
    assert_eq!(naive_summary("", &query, 3, &normalizer), "");
  }
}
