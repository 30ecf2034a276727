//! Hand-rolled bigram/trigram frequency counting and PMI scoring.
//!
//! Design Note: "prefer an explicit two-pass counter over any library
//! convenience, since the thresholds matter to reproducibility" — this
//! module counts n-grams itself rather than reaching for a collocation
//! library.

use crate::types::Term;
use std::collections::HashMap;

/// Counts every contiguous n-gram's occurrences in a single token stream.
/// `n` is 2 (bigrams) or 3 (trigrams).
pub fn count_ngram_freqs(tokens: &[Term], n: usize) -> HashMap<Vec<Term>, u32> {
  let mut freqs = HashMap::new();
  if tokens.len() < n {
    return freqs;
  }
  for window in tokens.windows(n) {
    *freqs.entry(window.to_vec()).or_insert(0) += 1;
  }
  freqs
}

fn unigram_freqs(tokens: &[Term]) -> HashMap<&Term, u32> {
  let mut freqs = HashMap::new();
  for t in tokens {
    *freqs.entry(t).or_insert(0) += 1;
  }
  freqs
}

/// Pointwise mutual information of a bigram, matching NLTK's
/// `BigramAssocMeasures.pmi` contingency-table formulation:
/// `log2(n_ii * n_xx) - log2(n_ix * n_xi)`, where `n_ii` is the bigram's own
/// frequency, `n_ix`/`n_xi` are its components' unigram frequencies, and
/// `n_xx` is the total number of bigram positions in the stream.
fn bigram_pmi(joint: u32, left_freq: u32, right_freq: u32, total_bigrams: u32) -> f64 {
  if joint == 0 || left_freq == 0 || right_freq == 0 || total_bigrams == 0 {
    return f64::NEG_INFINITY;
  }
  ((joint as f64) * (total_bigrams as f64)).log2() - ((left_freq as f64) * (right_freq as f64)).log2()
}

/// Trigram PMI, generalizing the bigram formula to three components:
/// `log2(n_iii * n_xxx^2) - log2(n_i * n_ii * n_iii_unigram)`. NLTK's own
/// trigram contingency table is not reproduced bit-for-bit here (it is not
/// specified anywhere accessible to this crate); this is the natural
/// three-way extension of the same normalized-joint-over-marginals shape,
/// recorded as a deliberate choice in DESIGN.md.
fn trigram_pmi(joint: u32, f1: u32, f2: u32, f3: u32, total_trigrams: u32) -> f64 {
  if joint == 0 || f1 == 0 || f2 == 0 || f3 == 0 || total_trigrams == 0 {
    return f64::NEG_INFINITY;
  }
  let total = total_trigrams as f64;
  ((joint as f64) * total * total).log2() - ((f1 as f64) * (f2 as f64) * (f3 as f64)).log2()
}

/// Mines the n-grams (`n` is 2 or 3) of `tokens` that pass both the raw
/// frequency threshold and the PMI threshold.
pub fn mine_ngrams(tokens: &[Term], freq_thresh: u32, pmi_thresh: f64, n: usize) -> Vec<Vec<Term>> {
  assert!(n == 2 || n == 3, "only bigrams and trigrams are mined");

  let ngram_freqs = count_ngram_freqs(tokens, n);
  let unigrams = unigram_freqs(tokens);
  let total_ngrams = if tokens.len() >= n {
    (tokens.len() - n + 1) as u32
  } else {
    0
  };

  let mut surviving = Vec::new();
  for (ngram, &freq) in &ngram_freqs {
    if freq < freq_thresh {
      continue;
    }

    let pmi = if n == 2 {
      let f1 = *unigrams.get(&ngram[0]).unwrap_or(&0);
      let f2 = *unigrams.get(&ngram[1]).unwrap_or(&0);
      bigram_pmi(freq, f1, f2, total_ngrams)
    } else {
      let f1 = *unigrams.get(&ngram[0]).unwrap_or(&0);
      let f2 = *unigrams.get(&ngram[1]).unwrap_or(&0);
      let f3 = *unigrams.get(&ngram[2]).unwrap_or(&0);
      trigram_pmi(freq, f1, f2, f3, total_ngrams)
    };

    if pmi >= pmi_thresh {
      surviving.push(ngram.clone());
    }
  }

  surviving
}

#[cfg(test)]
mod tests {
  use super::*;

  fn terms(words: &[&str]) -> Vec<Term> {
    words.iter().map(|w| Term(w.to_string())).collect()
  }

  #[test]
  fn count_ngram_freqs_counts_overlapping_windows() {
    let tokens = terms(&["a", "b", "a", "b"]);
    let freqs = count_ngram_freqs(&tokens, 2);
    assert_eq!(freqs[&terms(&["a", "b"])], 2);
    assert_eq!(freqs[&terms(&["b", "a"])], 1);
  }

  #[test]
  fn mine_ngrams_drops_low_frequency_and_low_pmi_pairs() {
    // "rare common" appears once; should not survive freq_thresh=2.
    let tokens = terms(&["rare", "common", "filler", "filler", "filler"]);
    let surviving = mine_ngrams(&tokens, 2, 0.0, 2);
    assert!(surviving.is_empty());
  }

  #[test]
  fn mine_ngrams_keeps_a_strongly_associated_repeated_pair() {
    let tokens = terms(&[
      "democrat", "parti", "other", "other", "democrat", "parti", "other", "other",
    ]);
    let surviving = mine_ngrams(&tokens, 2, 0.0, 2);
    assert!(surviving.contains(&terms(&["democrat", "parti"])));
  }
}
