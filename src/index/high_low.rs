//! The high/low ("champion list") index used by inexact retrieval and the
//! language-model scorers.

use crate::index::inverted::InvertedIndex;
use crate::types::{DocId, Term};
use std::collections::HashMap;

/// A term's postings partitioned by a term-frequency threshold.
///
/// Invariant: `high` and `low` are disjoint by construction (a posting lands
/// in exactly one of them), and `df == high.len() + low.len()`.
#[derive(Debug, Clone, Default)]
pub struct ChampionEntry {
  /// Postings with `tf >= theta`.
  pub high: HashMap<DocId, u32>,
  /// Postings with `tf < theta`.
  pub low: HashMap<DocId, u32>,
  /// `high.len() + low.len()`, cached rather than recomputed per lookup.
  pub df: u32,
}

/// Mapping from [`Term`] to its [`ChampionEntry`].
pub type HighLowIndex = HashMap<Term, ChampionEntry>;

/// Rewrites every term's posting list as a `(high, low, df)` triple, using
/// `theta` as the frequency threshold (default 5).
pub fn build_high_low_index(index: &InvertedIndex, theta: u32) -> HighLowIndex {
  let mut result = HighLowIndex::new();

  for (term, list) in index {
    let mut entry = ChampionEntry::default();
    for posting in &list.postings {
      if posting.tf >= theta {
        entry.high.insert(posting.doc_id, posting.tf);
      } else {
        entry.low.insert(posting.doc_id, posting.tf);
      }
    }
    entry.df = (entry.high.len() + entry.low.len()) as u32;
    result.insert(term.clone(), entry);
  }

  result
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::index::inverted::build_inverted_index;
  use crate::normalize::Normalizer;

  #[test]
  fn high_and_low_partition_every_posting() {
    let n = Normalizer::new();
    let docs = vec![
      (DocId(1), "apple apple apple apple apple apple".to_string()),
      (DocId(2), "apple".to_string()),
    ];
    let (index, _, _) = build_inverted_index(docs, &n);
    let high_low = build_high_low_index(&index, 5);

    let apple = n.normalize("apple").remove(0);
    let entry = &high_low[&apple];
    assert!(entry.high.contains_key(&DocId(1)));
    assert!(entry.low.contains_key(&DocId(2)));
    assert!(!entry.high.contains_key(&DocId(2)));
    assert!(!entry.low.contains_key(&DocId(1)));
    assert_eq!(entry.df, 2);
  }
}
