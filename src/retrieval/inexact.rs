//! Inexact (approximate top-k) candidate selection over the high/low index,
//! grounded on `inexact.py`'s `filter_docs`.

use crate::index::high_low::HighLowIndex;
use crate::types::{Counter, DocId};
use std::collections::HashSet;

/// Selects a candidate document set for `query` from `high_low`, falling
/// back through four progressively looser tiers until at least
/// `min_n_docs` documents are found:
///
/// 1. intersection of every query term's `high` postings
/// 2. intersection of every query term's `high ∪ low` postings
/// 3. union of every query term's `high` postings
/// 4. union of every query term's `high ∪ low` postings
///
/// The last tier is returned even if it still falls short of
/// `min_n_docs` — there is nothing looser left to fall back to.
pub fn filter_candidates(query: &Counter, high_low: &HighLowIndex, min_n_docs: usize) -> HashSet<DocId> {
  let terms: Vec<_> = query.keys().collect();

  // A query term absent from `high_low` contributes the empty set, not a
  // dropped constraint: it must still zero out an intersection tier.
  let high_sets: Vec<HashSet<DocId>> = terms
    .iter()
    .map(|t| {
      high_low
        .get(*t)
        .map(|entry| entry.high.keys().copied().collect())
        .unwrap_or_default()
    })
    .collect();

  let high_low_sets: Vec<HashSet<DocId>> = terms
    .iter()
    .map(|t| {
      high_low
        .get(*t)
        .map(|entry| entry.high.keys().chain(entry.low.keys()).copied().collect())
        .unwrap_or_default()
    })
    .collect();

  let intersect_all = |sets: &[HashSet<DocId>]| -> HashSet<DocId> {
    let mut iter = sets.iter();
    match iter.next() {
      Some(first) => {
        let mut acc = first.clone();
        for set in iter {
          acc.retain(|d| set.contains(d));
        }
        acc
      }
      None => HashSet::new(),
    }
  };

  let union_all = |sets: &[HashSet<DocId>]| -> HashSet<DocId> {
    let mut acc = HashSet::new();
    for set in sets {
      acc.extend(set.iter().copied());
    }
    acc
  };

  let tier1 = intersect_all(&high_sets);
  if tier1.len() >= min_n_docs {
    return tier1;
  }

  let tier2 = intersect_all(&high_low_sets);
  if tier2.len() >= min_n_docs {
    return tier2;
  }

  let tier3 = union_all(&high_sets);
  if tier3.len() >= min_n_docs {
    return tier3;
  }

  union_all(&high_low_sets)
}
