//! Wildcard query expansion via k-gram intersection (book §3.2.2).

use super::kgram::{build_k_gram_index, KGramIndex};
use super::RawVocabulary;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Expands a wildcard pattern (containing at least one `*`) to the set of
/// raw-vocabulary words it matches.
///
/// Builds k-grams of the pattern's literal (non-`*`) fragments, intersects
/// their posting sets in `k_gram_index`, then filters the surviving
/// candidates by the wildcard interpreted as an anchored `.*` regex. A
/// pattern with no literal fragment at all (e.g. `"*"`) has no k-grams to
/// intersect on and returns an empty suggestion list rather than matching
/// the entire vocabulary.
pub fn expand_wildcard(pattern: &str, k_gram_index: &KGramIndex) -> Vec<String> {
  let k = match k_gram_index.keys().next() {
    Some(sample) => sample.chars().count(),
    None => return Vec::new(),
  };

  let mut singleton = RawVocabulary::new();
  singleton.insert(pattern.to_string(), 0);
  let pattern_grams = build_k_gram_index(&singleton, k);

  let regex_source = format!("^{}$", pattern.replace('*', ".*"));
  let regex = match Regex::new(&regex_source) {
    Ok(r) => r,
    Err(_) => return Vec::new(),
  };

  let mut candidate_sets: Vec<&HashSet<String>> = Vec::new();
  for gram in pattern_grams.keys() {
    if let Some(words) = k_gram_index.get(gram) {
      candidate_sets.push(words);
    }
  }

  if candidate_sets.is_empty() {
    return Vec::new();
  }

  let mut intersection: HashSet<String> = candidate_sets[0].clone();
  for set in &candidate_sets[1..] {
    intersection.retain(|w| set.contains(w));
  }

  intersection
    .into_iter()
    .filter(|word| regex.is_match(word))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tolerance::build_k_gram_index;

  fn index() -> KGramIndex {
    let mut dict = RawVocabulary::new();
    for word in ["apple", "application", "apply", "maple"] {
      dict.insert(word.to_string(), 1);
    }
    build_k_gram_index(&dict, 2)
  }

  #[test]
  fn wildcard_matches_expected_words_only() {
    let idx = index();
    let mut matches = expand_wildcard("ap*le", &idx);
    matches.sort();
    assert_eq!(matches, vec!["apple"]);
  }

  #[test]
  fn wildcard_with_no_match_returns_empty() {
    let idx = index();
    assert!(expand_wildcard("zz*zz", &idx).is_empty());
  }
}
