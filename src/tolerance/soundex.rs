//! The Soundex phonetic index, implemented exactly per Manning et al.
//! (book §3.4).

use super::RawVocabulary;
use std::collections::{HashMap, HashSet};

/// Digit translation table for `b..=z`-minus-`a`, indexed by `c as u8 -
/// b'a'`: `bfpv -> 1, cgjkqsxz -> 2, dt -> 3, l -> 4, mn -> 5, r -> 6`,
/// vowels and `h, w, y -> 0`.
const DIGIT_TABLE: [u8; 26] = *b"01230120022455012623010202";

/// Mapping from a 4-character Soundex code to the set of raw-vocabulary
/// words that produce it.
pub type SoundexIndex = HashMap<String, HashSet<String>>;

/// Computes the 4-character Soundex code for a lowercase, alphabetic word.
///
/// Keeps the first letter; translates the remaining letters with
/// [`DIGIT_TABLE`]; collapses runs of the same digit to one occurrence;
/// drops zeros; pads or truncates the result to 4 characters.
pub fn soundex_code(word: &str) -> String {
  let chars: Vec<char> = word.chars().collect();
  if chars.is_empty() {
    return "0000".to_string();
  }

  let mut code = String::new();
  code.push(chars[0]);

  let mut prev_digit: Option<u8> = None;
  for &ch in &chars[1..] {
    if !ch.is_ascii_lowercase() {
      continue;
    }
    let digit = DIGIT_TABLE[(ch as u8 - b'a') as usize];

    if prev_digit.is_none() {
      prev_digit = Some(digit);
      continue;
    }

    if Some(digit) != prev_digit {
      if prev_digit != Some(b'0') {
        code.push(prev_digit.unwrap() as char);
      }
      prev_digit = Some(digit);
    }
  }

  if let Some(digit) = prev_digit {
    if digit != b'0' && code.chars().last() != Some(digit as char) {
      code.push(digit as char);
    }
  }

  code.truncate(4);
  while code.len() < 4 {
    code.push('0');
  }
  code
}

/// Builds the Soundex index over `dictionary`'s words.
pub fn build_soundex_index(dictionary: &RawVocabulary) -> SoundexIndex {
  let mut index = SoundexIndex::new();
  for word in dictionary.keys() {
    let code = soundex_code(word);
    index.entry(code).or_default().insert(word.clone());
  }
  index
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn code_has_length_four_and_alpha_then_digits() {
    for word in ["donald", "trump", "a", "rust", "apple"] {
      let code = soundex_code(word);
      assert_eq!(code.len(), 4);
      assert!(code.chars().next().unwrap().is_alphabetic());
      for c in code.chars().skip(1) {
        assert!(c.is_ascii_digit());
      }
    }
  }

  #[test]
  fn classic_examples() {
    // Canonical Soundex examples (Manning et al., IIR book, ch. 3.4).
    assert_eq!(soundex_code("robert"), "r163");
    assert_eq!(soundex_code("rupert"), "r163");
    assert_eq!(soundex_code("ashcraft"), "a226");
  }

  #[test]
  fn similar_sounding_words_collide() {
    assert_eq!(soundex_code("donald"), soundex_code("donld"));
  }
}
