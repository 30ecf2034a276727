//! Text normalization: tokenization, stop-word filtering and stemming.
//!
//! Tokenization and stemming are expressed as methods on a single immutable
//! [`Normalizer`] value, constructed once and shared by reference, rather
//! than a process-wide stemmer/stop-word singleton.

use crate::types::Term;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// The fixed 25-word stop list (see spec Glossary). Kept as a sorted array
/// so membership is a binary search rather than a per-call hash build.
const STOP_WORDS: [&str; 25] = [
  "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
  "its", "of", "on", "that", "the", "to", "was", "were", "will", "with",
];

/// Returns `true` when `word` is purely alphabetic and not a stop word.
///
/// Free function, mirroring the original's standalone `is_apt_word`: apt-ness
/// is a property of a lowercased word independent of whether a `Normalizer`
/// is in scope.
pub fn is_apt_word(word: &str) -> bool {
  !word.is_empty() && word.chars().all(|c| c.is_alphabetic()) && STOP_WORDS.binary_search(&word).is_err()
}

/// An immutable, reusable text normalizer.
///
/// Holds the Porter-style English stemmer; construction is the only place
/// this crate pays for building one.
pub struct Normalizer {
  stemmer: Stemmer,
}

impl Default for Normalizer {
  fn default() -> Self {
    Self::new()
  }
}

impl Normalizer {
  /// Creates a new normalizer with the English Porter stemmer.
  pub fn new() -> Self {
    Self {
      stemmer: Stemmer::create(Algorithm::English),
    }
  }

  /// Lowercases and Unicode-word-tokenizes `text`, keeping only apt
  /// (alphabetic, non-stop-word) tokens. Does **not** stem — this is the
  /// variant the tolerance layer (dictionary, k-gram, Soundex) uses so that
  /// corrections and wildcard expansions remain human-readable words.
  pub fn tokenize_raw(&self, text: &str) -> Vec<String> {
    text
      .to_lowercase()
      .unicode_words()
      .filter(|w| is_apt_word(w))
      .map(str::to_string)
      .collect()
  }

  /// Like [`Normalizer::tokenize_raw`], but also stems each surviving token.
  /// This is the variant used for index keys and query scoring.
  pub fn normalize(&self, text: &str) -> Vec<Term> {
    self
      .tokenize_raw(text)
      .into_iter()
      .map(|w| Term(self.stemmer.stem(&w).into_owned()))
      .collect()
  }

  /// Stems a single already-lowercased, already-apt word. Used when
  /// re-stemming PRF expansion terms (§4.9) without re-tokenizing whole text.
  pub fn stem(&self, word: &str) -> Term {
    Term(self.stemmer.stem(word).into_owned())
  }
}
