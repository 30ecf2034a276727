//! The primary inverted index builder.

use crate::normalize::Normalizer;
use crate::types::{DocId, DocLengths, Documents, PostingList, Term};
use std::collections::{HashMap, HashSet};

/// Mapping from [`Term`] to its [`PostingList`]. No entry exists for a term
/// that never occurs in the corpus.
pub type InvertedIndex = HashMap<Term, PostingList>;

/// Builds the inverted index, document-length map and document-text map
/// from a sequence of `(doc_id, raw_text)` pairs.
///
/// Iterates in ascending `DocId` order, normalizing each document's text
/// (stemmed variant) and accumulating per-document term frequencies before
/// appending any posting, so a `(term, doc)` pair is never duplicated in a
/// posting list. A document whose text is empty contributes a length of 0
/// and no postings — this is never an error.
pub fn build_inverted_index(
  docs: impl IntoIterator<Item = (DocId, String)>,
  normalizer: &Normalizer,
) -> (InvertedIndex, DocLengths, Documents) {
  let mut docs: Vec<(DocId, String)> = docs.into_iter().collect();
  docs.sort_by_key(|(id, _)| *id);

  let mut index: InvertedIndex = HashMap::new();
  let mut doc_lengths: DocLengths = HashMap::new();
  let mut documents: Documents = HashMap::new();

  for (doc_id, text) in docs {
    let terms = normalizer.normalize(&text);
    doc_lengths.insert(doc_id, terms.len() as u32);
    documents.insert(doc_id, text);

    let mut term_freqs: HashMap<Term, u32> = HashMap::new();
    for term in terms {
      *term_freqs.entry(term).or_insert(0) += 1;
    }

    for (term, tf) in term_freqs {
      index.entry(term).or_default().push(doc_id, tf);
    }
  }

  (index, doc_lengths, documents)
}

/// Every distinct term currently present in the index.
pub fn vocabulary(index: &InvertedIndex) -> HashSet<&Term> {
  index.keys().collect()
}
