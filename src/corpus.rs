//! The external corpus-loading contract.

use crate::types::DocId;

/// A single document as handed to the engine builder, before normalization.
///
/// `title` and `body` are kept separate rather than pre-joined: the builder
/// concatenates them with a newline when both are non-empty (using whichever
/// one is non-empty otherwise), so a loader that only has one of the two
/// doesn't need to invent the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
  pub doc_id: DocId,
  pub title: String,
  pub body: String,
}

/// Anything that can hand the engine a static corpus to index.
///
/// Kept deliberately narrow: this crate owns indexing and retrieval, not
/// corpus acquisition, so implementors can be as simple as an in-memory
/// `Vec<RawDocument>` or as involved as a directory walker over SGML files.
pub trait CorpusSource {
  type Error: std::error::Error + Send + Sync + 'static;

  fn load(&self) -> Result<Vec<RawDocument>, Self::Error>;
}

impl CorpusSource for Vec<RawDocument> {
  type Error = std::convert::Infallible;

  fn load(&self) -> Result<Vec<RawDocument>, Self::Error> {
    Ok(self.clone())
  }
}
