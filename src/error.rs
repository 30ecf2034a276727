//! The error taxonomy for building and querying a [`crate::engine::SearchEngine`].

/// Errors that can occur while building or querying the engine.
///
/// Most error conditions named in the design notes (unknown terms, empty
/// queries, wildcard patterns with no matches, degenerate document
/// frequencies) are *not* represented here — they are recovered from locally
/// by the component that encounters them, contributing nothing to a score
/// rather than aborting. Only conditions that make the index itself
/// unusable are surfaced as an `Err`.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
  /// The corpus loader yielded a document whose text could not be used
  /// (e.g. a loader-level parse failure surfaced through [`crate::corpus::CorpusSource`]).
  #[error("malformed corpus document {doc_id:?}: {reason}")]
  MalformedCorpus {
    /// The document that failed to parse, if known.
    doc_id: Option<u32>,
    /// A human-readable explanation from the loader.
    reason: String,
  },

  /// `EngineBuilder::build` was called with zero documents. A corpus of size
  /// zero makes `avgdl` and several IDF computations undefined, so this is
  /// rejected at the boundary rather than producing `NaN` scores later.
  #[error("cannot build an index over an empty corpus")]
  EmptyCorpus,
}
