//! # corpus_engine: an in-memory news-corpus search engine
//!
//! `corpus_engine` indexes a static collection of news documents once and
//! answers free-text queries against it, ranking results with Okapi BM25,
//! cosine tf-idf, or a unigram language model. A query may also be a `*`
//! wildcard pattern (answered from the k-gram index rather than scored),
//! may trigger Soundex-based typo correction, may be scored with phrase
//! (n-gram) boosting, may be restricted to an approximate champion-list
//! candidate set for speed, and may be expanded once via Rocchio
//! pseudo-relevance feedback.
//!
//! ## Getting started
//!
//! ```rust
//! use corpus_engine::prelude::*;
//!
//! let docs = vec![
//!     RawDocument { doc_id: DocId(1), title: "".into(), body: "Apple announces a new Apple product".into() },
//!     RawDocument { doc_id: DocId(2), title: "".into(), body: "Democratic party leadership vote".into() },
//!     RawDocument { doc_id: DocId(3), title: "".into(), body: "Political analysts discuss the Democratic party".into() },
//! ];
//!
//! let engine = EngineBuilder::new().build(docs, EngineConfig::default()).unwrap();
//! let response = engine.answer("apple", 5, &QueryOptions::default());
//! assert_eq!(response.results[0].doc_id, DocId(1));
//! ```

/// The external corpus-loading contract (`CorpusSource`, `RawDocument`).
pub mod corpus;
/// The query orchestrator: `EngineBuilder` and `SearchEngine`.
pub mod engine;
/// The `CorpusError` taxonomy.
pub mod error;
/// Rocchio pseudo-relevance feedback.
pub mod feedback;
/// The primary inverted index and the high/low champion-list derivative.
pub mod index;
/// Text normalization: tokenization, stop words, stemming.
pub mod normalize;
/// PMI-based phrase (n-gram) mining and the phrase index.
pub mod phrase;
/// Approximate (inexact) candidate selection over the champion-list index.
pub mod retrieval;
/// The BM25, cosine and language-model scorers, unified by `PostingsView`.
pub mod scoring;
/// Naive frequency-based extractive summarization.
pub mod summarize;
/// Tolerant retrieval: the raw dictionary, k-gram index and Soundex index.
pub mod tolerance;
/// Core data types shared across every layer.
pub mod types;

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::corpus::*;
  pub use crate::engine::*;
  pub use crate::error::*;
  pub use crate::feedback::{RocchioParams, Vector};
  pub use crate::index::*;
  pub use crate::normalize::Normalizer;
  pub use crate::phrase::*;
  pub use crate::retrieval::filter_candidates;
  pub use crate::scoring::{bm25::Bm25Params, lm::Smoothing, PostingsView, ScoringModel};
  pub use crate::summarize::naive_summary;
  pub use crate::tolerance::*;
  pub use crate::types::*;
}
