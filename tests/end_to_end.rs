//! Black-box end-to-end scenarios over the toy three-document news corpus.

use corpus_engine::prelude::*;

fn toy_corpus() -> Vec<RawDocument> {
  vec![
    RawDocument {
      doc_id: DocId(1),
      title: "Apple product launch".to_string(),
      body: "Apple announces a new Apple product".to_string(),
    },
    RawDocument {
      doc_id: DocId(2),
      title: String::new(),
      body: "Democratic party leadership vote".to_string(),
    },
    RawDocument {
      doc_id: DocId(3),
      title: "Party politics".to_string(),
      body: "Political analysts discuss the Democratic party".to_string(),
    },
  ]
}

fn engine() -> SearchEngine {
  EngineBuilder::new().build(toy_corpus(), EngineConfig::default()).expect("toy corpus indexes cleanly")
}

#[test]
fn okapi_ranks_the_exact_match_first() {
  let engine = engine();
  let response = engine.answer("apple product", 3, &QueryOptions::default());
  assert_eq!(response.results[0].doc_id, DocId(1));
}

#[test]
fn cosine_ranks_the_exact_match_first() {
  let engine = engine();
  let opts = QueryOptions {
    scoring: ScoringModel::Cosine,
    ..QueryOptions::default()
  };
  let response = engine.answer("democratic party", 3, &opts);
  assert!(!response.results.is_empty());
  let top = &response.results[0];
  assert!(top.doc_id == DocId(2) || top.doc_id == DocId(3));
}

#[test]
fn language_model_scoring_returns_a_ranking() {
  let engine = engine();
  let opts = QueryOptions {
    scoring: ScoringModel::Lm,
    ..QueryOptions::default()
  };
  let response = engine.answer("party", 3, &opts);
  assert!(!response.results.is_empty());
}

#[test]
fn wildcard_query_suggests_vocabulary_without_ranking() {
  let engine = engine();
  let response = engine.answer("dem*atic", 3, &QueryOptions::default());
  assert!(response.results.is_empty());
  assert!(response.wildcard_suggestions.contains(&"democratic".to_string()));
}

#[test]
fn misspelled_query_surfaces_a_soundex_correction() {
  let engine = engine();
  let response = engine.answer("aple", 3, &QueryOptions::default());
  assert!(response.soundex_corrections.contains_key("aple"));
  assert!(response.soundex_corrections["aple"].contains(&"apple".to_string()));
}

#[test]
fn inexact_retrieval_still_returns_a_ranking() {
  let engine = engine();
  let opts = QueryOptions {
    do_inexact: true,
    min_n_docs: 1,
    ..QueryOptions::default()
  };
  let response = engine.answer("party", 3, &opts);
  assert!(!response.results.is_empty());
}

#[test]
fn empty_query_returns_no_results_without_panicking() {
  let engine = engine();
  let response = engine.answer("the and of", 3, &QueryOptions::default());
  assert!(response.results.is_empty());
}
