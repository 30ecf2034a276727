//! The query orchestrator: `EngineBuilder` freezes a corpus into a
//! [`SearchEngine`]; `SearchEngine::answer` runs the six-stage query
//! pipeline (grounded on `engine.py`'s `answer_query`).

use crate::corpus::RawDocument;
use crate::error::CorpusError;
use crate::feedback::{self, RocchioParams};
use crate::index::high_low::{build_high_low_index, HighLowIndex};
use crate::index::inverted::{build_inverted_index, InvertedIndex};
use crate::normalize::Normalizer;
use crate::phrase::{build_phrase_index, pmi, PhraseIndex};
use crate::retrieval;
use crate::scoring::{bm25, cosine, lm, PostingsView, ScoringModel};
use crate::summarize::naive_summary;
use crate::tolerance::{self, KGramIndex, RawVocabulary, SoundexIndex};
use crate::types::{counter_from_terms, Counter, DocId, DocLengths, Documents, Term};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Build-time tunables for [`EngineBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
  pub kgram_k: usize,
  pub high_low_theta: u32,
  pub phrase_bigram_freq: u32,
  pub phrase_bigram_pmi: f64,
  pub phrase_trigram_freq: u32,
  pub phrase_trigram_pmi: f64,
}

impl Default for EngineConfig {
  fn default() -> Self {
    EngineConfig {
      kgram_k: 2,
      high_low_theta: 5,
      phrase_bigram_freq: 2,
      phrase_bigram_pmi: 6.0,
      phrase_trigram_freq: 2,
      phrase_trigram_pmi: 12.0,
    }
  }
}

/// Query-time tunables for [`SearchEngine::answer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
  pub scoring: ScoringModel,
  pub do_inexact: bool,
  pub min_n_docs: usize,
  pub do_phrase: bool,
  pub use_expansion: bool,
  pub summary_len: usize,
  pub bm25: bm25::Bm25Params,
  pub lm_smoothing: lm::Smoothing,
  pub prf: RocchioParams,
}

impl Default for QueryOptions {
  fn default() -> Self {
    QueryOptions {
      scoring: ScoringModel::Okapi,
      do_inexact: false,
      min_n_docs: 10,
      do_phrase: false,
      use_expansion: false,
      summary_len: 0,
      bm25: bm25::Bm25Params::default(),
      lm_smoothing: lm::Smoothing::JelinekMercer { lambda: 0.5 },
      prf: RocchioParams::default(),
    }
  }
}

/// One ranked document in a [`QueryResponse`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
  pub doc_id: DocId,
  pub score: f64,
  pub summary: Option<String>,
}

/// The outcome of [`SearchEngine::answer`].
///
/// When `wildcard_suggestions` is non-empty, the query short-circuited on a
/// `*` pattern and `results` is empty — wildcard queries suggest vocabulary,
/// they don't rank documents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResponse {
  pub results: Vec<SearchResult>,
  pub wildcard_suggestions: Vec<String>,
  pub soundex_corrections: HashMap<String, Vec<String>>,
}

/// The frozen, query-only view of an indexed corpus.
pub struct SearchEngine {
  normalizer: Normalizer,
  index: InvertedIndex,
  doc_lengths: DocLengths,
  documents: Documents,
  dictionary: RawVocabulary,
  kgram_index: KGramIndex,
  soundex_index: SoundexIndex,
  high_low: HighLowIndex,
  phrase_index: PhraseIndex,
  avg_doc_length: f64,
}

/// Constructs a [`SearchEngine`] from a raw document set, mirroring the
/// teacher's fluent builder shape.
#[derive(Debug, Default)]
pub struct EngineBuilder;

impl EngineBuilder {
  pub fn new() -> Self {
    EngineBuilder
  }

  /// Indexes `docs` in one pass: normalizer → inverted index → dictionary →
  /// k-gram → Soundex → high/low → phrase mining. No incremental rebuild is
  /// supported (Non-goal).
  pub fn build(
    self,
    docs: impl IntoIterator<Item = RawDocument>,
    config: EngineConfig,
  ) -> Result<SearchEngine, CorpusError> {
    let raw_docs: Vec<RawDocument> = docs.into_iter().collect();
    if raw_docs.is_empty() {
      return Err(CorpusError::EmptyCorpus);
    }

    let normalizer = Normalizer::new();
    let text_docs: Vec<(DocId, String)> = raw_docs
      .iter()
      .map(|d| {
        let text = match (d.title.is_empty(), d.body.is_empty()) {
          (false, false) => format!("{}\n{}", d.title, d.body),
          (false, true) => d.title.clone(),
          (true, false) => d.body.clone(),
          (true, true) => String::new(),
        };
        (d.doc_id, text)
      })
      .collect();

    let (index, doc_lengths, documents) = build_inverted_index(text_docs, &normalizer);
    info!(terms = index.len(), docs = documents.len(), "built inverted index");

    let dictionary = tolerance::build_dictionary(&documents, &normalizer);
    let kgram_index = tolerance::build_k_gram_index(&dictionary, config.kgram_k);
    info!(grams = kgram_index.len(), "built k-gram index");

    let soundex_index = tolerance::build_soundex_index(&dictionary);
    info!(codes = soundex_index.len(), "built soundex index");

    let high_low = build_high_low_index(&index, config.high_low_theta);
    info!(terms = high_low.len(), "built high/low index");

    let mut doc_ids: Vec<DocId> = documents.keys().copied().collect();
    doc_ids.sort();
    let tokenized_documents: HashMap<DocId, Vec<Term>> = doc_ids
      .iter()
      .map(|&doc_id| (doc_id, normalizer.normalize(&documents[&doc_id])))
      .collect();

    let mut surviving_ngrams = Vec::new();
    for tokens in tokenized_documents.values() {
      surviving_ngrams.extend(pmi::mine_ngrams(
        tokens,
        config.phrase_bigram_freq,
        config.phrase_bigram_pmi,
        2,
      ));
      surviving_ngrams.extend(pmi::mine_ngrams(
        tokens,
        config.phrase_trigram_freq,
        config.phrase_trigram_pmi,
        3,
      ));
    }
    let phrase_index = build_phrase_index(&tokenized_documents, &surviving_ngrams);
    info!(phrases = phrase_index.len(), "built phrase index");

    let avg_doc_length = if doc_lengths.is_empty() {
      0.0
    } else {
      doc_lengths.values().sum::<u32>() as f64 / doc_lengths.len() as f64
    };

    Ok(SearchEngine {
      normalizer,
      index,
      doc_lengths,
      documents,
      dictionary,
      kgram_index,
      soundex_index,
      high_low,
      phrase_index,
      avg_doc_length,
    })
  }
}

impl SearchEngine {
  /// Runs the full query pipeline for `raw_query`, returning up to `top_k`
  /// ranked results.
  pub fn answer(&self, raw_query: &str, top_k: usize, opts: &QueryOptions) -> QueryResponse {
    if raw_query.contains('*') {
      let suggestions = tolerance::expand_wildcard(raw_query, &self.kgram_index);
      debug!(pattern = raw_query, hits = suggestions.len(), "wildcard short-circuit");
      return QueryResponse {
        results: Vec::new(),
        wildcard_suggestions: suggestions,
        soundex_corrections: HashMap::new(),
      };
    }

    let soundex_corrections = self.soundex_corrections(raw_query);
    if !soundex_corrections.is_empty() {
      debug!(count = soundex_corrections.len(), "soundex corrections found");
    }

    let query = counter_from_terms(self.normalizer.normalize(raw_query));
    let ranked = self.rank(&query, raw_query, opts);
    debug!(candidates = ranked.len(), "scored candidate set");

    let (final_ranked, summary_query) = if opts.use_expansion && !ranked.is_empty() {
      let expanded = feedback::pseudo_relevance_feedback(&query, &ranked, &self.index, self.doc_lengths.len() as u32, opts.prf);
      debug!(terms = expanded.len(), "prf recursion");
      let re_ranked = self.rank(&expanded, raw_query, opts);
      (re_ranked, expanded)
    } else {
      (ranked, query)
    };

    let mut top = final_ranked;
    top.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0)));
    top.truncate(top_k);

    let results = top
      .into_iter()
      .map(|(doc_id, score)| {
        let summary = if opts.summary_len > 0 {
          self
            .documents
            .get(&doc_id)
            .map(|text| naive_summary(text, &summary_query, opts.summary_len, &self.normalizer))
        } else {
          None
        };
        SearchResult { doc_id, score, summary }
      })
      .collect();

    QueryResponse {
      results,
      wildcard_suggestions: Vec::new(),
      soundex_corrections,
    }
  }

  fn soundex_corrections(&self, raw_query: &str) -> HashMap<String, Vec<String>> {
    let mut corrections = HashMap::new();
    for word in self.normalizer.tokenize_raw(raw_query) {
      if self.dictionary.contains_key(&word) {
        continue;
      }
      let code = tolerance::soundex_code(&word);
      if let Some(candidates) = self.soundex_index.get(&code) {
        let mut suggestions: Vec<String> = candidates.iter().filter(|&w| w != &word).cloned().collect();
        if !suggestions.is_empty() {
          suggestions.sort();
          corrections.insert(word, suggestions);
        }
      }
    }
    corrections
  }

  fn candidate_docs(&self, query: &Counter, opts: &QueryOptions) -> HashSet<DocId> {
    if opts.do_inexact {
      retrieval::filter_candidates(query, &self.high_low, opts.min_n_docs)
    } else {
      let mut candidates = HashSet::new();
      for term in query.keys() {
        candidates.extend(self.index.candidate_docs(term));
      }
      candidates
    }
  }

  fn phrase_boost(&self, raw_query: &str, candidates: &HashSet<DocId>) -> HashMap<DocId, f64> {
    let tokens = self.normalizer.normalize(raw_query);
    // Query-side mining uses looser thresholds than corpus-build time: any
    // repeated adjacent pair in a single short query already carries signal.
    let mut boosts = HashMap::new();
    for n in [2usize, 3usize] {
      for ngram in pmi::mine_ngrams(&tokens, 0, 0.0, n) {
        if let Some(postings) = self.phrase_index.get(&ngram) {
          for posting in &postings.postings {
            if candidates.contains(&posting.doc_id) {
              *boosts.entry(posting.doc_id).or_insert(0.0) += posting.tf as f64;
            }
          }
        }
      }
    }
    boosts
  }

  fn rank(&self, query: &Counter, raw_query: &str, opts: &QueryOptions) -> Vec<(DocId, f64)> {
    if query.is_empty() {
      return Vec::new();
    }

    let candidates = self.candidate_docs(query, opts);
    let candidates_vec: Vec<DocId> = candidates.iter().copied().collect();

    let mut scores: HashMap<DocId, f64> = match opts.scoring {
      ScoringModel::Okapi => {
        if opts.do_inexact {
          bm25::score_candidates(query, &candidates_vec, &self.high_low, &self.doc_lengths, self.avg_doc_length, opts.bm25)
        } else {
          bm25::score_candidates(query, &candidates_vec, &self.index, &self.doc_lengths, self.avg_doc_length, opts.bm25)
        }
      }
      ScoringModel::Cosine => {
        if opts.do_inexact {
          cosine::score_candidates(query, &candidates_vec, &self.high_low, &self.doc_lengths)
        } else {
          cosine::score_candidates(query, &candidates_vec, &self.index, &self.doc_lengths)
        }
      }
      ScoringModel::Lm => {
        // LM always scores against the high/low index, never the raw
        // inverted index, matching the original threading `high_low_index`
        // through `lm_rank_documents` unconditionally.
        let vocab_size = self.index.len() as u64;
        let collection_length: u64 = self.doc_lengths.values().map(|&l| l as u64).sum();
        lm::score_candidates(
          query,
          &candidates_vec,
          &self.high_low,
          &self.doc_lengths,
          vocab_size,
          collection_length,
          opts.lm_smoothing,
        )
      }
    };

    if opts.do_phrase {
      for (doc_id, boost) in self.phrase_boost(raw_query, &candidates) {
        *scores.entry(doc_id).or_insert(0.0) += boost;
      }
    }

    scores.into_iter().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

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

  #[test]
  fn empty_corpus_is_rejected() {
    let result = EngineBuilder::new().build(Vec::new(), EngineConfig::default());
    assert!(matches!(result, Err(CorpusError::EmptyCorpus)));
  }

  #[test]
  fn answer_ranks_the_document_containing_the_query_term_first() {
    let engine = EngineBuilder::new().build(toy_corpus(), EngineConfig::default()).unwrap();
    let response = engine.answer("apple", 10, &QueryOptions::default());
    assert!(!response.results.is_empty());
    assert_eq!(response.results[0].doc_id, DocId(1));
  }

  #[test]
  fn wildcard_query_short_circuits_to_suggestions() {
    let engine = EngineBuilder::new().build(toy_corpus(), EngineConfig::default()).unwrap();
    let response = engine.answer("app*e", 10, &QueryOptions::default());
    assert!(response.results.is_empty());
    assert!(response.wildcard_suggestions.contains(&"apple".to_string()));
  }

  #[test]
  fn typo_surfaces_a_soundex_correction() {
    let engine = EngineBuilder::new().build(toy_corpus(), EngineConfig::default()).unwrap();
    let response = engine.answer("appel", 10, &QueryOptions::default());
    assert!(response.soundex_corrections.contains_key("appel"));
    assert!(response.soundex_corrections["appel"].contains(&"apple".to_string()));
  }

  #[test]
  fn summary_is_attached_when_requested() {
    let engine = EngineBuilder::new().build(toy_corpus(), EngineConfig::default()).unwrap();
    let opts = QueryOptions {
      summary_len: 1,
      ..QueryOptions::default()
    };
    let response = engine.answer("apple", 10, &opts);
    assert!(response.results[0].summary.is_some());
  }
}
