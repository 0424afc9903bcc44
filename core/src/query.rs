use crate::config::{EngineConfig, HitOrder};
use crate::error::{EngineError, Result};
use crate::graph::{LinkGraph, PageRankParams, PageRankReport};
use crate::index::InvertedIndex;
use crate::tokenizer;
use crate::DocId;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub name: String,
    pub score: f64,
    /// Postings entries folded into this hit (always 1 without deduplication).
    pub occurrences: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The word was never indexed.
    NotFound { word: String },
    Hits { word: String, hits: Vec<SearchHit> },
}

impl SearchOutcome {
    pub fn hits(&self) -> &[SearchHit] {
        match self {
            SearchOutcome::NotFound { .. } => &[],
            SearchOutcome::Hits { hits, .. } => hits,
        }
    }

    pub fn is_found(&self) -> bool { matches!(self, SearchOutcome::Hits { .. }) }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDocument {
    pub doc_id: DocId,
    pub name: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineStats {
    pub total_words_indexed: usize,
    pub total_documents: usize,
    pub total_links: usize,
    pub dangling_documents: usize,
    pub top: Vec<RankedDocument>,
}

/// Index and link graph over the same documents, answering ranked queries.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: InvertedIndex,
    graph: LinkGraph,
    config: EngineConfig,
}

impl SearchEngine {
    /// The graph must cover exactly the documents registered in the index.
    pub fn new(index: InvertedIndex, graph: LinkGraph, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if graph.num_docs() != index.total_documents() {
            return Err(EngineError::GraphSizeMismatch {
                documents: index.total_documents(),
                vertices: graph.num_docs(),
            });
        }
        Ok(Self { index, graph, config })
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn graph(&self) -> &LinkGraph { &self.graph }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn document_name(&self, doc_id: DocId) -> Result<&str> { self.index.document_name(doc_id) }

    /// Recompute PageRank with the configured policy.
    pub fn recompute(&mut self) -> Result<PageRankReport> {
        let params = PageRankParams {
            damping: self.config.damping,
            iterations: self.config.iterations,
            tolerance: self.config.tolerance,
            dangling: self.config.dangling,
        };
        self.graph.compute_pagerank_with(&params)
    }

    /// Recompute with explicit damping and iteration count, other settings from config.
    pub fn recompute_with(&mut self, damping: f64, iterations: usize) -> Result<PageRankReport> {
        let params = PageRankParams {
            damping,
            iterations,
            tolerance: self.config.tolerance,
            dangling: self.config.dangling,
        };
        self.graph.compute_pagerank_with(&params)
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome> {
        let word = tokenizer::normalize(query.trim());
        let postings = match self.index.search(&word, &self.graph) {
            Ok(p) => p,
            Err(EngineError::WordNotFound(_)) => return Ok(SearchOutcome::NotFound { word }),
            Err(e) => return Err(e),
        };

        let mut hits: Vec<SearchHit> = Vec::with_capacity(postings.len());
        if self.config.dedup_hits {
            let mut slot: HashMap<DocId, usize> = HashMap::new();
            for p in postings {
                if let Some(&i) = slot.get(&p.doc_id) {
                    hits[i].occurrences += 1;
                    continue;
                }
                slot.insert(p.doc_id, hits.len());
                hits.push(self.hit(p.doc_id, p.score)?);
            }
        } else {
            for p in postings {
                hits.push(self.hit(p.doc_id, p.score)?);
            }
        }

        if self.config.hit_order == HitOrder::Score {
            // Stable sort keeps postings order among equal scores.
            hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        }
        tracing::debug!(%word, hits = hits.len(), "search");
        Ok(SearchOutcome::Hits { word, hits })
    }

    pub fn top_documents(&self, n: usize) -> Result<Vec<RankedDocument>> {
        self.graph
            .top_n(n)
            .into_iter()
            .map(|(doc_id, score)| {
                Ok(RankedDocument { doc_id, name: self.document_name(doc_id)?.to_string(), score })
            })
            .collect()
    }

    pub fn stats(&self) -> Result<EngineStats> {
        Ok(EngineStats {
            total_words_indexed: self.index.total_words_indexed(),
            total_documents: self.index.total_documents(),
            total_links: self.graph.edge_count(),
            dangling_documents: self.graph.dangling().len(),
            top: self.top_documents(self.config.stats_top_n)?,
        })
    }

    fn hit(&self, doc_id: DocId, score: f64) -> Result<SearchHit> {
        Ok(SearchHit { doc_id, name: self.document_name(doc_id)?.to_string(), score, occurrences: 1 })
    }
}
