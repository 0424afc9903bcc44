use crate::config::EngineConfig;
use crate::error::Result;
use crate::graph::{LinkGraph, PageRankReport};
use crate::index::InvertedIndex;
use crate::query::SearchEngine;
use crate::tokenizer::{self, is_stopword};
use crate::DocId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    pub documents: usize,
    pub distinct_words: usize,
    pub links_added: usize,
    pub links_dropped: usize,
    pub pagerank: PageRankReport,
}

/// Load phase: register documents, index their words, collect their links,
/// then hand over a ranked [`SearchEngine`].
pub struct CorpusBuilder {
    config: EngineConfig,
    index: InvertedIndex,
    // Edges wait until every document is registered and the graph can be sized.
    pending: Vec<(DocId, i64)>,
}

impl CorpusBuilder {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, index: InvertedIndex::new(), pending: Vec::new() })
    }

    pub fn add_document(&mut self, name: impl Into<String>, text: &str) -> Result<DocId> {
        let doc_id = self.index.register(name);
        for token in tokenizer::tokens(text) {
            let word = tokenizer::normalize(token);
            if !is_stopword(&word) {
                self.index.add_word(&word, doc_id)?;
            }
            if let Some(target) = tokenizer::parse_link(&word) {
                self.pending.push((doc_id, target));
            }
        }
        Ok(doc_id)
    }

    pub fn document_count(&self) -> usize { self.index.total_documents() }

    pub fn finish(self) -> Result<(SearchEngine, LoadReport)> {
        let num_docs = self.index.total_documents();
        let mut graph = match self.config.max_documents {
            Some(cap) => LinkGraph::with_capacity_limit(cap),
            None => LinkGraph::new(),
        };
        graph.initialize(num_docs)?;

        let mut dropped = 0;
        for (source, target) in self.pending {
            let added = DocId::try_from(target)
                .ok()
                .map(|t| graph.add_edge(source, t));
            match added {
                Some(Ok(())) => {}
                Some(Err(e)) => {
                    tracing::warn!(source, target, error = %e, "dropping link");
                    dropped += 1;
                }
                None => {
                    tracing::warn!(source, target, "dropping link, document id out of range");
                    dropped += 1;
                }
            }
        }

        let mut engine = SearchEngine::new(self.index, graph, self.config)?;
        let pagerank = engine.recompute()?;
        let report = LoadReport {
            documents: num_docs,
            distinct_words: engine.index().total_words_indexed(),
            links_added: engine.graph().edge_count(),
            links_dropped: dropped,
            pagerank,
        };
        tracing::info!(
            documents = report.documents,
            words = report.distinct_words,
            links = report.links_added,
            dropped = report.links_dropped,
            "corpus loaded"
        );
        Ok((engine, report))
    }
}
