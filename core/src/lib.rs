//! Inverted index and link-graph ranking over a fixed document corpus.

pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod ingest;
pub mod query;
pub mod registry;
pub mod tokenizer;

pub type DocId = u32;

pub use config::{DanglingPolicy, EngineConfig, HitOrder};
pub use error::{EngineError, ErrorKind, Result};
pub use graph::{LinkGraph, PageRankParams, PageRankReport, RankSource};
pub use index::{InvertedIndex, ScoredPosting};
pub use ingest::{CorpusBuilder, LoadReport};
pub use query::{EngineStats, RankedDocument, SearchEngine, SearchHit, SearchOutcome};
pub use registry::{Document, DocumentRegistry};
