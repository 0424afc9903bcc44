use crate::error::{EngineError, Result};
use crate::graph::RankSource;
use crate::registry::DocumentRegistry;
use crate::tokenizer;
use crate::DocId;
use serde::Serialize;
use std::collections::HashMap;

/// One posting paired with the document's current rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredPosting {
    pub doc_id: DocId,
    pub score: f64,
}

/// Word -> postings in insertion order, duplicates kept.
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<DocId>>,
    docs: DocumentRegistry,
    total_postings: usize,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Drop every posting. Registered documents are kept.
    pub fn initialize(&mut self) {
        self.postings.clear();
        self.total_postings = 0;
    }

    pub fn register_document(&mut self, doc_id: DocId, name: impl Into<String>) -> Result<()> {
        self.docs.register_at(doc_id, name)
    }

    pub fn register(&mut self, name: impl Into<String>) -> DocId { self.docs.register(name) }

    /// `word` must already be normalized; it is stored as given.
    pub fn add_word(&mut self, word: &str, doc_id: DocId) -> Result<()> {
        if word.is_empty() {
            return Err(EngineError::EmptyWord);
        }
        if !self.docs.contains(doc_id) {
            return Err(EngineError::UnknownDocument(doc_id));
        }
        match self.postings.get_mut(word) {
            Some(list) => list.push(doc_id),
            None => {
                self.postings.insert(word.to_string(), vec![doc_id]);
            }
        }
        self.total_postings += 1;
        Ok(())
    }

    pub fn is_stopword(&self, word: &str) -> bool { tokenizer::is_stopword(word) }

    pub fn postings(&self, word: &str) -> Option<&[DocId]> {
        self.postings.get(word).map(Vec::as_slice)
    }

    /// Raw postings of `word` with each document's rank attached.
    pub fn search<R: RankSource + ?Sized>(&self, word: &str, ranks: &R) -> Result<Vec<ScoredPosting>> {
        let list = self
            .postings(word)
            .ok_or_else(|| EngineError::WordNotFound(word.to_string()))?;
        Ok(list
            .iter()
            .map(|&doc_id| ScoredPosting { doc_id, score: ranks.rank_of(doc_id).unwrap_or(0.0) })
            .collect())
    }

    pub fn document_name(&self, doc_id: DocId) -> Result<&str> { self.docs.name(doc_id) }

    pub fn documents(&self) -> &DocumentRegistry { &self.docs }

    /// Distinct words.
    pub fn total_words_indexed(&self) -> usize { self.postings.len() }

    pub fn total_documents(&self) -> usize { self.docs.len() }

    pub fn total_postings(&self) -> usize { self.total_postings }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_with_docs(n: usize) -> InvertedIndex {
        let mut idx = InvertedIndex::new();
        for i in 0..n {
            idx.register(format!("doc{i}.txt"));
        }
        idx
    }

    struct Fixed(Vec<f64>);

    impl RankSource for Fixed {
        fn rank_of(&self, doc_id: DocId) -> Option<f64> { self.0.get(doc_id as usize).copied() }
    }

    #[test]
    fn postings_keep_order_and_duplicates() {
        let mut idx = index_with_docs(6);
        idx.add_word("apple", 3).unwrap();
        idx.add_word("apple", 3).unwrap();
        idx.add_word("apple", 5).unwrap();
        assert_eq!(idx.postings("apple"), Some(&[3, 3, 5][..]));
        assert_eq!(idx.total_words_indexed(), 1);
        assert_eq!(idx.total_postings(), 3);
    }

    #[test]
    fn search_attaches_ranks() {
        let mut idx = index_with_docs(2);
        idx.add_word("grafo", 1).unwrap();
        idx.add_word("grafo", 0).unwrap();
        let hits = idx.search("grafo", &Fixed(vec![0.25, 0.75])).unwrap();
        assert_eq!(
            hits,
            vec![ScoredPosting { doc_id: 1, score: 0.75 }, ScoredPosting { doc_id: 0, score: 0.25 }]
        );
    }

    #[test]
    fn unknown_word_is_not_found() {
        let idx = index_with_docs(1);
        assert_eq!(
            idx.search("nada", &Fixed(vec![1.0])),
            Err(EngineError::WordNotFound("nada".into()))
        );
    }

    #[test]
    fn words_match_exactly() {
        let mut idx = index_with_docs(1);
        idx.add_word("rust", 0).unwrap();
        assert!(idx.postings("Rust").is_none());
        assert!(idx.postings("rus").is_none());
    }

    #[test]
    fn rejects_bad_input_without_mutation() {
        let mut idx = index_with_docs(2);
        assert_eq!(idx.add_word("apple", 2), Err(EngineError::UnknownDocument(2)));
        assert_eq!(idx.add_word("", 0), Err(EngineError::EmptyWord));
        assert_eq!(idx.total_words_indexed(), 0);
        assert_eq!(idx.total_postings(), 0);
    }

    #[test]
    fn initialize_clears_postings_only() {
        let mut idx = index_with_docs(1);
        idx.add_word("apple", 0).unwrap();
        idx.initialize();
        assert_eq!(idx.total_words_indexed(), 0);
        assert_eq!(idx.total_documents(), 1);
    }

    #[test]
    fn register_document_requires_dense_ids() {
        let mut idx = InvertedIndex::new();
        idx.register_document(0, "a.txt").unwrap();
        assert!(idx.register_document(3, "d.txt").is_err());
        assert_eq!(idx.document_name(0).unwrap(), "a.txt");
        assert_eq!(idx.document_name(1), Err(EngineError::UnknownDocument(1)));
    }
}
