use crate::error::{EngineError, Result};
use crate::DocId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub doc_id: DocId,
    /// Display name, typically the file path the document was read from.
    pub name: String,
}

/// Dense `DocId -> name` mapping, ids handed out in registration order.
#[derive(Debug, Default, Clone)]
pub struct DocumentRegistry {
    names: Vec<String>,
}

impl DocumentRegistry {
    pub fn new() -> Self { Self::default() }

    /// Register `name` under the next free id.
    pub fn register(&mut self, name: impl Into<String>) -> DocId {
        let id = self.names.len() as DocId;
        self.names.push(name.into());
        id
    }

    /// Register under an explicit id, which must be the next dense id.
    pub fn register_at(&mut self, doc_id: DocId, name: impl Into<String>) -> Result<()> {
        let expected = self.names.len() as DocId;
        if doc_id != expected {
            return Err(EngineError::NonSequentialDocId { expected, got: doc_id });
        }
        self.names.push(name.into());
        Ok(())
    }

    pub fn name(&self, doc_id: DocId) -> Result<&str> {
        self.names
            .get(doc_id as usize)
            .map(String::as_str)
            .ok_or(EngineError::UnknownDocument(doc_id))
    }

    pub fn contains(&self, doc_id: DocId) -> bool { (doc_id as usize) < self.names.len() }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = Document> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| Document { doc_id: i as DocId, name: name.clone() })
    }
}
