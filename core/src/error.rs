use crate::DocId;
use thiserror::Error;

/// Coarse classification of [`EngineError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
}

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("document {doc_id} is out of range (graph has {num_docs} documents)")]
    DocOutOfRange { doc_id: i64, num_docs: usize },

    #[error("cannot hold {requested} documents, capacity is {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("damping factor must lie in (0, 1), got {0}")]
    InvalidDamping(f64),

    #[error("convergence tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),

    #[error("expected next document id {expected}, got {got}")]
    NonSequentialDocId { expected: DocId, got: DocId },

    #[error("graph has {vertices} vertices but {documents} documents are registered")]
    GraphSizeMismatch { documents: usize, vertices: usize },

    #[error("cannot index an empty word")]
    EmptyWord,

    #[error("document {0} is not registered")]
    UnknownDocument(DocId),

    #[error("word '{0}' is not indexed")]
    WordNotFound(String),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::UnknownDocument(_) | EngineError::WordNotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(EngineError::WordNotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(EngineError::UnknownDocument(4).kind(), ErrorKind::NotFound);
        assert_eq!(EngineError::InvalidDamping(1.5).kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            EngineError::DocOutOfRange { doc_id: -1, num_docs: 2 }.kind(),
            ErrorKind::InvalidArgument
        );
    }

    #[test]
    fn messages_name_the_offending_value() {
        let e = EngineError::CapacityExceeded { requested: 120, capacity: 100 };
        assert_eq!(e.to_string(), "cannot hold 120 documents, capacity is 100");
    }
}
