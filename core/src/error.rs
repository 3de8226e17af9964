use crate::{DocId, TermId};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    /// Zero documents leave every idf undefined.
    #[error("cannot build a collection from an empty corpus")]
    EmptyCorpus,

    #[error("document {doc_id} references term id {term_id} which is not in the dictionary")]
    UnknownTerm { doc_id: DocId, term_id: TermId },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl CollectionError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = CollectionError> = std::result::Result<T, E>;
