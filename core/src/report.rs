//! Read-only views handed to presentation layers.

use crate::document::Position;
use crate::{DocId, TermId};
use serde::{Deserialize, Serialize};

/// Where one keyword occurs in one document of its posting list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingExcerpt {
    pub doc_id: DocId,
    pub positions: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordPostings {
    pub term: String,
    pub term_id: TermId,
    pub weight: f32,
    /// Every document containing the term, by ascending doc id.
    pub postings: Vec<PostingExcerpt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub doc_id: DocId,
    /// Highest weighted terms first.
    pub keywords: Vec<KeywordPostings>,
    pub unique_terms: usize,
    pub norm: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub num_docs: usize,
    pub num_terms: usize,
    pub total_postings: usize,
    pub empty_docs: usize,
}
