//! Batch query evaluation: rank each query and attach keyword reports to the hits.

use crate::collection::TextCollection;
use crate::query::Query;
use crate::rank;
use crate::report::DocumentReport;
use crate::DocId;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_KEYWORDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Documents reported per query.
    pub top_k: usize,
    /// Keywords reported per document.
    pub keywords: usize,
}

impl Default for SearchOptions {
    fn default() -> Self { Self { top_k: DEFAULT_TOP_K, keywords: DEFAULT_KEYWORDS } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: f32,
    pub report: DocumentReport,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub query: Query,
    /// Documents with a nonzero score, before truncation to `top_k`.
    pub total_hits: usize,
    pub hits: Vec<SearchHit>,
}

impl TextCollection {
    /// Ranked ids come from posting lists, so every hit has a report.
    pub fn search(&self, query: &Query, options: SearchOptions) -> QueryResult {
        let scores = self.similarity(query);
        let total_hits = scores.len();
        let hits = rank::top_k(scores, options.top_k)
            .into_iter()
            .filter_map(|scored| {
                let report = self.document_report(scored.doc_id, options.keywords)?;
                Some(SearchHit { doc_id: scored.doc_id, score: scored.score, report })
            })
            .collect();
        QueryResult { query: query.clone(), total_hits, hits }
    }
}

/// Run every query against `collection` in parallel; results keep query order.
pub fn search_all(collection: &TextCollection, queries: &[Query], options: SearchOptions) -> Vec<QueryResult> {
    queries.par_iter().map(|q| collection.search(q, options)).collect()
}
