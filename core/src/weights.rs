//! TF-IDF weighting and document norms.
//!
//! `weight(d, t) = tf(d, t) * idf(t) / maxtf(d)` with `idf(t) = log2(N / df(t))`.
//! Documents without terms get an empty vector and a zero norm.

use crate::document::Document;
use crate::index::InvertedIndex;
use crate::TermId;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Sparse term id -> weight, holding exactly the terms of one document.
pub type DocWeights = BTreeMap<TermId, f32>;

/// `log2(num_docs / document_frequency)`; 0 for a term seen nowhere.
pub fn idf(num_docs: usize, document_frequency: usize) -> f32 {
    if document_frequency == 0 { return 0.0; }
    (num_docs as f32 / document_frequency as f32).log2()
}

pub fn document_weights(doc: &Document, idfs: &[f32]) -> DocWeights {
    let Some(max_tf) = doc.max_term_frequency() else { return DocWeights::new() };
    let max_tf = max_tf as f32;
    doc.terms()
        .iter()
        .map(|(&term, positions)| {
            let tf = positions.len() as f32;
            let idf = idfs.get(term as usize).copied().unwrap_or(0.0);
            (term, tf * idf / max_tf)
        })
        .collect()
}

/// Euclidean magnitude of a weight vector; `+0.0` when empty.
pub fn l2_norm(weights: &DocWeights) -> f32 {
    // `Sum for f32` starts from -0.0, which would leak into reports.
    weights.values().fold(0.0f32, |acc, w| acc + w * w).sqrt()
}

/// Output of the weighting phase, indexed by term id (`idf`) or doc id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Weighting {
    pub idf: Vec<f32>,
    pub weights: Vec<DocWeights>,
    pub norms: Vec<f32>,
}

impl Weighting {
    /// Documents are weighted independently, so this fans out across threads.
    pub fn compute(documents: &[Document], index: &InvertedIndex) -> Self {
        let num_docs = documents.len();
        let idf: Vec<f32> = index
            .as_slice()
            .iter()
            .map(|postings| self::idf(num_docs, postings.len()))
            .collect();
        let weights: Vec<DocWeights> = documents
            .par_iter()
            .map(|doc| document_weights(doc, &idf))
            .collect();
        let norms = weights.par_iter().map(l2_norm).collect();
        Self { idf, weights, norms }
    }
}
