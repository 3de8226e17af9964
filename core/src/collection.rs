use crate::dictionary::TermDictionary;
use crate::document::Document;
use crate::error::{CollectionError, Result};
use crate::index::{InvertedIndex, PostingList};
use crate::query::Query;
use crate::rank::{self, ScoredDoc};
use crate::report::{CollectionStats, DocumentReport, KeywordPostings, PostingExcerpt};
use crate::tokenizer::TermFilter;
use crate::weights::{DocWeights, Weighting};
use crate::{DocId, TermId};
use std::collections::HashMap;
use tracing::{debug, info};

/// An immutable TF-IDF index over a fixed list of paragraphs.
///
/// Everything is computed up front; afterwards the collection is only read,
/// so a single instance can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct TextCollection {
    documents: Vec<Document>,
    dictionary: TermDictionary,
    index: InvertedIndex,
    idf: Vec<f32>,
    weights: Vec<DocWeights>,
    norms: Vec<f32>,
}

impl TextCollection {
    /// Index paragraphs in order; the n-th paragraph becomes document n.
    pub fn build<I, S>(paragraphs: I, filter: &TermFilter) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = TermDictionary::new();
        let documents: Vec<Document> = paragraphs
            .into_iter()
            .map(|p| Document::from_text(p.as_ref(), filter, &mut dictionary))
            .collect();
        Self::from_documents(documents, dictionary)
    }

    /// Finish a build from documents indexed against `dictionary`.
    pub fn from_documents(documents: Vec<Document>, dictionary: TermDictionary) -> Result<Self> {
        if documents.is_empty() {
            return Err(CollectionError::EmptyCorpus);
        }
        for (doc_id, doc) in documents.iter().enumerate() {
            if let Some((&term_id, _)) = doc.terms().last_key_value() {
                if term_id as usize >= dictionary.len() {
                    return Err(CollectionError::UnknownTerm { doc_id: doc_id as DocId, term_id });
                }
            }
            if doc.is_empty() {
                debug!(doc_id, "document has no terms, skipping weighting");
            }
        }

        debug!(num_terms = dictionary.len(), "inverting documents");
        let index = InvertedIndex::build(&documents, dictionary.len());
        debug!(total_postings = index.total_postings(), "computing weights");
        let Weighting { idf, weights, norms } = Weighting::compute(&documents, &index);

        info!(num_docs = documents.len(), num_terms = dictionary.len(), "collection built");
        Ok(Self { documents, dictionary, index, idf, weights, norms })
    }

    pub fn documents(&self) -> &[Document] { &self.documents }
    pub fn dictionary(&self) -> &TermDictionary { &self.dictionary }
    pub fn postings(&self) -> &InvertedIndex { &self.index }
    pub fn weights(&self) -> &[DocWeights] { &self.weights }
    pub fn norms(&self) -> &[f32] { &self.norms }

    pub fn document(&self, doc_id: DocId) -> Option<&Document> { self.documents.get(doc_id as usize) }

    pub fn posting_list(&self, term: &str) -> Option<&PostingList> {
        self.dictionary.get(term).and_then(|id| self.index.get(id))
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.dictionary.get(term).and_then(|id| self.idf.get(id as usize).copied())
    }

    pub fn len(&self) -> usize { self.documents.len() }

    /// Always false: empty corpora are rejected at build time.
    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn stats(&self) -> CollectionStats {
        CollectionStats {
            num_docs: self.documents.len(),
            num_terms: self.dictionary.len(),
            total_postings: self.index.total_postings(),
            empty_docs: self.documents.iter().filter(|d| d.is_empty()).count(),
        }
    }

    /// Cosine similarity against a unit-weighted query vector.
    ///
    /// Only documents with a nonzero score appear. Unknown query terms and
    /// zero-norm documents contribute nothing.
    pub fn similarity(&self, query: &Query) -> HashMap<DocId, f32> {
        let mut scores: HashMap<DocId, f32> = HashMap::new();
        if query.is_empty() {
            return scores;
        }
        let qnorm = (query.len() as f32).sqrt();
        for word in query.terms() {
            let Some(term) = self.dictionary.get(word) else { continue };
            let Some(postings) = self.index.get(term) else { continue };
            for &doc_id in postings.keys() {
                let norm = self.norms[doc_id as usize];
                if norm == 0.0 { continue; }
                let weight = self.weights[doc_id as usize].get(&term).copied().unwrap_or(0.0);
                if weight == 0.0 { continue; }
                *scores.entry(doc_id).or_insert(0.0) += weight / (norm * qnorm);
            }
        }
        scores
    }

    /// At most `k` best matching documents, by descending score then doc id.
    pub fn rank(&self, query: &Query, k: usize) -> Vec<ScoredDoc> {
        rank::top_k(self.similarity(query), k)
    }

    /// The `n` highest weighted terms of a document with their posting excerpts.
    pub fn document_report(&self, doc_id: DocId, n: usize) -> Option<DocumentReport> {
        let doc = self.document(doc_id)?;
        let weights = self.weights.get(doc_id as usize)?;
        let candidates: Vec<(TermId, f32)> = weights.iter().map(|(&t, &w)| (t, w)).collect();
        let top = rank::select_top(candidates, n, |a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let keywords = top
            .into_iter()
            .filter_map(|(term_id, weight)| {
                let term = self.dictionary.term(term_id)?;
                Some(KeywordPostings {
                    term: term.to_string(),
                    term_id,
                    weight,
                    postings: self.posting_excerpts(term_id),
                })
            })
            .collect();

        Some(DocumentReport {
            doc_id,
            keywords,
            unique_terms: doc.unique_terms(),
            norm: self.norms[doc_id as usize],
        })
    }

    fn posting_excerpts(&self, term_id: TermId) -> Vec<PostingExcerpt> {
        let Some(postings) = self.index.get(term_id) else { return Vec::new() };
        postings
            .keys()
            .filter_map(|&doc_id| {
                let positions = self.document(doc_id)?.positions(term_id)?;
                Some(PostingExcerpt { doc_id, positions: positions.to_vec() })
            })
            .collect()
    }
}
