use crate::document::Document;
use std::collections::BTreeMap;

pub type TermId = u32;
pub type DocId = u32;

/// doc id -> raw term frequency, only for documents containing the term.
pub type PostingList = BTreeMap<DocId, u32>;

/// Posting lists addressed by term id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    postings: Vec<PostingList>,
}

impl InvertedIndex {
    /// Invert fully indexed documents in one pass over their terms.
    ///
    /// `num_terms` is the final dictionary size; every term id seen in
    /// `documents` must be below it.
    pub fn build(documents: &[Document], num_terms: usize) -> Self {
        let mut postings = vec![PostingList::new(); num_terms];
        for (doc_id, doc) in documents.iter().enumerate() {
            for (&term, positions) in doc.terms() {
                if let Some(list) = postings.get_mut(term as usize) {
                    list.insert(doc_id as DocId, positions.len() as u32);
                }
            }
        }
        Self { postings }
    }

    pub fn get(&self, term: TermId) -> Option<&PostingList> { self.postings.get(term as usize) }

    /// Number of documents containing `term`.
    pub fn document_frequency(&self, term: TermId) -> usize {
        self.get(term).map_or(0, PostingList::len)
    }

    pub fn len(&self) -> usize { self.postings.len() }
    pub fn is_empty(&self) -> bool { self.postings.is_empty() }
    pub fn as_slice(&self) -> &[PostingList] { &self.postings }

    pub fn iter(&self) -> impl Iterator<Item = (TermId, &PostingList)> + '_ {
        self.postings.iter().enumerate().map(|(t, p)| (t as TermId, p))
    }

    pub fn total_postings(&self) -> usize { self.postings.iter().map(PostingList::len).sum() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::TermDictionary;
    use crate::tokenizer::{Stopwords, TermFilter};

    #[test]
    fn postings_record_frequencies() {
        let filter = TermFilter::new(Stopwords::empty());
        let mut dict = TermDictionary::new();
        let docs = vec![
            Document::from_text("apple apple banana", &filter, &mut dict),
            Document::from_text("banana cherry cherry", &filter, &mut dict),
        ];
        let index = InvertedIndex::build(&docs, dict.len());
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(0), Some(&PostingList::from([(0, 2)])));
        assert_eq!(index.get(1), Some(&PostingList::from([(0, 1), (1, 1)])));
        assert_eq!(index.get(2), Some(&PostingList::from([(1, 2)])));
        assert_eq!(index.document_frequency(1), 2);
        assert_eq!(index.total_postings(), 4);
    }

    #[test]
    fn empty_documents_contribute_no_postings() {
        let filter = TermFilter::default();
        let mut dict = TermDictionary::new();
        let docs = vec![
            Document::from_text("the of and", &filter, &mut dict),
            Document::from_text("lonely", &filter, &mut dict),
        ];
        let index = InvertedIndex::build(&docs, dict.len());
        assert_eq!(index.get(0), Some(&PostingList::from([(1, 1)])));
    }
}
