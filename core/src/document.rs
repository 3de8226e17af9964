use crate::dictionary::TermDictionary;
use crate::tokenizer::{words, TermFilter};
use crate::TermId;
use std::collections::BTreeMap;

/// Zero-based offset of a term among the accepted terms of its document.
pub type Position = u32;

/// One paragraph reduced to the positions of its terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    terms: BTreeMap<TermId, Vec<Position>>,
}

impl Document {
    /// Index raw words, registering new terms in `dict`.
    ///
    /// Rejected words do not advance the position counter.
    pub fn index<'w, I>(words: I, filter: &TermFilter, dict: &mut TermDictionary) -> Self
    where
        I: IntoIterator<Item = &'w str>,
    {
        let mut terms: BTreeMap<TermId, Vec<Position>> = BTreeMap::new();
        let mut position: Position = 0;
        for word in words {
            let Some(term) = filter.document_term(word) else { continue };
            let id = dict.intern(term);
            terms.entry(id).or_default().push(position);
            position += 1;
        }
        Self { terms }
    }

    pub fn from_text(text: &str, filter: &TermFilter, dict: &mut TermDictionary) -> Self {
        Self::index(words(text), filter, dict)
    }

    pub fn terms(&self) -> &BTreeMap<TermId, Vec<Position>> { &self.terms }

    pub fn positions(&self, term: TermId) -> Option<&[Position]> {
        self.terms.get(&term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: TermId) -> bool { self.terms.contains_key(&term) }

    /// Raw occurrence count; 0 for absent terms.
    pub fn term_frequency(&self, term: TermId) -> u32 {
        self.positions(term).map_or(0, |p| p.len() as u32)
    }

    /// `None` for a document without terms.
    pub fn max_term_frequency(&self) -> Option<u32> {
        self.terms.values().map(|p| p.len() as u32).max()
    }

    pub fn unique_terms(&self) -> usize { self.terms.len() }

    /// Number of accepted term occurrences.
    pub fn len(&self) -> usize { self.terms.values().map(Vec::len).sum() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}
