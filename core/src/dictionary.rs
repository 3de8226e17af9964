use crate::TermId;
use std::collections::HashMap;

/// Append-only mapping between terms and dense ids.
///
/// Ids are handed out in first-seen order and never renumbered, so the same
/// corpus in the same order always yields the same ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermDictionary {
    ids: HashMap<String, TermId>,
    terms: Vec<String>,
}

impl TermDictionary {
    pub fn new() -> Self { Self::default() }

    /// Return the id of `term`, registering it with the next free id if unseen.
    pub fn intern(&mut self, term: &str) -> TermId {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len() as TermId;
        self.terms.push(term.to_string());
        self.ids.insert(term.to_string(), id);
        id
    }

    pub fn get(&self, term: &str) -> Option<TermId> { self.ids.get(term).copied() }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.terms.len() }
    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Terms in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> + '_ {
        self.terms.iter().enumerate().map(|(id, t)| (id as TermId, t.as_str()))
    }
}
