use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A bag-less set of query terms: duplicates collapse and order is lexical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    terms: BTreeSet<String>,
}

impl Query {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.terms.insert(term.into())
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool { self.terms.contains(term) }
    pub fn len(&self) -> usize { self.terms.len() }
    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for Query {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { terms: iter.into_iter().map(Into::into).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let q: Query = ["apple", "pear", "apple"].into_iter().collect();
        assert_eq!(q.len(), 2);
        assert_eq!(q.terms().collect::<Vec<_>>(), vec!["apple", "pear"]);
    }
}
