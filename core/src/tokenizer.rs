use crate::query::Query;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::io::{self, BufRead};

/// Terms must be strictly longer than this many characters after plural stripping.
pub const MIN_TERM_LEN: usize = 3;

lazy_static! {
    // Anything outside whitespace and the ASCII punctuation delimiters.
    static ref WORD: Regex =
        Regex::new(r##"[^\s!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]+"##).expect("valid regex");
}

const ENGLISH_STOPWORDS: &[&str] = &[
    "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
    "be","because","been","before","being","below","between","both","but","by",
    "can","cannot","could",
    "did","do","does","doing","down","during",
    "each","few","for","from","further",
    "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
    "i","if","in","into","is","it","its","itself",
    "me","more","most","my","myself",
    "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
    "same","she","should","so","some","such",
    "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
    "under","until","up","very",
    "was","we","were","what","when","where","which","while","who","whom","why","with","would",
    "you","your","yours","yourself","yourselves",
];

/// Split text into raw words on whitespace and ASCII punctuation.
///
/// The returned iterator borrows `text` and can be recreated at will; nothing is copied.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Case-sensitive set of words never indexed as document terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn empty() -> Self { Self::default() }

    pub fn english() -> Self {
        ENGLISH_STOPWORDS.iter().copied().collect()
    }

    /// One word per line. Blank lines and lines starting with `#` are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') { continue; }
            words.insert(word.to_string());
        }
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }
    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: Into<String>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { words: iter.into_iter().map(Into::into).collect() }
    }
}

/// Decides which raw words become terms.
///
/// Document words are checked against the stopword set; query words are not.
#[derive(Debug, Clone)]
pub struct TermFilter {
    stopwords: Stopwords,
    min_len: usize,
    strip_plural: bool,
}

impl Default for TermFilter {
    fn default() -> Self { Self::new(Stopwords::english()) }
}

impl TermFilter {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords, min_len: MIN_TERM_LEN, strip_plural: true }
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_plural_stripping(mut self, enabled: bool) -> Self {
        self.strip_plural = enabled;
        self
    }

    pub fn stopwords(&self) -> &Stopwords { &self.stopwords }
    pub fn min_len(&self) -> usize { self.min_len }

    /// Drop one trailing `s` (no linguistic check) and apply the length bound.
    fn normalize<'a>(&self, word: &'a str) -> Option<&'a str> {
        let stem = match word.strip_suffix('s') {
            Some(stem) if self.strip_plural => stem,
            _ => word,
        };
        (stem.chars().count() > self.min_len).then_some(stem)
    }

    pub fn document_term<'a>(&self, word: &'a str) -> Option<&'a str> {
        if self.stopwords.contains(word) { return None; }
        self.normalize(word)
    }

    pub fn query_term<'a>(&self, word: &'a str) -> Option<&'a str> {
        self.normalize(word)
    }

    /// Qualifying document terms of `text`, in order.
    pub fn document_terms<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        words(text).filter_map(move |w| self.document_term(w))
    }

    pub fn query(&self, text: &str) -> Query {
        words(text).filter_map(|w| self.query_term(w)).collect()
    }
}
