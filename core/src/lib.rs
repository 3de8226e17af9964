//! In-memory vector-space search over a fixed corpus of paragraphs.
//!
//! Build a [`TextCollection`] once from paragraphs, then score [`Query`]
//! values against it with TF-IDF weights and cosine similarity.

pub mod collection;
pub mod corpus;
pub mod dictionary;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod rank;
pub mod report;
pub mod search;
pub mod tokenizer;
pub mod weights;

pub use collection::TextCollection;
pub use dictionary::TermDictionary;
pub use document::{Document, Position};
pub use error::{CollectionError, Result};
pub use index::{DocId, InvertedIndex, PostingList, TermId};
pub use query::Query;
pub use rank::ScoredDoc;
pub use report::{CollectionStats, DocumentReport, KeywordPostings, PostingExcerpt};
pub use search::{search_all, QueryResult, SearchHit, SearchOptions};
pub use tokenizer::{Stopwords, TermFilter};
pub use weights::DocWeights;
