//! Loading paragraphs, queries and stopword lists from text files.
//!
//! A corpus is a sequence of paragraphs separated by blank lines. A query file
//! holds one query per non-blank line.

use crate::error::{CollectionError, Result};
use crate::query::Query;
use crate::tokenizer::{Stopwords, TermFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use walkdir::WalkDir;

/// Split text into paragraphs; the lines of a paragraph are joined with a space.
pub fn read_paragraphs<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&line);
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }
    Ok(paragraphs)
}

pub fn read_queries<R: BufRead>(reader: R, filter: &TermFilter) -> io::Result<Vec<Query>> {
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        queries.push(filter.query(&line));
    }
    Ok(queries)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path).map(BufReader::new).map_err(|e| CollectionError::io(path, e))
}

/// Paragraphs of a file, or of every `*.txt` file under a directory in file-name order.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.is_dir() {
        return read_paragraphs(open(path)?).map_err(|e| CollectionError::io(path, e));
    }

    let mut paragraphs = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry?;
        let p = entry.path();
        if !entry.file_type().is_file() || p.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let mut file_paragraphs = read_paragraphs(open(p)?).map_err(|e| CollectionError::io(p, e))?;
        tracing::debug!(path = %p.display(), paragraphs = file_paragraphs.len(), "read corpus file");
        paragraphs.append(&mut file_paragraphs);
    }
    Ok(paragraphs)
}

pub fn load_queries(path: impl AsRef<Path>, filter: &TermFilter) -> Result<Vec<Query>> {
    let path = path.as_ref();
    read_queries(open(path)?, filter).map_err(|e| CollectionError::io(path, e))
}

pub fn load_stopwords(path: impl AsRef<Path>) -> Result<Stopwords> {
    let path = path.as_ref();
    Stopwords::from_reader(open(path)?).map_err(|e| CollectionError::io(path, e))
}
