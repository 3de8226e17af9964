//! Plain-text layout of search results and document reports.

use std::io::{self, Write};
use vsm_core::{DocumentReport, QueryResult};

const OUTER_RULE_WIDTH: usize = 60;
const INNER_RULE_WIDTH: usize = 50;

pub fn document<W: Write>(out: &mut W, report: &DocumentReport) -> io::Result<()> {
    writeln!(out, "DID: {}", report.doc_id)?;
    for keyword in &report.keywords {
        write!(out, "{:<14} -> | ", keyword.term)?;
        for posting in &keyword.postings {
            let positions: Vec<String> = posting.positions.iter().map(ToString::to_string).collect();
            write!(out, "D{}:{} | ", posting.doc_id, positions.join(","))?;
        }
        writeln!(out)?;
    }
    writeln!(out, "Number of unique keywords in document: {}", report.unique_terms)?;
    writeln!(out, "Magnitude of the document vector (L2 norm): {}", report.norm)
}

pub fn results<W: Write>(out: &mut W, results: &[QueryResult]) -> io::Result<()> {
    let outer = "=".repeat(OUTER_RULE_WIDTH);
    let inner = "-".repeat(INNER_RULE_WIDTH);
    for result in results {
        writeln!(out, "{outer}")?;
        write!(out, "Query: ")?;
        for term in result.query.terms() {
            write!(out, "{term} ")?;
        }
        writeln!(out)?;
        if result.hits.is_empty() {
            writeln!(out, "No matching documents.")?;
        }
        for (i, hit) in result.hits.iter().enumerate() {
            document(out, &hit.report)?;
            writeln!(out, "Similarity score: {}", hit.score)?;
            if i + 1 < result.hits.len() {
                writeln!(out, "{inner}")?;
            }
        }
    }
    writeln!(out, "{outer}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsm_core::{search_all, SearchOptions, Stopwords, TermFilter, TextCollection};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn renders_query_block() {
        let filter = TermFilter::new(Stopwords::empty());
        let tc = TextCollection::build(["apple apple banana", "banana cherry cherry"], &filter).unwrap();
        let res = search_all(&tc, &[filter.query("apples")], SearchOptions::default());
        let text = render(|out| results(out, &res));
        let expected = "\
============================================================
Query: apple 
DID: 0
apple          -> | D0:0,1 | 
banana         -> | D0:2 | D1:0 | 
Number of unique keywords in document: 2
Magnitude of the document vector (L2 norm): 1
Similarity score: 1
============================================================
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_document_norm_prints_as_zero() {
        let tc = TextCollection::build(["grape melon", "a an"], &TermFilter::default()).unwrap();
        let report = tc.document_report(1, 5).unwrap();
        let text = render(|out| document(out, &report));
        assert!(text.ends_with("Magnitude of the document vector (L2 norm): 0\n"), "{text}");
    }
}
