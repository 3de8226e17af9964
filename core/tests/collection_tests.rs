use std::fs;
use tempfile::tempdir;
use vsm_core::corpus::{load_corpus, load_queries, load_stopwords};
use vsm_core::{search_all, CollectionError, DocWeights, PostingList, ScoredDoc, SearchOptions, Stopwords, TermFilter, TextCollection};

fn plain() -> TermFilter { TermFilter::new(Stopwords::empty()) }

#[test]
fn two_document_scenario() {
    let tc = TextCollection::build(["apple apple banana", "banana cherry cherry"], &plain()).unwrap();

    let dict = tc.dictionary();
    assert_eq!(dict.get("apple"), Some(0));
    assert_eq!(dict.get("banana"), Some(1));
    assert_eq!(dict.get("cherry"), Some(2));

    assert_eq!(tc.posting_list("apple"), Some(&PostingList::from([(0, 2)])));
    assert_eq!(tc.posting_list("banana"), Some(&PostingList::from([(0, 1), (1, 1)])));
    assert_eq!(tc.posting_list("cherry"), Some(&PostingList::from([(1, 2)])));

    assert_eq!(tc.idf("apple"), Some(1.0));
    assert_eq!(tc.idf("banana"), Some(0.0));
    assert_eq!(tc.idf("cherry"), Some(1.0));

    assert_eq!(tc.weights()[0], DocWeights::from([(0, 1.0), (1, 0.0)]));
    assert_eq!(tc.weights()[1], DocWeights::from([(1, 0.0), (2, 1.0)]));
    assert_eq!(tc.norms(), &[1.0, 1.0]);

    let query = plain().query("apple");
    let sim = tc.similarity(&query);
    assert_eq!(sim.len(), 1);
    assert_eq!(sim[&0], 1.0);
    assert_eq!(tc.rank(&query, 1), vec![ScoredDoc { doc_id: 0, score: 1.0 }]);
}

#[test]
fn rank_never_exceeds_available_hits() {
    let tc = TextCollection::build(["apple apple banana", "banana cherry cherry"], &plain()).unwrap();
    assert_eq!(tc.rank(&plain().query("apple cherry"), 10).len(), 2);
}

#[test]
fn ranking_is_stable_across_calls() {
    let paragraphs = [
        "rust programming systems language",
        "python programming scripting language",
        "rust memory safety without garbage collection",
        "garbage collection pauses in java programs",
    ];
    let tc = TextCollection::build(paragraphs, &TermFilter::default()).unwrap();
    let q = TermFilter::default().query("rust garbage programming");
    let first = tc.rank(&q, 3);
    for _ in 0..5 {
        assert_eq!(tc.rank(&q, 3), first);
    }
    assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn loads_corpus_queries_and_stopwords_from_disk() {
    let dir = tempdir().unwrap();
    let corpus_dir = dir.path().join("corpus");
    fs::create_dir_all(&corpus_dir).unwrap();
    fs::write(corpus_dir.join("b.txt"), "cherry cherry\nbanana\n").unwrap();
    fs::write(corpus_dir.join("a.txt"), "apple apple\nbanana\n\nzzzz the end\n").unwrap();
    fs::write(corpus_dir.join("notes.md"), "ignored paragraph\n").unwrap();
    fs::write(dir.path().join("queries.txt"), "apples\n\ncherry grape\n").unwrap();
    fs::write(dir.path().join("stop.txt"), "# custom\nzzzz\n").unwrap();

    let paragraphs = load_corpus(&corpus_dir).unwrap();
    assert_eq!(paragraphs, vec!["apple apple banana", "zzzz the end", "cherry cherry banana"]);

    let stopwords = load_stopwords(dir.path().join("stop.txt")).unwrap();
    let filter = TermFilter::new(stopwords);
    let tc = TextCollection::build(&paragraphs, &filter).unwrap();
    assert_eq!(tc.stats().empty_docs, 1);

    let queries = load_queries(dir.path().join("queries.txt"), &filter).unwrap();
    let results = search_all(&tc, &queries, SearchOptions::default());
    assert_eq!(results[0].hits[0].doc_id, 0);
    assert_eq!(results[1].hits[0].doc_id, 2);
}

#[test]
fn missing_files_report_their_path() {
    let err = load_corpus("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, CollectionError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.txt"));
}

#[test]
fn reports_serialize_to_json() {
    let tc = TextCollection::build(["apple apple banana", "banana cherry cherry"], &plain()).unwrap();
    let report = tc.document_report(1, 5).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["unique_terms"], 2);
    assert_eq!(json["keywords"][0]["term"], "cherry");
    assert_eq!(json["keywords"][0]["postings"][0]["positions"], serde_json::json!([1, 2]));
}
