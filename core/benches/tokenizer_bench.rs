use criterion::{criterion_group, criterion_main, Criterion};
use vsm_core::{TermFilter, TextCollection};

const PARAGRAPH: &str = "Inverted indexes map every term to the documents that contain it, \
    recording how often each term occurs. Weighting schemes such as TF-IDF favour terms that \
    are frequent within a document but rare across the collection.";

fn bench_tokenize(c: &mut Criterion) {
    let filter = TermFilter::default();
    c.bench_function("document_terms", |b| b.iter(|| filter.document_terms(PARAGRAPH).count()));
}

fn bench_build(c: &mut Criterion) {
    let filter = TermFilter::default();
    let corpus: Vec<String> = (0..100).map(|i| format!("{PARAGRAPH} paragraph{i}")).collect();
    c.bench_function("build_collection_100", |b| b.iter(|| TextCollection::build(&corpus, &filter)));
}

criterion_group!(benches, bench_tokenize, bench_build);
criterion_main!(benches);
