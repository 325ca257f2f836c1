//! Benchmarks for the conversion pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use specmd::{ConvertOptions, ReferenceTable, convert, parse_document};

const SAMPLE_HTML: &str = include_str!("../tests/fixtures/sample-spec.html");
const REFERENCES_JSON: &str = include_str!("../tests/fixtures/references.json");

fn reference_table() -> ReferenceTable {
    ReferenceTable::from_json(REFERENCES_JSON).unwrap()
}

/// Build a wider document by repeating a section body, with backward links
/// and citations so both resolution tables stay busy.
fn large_document(sections: usize) -> String {
    let mut body = String::from("<section id=\"sotd\"></section>");
    for i in 0..sections {
        body.push_str(&format!(
            "<section id=\"sec-{i}\"><h2>Section {i}</h2>\
             <p>Terms from [[DOM]] apply; compare <a href=\"#sec-0\"/>.</p>\
             <ul><li>First point {i}.</li><li>Second point {i}.</li></ul>\
             </section>"
        ));
    }
    format!("<html><body>{body}</body></html>")
}

// ============================================================================
// Parsing
// ============================================================================

fn bench_parse_document(c: &mut Criterion) {
    c.bench_function("parse_document", |b| {
        b.iter(|| parse_document(SAMPLE_HTML).unwrap());
    });
}

// ============================================================================
// Conversion
// ============================================================================

fn bench_convert_sample(c: &mut Criterion) {
    let root = parse_document(SAMPLE_HTML).unwrap();
    let refs = reference_table();
    let options = ConvertOptions::default();

    c.bench_function("convert_sample", |b| {
        b.iter(|| convert(&root, &refs, &options).unwrap());
    });
}

fn bench_convert_large(c: &mut Criterion) {
    let source = large_document(200);
    let root = parse_document(&source).unwrap();
    let refs = reference_table();
    let options = ConvertOptions::default();

    c.bench_function("convert_200_sections", |b| {
        b.iter(|| convert(&root, &refs, &options).unwrap());
    });
}

fn bench_end_to_end(c: &mut Criterion) {
    let refs = reference_table();
    let options = ConvertOptions::default();

    c.bench_function("parse_and_convert", |b| {
        b.iter(|| {
            let root = parse_document(SAMPLE_HTML).unwrap();
            convert(&root, &refs, &options).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_parse_document,
    bench_convert_sample,
    bench_convert_large,
    bench_end_to_end,
);
criterion_main!(benches);
