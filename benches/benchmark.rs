//! Performance benchmarks for qnabot-pages.
//!
//! Run with: `cargo bench`
//!
//! Measures region extraction on a small page and on a page with many
//! sibling sections.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qnabot_pages::{extract_region, extract_region_with_selector, ContentSelector};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Docs Page</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/docs">Docs</a>
    </nav>
    <div class="layout content--main">
        <h1>Sample Page Title</h1>
        <p>This is the first paragraph of the page. It contains the text
        a question-answering index would ingest.</p>
        <p>Here is a second paragraph with more content.</p>
    </div>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn large_html(sections: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..sections {
        let class = if i % 10 == 0 { "content--main" } else { "sidebar" };
        html.push_str(&format!(
            "<div class=\"{class}\"><h2>Section {i}</h2><p>Paragraph {i} text.</p></div>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_small(c: &mut Criterion) {
    c.bench_function("extract_region_small", |b| {
        b.iter(|| extract_region(black_box(SAMPLE_HTML)));
    });
}

fn bench_large(c: &mut Criterion) {
    let selector = ContentSelector::default();
    let mut group = c.benchmark_group("extract_region_large");
    for sections in [100, 1_000] {
        let html = large_html(sections);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &html, |b, html| {
            b.iter(|| extract_region_with_selector(black_box(html), &selector));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_small, bench_large);
criterion_main!(benches);
