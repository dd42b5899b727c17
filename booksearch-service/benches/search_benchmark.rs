use booksearch_service::models::catalog::parse_volumes;
use booksearch_service::services::query::build_query;
use booksearch_service::services::shaper::shape;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn create_sample_page(count: usize) -> String {
    let items: Vec<_> = (0..count)
        .map(|i| {
            if i % 5 == 0 {
                json!({ "volumeInfo": { "title": format!("Test Book {}", i) } })
            } else {
                json!({
                    "id": format!("vol-{}", i),
                    "volumeInfo": {
                        "title": format!("Test Book {}", i),
                        "authors": [format!("Test Author {}", i % 50)],
                        "description": "Lorem ipsum dolor sit amet. ".repeat(20),
                        "pageCount": 100 + i,
                        "publishedDate": format!("{}", 1800 + (i % 200)),
                        "infoLink": format!("https://books.example/vol-{}", i)
                    }
                })
            }
        })
        .collect();

    json!({ "kind": "books#volumes", "totalItems": count, "items": items }).to_string()
}

fn benchmark_build_query(c: &mut Criterion) {
    c.bench_function("build_query", |b| {
        b.iter(|| build_query(black_box(Some("pride and prejudice")), black_box(Some("jane austen"))))
    });
}

fn benchmark_parse_volumes(c: &mut Criterion) {
    let page = create_sample_page(40);

    c.bench_function("parse_volumes_40", |b| {
        b.iter(|| parse_volumes(black_box(&page)))
    });
}

fn benchmark_shape(c: &mut Criterion) {
    let items = parse_volumes(&create_sample_page(40)).expect("sample page parses");

    c.bench_function("shape_anonymous_40", |b| {
        b.iter(|| shape(black_box(items.clone()), false))
    });

    c.bench_function("shape_authenticated_40", |b| {
        b.iter(|| shape(black_box(items.clone()), true))
    });
}

criterion_group!(
    benches,
    benchmark_build_query,
    benchmark_parse_volumes,
    benchmark_shape
);
criterion_main!(benches);
