use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{TimeZone, Utc};
use shopfront_catalog::ProductRecord;
use shopfront_core::{SortKey, StatusFilter};
use shopfront_views::project;

fn sample_page(len: usize) -> Vec<ProductRecord> {
    (0..len)
        .map(|n| {
            serde_json::from_value(serde_json::json!({
                "id": n as i64,
                "name": format!("Product {}", (len - n)),
                "slug": format!("product-{n}"),
                "price_minor_units": ((n * 137) % 50_000) as i64,
                "active": n % 3 != 0,
                "stock": (n % 11) as i64,
                "created_at": Utc.with_ymd_and_hms(2024, 1, 1 + (n % 28) as u32, 0, 0, 0)
                    .unwrap()
                    .to_rfc3339(),
            }))
            .expect("sample product")
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    for len in [100usize, 1_000, 10_000] {
        let page = sample_page(len);
        group.throughput(Throughput::Elements(len as u64));

        for sort_key in [SortKey::Name, SortKey::Price, SortKey::Date, SortKey::StockLevel] {
            group.bench_with_input(
                BenchmarkId::new(sort_key.as_str(), len),
                &page,
                |b, page| {
                    b.iter(|| project(black_box(page), StatusFilter::ActiveOnly, sort_key))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_projection);
criterion_main!(benches);
