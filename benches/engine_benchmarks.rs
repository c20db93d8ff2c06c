//! Performance benchmarks for the quote engine and renderer.
//!
//! These benchmarks measure:
//! - Validating and pricing a full quote payload
//! - Pricing alone across package sizes
//! - Rendering the business notification for a priced quote

use booth_quote::engine::{compute_breakdown, validate_and_price};
use booth_quote::models::{AddonSelection, PackagePick, QuotePayload};
use booth_quote::{MailSettings, NotificationRenderer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

fn sample_payload() -> QuotePayload {
    serde_json::from_value(json!({
        "contact": {
            "fullName": "Ann Lee",
            "email": "ann@example.com",
            "phone": "416-555-0101",
            "eventDate": "2025-06-14"
        },
        "package": {"hours": 4, "price": 800},
        "addons": {"unlimitedPrints": true, "glamBooth": true, "waitingTime": 2},
        "total": 1215
    }))
    .unwrap()
}

fn bench_validate_and_price(c: &mut Criterion) {
    let payload = sample_payload();

    c.bench_function("validate_and_price", |b| {
        b.iter(|| validate_and_price(black_box(&payload)).unwrap())
    });
}

fn bench_compute_breakdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_breakdown");
    let addons = AddonSelection {
        unlimited_prints: true,
        glam_booth: true,
        waiting_time: 3,
    };

    for hours in [2u32, 4, 8] {
        let package = PackagePick::new(hours, hours * 200).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(hours), &package, |b, package| {
            b.iter(|| compute_breakdown(black_box(package), black_box(&addons)).unwrap())
        });
    }

    group.finish();
}

fn bench_render_business_quote(c: &mut Criterion) {
    let renderer = NotificationRenderer::new(MailSettings::default()).unwrap();
    let request = validate_and_price(&sample_payload()).unwrap();

    c.bench_function("render_quote_business", |b| {
        b.iter(|| renderer.quote_business(black_box(&request)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_validate_and_price,
    bench_compute_breakdown,
    bench_render_business_quote
);
criterion_main!(benches);
