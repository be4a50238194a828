//! Benchmarks for the section navigator
//!
//! Run with: cargo bench -p portfolio-core
//!
//! `evaluate` runs on every scroll event, so these track its cost for the
//! real four-section page and for pages with many sections.

use std::collections::HashMap;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use portfolio_core::{
    default_nav_items, NavItem, OverlapPolicy, ScrollBehavior, ScrollHost, ScrollLock,
    SectionBounds, SectionNavigator,
};

struct NullHost;

impl ScrollHost for NullHost {
    fn scroll_to(&self, _top: f64, _behavior: ScrollBehavior) {}
}

struct NullLock;

impl ScrollLock for NullLock {
    fn lock(&self) {}
    fn unlock(&self) {}
}

fn page(items: &[NavItem], height: f64) -> HashMap<String, SectionBounds> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id.clone(), SectionBounds::new(i as f64 * height, height)))
        .collect()
}

fn many_items(n: usize) -> Vec<NavItem> {
    (0..n)
        .map(|i| NavItem::new(format!("section-{}", i), format!("Section {}", i)))
        .collect()
}

// ============================================================================
// Evaluate Benchmarks
// ============================================================================

fn bench_evaluate_landing_page(c: &mut Criterion) {
    let items = default_nav_items();
    let doc = page(&items, 900.0);
    let mut nav = SectionNavigator::new(items, NullHost, NullLock).unwrap();

    c.bench_function("evaluate_landing_page", |b| {
        let mut y = 0.0;
        b.iter(|| {
            y = (y + 37.0) % 4000.0;
            black_box(nav.evaluate(black_box(y), &doc))
        })
    });
}

fn bench_evaluate_many_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_many_sections");

    for n in [16usize, 128, 1024] {
        let items = many_items(n);
        let doc = page(&items, 500.0);
        let bottom = n as f64 * 500.0 - 1.0;

        for (name, policy) in [
            ("first_declared", OverlapPolicy::FirstDeclared),
            ("latest_started", OverlapPolicy::LatestStarted),
        ] {
            let mut nav = SectionNavigator::new(items.clone(), NullHost, NullLock)
                .unwrap()
                .with_overlap_policy(policy);
            group.bench_with_input(BenchmarkId::new(name, n), &bottom, |b, &y| {
                b.iter(|| black_box(nav.evaluate(black_box(y), &doc)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate_landing_page, bench_evaluate_many_sections);
criterion_main!(benches);
