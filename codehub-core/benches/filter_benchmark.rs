//! Performance benchmarks for the filter engine
//! Filters are re-run on every keystroke, so large catalogs must stay linear.

use codehub_core::catalog::{Catalog, LanguageEntry, ToolEntry};
use codehub_core::filter::{derive_categories, filter_languages, filter_tools};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_languages(count: usize) -> Vec<LanguageEntry> {
    let builtin = Catalog::builtin().languages();
    (0..count)
        .map(|i| {
            let template = &builtin[i % builtin.len()];
            LanguageEntry {
                name: format!("{} {i}", template.name),
                ..template.clone()
            }
        })
        .collect()
}

fn synthetic_tools(count: usize) -> Vec<ToolEntry> {
    let builtin = Catalog::builtin().tools();
    (0..count)
        .map(|i| {
            let template = &builtin[i % builtin.len()];
            ToolEntry {
                name: format!("{} {i}", template.name),
                category: format!("{} {}", template.category, i % 25),
                ..template.clone()
            }
        })
        .collect()
}

fn benchmark_language_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_languages");

    for size in [10, 1_000, 10_000] {
        let catalog = synthetic_languages(size);
        group.bench_with_input(BenchmarkId::new("script", size), &catalog, |b, catalog| {
            b.iter(|| filter_languages(black_box(catalog), black_box("script")))
        });
        group.bench_with_input(BenchmarkId::new("empty", size), &catalog, |b, catalog| {
            b.iter(|| filter_languages(black_box(catalog), black_box("")))
        });
    }

    group.finish();
}

fn benchmark_tool_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("tools");

    for size in [10, 1_000, 10_000] {
        let catalog = synthetic_tools(size);
        group.bench_with_input(BenchmarkId::new("derive", size), &catalog, |b, catalog| {
            b.iter(|| derive_categories(black_box(catalog)))
        });
        group.bench_with_input(BenchmarkId::new("filter", size), &catalog, |b, catalog| {
            b.iter(|| filter_tools(black_box(catalog), black_box(Some("DevOps 4"))))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_language_search, benchmark_tool_categories);
criterion_main!(benches);
