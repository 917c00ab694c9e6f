//! Composition throughput on the standard catalog.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use cardpool::{compose, Catalog, GameSetup, SetupFlag};

fn bench_compose(c: &mut Criterion) {
    let catalog = Catalog::standard();

    let base = GameSetup::default();
    c.bench_function("compose/base", |b| {
        b.iter(|| compose(black_box(catalog), black_box(&base)))
    });

    let mut everything = GameSetup::default();
    for flag in SetupFlag::ALL {
        everything.set(flag, true);
    }
    c.bench_function("compose/all_expansions", |b| {
        b.iter(|| compose(black_box(catalog), black_box(&everything)))
    });

    let overrides = GameSetup::default()
        .enable(SetupFlag::CorporateEra)
        .ban("Solar Wind Power")
        .ban("Capital")
        .include("Venusian Insects")
        .include("Dyson Screens");
    c.bench_function("compose/with_overrides", |b| {
        b.iter(|| compose(black_box(catalog), black_box(&overrides)))
    });
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
