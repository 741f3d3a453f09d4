mod common;

use std::hint::black_box;

use archimedean_scatter::solid::{catalog, Solid, SolidType};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn catalog_build_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog/build");

    for kind in SolidType::ALL {
        group.throughput(common::points_throughput(kind.vertex_count()));
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| {
                let solid = Solid::build(kind);
                black_box(solid.face_count());
            });
        });
    }

    group.finish();
}

fn catalog_lookup_benches(c: &mut Criterion) {
    catalog::warm();

    c.bench_function("catalog/cached_lookup", |b| {
        b.iter(|| {
            for kind in SolidType::ALL {
                black_box(catalog::solid(black_box(kind)).vertex_count());
            }
        });
    });
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = catalog_build_benches, catalog_lookup_benches
}
criterion_main!(benches);
