use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sheetmap_core::{BuildOptions, SchemaBuilder};
use sheetmap_test_utils::catalogs;

fn bench_workbook(c: &mut Criterion) {
    let catalog = catalogs::workbook();
    c.bench_function("build_workbook", |b| {
        b.iter(|| SchemaBuilder::new(black_box(&catalog)).build("Workbook"))
    });
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_chain");
    for (depth, width) in [(4, 32), (32, 4), (128, 2)] {
        let catalog = catalogs::chain(depth, width);
        let options = BuildOptions::default().with_max_depth(depth + 1);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{depth}x{width}")),
            &catalog,
            |b, catalog| {
                b.iter(|| SchemaBuilder::with_options(catalog, options.clone()).build("Chain"))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_workbook, bench_chain);
criterion_main!(benches);
