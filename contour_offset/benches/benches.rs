use contour_offset::{contour::Contour, offset::*};
use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
mod test_contours;
use test_contours::*;

fn bench_parallel_offset(b: &mut Bencher, contour: &Contour<f64>, distance: f64, side: OffsetSide) {
    let options = OffsetOptions::new();
    b.iter(|| {
        let _ = OffsetEngine::new(contour, distance, side, &options);
    })
}

fn bench_self_intersects(b: &mut Bencher, engine: &OffsetEngine<f64>) {
    b.iter(|| {
        engine.find_self_intersects();
    })
}

fn parallel_offset_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_offset");
    let point_counts = &[10, 100, 1000];
    for &i in point_counts {
        group.bench_with_input(BenchmarkId::new("star_inward", i), &i, |b, i| {
            bench_parallel_offset(b, &star(*i), 0.1, OffsetSide::Inward)
        });
        group.bench_with_input(BenchmarkId::new("star_outward", i), &i, |b, i| {
            bench_parallel_offset(b, &star(*i), 0.1, OffsetSide::Outward)
        });
        group.bench_with_input(BenchmarkId::new("zig_zag_inward", i), &i, |b, i| {
            bench_parallel_offset(b, &zig_zag(*i), 0.5, OffsetSide::Inward)
        });
    }

    group.finish();
}

fn self_intersects_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_self_intersects");
    let point_counts = &[10, 100, 1000];
    for &i in point_counts {
        let engine = OffsetEngine::new(&star(i), 0.1, OffsetSide::Outward, &OffsetOptions::new());
        if let Ok(engine) = engine {
            group.bench_with_input(BenchmarkId::new("star_outward", i), &engine, |b, e| {
                bench_self_intersects(b, e)
            });
        }
    }

    group.finish();
}

criterion_group!(offset, parallel_offset_group, self_intersects_group);
criterion_main!(offset);
