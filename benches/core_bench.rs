use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use track_drawer::core::skidpad;
use track_drawer::{Line, PathSegment, Point, SkidpadParams, Track, TrackOptions};

fn build_pointer_path(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64;
            Point::new(-1200.0 + 2400.0 * t + 0.37, -1500.0 + 300.0 * (t * 6.0).sin())
        })
        .collect()
}

fn bench_pending_segment(c: &mut Criterion) {
    let options = TrackOptions::default();
    let start = Point::new(0.0, -100.0);

    c.bench_function("path_segment_build", |b| {
        b.iter(|| {
            PathSegment::build(
                black_box(start),
                black_box(Point::new(-733.0, -1291.5)),
                &Line::VERTICAL,
                false,
                &options,
            )
        })
    });

    let mut group = c.benchmark_group("pending_segment_recompute");
    for &moves in &[64usize, 1024usize] {
        let path = build_pointer_path(moves);
        group.bench_with_input(BenchmarkId::new("pointer_moves", moves), &path, |b, path| {
            let mut track = Track::new(&options);
            b.iter(|| {
                for point in path {
                    track.update_pending_segment(black_box(*point));
                }
                black_box(track.pending_segment().map(|s| s.cones.len()))
            })
        });
    }
    group.finish();
}

fn bench_skidpad(c: &mut Criterion) {
    let options = TrackOptions::default();
    let params = SkidpadParams {
        left_radius: 900.0,
        right_radius: 900.0,
        start_straight_length: 1500.0,
        finish_straight_length: 1500.0,
    };

    c.bench_function("skidpad_generate", |b| {
        b.iter(|| skidpad::generate(black_box(&params), &options, -100.0).map(|l| l.cones.len()))
    });
}

criterion_group!(core_benches, bench_pending_segment, bench_skidpad);
criterion_main!(core_benches);
