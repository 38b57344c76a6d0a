//! Benchmarks for the minimum-curvature solver and batch interpolation.
//!
//! Run with:
//!   cargo bench --bench min_curvature
//!   cargo bench min_curvature -- segment/single_solve
//!   cargo bench min_curvature -- interpolate/batch_1000

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wellpath::min_curvature::solve_segment;
use wellpath::{FrameParams, SurveyRecord, SurveyStation, SurveyStationTable, TrajectoryPath};

/// Synthetic build-and-hold survey with `n` stations.
/// Note: keep this outside the hot loops.
fn make_table(n: usize) -> SurveyStationTable {
    let records = (0..n)
        .map(|i| {
            let frac = i as f64 / (n - 1) as f64;
            SurveyRecord {
                md: frac * 5000.0,
                inc: (frac * 90.0).min(90.0),
                azi: 60.0 + 30.0 * frac,
            }
        })
        .collect();
    SurveyStationTable::from_records(records).expect("synthetic survey must be valid")
}

fn bench_segment(c: &mut Criterion) {
    let upper = SurveyStation {
        md: 1000.0,
        inclination_deg: 25.0,
        azimuth_deg: 87.0,
    };
    let lower = SurveyStation {
        md: 1500.0,
        inclination_deg: 40.0,
        azimuth_deg: 92.0,
    };

    c.bench_function("segment/single_solve", |b| {
        b.iter(|| solve_segment(black_box(&upper), black_box(&lower)).unwrap())
    });
}

fn bench_interpolate(c: &mut Criterion) {
    let path = TrajectoryPath::build(make_table(200), FrameParams::default())
        .expect("synthetic path must build");
    let mds: Vec<f64> = (0..1000).map(|i| i as f64 * 5.0).collect();

    c.bench_function("interpolate/single_md", |b| {
        b.iter(|| path.interpolate(black_box(2345.5)).unwrap())
    });

    c.bench_function("interpolate/batch_1000", |b| {
        b.iter(|| path.interpolate_batch(black_box(&mds)))
    });
}

criterion_group!(benches, bench_segment, bench_interpolate);
criterion_main!(benches);
