//! Benchmarks for the pure geometry and angle-extraction math

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use face_pose_utils::{box_geometry::BoundingBox, pose_angles::rotation_vector_to_euler};

fn benchmark_box_geometry(c: &mut Criterion) {
    let boxes = [
        BoundingBox::new(0, 0, 10, 4),
        BoundingBox::new(0, 0, 4, 10),
        BoundingBox::new(120, 80, 260, 290),
        BoundingBox::new(-3, 7, 97, 107),
    ];

    c.bench_function("box_squared", |b| {
        b.iter(|| {
            for bbox in &boxes {
                let _ = black_box(black_box(bbox).squared());
            }
        });
    });

    c.bench_function("box_translated", |b| {
        b.iter(|| {
            for bbox in &boxes {
                black_box(black_box(bbox).translated((17, -23)));
            }
        });
    });
}

fn benchmark_euler_extraction(c: &mut Criterion) {
    let rotation_vectors = [
        [0.0, 0.0, 0.0],
        [0.1, -0.3, 0.05],
        [0.0, std::f64::consts::FRAC_PI_2, 0.0],
        [0.7, 0.7, 0.7],
    ];

    c.bench_function("rotation_vector_to_euler", |b| {
        b.iter(|| {
            for rvec in &rotation_vectors {
                black_box(rotation_vector_to_euler(black_box(*rvec)));
            }
        });
    });
}

criterion_group!(benches, benchmark_box_geometry, benchmark_euler_extraction);
criterion_main!(benches);
