use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::DVec3;
use psphere_cubesphere::*;

fn bench_locate(c: &mut Criterion) {
    let dir = black_box(DVec3::new(0.31, -0.72, 0.55).normalize());
    c.bench_function("locate", |bencher| bencher.iter(|| black_box(locate(dir))));
}

fn bench_locate_cell(c: &mut Criterion) {
    let dir = black_box(DVec3::new(-0.9, 0.12, 0.4).normalize());
    c.bench_function("locate_cell_256", |bencher| {
        bencher.iter(|| black_box(locate_cell(dir, 256)))
    });
}

fn bench_locate_on_edge(c: &mut Criterion) {
    let dir = black_box(DVec3::new(1.0, 1.0, 0.25));
    c.bench_function("locate_tie_break", |bencher| {
        bencher.iter(|| black_box(locate(dir)))
    });
}

fn bench_step_across_face(c: &mut Criterion) {
    let topology = CubeTopology::new(256).expect("topology");
    let cell = black_box(FaceCell::new(CubeFace::PosX, 128, 255));
    c.bench_function("step_across_face", |bencher| {
        bencher.iter(|| black_box(topology.step(cell, FaceDirection::North)))
    });
}

fn bench_cell_direction(c: &mut Criterion) {
    c.bench_function("cell_direction", |bencher| {
        bencher.iter(|| black_box(cell_direction(CubeFace::NegZ, 256, black_box(17), black_box(200))))
    });
}

criterion_group!(
    benches,
    bench_locate,
    bench_locate_cell,
    bench_locate_on_edge,
    bench_step_across_face,
    bench_cell_direction
);
criterion_main!(benches);
