use cell_angles::{LabelImage, Point2d, RootSide, compute_cell_file_boundaries};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// A horizontal file of `n` cells, `cell` pixels wide, one-pixel walls.
fn synthetic_file(n: usize, cell: usize, height: usize) -> LabelImage {
    let pitch = cell + 1;
    let width = n * pitch + 1;
    let mut img = LabelImage::new_fill(width, height, 0);
    for i in 0..n {
        let x0 = 1 + i * pitch;
        img.fill_rect(x0, 1, x0 + cell, height - 1, (i + 1) as u32);
    }
    img
}

fn bench_pipeline(c: &mut Criterion) {
    let img = synthetic_file(24, 40, 512);
    let view = img.as_view();
    let waypoints = [
        Point2d::new(2.0, 200.0),
        Point2d::new(500.0, 260.0),
        Point2d::new(980.0, 240.0),
    ];

    c.bench_function("cell_angles_pipeline_24_cells", |b| {
        b.iter(|| {
            let cf = compute_cell_file_boundaries(
                black_box(&view),
                black_box(&waypoints),
                RootSide::Left,
                true,
            )
            .expect("synthetic file is valid");
            black_box(cf.boundaries.len());
        });
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
