use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fractal_zoom::{FractalRenderer, PixelBuffer, SurfaceSize, Viewport};
use std::hint::black_box;

fn bench_render_pass(c: &mut Criterion) {
    let renderer = FractalRenderer::default();
    let mut group = c.benchmark_group("render_pass");

    for (width, height) in [(200, 150), (800, 600)] {
        let surface = SurfaceSize::new(width, height).unwrap();
        let mut frame = PixelBuffer::new(surface);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &surface,
            |b, &surface| {
                b.iter(|| renderer.render(black_box(&Viewport::default()), surface, &mut frame));
            },
        );
    }

    group.finish();
}

fn bench_zoomed_render_pass(c: &mut Criterion) {
    let renderer = FractalRenderer::default();
    let surface = SurfaceSize::new(200, 150).unwrap();
    let viewport = Viewport::new(-0.75, 0.1, 0.01, 0.0075).unwrap();
    let mut frame = PixelBuffer::new(surface);

    c.bench_function("render_pass_seahorse_valley", |b| {
        b.iter(|| renderer.render(black_box(&viewport), surface, &mut frame));
    });
}

criterion_group!(benches, bench_render_pass, bench_zoomed_render_pass);
criterion_main!(benches);
