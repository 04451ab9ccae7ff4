use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tinyrast::bench::{
    DepthBuffer, EdgeFunctionRasterizer, FrameBuffer, Rasterizer, RenderTarget,
    ScanlineRasterizer, Shading, Triangle,
};
use tinyrast::math::Vec3;

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;
const FILL: Shading<'static> = Shading::Flat(0xFFFF0000);

fn create_buffers() -> (FrameBuffer, DepthBuffer) {
    (
        FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT),
        DepthBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT),
    )
}

fn small_triangle() -> Triangle {
    Triangle::new([
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(120.0, 100.0, 0.0),
        Vec3::new(110.0, 120.0, 0.0),
    ])
}

fn medium_triangle() -> Triangle {
    Triangle::new([
        Vec3::new(100.0, 100.0, 0.0),
        Vec3::new(300.0, 100.0, 0.0),
        Vec3::new(200.0, 300.0, 0.0),
    ])
}

fn large_triangle() -> Triangle {
    Triangle::new([
        Vec3::new(50.0, 50.0, 0.0),
        Vec3::new(750.0, 100.0, 0.0),
        Vec3::new(400.0, 550.0, 0.0),
    ])
}

/// Long and thin: the bounding box is mostly empty.
fn sliver_triangle() -> Triangle {
    Triangle::new([
        Vec3::new(10.0, 10.0, 0.0),
        Vec3::new(790.0, 580.0, 0.0),
        Vec3::new(14.0, 10.0, 0.0),
    ])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let scanline = ScanlineRasterizer::new();
    let edge_fn = EdgeFunctionRasterizer::new();

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
        ("sliver", sliver_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("scanline", name), &triangle, |b, tri| {
            let (mut color, mut depth) = create_buffers();
            b.iter(|| {
                depth.clear();
                let mut target = RenderTarget::new(&mut color, &mut depth);
                scanline.fill_triangle(black_box(tri), &mut target, &FILL)
            });
        });

        group.bench_with_input(
            BenchmarkId::new("edge_function", name),
            &triangle,
            |b, tri| {
                let (mut color, mut depth) = create_buffers();
                b.iter(|| {
                    depth.clear();
                    let mut target = RenderTarget::new(&mut color, &mut depth);
                    edge_fn.fill_triangle(black_box(tri), &mut target, &FILL)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let scanline = ScanlineRasterizer::new();
    let edge_fn = EdgeFunctionRasterizer::new();

    // Grid of small triangles at varying depth
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                let z = ((row + col) % 7) as f32;
                Triangle::new([
                    Vec3::new(x, y, z),
                    Vec3::new(x + 35.0, y, z),
                    Vec3::new(x + 17.5, y + 25.0, z),
                ])
            })
        })
        .collect();

    group.bench_function("scanline_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.clear();
            let mut target = RenderTarget::new(&mut color, &mut depth);
            for tri in &triangles {
                scanline.fill_triangle(black_box(tri), &mut target, &FILL);
            }
        });
    });

    group.bench_function("edge_function_400_triangles", |b| {
        let (mut color, mut depth) = create_buffers();
        b.iter(|| {
            depth.clear();
            let mut target = RenderTarget::new(&mut color, &mut depth);
            for tri in &triangles {
                edge_fn.fill_triangle(black_box(tri), &mut target, &FILL);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_many_triangles);
criterion_main!(benches);
