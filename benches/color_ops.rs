use colorops::{Adjustment, Color, RgbColor, YuvColor};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_conversion(c: &mut Criterion) {
    let rgb = RgbColor::new(0x12, 0x34, 0x56);
    let yuv = YuvColor::from_color(&rgb);

    c.bench_function("rgb_to_yuv", |b| {
        b.iter(|| YuvColor::from_color(black_box(&rgb)))
    });
    c.bench_function("yuv_to_rgb", |b| {
        b.iter(|| RgbColor::from_color(black_box(&yuv)))
    });
}

fn benchmark_contrast(c: &mut Criterion) {
    let background = RgbColor::new(0x33, 0x66, 0x99);
    let candidates = [RgbColor::BLACK, RgbColor::WHITE, RgbColor::new(0xFF, 0xCC, 0x00)];

    c.bench_function("contrast_ratio", |b| {
        b.iter(|| black_box(&background).contrast_ratio(black_box(&RgbColor::WHITE)))
    });
    c.bench_function("contrast_color", |b| {
        b.iter(|| black_box(&background).contrast_color(black_box(&candidates)))
    });
}

fn benchmark_adjust(c: &mut Criterion) {
    let color = RgbColor::new(0x33, 0x66, 0x99);
    let adjustment = Adjustment::new()
        .hue_offset(0.5)
        .saturation(0.8)
        .contrast(1.1)
        .brightness(-0.05);

    c.bench_function("adjust_rgb", |b| {
        b.iter(|| black_box(&color).adjust(black_box(&adjustment)))
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_contrast, benchmark_adjust);
criterion_main!(benches);
