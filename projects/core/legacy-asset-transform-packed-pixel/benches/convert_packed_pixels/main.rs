use criterion::{criterion_group, criterion_main, Criterion};
use legacy_asset_transform_packed_pixel::{
    convert_packed_pixels_to_rgb, convert_packed_region_to_pixmap, DEFAULT_PACKED_PIXEL_WIDTH,
};
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

// The level map is 128 pixels wide and roughly 8000 rows tall.
const HEIGHT: usize = 8192;

fn generate_region(width: usize, height: usize) -> Vec<u8> {
    (0..width * height)
        .flat_map(|index| (index.wrapping_mul(2654435761) as u16).to_be_bytes())
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Packed Pixel Convert");

    let region = generate_region(DEFAULT_PACKED_PIXEL_WIDTH, HEIGHT);
    let mut output = vec![0u8; region.len() / 2 * 3];
    group.throughput(criterion::Throughput::Bytes(region.len() as u64));

    group.bench_function("convert_packed_pixels_to_rgb", |b| {
        b.iter(|| convert_packed_pixels_to_rgb(black_box(&region), black_box(&mut output)))
    });

    group.bench_function("convert_packed_region_to_pixmap", |b| {
        b.iter(|| convert_packed_region_to_pixmap(black_box(&region), DEFAULT_PACKED_PIXEL_WIDTH))
    });

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
