use criterion::{criterion_group, criterion_main, Criterion};
use legacy_asset_transform_rle8::bitmap::decode_bitmap;
use legacy_asset_transform_rle8::decode_rle8_pixels;
use std::hint::black_box;

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

const WIDTH: usize = 640;
const HEIGHT: usize = 480;

/// Builds a stream where each row alternates short runs with 5 byte absolute runs,
/// roughly what sprite sheets with dithered edges compress to.
fn generate_stream(width: usize, height: usize) -> Vec<u8> {
    let mut stream = Vec::new();
    for y in 0..height {
        let mut x = 0;
        while x + 16 <= width {
            stream.extend_from_slice(&[11, (y % 251) as u8]);
            stream.extend_from_slice(&[0, 5, 1, 2, 3, 4, 5, 0]);
            x += 16;
        }
        stream.extend_from_slice(&[0, 0]);
    }
    stream.extend_from_slice(&[0, 1]);
    stream
}

fn generate_bitmap(width: usize, height: usize, stream: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(40 + 1024 + stream.len());
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&(width as u32).to_le_bytes());
    data.extend_from_slice(&(height as u32).to_le_bytes());
    data.extend_from_slice(&(1u32 | (8 << 16)).to_le_bytes());
    data.extend_from_slice(&1u32.to_le_bytes());
    data.extend_from_slice(&(stream.len() as u32).to_le_bytes());
    data.extend_from_slice(&[0; 8]);
    data.extend_from_slice(&256u32.to_le_bytes());
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend(std::iter::repeat_n(0u8, 1024));
    data.extend_from_slice(stream);
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("RLE8 Decode");

    let stream = generate_stream(WIDTH, HEIGHT);
    let bitmap = generate_bitmap(WIDTH, HEIGHT, &stream);
    group.throughput(criterion::Throughput::Bytes((WIDTH * HEIGHT) as u64));

    group.bench_function("decode_rle8_pixels", |b| {
        b.iter(|| decode_rle8_pixels(black_box(&stream), WIDTH, HEIGHT))
    });

    group.bench_function("decode_bitmap", |b| {
        b.iter(|| decode_bitmap(black_box(&bitmap)))
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
