//! Performance benchmarks for Video Tools
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use video_tools::fs::{find_with_extension, FileCopier};
use video_tools::hash::{hash_bytes, hash_file};
use video_tools::ingest::ContentAddress;

/// Create a test file of the specified size
fn create_test_file(dir: &std::path::Path, name: &str, size: usize) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();

    let chunk_size = 64 * 1024;
    let chunk: Vec<u8> = (0..chunk_size).map(|i| (i % 256) as u8).collect();
    let mut remaining = size;

    while remaining > 0 {
        let to_write = remaining.min(chunk_size);
        file.write_all(&chunk[..to_write]).unwrap();
        remaining -= to_write;
    }

    path
}

fn bench_hash_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_file");

    for size in [1024 * 1024, 16 * 1024 * 1024, 64 * 1024 * 1024].iter() {
        let dir = TempDir::new().unwrap();
        let clip = create_test_file(dir.path(), "clip.MOV", *size);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("sha256", humansize::format_size(*size as u64, humansize::BINARY)),
            size,
            |b, _| {
                b.iter(|| black_box(hash_file(&clip).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_content_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_address");

    let data_size = 10 * 1024 * 1024; // 10 MB
    let data: Vec<u8> = (0..data_size).map(|i| (i % 256) as u8).collect();

    group.throughput(Throughput::Bytes(data_size as u64));
    group.bench_function("hash_bytes", |b| b.iter(|| black_box(hash_bytes(&data))));
    group.bench_function("for_content", |b| {
        b.iter(|| black_box(ContentAddress::for_content(&data, "MOV").file_name()))
    });

    group.finish();
}

fn bench_copy_clip(c: &mut Criterion) {
    let size = 16 * 1024 * 1024;
    let src_dir = TempDir::new().unwrap();
    let dst_dir = TempDir::new().unwrap();
    let clip = create_test_file(src_dir.path(), "clip.MOV", size);
    let dest = dst_dir.path().join("clip.mov");

    let mut group = c.benchmark_group("copy");
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("preserving_metadata", |b| {
        let copier = FileCopier::default();
        b.iter(|| black_box(copier.copy(&clip, &dest).unwrap()));
    });
    group.finish();
}

fn bench_card_scan(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();

    // Camera card layout: a few clip folders with sidecar files
    for i in 0..10 {
        let folder = dir.path().join(format!("DCIM/{:03}CANON", 100 + i));
        std::fs::create_dir_all(&folder).unwrap();

        for j in 0..100 {
            create_test_file(&folder, &format!("MVI_{:04}.MOV", j), 128);
            create_test_file(&folder, &format!("._MVI_{:04}.MOV", j), 16);
        }
    }

    c.bench_function("scan_1000_clips", |b| {
        b.iter(|| black_box(find_with_extension(dir.path(), "MOV").unwrap()));
    });
}

criterion_group!(
    benches,
    bench_hash_file,
    bench_content_address,
    bench_copy_clip,
    bench_card_scan
);

criterion_main!(benches);
