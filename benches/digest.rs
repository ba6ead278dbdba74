use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use simplehash::SimpleHash256;

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    // Single block (64 bytes)
    let small = vec![0xA5u8; 64];
    group.throughput(Throughput::Bytes(64));
    group.bench_function("one_shot_64b", |b| {
        b.iter(|| {
            let mut hasher = SimpleHash256::new();
            hasher.update(black_box(&small));
            black_box(hasher.digest());
        });
    });

    // 1 KB
    let medium = vec![0xA5u8; 1024];
    group.throughput(Throughput::Bytes(1024));
    group.bench_function("one_shot_1kb", |b| {
        b.iter(|| {
            let mut hasher = SimpleHash256::new();
            hasher.update(black_box(&medium));
            black_box(hasher.digest());
        });
    });

    // 64 KB
    let large = vec![0xA5u8; 64 * 1024];
    group.throughput(Throughput::Bytes(64 * 1024));
    group.bench_function("one_shot_64kb", |b| {
        b.iter(|| {
            let mut hasher = SimpleHash256::new();
            hasher.update(black_box(&large));
            black_box(hasher.digest());
        });
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    // 64 KB fed in 8 KB chunks, the file-collaborator pattern
    let data = vec![0x5Au8; 64 * 1024];
    group.throughput(Throughput::Bytes(64 * 1024));
    group.bench_function("streaming_64kb_8kb_chunks", |b| {
        b.iter(|| {
            let mut hasher = SimpleHash256::new();
            for chunk in data.chunks(8192) {
                hasher.update(black_box(chunk));
            }
            black_box(hasher.digest());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_streaming);
criterion_main!(benches);
