use usha256::hash::sha256;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 4] = [55, 64, 4096, 1 << 20];

pub fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("usha256");

    for size in SIZES {
        let data = vec![0x61u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| sha256(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
