use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prefix_codes::compression::CodeTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_alphabet(size: usize) -> Vec<(char, u64)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..size)
        .filter_map(|i| char::from_u32(0x100 + i as u32))
        .map(|ch| (ch, rng.gen_range(1..10_000)))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_build");
    for size in [16, 256, 4096] {
        let pairs = generate_alphabet(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &pairs, |b, pairs| {
            b.iter(|| CodeTree::from_pairs(black_box(pairs)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decode");
    let pairs = generate_alphabet(64);
    let tree = CodeTree::from_pairs(&pairs).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for len in [1_000, 100_000] {
        let message: String = (0..len)
            .map(|_| pairs[rng.gen_range(0..pairs.len())].0)
            .collect();
        let encoded = tree.encode(&message).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(len), &encoded, |b, encoded| {
            b.iter(|| tree.decode(black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_decode);
criterion_main!(benches);
