use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prefix_codes::string::longest_repeating_substring_length;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_text(len: usize, alphabet: &[u8]) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

fn bench_longest_repeat(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_repeat");
    for len in [1_000, 10_000, 100_000] {
        let dna = generate_text(len, b"ACGT");
        group.bench_with_input(BenchmarkId::new("dna", len), &dna, |b, text| {
            b.iter(|| longest_repeating_substring_length(black_box(text)));
        });

        let periodic = "abcdefgh".repeat(len / 8);
        group.bench_with_input(BenchmarkId::new("periodic", len), &periodic, |b, text| {
            b.iter(|| longest_repeating_substring_length(black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_longest_repeat);
criterion_main!(benches);
