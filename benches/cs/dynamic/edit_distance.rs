use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use editdistance::levenshtein_distance;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein_distance");
    let mut rng = StdRng::seed_from_u64(42);

    for &len in &[16, 128, 1024] {
        let a = random_text(&mut rng, len);
        let b = random_text(&mut rng, len);
        group.bench_with_input(BenchmarkId::new("random", len), &(a, b), |bench, (a, b)| {
            bench.iter(|| levenshtein_distance(black_box(a), black_box(b)))
        });
    }

    // Short row dimension against a long outer sequence
    let long = random_text(&mut rng, 4096);
    let short = random_text(&mut rng, 32);
    group.bench_function("skewed", |bench| {
        bench.iter(|| levenshtein_distance(black_box(&short), black_box(&long)))
    });

    group.finish();
}

criterion_group!(benches, bench_levenshtein);
criterion_main!(benches);
