use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use cascade_des::CipherContext;

fn bench_encrypt_text(c: &mut Criterion) {
    let context = CipherContext::new("1", "2", "3");
    let mut group = c.benchmark_group("Text Encryption");

    for &chars in &[64usize, 1024, 16 * 1024] {
        let text: String = "credential-".chars().cycle().take(chars).collect();

        group.bench_function(BenchmarkId::new("encrypt", chars), |b| {
            b.iter(|| context.encrypt(black_box(&text)))
        });

        let ciphertext = context.encrypt(&text);
        group.bench_function(BenchmarkId::new("decrypt", chars), |b| {
            b.iter(|| context.decrypt(black_box(&ciphertext)).unwrap())
        });
    }

    group.finish();
}

fn bench_cascade_depth(c: &mut Criterion) {
    let text: String = "credential-".chars().cycle().take(1024).collect();
    let mut group = c.benchmark_group("Cascade Depth");

    // Each extra key block is one more full 16-round pass per text block.
    let cascades = [
        ("one subkey", CipherContext::new("1", "", "")),
        ("three subkeys", CipherContext::new("1", "2", "3")),
        ("long keys", CipherContext::new("12345678", "abcdefgh", "")),
    ];
    for (label, context) in &cascades {
        group.bench_function(BenchmarkId::new("encrypt", label), |b| {
            b.iter(|| context.encrypt(black_box(&text)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encrypt_text, bench_cascade_depth);
criterion_main!(benches);
