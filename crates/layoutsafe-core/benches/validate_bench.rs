//! Criterion benchmarks for the validator hot path.
//!
//! A compliance run validates thousands of passwords, one membership check
//! per character, so the per-character cost of `validate` is the figure that
//! matters.
//!
//! Run with:
//! ```bash
//! cargo bench --package layoutsafe-core --bench validate_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use layoutsafe_core::charset::store::load_builtin;
use layoutsafe_core::password::generate::{generate, GenerationConfig};
use layoutsafe_core::password::validate::validate;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Fixture builders ──────────────────────────────────────────────────────────

/// Builds a fully layout-safe password of `len` characters.
fn safe_password(len: usize) -> String {
    let charset = load_builtin().expect("bundled charset must load");
    let mut rng = StdRng::seed_from_u64(0xBE6C);
    generate(
        &charset,
        &GenerationConfig {
            length: len,
            include_lowercase: true,
            include_uppercase: true,
            include_special: true,
        },
        &mut rng,
    )
    .expect("pool is non-empty")
}

/// Builds a password of `len` characters where every fourth character is
/// layout-unsafe, exercising the collection path.
fn mixed_password(len: usize) -> String {
    safe_password(len)
        .chars()
        .enumerate()
        .map(|(i, ch)| if i % 4 == 3 { '@' } else { ch })
        .collect()
}

fn bench_validate(c: &mut Criterion) {
    let charset = load_builtin().expect("bundled charset must load");

    let mut group = c.benchmark_group("validate");
    for len in [8usize, 32, 256, 4096] {
        let safe = safe_password(len);
        group.bench_with_input(BenchmarkId::new("all_safe", len), &safe, |b, pw| {
            b.iter(|| validate(black_box(pw), black_box(&charset)))
        });

        let mixed = mixed_password(len);
        group.bench_with_input(BenchmarkId::new("quarter_unsafe", len), &mixed, |b, pw| {
            b.iter(|| validate(black_box(pw), black_box(&charset)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
