//! Criterion benchmarks for the five inversion algorithms.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gf2x_inv::inv::{mod_inv_byi, mod_inv_cea, mod_inv_flt, mod_inv_sac, mod_inv_tyt};
use gf2x_inv::params::CURRENT;
use gf2x_inv::poly::Poly;
use gf2x_inv::rand::random_coprime_element;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
type Benchmarker = Criterion;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
type Benchmarker = Criterion<criterion_cycles_per_byte::CyclesPerByte>;

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("gf2x-inv");

    let mut rng = StdRng::seed_from_u64(42);
    let g = random_coprime_element(&mut rng);

    let algorithms: &[(&str, fn(&Poly, &mut Poly))] = &[
        ("byi", mod_inv_byi),
        ("flt", mod_inv_flt),
        ("cea", mod_inv_cea),
        ("tyt", mod_inv_tyt),
        ("sac", mod_inv_sac),
    ];

    for (name, algo) in algorithms {
        group.bench_function(BenchmarkId::new("mod_inv", name), |b| {
            let mut ginv = Poly::new(CURRENT.p as i64 - 1);
            b.iter(|| algo(&g, &mut ginv));
        });
    }

    group.finish();
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench
);

#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
criterion_group!(
    name = benches;
    config = Criterion::default().with_measurement(criterion_cycles_per_byte::CyclesPerByte);
    targets = bench
);

criterion_main!(benches);
