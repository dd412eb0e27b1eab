//! Criterion benchmarks for the analytical pricing kernel.
//!
//! Measures closed-form pricing, the full Greeks panel, and implied
//! volatility inversion, the three operations a dashboard consumer calls
//! per grid point.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use optrisk_models::analytical::{implied_volatility, BlackScholes};
use optrisk_models::instruments::OptionKind;

fn bench_pricing(c: &mut Criterion) {
    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

    c.bench_function("price_call", |b| {
        b.iter(|| bs.price_call(black_box(105.0), black_box(1.0)))
    });

    c.bench_function("price_put", |b| {
        b.iter(|| bs.price_put(black_box(105.0), black_box(1.0)))
    });
}

fn bench_greeks(c: &mut Criterion) {
    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

    c.bench_function("greeks_full_panel", |b| {
        b.iter(|| bs.greeks(black_box(105.0), black_box(1.0), OptionKind::Call))
    });

    c.bench_function("gamma_single", |b| {
        b.iter(|| bs.gamma(black_box(105.0), black_box(1.0)))
    });
}

fn bench_implied_vol(c: &mut Criterion) {
    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    let price = bs.price_call(105.0, 1.0);

    c.bench_function("implied_volatility", |b| {
        b.iter(|| {
            implied_volatility(
                black_box(price),
                black_box(100.0),
                black_box(105.0),
                black_box(1.0),
                black_box(0.05),
                OptionKind::Call,
            )
        })
    });
}

criterion_group!(benches, bench_pricing, bench_greeks, bench_implied_vol);
criterion_main!(benches);
