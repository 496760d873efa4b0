use codspeed_criterion_compat::{Criterion, criterion_group, criterion_main};
use credisim::prelude::*;

fn bench_effective_normalization(c: &mut Criterion) {
    c.bench_function("tea_effective_monthly", |b| {
        b.iter(|| {
            tea()
                .value(2.0)
                .kind(RateKind::Effective)
                .period(Period::Monthly)
                .call()
                .unwrap()
        })
    });

    c.bench_function("tea_effective_daily", |b| {
        b.iter(|| {
            tea()
                .value(0.1)
                .kind(RateKind::Effective)
                .period(Period::Daily)
                .call()
                .unwrap()
        })
    });
}

fn bench_nominal_normalization(c: &mut Criterion) {
    c.bench_function("tea_nominal_semiannual_monthly_cap", |b| {
        b.iter(|| {
            tea()
                .value(2.0)
                .kind(RateKind::Nominal)
                .period(Period::Semiannual)
                .capitalization(Period::Monthly)
                .call()
                .unwrap()
        })
    });

    c.bench_function("tea_nominal_default_cap", |b| {
        b.iter(|| {
            tea()
                .value(12.0)
                .kind(RateKind::Nominal)
                .period(Period::Monthly)
                .call()
                .unwrap()
        })
    });
}

fn bench_rate_sensitivity(c: &mut Criterion) {
    c.bench_function("tea_sensitivity_sweep", |b| {
        b.iter(|| {
            let rates = [0.5, 1.0, 2.0, 3.5, 5.0];
            for rate in rates {
                tea()
                    .value(rate)
                    .kind(RateKind::Effective)
                    .period(Period::Monthly)
                    .call()
                    .unwrap();
            }
        })
    });
}

criterion_group!(
    benches,
    bench_effective_normalization,
    bench_nominal_normalization,
    bench_rate_sensitivity
);
criterion_main!(benches);
