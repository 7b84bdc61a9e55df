use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_ephem::{AnalyticEphemeris, AyanamshaSystem, Body, Ephemeris, sidereal_position};
use panchang_time::Instant;

fn bench_sidereal_position(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let instant = Instant::from_jd_utc(2_460_400.5);
    c.bench_function("sidereal_position", |b| {
        b.iter(|| sidereal_position(&eph, black_box(instant), AyanamshaSystem::Lahiri))
    });
}

fn bench_planets(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let instant = Instant::from_jd_utc(2_460_400.5);
    c.bench_function("all_bodies", |b| {
        b.iter(|| {
            Body::all()
                .iter()
                .map(|body| eph.tropical_longitude(*body, black_box(instant)))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_sidereal_position, bench_planets);
criterion_main!(benches);
