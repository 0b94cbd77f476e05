use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use house_party::core::config::PartyConfig;
use house_party::simulation::Party;

fn party(guests: u32) -> Party {
    let mut config = PartyConfig {
        guest_count: guests,
        seed: Some(42),
        ..PartyConfig::default()
    };
    // Keep the neighbor out of the way so every iteration does real work
    config.neighbor.base_tolerance = 1.0e9;
    config.neighbor.halving_ticks = 1.0e12;

    let mut party = Party::new(&config).expect("valid config");
    party.adjust_volume(1.0);
    party
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_tick");
    for guests in [15_u32, 150, 1_500] {
        group.bench_with_input(BenchmarkId::from_parameter(guests), &guests, |b, &guests| {
            b.iter_batched(
                || party(guests),
                |mut party| black_box(party.advance_tick()),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_guests");
    for guests in [15_u32, 150, 1_500] {
        let mut party = party(guests);
        group.bench_with_input(BenchmarkId::from_parameter(guests), &guests, |b, _| {
            b.iter(|| party.move_guests(black_box(1.0)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tick, bench_frames);
criterion_main!(benches);
