use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_rounds::core::{Entrant, GameRng, NullReporter, RoundConfig};
use rust_rounds::rounds::{Round, ShipTask, SquidGame};
use rust_rounds::tournament::Tournament;

fn bench_full_tournament(c: &mut Criterion) {
    c.bench_function("tournament_456", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut tournament = Tournament::builder()
                .entrants(456)
                .standard_rounds(&RoundConfig::default())
                .build()
                .expect("valid lineup");
            let mut rng = GameRng::new(seed);
            black_box(tournament.run(&mut rng, &mut NullReporter))
        });
    });
}

fn bench_single_rounds(c: &mut Criterion) {
    let field = Entrant::field(456, &mut GameRng::new(1));

    c.bench_function("ship_task_456", |b| {
        b.iter(|| {
            let mut game = ShipTask::default();
            for e in &field {
                game.join(e);
            }
            game.play(&mut GameRng::new(2), &mut NullReporter);
            black_box(game.survivors())
        });
    });

    c.bench_function("squid_game_456", |b| {
        b.iter(|| {
            let mut game = SquidGame::default();
            for e in &field {
                game.join(e);
            }
            game.play(&mut GameRng::new(3), &mut NullReporter);
            black_box(game.winner())
        });
    });
}

criterion_group!(benches, bench_full_tournament, bench_single_rounds);
criterion_main!(benches);
