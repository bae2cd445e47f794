//! Property tests over random fields and seeds.

use proptest::prelude::*;

use rust_rounds::core::{Entrant, GameRng, NullReporter, RoundConfig};
use rust_rounds::participant::{
    BridgeWalker, DdakjiPlayer, Duelist, FightOdds, Fighter, MarblePlayer, Participant, Runner, ShipWorker, TeamMember,
};
use rust_rounds::rounds::{standard_rounds, Ddakji, Round, Marbles, ShipTask, SquidGame, TugOfWar};

fn arb_entrant() -> impl Strategy<Value = Entrant> {
    (1u32..1000, 0u32..=100, 0u32..=100).prop_map(|(n, a, f)| Entrant::new(n, a, f))
}

fn arb_field(max: usize) -> impl Strategy<Value = Vec<Entrant>> {
    prop::collection::vec((0u32..=100, 0u32..=100), 0..max).prop_map(|abilities| {
        abilities
            .into_iter()
            .enumerate()
            .map(|(i, (a, f))| Entrant::new(i as u32 + 1, a, f))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_variants_round_trip(e in arb_entrant()) {
        let copies: Vec<Entrant> = vec![
            *Runner::new(e, 1000, 0.1).entrant(),
            *Duelist::new(e).entrant(),
            *TeamMember::new(e).entrant(),
            *BridgeWalker::new(e).entrant(),
            *MarblePlayer::new(e).entrant(),
            *DdakjiPlayer::new(e).entrant(),
            *ShipWorker::new(e, 8.0).entrant(),
            *Fighter::new(e, FightOdds::default()).entrant(),
        ];
        for copy in copies {
            prop_assert_eq!(copy, e);
            prop_assert_eq!(copy.power(), e.agility + e.fearlessness);
        }
    }

    #[test]
    fn prop_counts_add_up(field in arb_field(60), seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        for mut round in standard_rounds(&RoundConfig::default()) {
            for e in &field {
                round.join(e);
            }
            round.play(&mut rng, &mut NullReporter);

            let stats = round.stats().unwrap();
            prop_assert_eq!(stats.initial, field.len());
            prop_assert_eq!(stats.survivors + stats.deaths, stats.initial);
            prop_assert_eq!(round.survivors().len(), stats.survivors);
        }
    }

    #[test]
    fn prop_brackets_halve(field in arb_field(80), seed in any::<u64>()) {
        prop_assume!(field.len() >= 2);
        let n = field.len();
        let mut rng = GameRng::new(seed);

        let mut marbles = Marbles::default();
        let mut ddakji = Ddakji::new();
        for e in &field {
            marbles.join(e);
            ddakji.join(e);
        }
        marbles.play(&mut rng, &mut NullReporter);
        ddakji.play(&mut rng, &mut NullReporter);

        prop_assert_eq!(marbles.survivors().len(), (n + 1) / 2);
        prop_assert_eq!(ddakji.survivors().len(), (n + 1) / 2);
        prop_assert_eq!(marbles.matches_played(), n / 2);
    }

    #[test]
    fn prop_ddakji_stronger_wins(a in arb_entrant(), b in arb_entrant(), seed in any::<u64>()) {
        prop_assume!(a.power() != b.power());
        let mut game = Ddakji::new();
        game.join(&a);
        game.join(&b);
        game.play(&mut GameRng::new(seed), &mut NullReporter);

        let expected = if a.power() > b.power() { a } else { b };
        prop_assert_eq!(game.survivors(), vec![expected]);
    }

    #[test]
    fn prop_tug_of_war_all_or_nothing(field in arb_field(40)) {
        prop_assume!(field.len() >= 2);
        let mut game = TugOfWar::new();
        for e in &field {
            game.join(e);
        }
        game.play(&mut GameRng::new(0), &mut NullReporter);

        let powers = game.powers().unwrap();
        let team1 = field.len().div_ceil(2);
        let team2 = field.len() / 2;
        let left = game.survivors().len();
        if powers.team1 > powers.team2 {
            prop_assert_eq!(left, team1);
        } else if powers.team2 > powers.team1 {
            prop_assert_eq!(left, team2);
        } else {
            prop_assert_eq!(left, field.len());
        }
    }

    #[test]
    fn prop_ship_ends_at_two(field in arb_field(100), seed in any::<u64>()) {
        let n = field.len();
        let mut game = ShipTask::default();
        for e in &field {
            game.join(e);
        }
        game.play(&mut GameRng::new(seed), &mut NullReporter);

        if n >= 3 {
            prop_assert_eq!(game.survivors().len(), 2);
        } else {
            prop_assert_eq!(game.survivors().len(), n);
        }
    }

    #[test]
    fn prop_final_fight_at_most_one(field in arb_field(30), seed in any::<u64>()) {
        prop_assume!(field.len() >= 2);
        let mut game = SquidGame::default();
        for e in &field {
            game.join(e);
        }
        game.play(&mut GameRng::new(seed), &mut NullReporter);

        let left = game.survivors().len();
        prop_assert!(left <= 1);
        prop_assert_eq!(game.winner().is_some(), left == 1);
    }
}
