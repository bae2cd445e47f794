//! Ddakji.
//!
//! Pairs compare power; the stronger player wins and an exact tie is a coin
//! flip. Pairing and byes work as in Marbles.

use crate::core::{Entrant, RandomSource, Reporter};
use crate::participant::{DdakjiPlayer, Participant};

use super::pairing::play_bracket;
use super::{Round, RoundOutcome, RoundStats, Roster};

/// Power-duel round.
#[derive(Clone, Debug)]
pub struct Ddakji {
    roster: Roster<DdakjiPlayer>,
    matches: usize,
}

impl Ddakji {
    #[must_use]
    pub fn new() -> Self {
        Self {
            roster: Roster::new("Ddakji"),
            matches: 0,
        }
    }

    /// Matches played in the last `play`.
    #[must_use]
    pub fn matches_played(&self) -> usize {
        self.matches
    }
}

impl Default for Ddakji {
    fn default() -> Self {
        Self::new()
    }
}

impl Round for Ddakji {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(DdakjiPlayer::new(*entrant));
    }

    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);
        self.matches = 0;
        if let Some(outcome) = self.roster.short_of(2, reporter) {
            return outcome;
        }

        let bracket = play_bracket(self.roster.take_members(), reporter, |first, second, _| {
            match first.power().cmp(&second.power()) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => rng.coin_flip(),
            }
        });

        self.matches = bracket.matches;
        Roster::bury(bracket.losers, reporter);
        self.roster.restore(bracket.winners);

        self.roster.close(None, reporter);
        RoundOutcome::Completed
    }

    fn survivors(&self) -> Vec<Entrant> {
        self.roster.survivors()
    }

    fn stats(&self) -> Option<&RoundStats> {
        self.roster.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BufferReporter, NullReporter, ScriptedSource};

    #[test]
    fn test_higher_power_wins() {
        let mut game = Ddakji::new();
        game.join(&Entrant::new(1, 10, 10));
        game.join(&Entrant::new(2, 50, 50));
        game.join(&Entrant::new(3, 90, 0));
        game.join(&Entrant::new(4, 0, 80));

        let mut rng = ScriptedSource::new(vec![0.9]);
        let mut out = BufferReporter::new();
        game.play(&mut rng, &mut out);

        let numbers: Vec<_> = game.survivors().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert_eq!(rng.probability_draws(), 0);
        assert_eq!(out.count("lost at Ddakji."), 2);
    }

    #[test]
    fn test_tie_is_coin_flip() {
        let mut heads = Ddakji::new();
        heads.join(&Entrant::new(1, 30, 30));
        heads.join(&Entrant::new(2, 60, 0));
        heads.play(&mut ScriptedSource::new(vec![0.2]), &mut NullReporter);
        assert_eq!(heads.survivors()[0].number, 1);

        let mut tails = Ddakji::new();
        tails.join(&Entrant::new(1, 30, 30));
        tails.join(&Entrant::new(2, 60, 0));
        tails.play(&mut ScriptedSource::new(vec![0.7]), &mut NullReporter);
        assert_eq!(tails.survivors()[0].number, 2);
    }

    #[test]
    fn test_bye_counts() {
        let mut game = Ddakji::new();
        for i in 1..=5 {
            game.join(&Entrant::new(i, i * 10, 0));
        }
        game.play(&mut ScriptedSource::default(), &mut NullReporter);

        assert_eq!(game.matches_played(), 2);
        let numbers: Vec<_> = game.survivors().iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![5, 2, 4]);
        let stats = game.stats().unwrap();
        assert_eq!((stats.initial, stats.survivors, stats.deaths), (5, 3, 2));
    }
}
