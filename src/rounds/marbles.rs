//! Marbles.
//!
//! Pairs guess odd or even on a random handful of marbles. The first player
//! of a pair wins when the guess matches the parity of the draw. Losers die
//! once every match has been played; an odd field gives the last player a bye.

use crate::core::{Entrant, RandomSource, Reporter, RoundConfig};
use crate::participant::MarblePlayer;

use super::pairing::play_bracket;
use super::{Round, RoundOutcome, RoundStats, Roster};

/// Paired-guess round.
#[derive(Clone, Debug)]
pub struct Marbles {
    roster: Roster<MarblePlayer>,
    max_marbles: u32,
    matches: usize,
}

impl Marbles {
    #[must_use]
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            roster: Roster::new("Marbles"),
            max_marbles: config.marble_max,
            matches: 0,
        }
    }

    /// Matches played in the last `play`.
    #[must_use]
    pub fn matches_played(&self) -> usize {
        self.matches
    }
}

impl Default for Marbles {
    fn default() -> Self {
        Self::new(&RoundConfig::default())
    }
}

impl Round for Marbles {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(MarblePlayer::new(*entrant));
    }

    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);
        self.matches = 0;
        if let Some(outcome) = self.roster.short_of(2, reporter) {
            return outcome;
        }

        let max_marbles = self.max_marbles;
        let bracket = play_bracket(self.roster.take_members(), reporter, |_, _, _| {
            let marbles = rng.pick_below(max_marbles) + 1;
            let guess_odd = rng.coin_flip();
            log::trace!("marbles {marbles}, guessed {}", if guess_odd { "odd" } else { "even" });
            guess_odd == (marbles % 2 == 1)
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
