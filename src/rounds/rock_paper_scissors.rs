//! Rock Paper Scissors.
//!
//! Every participant throws exactly once, in roster order, against an unseen
//! opponent. A loss eliminates on the spot.

use crate::core::{Entrant, RandomSource, Reporter};
use crate::participant::{Duelist, Participant};

use super::{Round, RoundOutcome, RoundStats, Roster};

/// Pairwise-choice round.
#[derive(Clone, Debug)]
pub struct RockPaperScissors {
    roster: Roster<Duelist>,
}

impl RockPaperScissors {
    #[must_use]
    pub fn new() -> Self {
        Self {
            roster: Roster::new("Rock Paper Scissors"),
        }
    }
}

impl Default for RockPaperScissors {
    fn default() -> Self {
        Self::new()
    }
}

impl Round for RockPaperScissors {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(Duelist::new(*entrant));
    }

    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);
        if let Some(outcome) = self.roster.short_of(2, reporter) {
            return outcome;
        }

        self.roster
            .retain_survivors(reporter, |duelist, out| duelist.survives(&mut *rng, out));

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
