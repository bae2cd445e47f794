//! Squid Game, the final fight.
//!
//! Full passes over the roster repeat until at most one fighter is left. In
//! each pass every fighter attacks or defends; a failed roll eliminates on
//! the spot. A sole survivor is crowned winner. If the last pass kills
//! everyone there is no winner. Two or more fighters who cannot fail end the
//! fight as a stalemate.

use crate::core::{Entrant, RandomSource, Reporter, RoundConfig};
use crate::participant::{FightOdds, Fighter, Participant};

use super::{Round, RoundOutcome, RoundStats, Roster};

/// Last-one-standing round.
#[derive(Clone, Debug)]
pub struct SquidGame {
    roster: Roster<Fighter>,
    odds: FightOdds,
    passes: usize,
}

impl SquidGame {
    #[must_use]
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            roster: Roster::new("Squid Game"),
            odds: FightOdds {
                base: config.final_base_probability,
                attack_offset: config.attack_offset,
                defend_offset: config.defend_offset,
            },
            passes: 0,
        }
    }

    /// Full passes fought in the last `play`.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl Default for SquidGame {
    fn default() -> Self {
        Self::new(&RoundConfig::default())
    }
}

impl Round for SquidGame {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(Fighter::new(*entrant, self.odds));
    }

    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);
        self.passes = 0;
        if let Some(outcome) = self.roster.short_of(2, reporter) {
            return outcome;
        }

        let mut outcome = RoundOutcome::Completed;
        while self.roster.len() > 1 {
            if self.roster.members().iter().filter(|f| !f.can_fail()).count() > 1 {
                reporter.line("Nobody left can lose. The fight is a stalemate.");
                log::warn!("final fight stalled with {} unbeatable fighters", self.roster.len());
                outcome = RoundOutcome::Draw;
                break;
            }
            self.passes += 1;
            reporter.blank();
            reporter.line("[FINAL Round]");

            self.roster
                .retain_survivors(reporter, |fighter, out| fighter.survives(&mut *rng, out));

            reporter.line(&format!("Survivors: {}", self.roster.len()));
        }

        reporter.blank();
        reporter.line("[Final Survivor]");
        match self.roster.crown() {
            Some(winner) => log::debug!("{} wins after {} passes", winner, self.passes),
            None => log::debug!("no survivor after {} passes", self.passes),
        }

        self.roster.close(None, reporter);
        outcome
    }

    fn survivors(&self) -> Vec<Entrant> {
        self.roster.survivors()
    }

    fn stats(&self) -> Option<&RoundStats> {
        self.roster.stats()
    }

    fn winner(&self) -> Option<Entrant> {
        self.roster.winner()
    }
}
