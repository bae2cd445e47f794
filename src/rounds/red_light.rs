//! Red Light Green Light.
//!
//! Runners move for a fixed number of turns. Each turn every runner still on
//! the field takes one step: reaching the target distance means escape, and
//! otherwise there is a fixed chance to fall. Falling kills on the spot.
//! Whoever is still on the field when the turns run out dies as well.

use crate::core::{Entrant, RandomSource, Reporter, RoundConfig};
use crate::participant::{Participant, Runner};

use super::{Round, RoundOutcome, RoundStats, Roster};

/// Movement-survival round.
#[derive(Clone, Debug)]
pub struct RedLightGreenLight {
    roster: Roster<Runner>,
    turns: u32,
    target: u32,
    fall_rate: f64,
}

impl RedLightGreenLight {
    #[must_use]
    pub fn new(config: &RoundConfig) -> Self {
        Self {
            roster: Roster::new("Red Light Green Light"),
            turns: config.movement_turns,
            target: config.movement_target,
            fall_rate: config.fall_rate,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster<Runner> {
        &self.roster
    }
}

impl Default for RedLightGreenLight {
    fn default() -> Self {
        Self::new(&RoundConfig::default())
    }
}

impl Round for RedLightGreenLight {
    fn name(&self) -> &str {
        self.roster.name()
    }

    fn join(&mut self, entrant: &Entrant) {
        self.roster.join(Runner::new(*entrant, self.target, self.fall_rate));
    }

    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome {
        self.roster.open(reporter);

        for turn in 0..self.turns {
            self.roster.retain_survivors(reporter, |runner, out| {
                !runner.is_active() || runner.survives(&mut *rng, out)
            });
            log::trace!("turn {} done, {} left", turn + 1, self.roster.len());
        }

        reporter.line("[Game Over]");

        // Anyone still running never made it.
        self.roster.retain_survivors(reporter, |runner, _| !runner.is_active());

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
