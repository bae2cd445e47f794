//! Physical Asia Ship task worker.

use crate::core::{Entrant, RandomSource, Reporter};

use super::Participant;

/// Participant that completes a timed solo task each pass.
#[derive(Clone, Debug)]
pub struct ShipWorker {
    entrant: Entrant,
    base_time: f64,
}

impl ShipWorker {
    #[must_use]
    pub fn new(entrant: Entrant, base_time: f64) -> Self {
        Self { entrant, base_time }
    }

    /// Ability factor in `[0, 2/3]` for the default range: `(agility * 0.6 + fearlessness * 0.4) / 150`.
    #[must_use]
    pub fn ability_factor(&self) -> f64 {
        (f64::from(self.entrant.agility) * 0.6 + f64::from(self.entrant.fearlessness) * 0.4) / 150.0
    }

    /// Completion time for a given random factor in `[0, 1)`.
    #[must_use]
    pub fn time_for(&self, random_factor: f64) -> f64 {
        self.base_time * (1.1 - self.ability_factor()) * (0.85 + random_factor * 0.3)
    }

    /// Perform the task once, drawing one probability for noise.
    pub fn do_task(&self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> f64 {
        let time = self.time_for(rng.next_probability());
        reporter.line(&format!("Player #{} task time: {:.3}s", self.entrant.number, time));
        time
    }
}

impl Participant for ShipWorker {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        "lost at the ship task."
    }
}
