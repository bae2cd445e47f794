//! Red Light Green Light runner.

use crate::core::{Entrant, RandomSource, Reporter};

use super::Participant;

/// Where a runner stands in the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// Still on the field.
    Running,
    /// Reached the target distance.
    Escaped,
    /// Fell before reaching it.
    Fell,
}

/// Participant that advances a distance each turn and may fall.
#[derive(Clone, Debug)]
pub struct Runner {
    entrant: Entrant,
    distance: u32,
    state: RunState,
    target: u32,
    fall_rate: f64,
}

impl Runner {
    /// Create a runner that must cover `target` and falls with `fall_rate`.
    #[must_use]
    pub fn new(entrant: Entrant, target: u32, fall_rate: f64) -> Self {
        Self {
            entrant,
            distance: 0,
            state: RunState::Running,
            target,
            fall_rate,
        }
    }

    /// Distance covered per turn: `agility + number + floor(agility * fearlessness / 100)`.
    #[must_use]
    pub fn stride(&self) -> u32 {
        let e = &self.entrant;
        e.agility
            .saturating_add(e.number)
            .saturating_add(e.agility.saturating_mul(e.fearlessness) / 100)
    }

    /// Accumulated distance.
    #[must_use]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }
}

impl Participant for Runner {
    fn entrant(&self) -> &Entrant {
        &self.entrant
    }

    fn death_note(&self) -> &'static str {
        match self.state {
            RunState::Running => "is still on the ground and died.",
            RunState::Escaped | RunState::Fell => "fell down and died.",
        }
    }

    fn survives(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> bool {
        self.distance = self.distance.saturating_add(self.stride());
        log::trace!("player {} at distance {}", self.entrant.number, self.distance);

        if self.distance >= self.target {
            self.state = RunState::Escaped;
            reporter.line(&format!(
                "Player #{} escaped! (distance: {})",
                self.entrant.number, self.distance
            ));
            return true;
        }

        if rng.next_probability() < self.fall_rate {
            self.state = RunState::Fell;
            return false;
        }

        true
    }

    fn is_active(&self) -> bool {
        self.state == RunState::Running
    }
}
