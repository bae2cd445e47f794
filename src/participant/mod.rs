//! Per-game participant variants.
//!
//! Every round wraps the entrants it receives into its own variant. The
//! variants share one capability contract, `Participant`, and differ in how
//! they reinterpret agility and fearlessness:
//!
//! - `Runner`: movement with a chance to fall (Red Light Green Light)
//! - `Duelist`: rock-paper-scissors against an unseen opponent
//! - `TeamMember`, `BridgeWalker`, `MarblePlayer`, `DdakjiPlayer`: fate is
//!   decided by the round, `survives` is advisory
//! - `ShipWorker`: produces a task completion time
//! - `Fighter`: attack/defend posture in the final fight

mod runner;
mod duelist;
mod passive;
mod worker;
mod fighter;

pub use runner::{RunState, Runner};
pub use duelist::{Duelist, Hand};
pub use passive::{BridgeWalker, DdakjiPlayer, MarblePlayer, TeamMember};
pub use worker::ShipWorker;
pub use fighter::{FightOdds, Fighter, Posture};

use crate::core::{Entrant, RandomSource, Reporter};

/// Capability contract shared by every participant variant.
///
/// Only `entrant` and `death_note` are required. Variants whose fate is
/// decided at the round level keep the default `survives`, which always
/// returns `true`.
pub trait Participant {
    /// The tournament-wide record this participant was created from.
    fn entrant(&self) -> &Entrant;

    /// Trailing text of the elimination line, e.g. `"died."`.
    fn death_note(&self) -> &'static str;

    /// Decide this participant's fate for the current step.
    ///
    /// Returns `false` if the participant is eliminated by this call.
    fn survives(&mut self, _rng: &mut dyn RandomSource, _reporter: &mut dyn Reporter) -> bool {
        true
    }

    /// Still contesting the current round.
    fn is_active(&self) -> bool {
        true
    }

    /// Report why this participant died.
    fn elimination_message(&self, reporter: &mut dyn Reporter) {
        reporter.line(&format!("{} {}", self.status(), self.death_note()));
    }

    /// Report that this participant is still alive.
    fn alive_message(&self, reporter: &mut dyn Reporter) {
        reporter.line(&format!("{} is alive.", self.status()));
    }

    /// Identity and ability scalars, e.g. `Player #3(40,12)`.
    fn status(&self) -> String {
        self.entrant().to_string()
    }

    fn number(&self) -> u32 {
        self.entrant().number
    }

    fn agility(&self) -> u32 {
        self.entrant().agility
    }

    fn fearlessness(&self) -> u32 {
        self.entrant().fearlessness
    }

    fn power(&self) -> u32 {
        self.entrant().power()
    }
}
