//! Elimination rounds.
//!
//! A round owns its roster for one stage of the tournament, runs one game's
//! survival rule to completion, and reports what happened. Every game
//! implements the same `Round` contract:
//!
//! - `join`: wrap an entrant into the game's participant variant
//! - `play`: run the game from start to finish
//! - `survivors`: value copies of whoever is left, for the next round
//!
//! ## Games
//!
//! | Round | Rule |
//! |---|---|
//! | `RedLightGreenLight` | move for a fixed number of turns, fall or escape |
//! | `RockPaperScissors` | one throw each, losers die |
//! | `TugOfWar` | alternating teams, weaker team dies, ties spare everyone |
//! | `GlassBridge` | shared hidden path, a wrong step kills the walker |
//! | `Marbles` | pairs guess odd/even |
//! | `Ddakji` | pairs compare power |
//! | `ShipTask` | timed task, slowest half dies until two remain |
//! | `SquidGame` | fight until one is left |

mod roster;
mod pairing;
mod red_light;
mod rock_paper_scissors;
mod tug_of_war;
mod glass_bridge;
mod marbles;
mod ddakji;
mod ship;
mod squid_game;

pub use roster::Roster;
pub use red_light::RedLightGreenLight;
pub use rock_paper_scissors::RockPaperScissors;
pub use tug_of_war::{TeamPowers, TugOfWar};
pub use glass_bridge::GlassBridge;
pub use marbles::Marbles;
pub use ddakji::Ddakji;
pub use ship::ShipTask;
pub use squid_game::SquidGame;

use serde::{Deserialize, Serialize};

use crate::core::{Entrant, RandomSource, Reporter, RoundConfig};

/// Counters captured when a round finishes.
///
/// `survivors + deaths == initial` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    /// Participants when play started.
    pub initial: usize,
    /// Participants still in the roster.
    pub survivors: usize,
    /// Participants eliminated.
    pub deaths: usize,
    /// Steps completed out of total (Glass Bridge only).
    pub steps: Option<(usize, usize)>,
}

impl RoundStats {
    /// Percentage of the initial field that died. 0.0 for an empty field.
    #[must_use]
    pub fn death_rate(&self) -> f64 {
        if self.initial == 0 {
            0.0
        } else {
            self.deaths as f64 / self.initial as f64 * 100.0
        }
    }

    /// Percentage of the initial field that survived. 0.0 for an empty field.
    #[must_use]
    pub fn survival_rate(&self) -> f64 {
        if self.initial == 0 {
            0.0
        } else {
            self.survivors as f64 / self.initial as f64 * 100.0
        }
    }
}

/// How a round ended. None of these are errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The game ran its rule to the end.
    Completed,
    /// Nobody could be eliminated (Tug of War tie, final fight stalemate).
    Draw,
    /// Too few participants to play; the roster is unchanged.
    InsufficientPlayers { required: usize, present: usize },
}

/// One row of the tournament summary table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub name: String,
    pub initial: usize,
    pub survivors: usize,
    pub deaths: usize,
    pub death_rate: f64,
    pub winner: Option<Entrant>,
}

impl RoundSummary {
    /// Build a row from a round's stats. An unplayed round has all zeros.
    pub fn new(name: impl Into<String>, stats: Option<&RoundStats>, winner: Option<Entrant>) -> Self {
        let stats = stats.copied().unwrap_or(RoundStats {
            initial: 0,
            survivors: 0,
            deaths: 0,
            steps: None,
        });
        Self {
            name: name.into(),
            initial: stats.initial,
            survivors: stats.survivors,
            deaths: stats.deaths,
            death_rate: stats.death_rate(),
            winner,
        }
    }
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "| {} | {} | {} | {} | {:.1}% | ",
            self.name, self.initial, self.survivors, self.deaths, self.death_rate
        )?;
        match &self.winner {
            Some(winner) => write!(f, "{winner} |"),
            None => write!(f, "N/A |"),
        }
    }
}

/// Capability contract shared by every game.
pub trait Round {
    /// Display name, e.g. `"Glass Bridge"`.
    fn name(&self) -> &str;

    /// Take in one entrant, copied into this round's participant variant.
    fn join(&mut self, entrant: &Entrant);

    /// Run the game to completion.
    fn play(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> RoundOutcome;

    /// Value copies of the current roster, in roster order.
    fn survivors(&self) -> Vec<Entrant>;

    /// Counters from the last `play`, if it has run.
    fn stats(&self) -> Option<&RoundStats>;

    /// The unique survivor, for games that crown one.
    fn winner(&self) -> Option<Entrant> {
        None
    }

    /// Summary row for the final table.
    fn summary(&self) -> RoundSummary {
        RoundSummary::new(self.name(), self.stats(), self.winner())
    }

    /// Write the summary row to `reporter`.
    fn print_summary(&self, reporter: &mut dyn Reporter) {
        reporter.line(&self.summary().to_string());
    }
}

/// The eight games in tournament order.
pub fn standard_rounds(config: &RoundConfig) -> Vec<Box<dyn Round>> {
    vec![
        Box::new(RedLightGreenLight::new(config)),
        Box::new(RockPaperScissors::new()),
        Box::new(TugOfWar::new()),
        Box::new(GlassBridge::new(config)),
        Box::new(Marbles::new(config)),
        Box::new(Ddakji::new()),
        Box::new(ShipTask::new(config)),
        Box::new(SquidGame::new(config)),
    ]
}
