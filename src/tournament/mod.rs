//! Tournament driver.
//!
//! Runs rounds strictly in order and threads the survivors of one round into
//! the next as value copies. Nothing is shared between rounds: each round
//! builds its own participants from the entrants it is handed.
//!
//! ## Example
//!
//! ```
//! use rust_rounds::core::{GameRng, NullReporter, RoundConfig};
//! use rust_rounds::tournament::Tournament;
//!
//! let mut tournament = Tournament::builder()
//!     .entrants(40)
//!     .standard_rounds(&RoundConfig::default())
//!     .build()
//!     .unwrap();
//!
//! let mut rng = GameRng::new(42);
//! let report = tournament.run(&mut rng, &mut NullReporter);
//! assert_eq!(report.rounds.len(), 8);
//! assert!(report.finalists.len() <= 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Entrant, GameRng, RandomSource, Reporter, RoundConfig, TournamentConfig, TournamentError};
use crate::rounds::{standard_rounds, Round, RoundSummary};

/// Header line of the summary table.
pub const SUMMARY_BANNER: &str = "================ Game Summary ================";

/// Column header of the summary table.
pub const SUMMARY_COLUMNS: &str = "| Game | Total | Survivors | Deaths | Death Rate | Notes |";

/// Everything a finished tournament produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Seed of the random source, when it had one.
    pub seed: Option<u64>,
    /// One row per round, in play order.
    pub rounds: Vec<RoundSummary>,
    /// Winner of the last round that crowned one.
    pub champion: Option<Entrant>,
    /// Entrants left after the last round.
    pub finalists: Vec<Entrant>,
}

/// Ordered rounds plus a starting field size.
pub struct Tournament {
    entrants: u32,
    rounds: Vec<Box<dyn Round>>,
}

impl std::fmt::Debug for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tournament")
            .field("entrants", &self.entrants)
            .field("rounds", &self.rounds.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for creating a Tournament.
#[derive(Default)]
pub struct TournamentBuilder {
    entrants: u32,
    rounds: Vec<Box<dyn Round>>,
}

impl TournamentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entrants created at the start.
    pub fn entrants(mut self, count: u32) -> Self {
        self.entrants = count;
        self
    }

    /// Append one round.
    pub fn round(mut self, round: Box<dyn Round>) -> Self {
        self.rounds.push(round);
        self
    }

    /// Append the eight standard games.
    pub fn standard_rounds(mut self, config: &RoundConfig) -> Self {
        self.rounds.extend(standard_rounds(config));
        self
    }

    /// Field size and standard games from a validated config.
    pub fn from_config(config: &TournamentConfig) -> Result<Self, TournamentError> {
        config.validate()?;
        Ok(Self::new()
            .entrants(config.entrants)
            .standard_rounds(&config.rounds))
    }

    pub fn build(self) -> Result<Tournament, TournamentError> {
        if self.entrants == 0 {
            return Err(TournamentError::NoEntrants);
        }
        if self.rounds.is_empty() {
            return Err(TournamentError::NoRounds);
        }
        Ok(Tournament {
            entrants: self.entrants,
            rounds: self.rounds,
        })
    }
}

impl Tournament {
    pub fn builder() -> TournamentBuilder {
        TournamentBuilder::new()
    }

    /// Build the standard tournament and its seeded RNG from a config.
    ///
    /// A config without a seed is seeded from the system clock.
    pub fn from_config(config: &TournamentConfig) -> Result<(Self, GameRng), TournamentError> {
        let tournament = TournamentBuilder::from_config(config)?.build()?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        let rng = GameRng::with_ability_range(seed, config.ability_min, config.ability_max);
        Ok((tournament, rng))
    }

    /// Rounds in play order.
    pub fn rounds(&self) -> &[Box<dyn Round>] {
        &self.rounds
    }

    /// Create a fresh field and run every round in order.
    pub fn run(&mut self, rng: &mut dyn RandomSource, reporter: &mut dyn Reporter) -> TournamentReport {
        let field = Entrant::field(self.entrants, rng);
        self.run_with(field, rng, reporter)
    }

    /// Run every round in order starting from an explicit field.
    pub fn run_with(
        &mut self,
        field: Vec<Entrant>,
        rng: &mut dyn RandomSource,
        reporter: &mut dyn Reporter,
    ) -> TournamentReport {
        log::debug!("tournament starting with {} entrants", field.len());
        let mut current = field;

        for round in &mut self.rounds {
            for entrant in &current {
                round.join(entrant);
            }
            let outcome = round.play(rng, reporter);
            log::debug!("{} ended: {:?}", round.name(), outcome);
            current = round.survivors();
        }

        self.print_summary(reporter);

        TournamentReport {
            seed: None,
            rounds: self.rounds.iter().map(|r| r.summary()).collect(),
            champion: self.rounds.iter().rev().find_map(|r| r.winner()),
            finalists: current,
        }
    }

    /// Write the summary table.
    pub fn print_summary(&self, reporter: &mut dyn Reporter) {
        reporter.blank();
        reporter.line(SUMMARY_BANNER);
        reporter.line(SUMMARY_COLUMNS);
        reporter.line("---------------------------------------------");
        for round in &self.rounds {
            round.print_summary(reporter);
        }
    }
}

/// Run a standard tournament described by `config`.
///
/// The report records the seed that was used, so the run can be repeated.
pub fn run_configured(config: &TournamentConfig, reporter: &mut dyn Reporter) -> Result<TournamentReport, TournamentError> {
    let (mut tournament, mut rng) = Tournament::from_config(config)?;
    let mut report = tournament.run(&mut rng, reporter);
    report.seed = Some(rng.seed());
    Ok(report)
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
