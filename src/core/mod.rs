//! Core engine types: entrants, random sources, narration sinks, configuration.
//!
//! This module contains the building blocks shared by every game. Individual
//! games reinterpret an `Entrant`'s abilities in their own participant variant.

pub mod entrant;
pub mod rng;
pub mod report;
pub mod config;
pub mod error;

pub use entrant::Entrant;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource, DEFAULT_ABILITY_RANGE};
pub use report::{BufferReporter, ConsoleReporter, LogReporter, NullReporter, Reporter};
pub use config::{RoundConfig, TournamentConfig};
pub use error::{ConfigError, TournamentError};
