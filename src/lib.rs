//! # rust-rounds
//!
//! A multi-stage elimination tournament engine.
//!
//! A field of entrants passes through a sequence of games. Each game applies
//! its own survival rule and only a shrinking subset moves on.
//!
//! ## Design Principles
//!
//! 1. **One Contract, Many Games**: Every game implements `Round`
//!    (`join`, `play`, `survivors`), every game's contestant implements
//!    `Participant`. The driver never knows which game it is running.
//!
//! 2. **Value Handoff**: Rounds own their participants outright. Survivors
//!    leave a round as plain `Entrant` copies; nothing is shared across rounds.
//!
//! 3. **Injected Randomness**: All draws go through `RandomSource`, passed in
//!    by the caller. Seed a `GameRng` for reproducible tournaments or script
//!    a `ScriptedSource` for exact tests.
//!
//! 4. **Outcomes, Not Errors**: Too few players or a tied tug of war are
//!    domain results (`RoundOutcome`). Errors only exist at the config boundary.
//!
//! ## Modules
//!
//! - `core`: Entrants, random sources, narration sinks, configuration, errors
//! - `participant`: `Participant` trait and the per-game variants
//! - `rounds`: `Round` trait, shared roster bookkeeping, the eight games
//! - `tournament`: Driver that runs rounds in order and prints the summary

pub mod core;
pub mod participant;
pub mod rounds;
pub mod tournament;

// Re-export commonly used types
pub use crate::core::{
    Entrant,
    GameRng, GameRngState, RandomSource, ScriptedSource,
    Reporter, ConsoleReporter, LogReporter, BufferReporter, NullReporter,
    RoundConfig, TournamentConfig,
    ConfigError, TournamentError,
};

pub use crate::participant::{
    Participant,
    Runner, RunState, Duelist, Hand, TeamMember, BridgeWalker,
    MarblePlayer, DdakjiPlayer, ShipWorker, Fighter, FightOdds, Posture,
};

pub use crate::rounds::{
    Round, RoundOutcome, RoundStats, RoundSummary, Roster, standard_rounds,
    RedLightGreenLight, RockPaperScissors, TugOfWar, TeamPowers, GlassBridge,
    Marbles, Ddakji, ShipTask, SquidGame,
};

pub use crate::tournament::{Tournament, TournamentBuilder, TournamentReport, run_configured};
