//! Error types for the configuration and driver boundary.
//!
//! Round algorithms themselves never fail: too few players or a drawn tug of
//! war are outcomes, reported through `RoundOutcome`.

use std::path::PathBuf;

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors building a tournament.
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error("a tournament needs at least one round")]
    NoRounds,

    #[error("a tournament needs at least one entrant")]
    NoEntrants,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
