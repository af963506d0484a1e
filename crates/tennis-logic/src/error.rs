//! Error taxonomy for the scoring engine and point model

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// Strength outside the inclusive range [0, 100]
    #[error("strength {value} is outside [0, 100]")]
    InvalidStrength { value: u32 },

    /// Operation attempted on a counter that is already decided
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// Point attributed to a player who is not part of the match
    #[error("player {name:?} is not part of this match")]
    UnknownPlayer { name: String },

    /// Safety bound on the orchestrator loop
    #[error("match exceeded {limit} points without a winner")]
    PointLimitExceeded { limit: u32 },

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl MatchError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        MatchError::Config { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
