//! Tennis Logic
//!
//! Scoring engine and point model for simulated singles matches.
//! Points feed games, games feed sets, sets decide the match.
//! This crate is compiled to:
//! - Native (for simulation hosts)
//! - WASM (for frontend match replay)

mod config;
mod error;
mod game;
mod model;
mod player;
mod random;
mod runner;
mod scorer;
mod set;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{MatchFormat, MatchSetup, PlayerConfig, SetRules, Validate};
pub use error::{MatchError, Result};
pub use game::{GameCounter, GameState, PointScore};
pub use model::{PointModel, StrengthWeighted};
pub use player::{Player, PlayerId, Side, Strength};
pub use random::SeededRng;
pub use runner::{run_match, Entrant, Match, DEFAULT_MAX_POINTS};
pub use scorer::{build_score_system, MatchCounter, MatchResult, ScoreSystem};
pub use set::{ScoreEvent, SetCounter, SetScore};
