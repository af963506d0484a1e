//! Match execution engine

use rand::Rng;

use crate::config::{MatchFormat, MatchSetup};
use crate::error::{MatchError, Result};
use crate::model::{PointModel, StrengthWeighted};
use crate::player::{Player, Strength};
use crate::random::SeededRng;
use crate::scorer::{build_score_system, MatchResult, ScoreSystem};
use crate::set::ScoreEvent;

/// Upper bound on points per match before the run is abandoned
///
/// A best-of-five with an advantage final set between equal players
/// averages a few hundred points, so hitting this means the model or
/// scorer can never finish.
pub const DEFAULT_MAX_POINTS: u32 = 100_000;

/// A player together with the strength they bring to this match
#[derive(Clone, Debug, PartialEq)]
pub struct Entrant {
    pub player: Player,
    pub strength: Strength,
}

impl Entrant {
    pub fn new(player: Player, strength: Strength) -> Self {
        Self { player, strength }
    }
}

/// Drives one match: model picks each point, scorer keeps the score
#[derive(Clone, Debug)]
pub struct Match<M = StrengthWeighted> {
    entrants: [Entrant; 2],
    format: MatchFormat,
    model: M,
    max_points: u32,
}

impl Match<StrengthWeighted> {
    pub fn new(first: Entrant, second: Entrant, format: MatchFormat) -> Result<Self> {
        Match::with_model(first, second, format, StrengthWeighted)
    }
}

impl<M: PointModel> Match<M> {
    pub fn with_model(first: Entrant, second: Entrant, format: MatchFormat, model: M) -> Result<Self> {
        if first.player == second.player {
            return Err(MatchError::config(format!(
                "{} cannot play against themselves",
                first.player
            )));
        }
        Ok(Self {
            entrants: [first, second],
            format,
            model,
            max_points: DEFAULT_MAX_POINTS,
        })
    }

    pub fn with_max_points(mut self, max_points: u32) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn entrants(&self) -> &[Entrant; 2] {
        &self.entrants
    }

    pub fn format(&self) -> &MatchFormat {
        &self.format
    }

    /// Play the match with a fresh scorer built from the configured format
    pub fn play<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<MatchResult> {
        let [first, second] = &self.entrants;
        let mut scorer = build_score_system(first.player.clone(), second.player.clone(), self.format)?;
        self.play_with(scorer.as_mut(), rng)
    }

    /// Play until `scorer` reports the match decided
    ///
    /// Counter errors are returned unchanged. Exceeding `max_points`
    /// aborts with `PointLimitExceeded`.
    pub fn play_with<R: Rng + ?Sized>(
        &self,
        scorer: &mut dyn ScoreSystem,
        rng: &mut R,
    ) -> Result<MatchResult> {
        let [first, second] = &self.entrants;
        let mut played = 0u32;

        while !scorer.is_ended() {
            if played >= self.max_points {
                tracing::warn!(limit = self.max_points, "match abandoned at point limit");
                return Err(MatchError::PointLimitExceeded {
                    limit: self.max_points,
                });
            }

            let winner = self.model.decide_point(
                &first.player,
                first.strength.value(),
                &second.player,
                second.strength.value(),
                rng,
            )?;
            let event = scorer.score(winner)?;
            played += 1;

            match event {
                ScoreEvent::Point => {}
                ScoreEvent::Game => tracing::trace!(point = played, game_winner = %winner, "game"),
                ScoreEvent::Set => {
                    if let Some(set) = scorer.completed_sets().last() {
                        tracing::debug!(point = played, set_winner = %winner, score = %set, "set");
                    }
                }
                ScoreEvent::Match => tracing::info!(
                    winner = %winner,
                    points = played,
                    "match decided"
                ),
            }
        }

        scorer
            .result()
            .cloned()
            .ok_or(MatchError::InvalidState("scorer ended without a result"))
    }
}

/// Play the match described by `setup` with a deterministic RNG
///
/// The same seed and match index always replay the same points.
pub fn run_match(setup: &MatchSetup, seed: &[u8; 32], match_index: u32) -> Result<MatchResult> {
    let mut rng = SeededRng::new(seed, match_index);
    setup.build()?.play(&mut rng)
}
