//! Match scoring and the `ScoreSystem` contract the orchestrator drives

use serde::Serialize;

use crate::config::{MatchFormat, Validate};
use crate::error::{MatchError, Result};
use crate::player::{Player, Side};
use crate::set::{ScoreEvent, SetCounter, SetScore};

/// Scoring capability the orchestrator depends on
///
/// `winner` and `result` are `None` until the match is decided; that is
/// the "no winner yet" signal, not an error. Calling `score` after
/// `is_ended` returns true is rejected with `InvalidState`.
pub trait ScoreSystem {
    fn score(&mut self, player: &Player) -> Result<ScoreEvent>;
    fn is_ended(&self) -> bool;
    fn winner(&self) -> Option<&Player>;
    fn result(&self) -> Option<&MatchResult>;
    /// Completed sets, oldest first
    fn completed_sets(&self) -> &[SetScore];
}

/// Outcome of a decided match
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchResult {
    pub winner: Player,
    pub players: [Player; 2],
    pub sets: Vec<SetScore>,
    pub sets_won: [u8; 2],
    pub points_won: [u32; 2],
    /// Winner of every point, in order
    pub point_log: Vec<Side>,
}

impl MatchResult {
    pub fn total_points(&self) -> u32 {
        self.points_won[0] + self.points_won[1]
    }

    /// Scoreline from the first player's perspective, e.g. "6-4 6-7(5-7) 7-5"
    pub fn scoreline(&self) -> String {
        self.sets
            .iter()
            .map(SetScore::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Standard tennis scoring: games, sets and a configured set majority
#[derive(Clone, Debug)]
pub struct MatchCounter {
    players: [Player; 2],
    format: MatchFormat,
    sets_won: [u8; 2],
    current: SetCounter,
    completed: Vec<SetScore>,
    points_won: [u32; 2],
    point_log: Vec<Side>,
    result: Option<MatchResult>,
}

impl MatchCounter {
    pub fn new(first: Player, second: Player, format: MatchFormat) -> Result<Self> {
        format.validate()?;
        if first == second {
            return Err(MatchError::config(format!(
                "{} cannot play against themselves",
                first
            )));
        }

        Ok(Self {
            players: [first, second],
            format,
            sets_won: [0, 0],
            current: SetCounter::new(format.rules_for([0, 0])),
            completed: Vec::with_capacity(format.max_sets() as usize),
            points_won: [0, 0],
            point_log: Vec::new(),
            result: None,
        })
    }

    /// Resolve a player to its side by identity
    pub fn side_of(&self, player: &Player) -> Result<Side> {
        if *player == self.players[0] {
            Ok(Side::First)
        } else if *player == self.players[1] {
            Ok(Side::Second)
        } else {
            Err(MatchError::UnknownPlayer {
                name: player.name().to_string(),
            })
        }
    }

    /// Record a point for `side`
    pub fn score_side(&mut self, side: Side) -> Result<ScoreEvent> {
        if self.result.is_some() {
            return Err(MatchError::InvalidState("cannot score a finished match"));
        }

        let event = self.current.score(side)?;
        self.points_won[side.index()] += 1;
        self.point_log.push(side);

        if event != ScoreEvent::Set {
            return Ok(event);
        }

        // the point that closes a set is won by the set winner
        self.completed.push(self.current.set_score());
        self.sets_won[side.index()] += 1;

        if self.sets_won[side.index()] >= self.format.sets_to_win {
            self.result = Some(self.build_result(side));
            return Ok(ScoreEvent::Match);
        }

        self.current = SetCounter::new(self.format.rules_for(self.sets_won));
        Ok(ScoreEvent::Set)
    }

    fn build_result(&self, winner: Side) -> MatchResult {
        MatchResult {
            winner: self.players[winner.index()].clone(),
            players: self.players.clone(),
            sets: self.completed.clone(),
            sets_won: self.sets_won,
            points_won: self.points_won,
            point_log: self.point_log.clone(),
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn format(&self) -> &MatchFormat {
        &self.format
    }

    pub fn sets_won(&self) -> [u8; 2] {
        self.sets_won
    }

    /// Set in progress (or the deciding set once the match is over)
    pub fn current_set(&self) -> &SetCounter {
        &self.current
    }
}

impl ScoreSystem for MatchCounter {
    fn score(&mut self, player: &Player) -> Result<ScoreEvent> {
        let side = self.side_of(player)?;
        self.score_side(side)
    }

    fn is_ended(&self) -> bool {
        self.result.is_some()
    }

    fn winner(&self) -> Option<&Player> {
        self.result.as_ref().map(|r| &r.winner)
    }

    fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    fn completed_sets(&self) -> &[SetScore] {
        &self.completed
    }
}

/// Build the scoring implementation for a format
pub fn build_score_system(
    first: Player,
    second: Player,
    format: MatchFormat,
) -> Result<Box<dyn ScoreSystem>> {
    Ok(Box::new(MatchCounter::new(first, second, format)?))
}
