//! Set scoring: games to six by two, tie-break at six-all

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SetRules;
use crate::error::{MatchError, Result};
use crate::game::{GameCounter, GameState};
use crate::player::Side;

/// Largest unit a single point completed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreEvent {
    Point,
    Game,
    Set,
    Match,
}

/// Final score of one set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub games: [u32; 2],
    /// Points of the deciding tie-break, if the set went to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tie_break: Option<[u32; 2]>,
}

impl SetScore {
    pub fn winner(&self) -> Side {
        if self.games[0] > self.games[1] {
            Side::First
        } else {
            Side::Second
        }
    }
}

impl fmt::Display for SetScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.games[0], self.games[1])?;
        if let Some([a, b]) = self.tie_break {
            write!(f, "({}-{})", a, b)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct SetCounter {
    rules: SetRules,
    // advantage sets have no upper bound
    games: [u32; 2],
    current: GameCounter,
    tie_break: Option<[u32; 2]>,
    winner: Option<Side>,
}

impl SetCounter {
    pub fn new(rules: SetRules) -> Self {
        Self {
            rules,
            games: [0, 0],
            current: GameCounter::regular(),
            tie_break: None,
            winner: None,
        }
    }

    /// Route a point into the current game, rolling over to the next
    /// game (or ending the set) when it completes
    pub fn score(&mut self, side: Side) -> Result<ScoreEvent> {
        if self.is_ended() {
            return Err(MatchError::InvalidState("cannot score a finished set"));
        }

        let game_winner = match self.current.score(side)? {
            GameState::Won(winner) => winner,
            _ => return Ok(ScoreEvent::Point),
        };

        let was_tie_break = self.current.is_tie_break();
        if was_tie_break {
            self.tie_break = Some(self.current.points());
        }
        self.games[game_winner.index()] += 1;

        if was_tie_break || self.leads_by_two(game_winner) {
            self.winner = Some(game_winner);
            return Ok(ScoreEvent::Set);
        }

        self.current = self.next_game();
        Ok(ScoreEvent::Game)
    }

    fn leads_by_two(&self, side: Side) -> bool {
        let mine = self.games[side.index()];
        let theirs = self.games[side.opponent().index()];
        mine >= u32::from(self.rules.games_to_win) && mine > theirs && mine - theirs >= 2
    }

    fn next_game(&self) -> GameCounter {
        let target = u32::from(self.rules.games_to_win);
        match self.rules.tie_break_target() {
            Some(points) if self.games == [target, target] => GameCounter::tie_break(points),
            _ => GameCounter::regular(),
        }
    }

    pub fn is_ended(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn games(&self) -> [u32; 2] {
        self.games
    }

    /// The game in progress (or the deciding game once the set is over)
    pub fn current_game(&self) -> &GameCounter {
        &self.current
    }

    pub fn in_tie_break(&self) -> bool {
        self.current.is_tie_break() && !self.current.is_ended()
    }

    pub fn set_score(&self) -> SetScore {
        SetScore {
            games: self.games,
            tie_break: self.tie_break,
        }
    }
}
