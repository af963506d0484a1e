//! Single-game scoring: 0/15/30/40, deuce and advantage, plus tie-break games

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::player::Side;

/// Where a game stands after the latest point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Deuce,
    Advantage(Side),
    Won(Side),
}

/// Call for one side in a regular game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointScore {
    Love,
    Fifteen,
    Thirty,
    Forty,
}

impl PointScore {
    fn from_points(points: u32) -> PointScore {
        match points {
            0 => PointScore::Love,
            1 => PointScore::Fifteen,
            2 => PointScore::Thirty,
            _ => PointScore::Forty,
        }
    }
}

impl fmt::Display for PointScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let call = match self {
            PointScore::Love => "0",
            PointScore::Fifteen => "15",
            PointScore::Thirty => "30",
            PointScore::Forty => "40",
        };
        f.write_str(call)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GameKind {
    Regular,
    TieBreak { target: u32 },
}

/// Points of a single game
///
/// Regular games walk 0 → 15 → 30 → 40 and resolve 40-40 through
/// deuce and advantage. Tie-break games count plain points to a
/// target with a two-point margin and never enter deuce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameCounter {
    kind: GameKind,
    points: [u32; 2],
    state: GameState,
}

impl GameCounter {
    pub fn regular() -> Self {
        Self::with_kind(GameKind::Regular)
    }

    /// Tie-break game won at `target` points with a margin of two
    pub fn tie_break(target: u8) -> Self {
        Self::with_kind(GameKind::TieBreak { target: target as u32 })
    }

    fn with_kind(kind: GameKind) -> Self {
        Self {
            kind,
            points: [0, 0],
            state: GameState::Playing,
        }
    }

    /// Record a point for `side` and return the resulting state
    pub fn score(&mut self, side: Side) -> Result<GameState> {
        if self.is_ended() {
            return Err(MatchError::InvalidState("cannot score a finished game"));
        }

        self.points[side.index()] += 1;
        self.state = match self.kind {
            GameKind::Regular => self.next_regular_state(side),
            GameKind::TieBreak { target } => self.next_tie_break_state(side, target),
        };

        Ok(self.state)
    }

    fn next_regular_state(&self, side: Side) -> GameState {
        match self.state {
            GameState::Deuce => GameState::Advantage(side),
            GameState::Advantage(leader) if leader == side => GameState::Won(side),
            GameState::Advantage(_) => GameState::Deuce,
            GameState::Playing => {
                let mine = self.points[side.index()];
                let theirs = self.points[side.opponent().index()];
                if mine >= 4 && theirs <= 2 {
                    GameState::Won(side)
                } else if mine == 3 && theirs == 3 {
                    GameState::Deuce
                } else {
                    GameState::Playing
                }
            }
            GameState::Won(winner) => GameState::Won(winner),
        }
    }

    fn next_tie_break_state(&self, side: Side, target: u32) -> GameState {
        let mine = self.points[side.index()];
        let theirs = self.points[side.opponent().index()];
        if mine >= target && mine > theirs && mine - theirs >= 2 {
            GameState::Won(side)
        } else {
            GameState::Playing
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.state, GameState::Won(_))
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            GameState::Won(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_tie_break(&self) -> bool {
        matches!(self.kind, GameKind::TieBreak { .. })
    }

    /// Raw points won by each side in this game
    pub fn points(&self) -> [u32; 2] {
        self.points
    }

    /// Conventional calls while a regular game is below deuce
    pub fn point_scores(&self) -> Option<[PointScore; 2]> {
        match (self.kind, self.state) {
            (GameKind::Regular, GameState::Playing) => Some([
                PointScore::from_points(self.points[0]),
                PointScore::from_points(self.points[1]),
            ]),
            _ => None,
        }
    }
}

impl Default for GameCounter {
    fn default() -> Self {
        Self::regular()
    }
}

impl fmt::Display for GameCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            GameState::Won(side) => write!(f, "Game {}", side),
            GameState::Deuce => f.write_str("Deuce"),
            GameState::Advantage(side) => write!(f, "Advantage {}", side),
            GameState::Playing => match self.point_scores() {
                Some([a, b]) => write!(f, "{}-{}", a, b),
                None => write!(f, "{}-{}", self.points[0], self.points[1]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const P1: Side = Side::First;
    const P2: Side = Side::Second;

    fn play(game: &mut GameCounter, points: &[Side]) -> Vec<GameState> {
        points.iter().map(|s| game.score(*s).unwrap()).collect()
    }

    #[test]
    fn test_love_game_skips_deuce() {
        let mut game = GameCounter::regular();
        let states = play(&mut game, &[P1, P1, P1, P1]);

        assert_eq!(states.last(), Some(&GameState::Won(P1)));
        assert!(!states.contains(&GameState::Deuce));
        assert_eq!(game.winner(), Some(P1));
    }

    #[test]
    fn test_deuce_advantage_then_win() {
        let mut game = GameCounter::regular();
        let states = play(&mut game, &[P1, P2, P1, P2, P1, P2, P2]);

        assert_eq!(game.state(), GameState::Won(P2));
        assert_eq!(states.iter().filter(|s| **s == GameState::Deuce).count(), 1);
        assert_eq!(
            states.iter().filter(|s| **s == GameState::Advantage(P2)).count(),
            1
        );
        assert!(!states.contains(&GameState::Advantage(P1)));
    }

    #[test]
    fn test_advantage_lost_returns_to_deuce() {
        let mut game = GameCounter::regular();
        play(&mut game, &[P1, P1, P1, P2, P2, P2]);
        assert_eq!(game.state(), GameState::Deuce);

        assert_eq!(game.score(P1).unwrap(), GameState::Advantage(P1));
        assert_eq!(game.score(P2).unwrap(), GameState::Deuce);
        assert_eq!(game.score(P2).unwrap(), GameState::Advantage(P2));
        assert_eq!(game.score(P2).unwrap(), GameState::Won(P2));
    }

    #[test]
    fn test_forty_thirty_wins_directly() {
        let mut game = GameCounter::regular();
        play(&mut game, &[P1, P2, P1, P2, P1]);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.to_string(), "40-30");

        assert_eq!(game.score(P1).unwrap(), GameState::Won(P1));
    }

    #[test]
    fn test_scoring_finished_game_rejected() {
        let mut game = GameCounter::regular();
        play(&mut game, &[P2, P2, P2, P2]);

        let err = game.score(P1).unwrap_err();
        assert_eq!(err, MatchError::InvalidState("cannot score a finished game"));
        assert_eq!(game.points(), [0, 4]);
    }

    #[test]
    fn test_winner_absent_while_playing() {
        let mut game = GameCounter::regular();
        assert_eq!(game.winner(), None);
        play(&mut game, &[P1, P1, P1]);
        assert!(!game.is_ended());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_calls() {
        let mut game = GameCounter::regular();
        assert_eq!(game.to_string(), "0-0");
        game.score(P1).unwrap();
        assert_eq!(game.to_string(), "15-0");
        play(&mut game, &[P2, P2, P1, P1, P2]);
        assert_eq!(game.to_string(), "Deuce");
        game.score(P2).unwrap();
        assert_eq!(game.to_string(), "Advantage Second");
        game.score(P2).unwrap();
        assert_eq!(game.to_string(), "Game Second");
    }

    #[test]
    fn test_tie_break_needs_margin_of_two() {
        let mut game = GameCounter::tie_break(7);
        for _ in 0..6 {
            game.score(P1).unwrap();
            game.score(P2).unwrap();
        }
        assert_eq!(game.points(), [6, 6]);

        assert_eq!(game.score(P1).unwrap(), GameState::Playing);
        assert_eq!(game.score(P2).unwrap(), GameState::Playing);
        assert_eq!(game.score(P2).unwrap(), GameState::Playing);
        assert_eq!(game.to_string(), "7-8");
        assert_eq!(game.score(P2).unwrap(), GameState::Won(P2));
        assert_eq!(game.points(), [7, 9]);
    }

    #[test]
    fn test_tie_break_seven_love() {
        let mut game = GameCounter::tie_break(7);
        let states = play(&mut game, &[P1; 7]);
        assert_eq!(states[5], GameState::Playing);
        assert_eq!(states[6], GameState::Won(P1));
        assert!(game.is_tie_break());
        assert_eq!(game.point_scores(), None);
    }

    fn side_strategy() -> impl Strategy<Value = Side> {
        prop_oneof![Just(Side::First), Just(Side::Second)]
    }

    proptest! {
        #[test]
        fn prop_regular_game_invariants(points in prop::collection::vec(side_strategy(), 0..200)) {
            let mut game = GameCounter::regular();
            for side in points {
                if game.is_ended() {
                    prop_assert!(game.score(side).is_err());
                    break;
                }
                let state = game.score(side).unwrap();
                let [a, b] = game.points();
                match state {
                    GameState::Won(w) => {
                        let (mine, theirs) = if w == Side::First { (a, b) } else { (b, a) };
                        prop_assert!(mine >= 4 && mine >= theirs + 2);
                    }
                    GameState::Advantage(leader) => {
                        let (mine, theirs) = if leader == Side::First { (a, b) } else { (b, a) };
                        prop_assert_eq!(mine, theirs + 1);
                        prop_assert!(theirs >= 3);
                    }
                    GameState::Deuce => {
                        prop_assert_eq!(a, b);
                        prop_assert!(a >= 3);
                    }
                    GameState::Playing => prop_assert!(a < 4 && b < 4 && !(a == 3 && b == 3)),
                }
            }
        }

        #[test]
        fn prop_tie_break_invariants(points in prop::collection::vec(side_strategy(), 0..100)) {
            let mut game = GameCounter::tie_break(7);
            for side in points {
                if game.is_ended() {
                    break;
                }
                let state = game.score(side).unwrap();
                prop_assert!(!matches!(state, GameState::Deuce | GameState::Advantage(_)));
                if let GameState::Won(w) = state {
                    let [a, b] = game.points();
                    let (mine, theirs) = if w == Side::First { (a, b) } else { (b, a) };
                    prop_assert!(mine >= 7 && mine >= theirs + 2);
                    prop_assert!(mine == 7 || mine == theirs + 2);
                }
            }
        }
    }
}
