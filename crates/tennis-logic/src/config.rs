//! Match configuration
//!
//! Formats and entrants can be built in code or loaded from TOML/JSON:
//!
//! ```toml
//! max_points = 100000
//!
//! [first]
//! name = "Borg"
//! strength = 62
//!
//! [second]
//! name = "McEnroe"
//! strength = 58
//!
//! [format]
//! sets_to_win = 3
//!
//! [format.final_set]
//! tie_break = false
//! ```
//!
//! Omitted sections fall back to best-of-three with tie-breaks in every set.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::player::{Player, Strength};
use crate::runner::{Entrant, Match, DEFAULT_MAX_POINTS};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rules for a single set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetRules {
    /// Games needed to take the set (with a two-game margin)
    pub games_to_win: u8,
    /// Play a tie-break at `games_to_win` all; otherwise an advantage set
    pub tie_break: bool,
    pub tie_break_points: u8,
}

impl SetRules {
    pub fn advantage() -> Self {
        Self {
            tie_break: false,
            ..Self::default()
        }
    }

    /// Tie-break target, if this set has one
    pub fn tie_break_target(&self) -> Option<u8> {
        self.tie_break.then_some(self.tie_break_points)
    }
}

impl Default for SetRules {
    fn default() -> Self {
        Self {
            games_to_win: 6,
            tie_break: true,
            tie_break_points: 7,
        }
    }
}

impl Validate for SetRules {
    fn validate(&self) -> Result<()> {
        if self.games_to_win == 0 {
            return Err(MatchError::config("games_to_win must be at least 1"));
        }
        if let Some(points) = self.tie_break_target() {
            if points < 2 {
                return Err(MatchError::config(format!(
                    "tie_break_points must be at least 2, got {}",
                    points
                )));
            }
        }
        Ok(())
    }
}

/// How many sets decide the match and which rules each set follows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchFormat {
    pub sets_to_win: u8,
    pub set: SetRules,
    /// Rules for the deciding set, when both players are one set away
    pub final_set: SetRules,
}

impl MatchFormat {
    /// Best of three, tie-break in every set
    pub fn best_of_three() -> Self {
        Self {
            sets_to_win: 2,
            set: SetRules::default(),
            final_set: SetRules::default(),
        }
    }

    /// Best of five, tie-break in every set
    pub fn best_of_five() -> Self {
        Self {
            sets_to_win: 3,
            ..Self::best_of_three()
        }
    }

    /// Same format with an advantage (no tie-break) deciding set
    pub fn with_advantage_final_set(self) -> Self {
        Self {
            final_set: SetRules {
                tie_break: false,
                ..self.final_set
            },
            ..self
        }
    }

    /// Rules for the next set given the sets won so far
    pub fn rules_for(&self, sets: [u8; 2]) -> SetRules {
        let deciding = self.sets_to_win.saturating_sub(1);
        if sets == [deciding, deciding] {
            self.final_set
        } else {
            self.set
        }
    }

    pub fn max_sets(&self) -> u8 {
        self.sets_to_win.saturating_mul(2).saturating_sub(1)
    }
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self::best_of_three()
    }
}

impl Validate for MatchFormat {
    fn validate(&self) -> Result<()> {
        if self.sets_to_win == 0 {
            return Err(MatchError::config("sets_to_win must be at least 1"));
        }
        if self.sets_to_win > 64 {
            return Err(MatchError::config(format!(
                "sets_to_win {} is unreasonably large",
                self.sets_to_win
            )));
        }
        self.set.validate()?;
        self.final_set.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub strength: Strength,
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::config("player name cannot be empty"));
        }
        Ok(())
    }
}

/// Everything needed to play one match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    pub first: PlayerConfig,
    pub second: PlayerConfig,
    #[serde(default)]
    pub format: MatchFormat,
    #[serde(default = "default_max_points")]
    pub max_points: u32,
}

fn default_max_points() -> u32 {
    DEFAULT_MAX_POINTS
}

impl MatchSetup {
    pub fn new(first: PlayerConfig, second: PlayerConfig, format: MatchFormat) -> Self {
        Self {
            first,
            second,
            format,
            max_points: DEFAULT_MAX_POINTS,
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let setup: MatchSetup = toml::from_str(contents)
            .map_err(|e| MatchError::config(format!("invalid TOML setup: {}", e)))?;
        setup.validate()?;
        Ok(setup)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let setup: MatchSetup = serde_json::from_str(contents)
            .map_err(|e| MatchError::config(format!("invalid JSON setup: {}", e)))?;
        setup.validate()?;
        Ok(setup)
    }

    /// Create fresh player identities and a ready-to-play match
    pub fn build(&self) -> Result<Match> {
        self.validate()?;
        let first = Entrant::new(Player::new(self.first.name.clone()), self.first.strength);
        let second = Entrant::new(Player::new(self.second.name.clone()), self.second.strength);
        Ok(Match::new(first, second, self.format)?.with_max_points(self.max_points))
    }
}

impl Validate for MatchSetup {
    fn validate(&self) -> Result<()> {
        self.first.validate()?;
        self.second.validate()?;
        self.format.validate()?;
        if self.max_points == 0 {
            return Err(MatchError::config("max_points must be at least 1"));
        }
        Ok(())
    }
}
