//! Player identity, court side and strength

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique player identity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(u64);

/// A match participant
///
/// Equality and hashing go through the [`PlayerId`] handed out at
/// construction, never the display name: two players called "Smith"
/// are still two players. Clones share the identity.
#[derive(Clone, Debug, Serialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Which of the two participants a tally belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("First"),
            Side::Second => f.write_str("Second"),
        }
    }
}

/// Skill rating in [0, 100]
///
/// Out-of-range values are rejected, never clamped. Deserialization
/// runs through the same check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Strength(u8);

impl Strength {
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(MatchError::InvalidStrength { value });
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<u32> for Strength {
    type Error = MatchError;

    fn try_from(value: u32) -> Result<Self> {
        Strength::new(value)
    }
}

impl From<Strength> for u32 {
    fn from(strength: Strength) -> u32 {
        strength.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_with_same_name_differ() {
        let a = Player::new("Smith");
        let b = Player::new("Smith");
        assert_ne!(a, b);
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_clone_keeps_identity() {
        let a = Player::new("Navratilova");
        let copy = a.clone();
        assert_eq!(a, copy);
        assert_eq!(a.id(), copy.id());
    }

    #[test]
    fn test_side_opponent_and_index() {
        assert_eq!(Side::First.opponent(), Side::Second);
        assert_eq!(Side::Second.opponent(), Side::First);
        assert_eq!(Side::First.index(), 0);
        assert_eq!(Side::Second.index(), 1);
    }

    #[test]
    fn test_strength_bounds() {
        assert_eq!(Strength::new(0).map(Strength::value), Ok(0));
        assert_eq!(Strength::new(100).map(Strength::value), Ok(100));
        assert_eq!(
            Strength::new(101),
            Err(MatchError::InvalidStrength { value: 101 })
        );
    }

    #[test]
    fn test_strength_deserialize_rejects_out_of_range() {
        let ok: Strength = serde_json::from_str("55").unwrap();
        assert_eq!(ok.value(), 55);

        let err = serde_json::from_str::<Strength>("250").unwrap_err();
        assert!(err.to_string().contains("outside [0, 100]"), "{}", err);
    }
}
