//! Point outcome models
//!
//! A model turns two strengths into the probability that the first
//! player wins the next point. Drawing the actual outcome is shared
//! by every model and consumes exactly one value from the injected RNG.

use rand::Rng;

use crate::error::Result;
use crate::player::{Player, Strength};

/// Decides who wins a single point
pub trait PointModel {
    /// Probability in [0, 1] that the first player wins the point
    fn win_probability(&self, first: Strength, second: Strength) -> f64;

    /// Pick the winner of the next point
    ///
    /// Strengths are re-validated here so direct callers cannot sneak
    /// out-of-range values past configuration. Returns one of the two
    /// supplied players, never anything else.
    fn decide_point<'a, R: Rng + ?Sized>(
        &self,
        first: &'a Player,
        first_strength: u32,
        second: &'a Player,
        second_strength: u32,
        rng: &mut R,
    ) -> Result<&'a Player> {
        let p = self.win_probability(
            Strength::new(first_strength)?,
            Strength::new(second_strength)?,
        );
        let r: f64 = rng.gen();

        Ok(if r < p { first } else { second })
    }
}

/// Strength-weighted model: `p = s1 / (s1 + s2)`
///
/// Two zero strengths play a coin flip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrengthWeighted;

impl PointModel for StrengthWeighted {
    fn win_probability(&self, first: Strength, second: Strength) -> f64 {
        let total = first.value() + second.value();
        if total == 0 {
            return 0.5;
        }
        first.value() as f64 / total as f64
    }
}
