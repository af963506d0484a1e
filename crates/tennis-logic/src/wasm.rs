//! WASM bindings for frontend match replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{run_match, MatchFormat, MatchSetup, PointModel, Strength, StrengthWeighted};

/// Simulate a match with full point-by-point details
///
/// # Arguments
/// * `setup_json` - JSON serialized MatchSetup (players, strengths, optional format)
/// * `seed` - 32-byte randomness seed
/// * `match_index` - Index selecting an independent random stream
///
/// # Returns
/// JSON serialized MatchResult
#[wasm_bindgen]
pub fn simulate_match(setup_json: &str, seed: &[u8], match_index: u32) -> Result<JsValue, JsError> {
    let setup = MatchSetup::from_json_str(setup_json)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let seed_arr: [u8; 32] = seed.try_into()
        .map_err(|_| JsError::new("Seed must be exactly 32 bytes"))?;

    let result = run_match(&setup, &seed_arr, match_index)
        .map_err(|e| JsError::new(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Probability that the first player wins a single point
#[wasm_bindgen]
pub fn point_win_probability(first: u32, second: u32) -> Result<f64, JsError> {
    let first = Strength::new(first).map_err(|e| JsError::new(&e.to_string()))?;
    let second = Strength::new(second).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(StrengthWeighted.win_probability(first, second))
}

/// Default match format as JSON, for pre-filling setup forms
#[wasm_bindgen]
pub fn default_format() -> Result<String, JsError> {
    serde_json::to_string(&MatchFormat::default())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
