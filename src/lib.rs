use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro128Plus;
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod error;
mod int_set;
mod parse;
mod sample;
mod serialize;

pub use error::SetError;
pub use int_set::{IntSet, MAX_SIZE, equal};

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).expect("Couldn't initialize logger");
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgebraReport {
    pub union: IntSet,
    pub intersection: IntSet,
    pub left_difference: IntSet,
    pub right_difference: IntSet,
    pub equal: bool,
    pub left_is_subset: bool,
    pub right_is_subset: bool,
}

/// Every binary operation of `left` against `right`.
///
/// # Errors
/// When the union does not fit in [`MAX_SIZE`] members.
pub fn algebra_report(left: &IntSet, right: &IntSet) -> Result<AlgebraReport> {
    let union = left
        .try_union_with(right)
        .with_context(|| format!("Union of [{left}] and [{right}]"))?;
    Ok(AlgebraReport {
        union,
        intersection: left.intersect(right),
        left_difference: left.subtract(right),
        right_difference: right.subtract(left),
        equal: equal(left, right),
        left_is_subset: left.is_subset_of(right),
        right_is_subset: right.is_subset_of(left),
    })
}

#[wasm_bindgen]
#[allow(clippy::missing_errors_doc, clippy::needless_pass_by_value)]
pub fn set_algebra(left: JsValue, right: JsValue) -> Result<JsValue, JsValue> {
    let left: IntSet = serde_wasm_bindgen::from_value(left)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize left set: {e}")))?;
    let right: IntSet = serde_wasm_bindgen::from_value(right)
        .map_err(|e| JsValue::from_str(&format!("Failed to deserialize right set: {e}")))?;

    let report = algebra_report(&left, &right)
        .map_err(|e| JsValue::from_str(&format!("Set algebra failed: {e:#}")))?;

    serde_wasm_bindgen::to_value(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {e}")))
}

#[wasm_bindgen]
#[allow(clippy::missing_errors_doc)]
pub fn random_set(count: usize, low: i32, high: i32) -> Result<JsValue, JsValue> {
    let mut seed = [0u8; 16];
    getrandom::fill(&mut seed).map_err(|e| JsValue::from_str(&format!("RNG seed failed: {e}")))?;
    let mut rng = Xoshiro128Plus::from_seed(seed);

    let set: IntSet = sample::random_set(count, low, high, &mut rng)
        .map_err(|e| JsValue::from_str(&format!("Sampling failed: {e}")))?;

    serde_wasm_bindgen::to_value(&set)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {e}")))
}
