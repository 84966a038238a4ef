//! WASM bindings for the pure scorers.
//!
//! The live atmosphere-exploration panel calls these directly; they are the
//! same functions the pipeline's refinement stage uses.

use wasm_bindgen::prelude::*;

use catalog::AtmosphereComposition;

use crate::{from_js, to_js};

/// Score an atmospheric composition's similarity to Earth's, in [0, 1].
///
/// # Arguments
/// * `composition` - abundances object with `h2o`, `o2`, `co2`, `o3`,
///   `ch4`, `co`, `so2`, `nh3` fields
#[wasm_bindgen(js_name = atmosphericSimilarity)]
pub fn atmospheric_similarity(composition: JsValue) -> Result<f64, JsError> {
    let composition: AtmosphereComposition = from_js(composition)?;
    Ok(similarity::atmospheric_similarity(&composition))
}

/// The Earth reference composition.
#[wasm_bindgen(js_name = earthComposition)]
pub fn earth_composition() -> Result<JsValue, JsError> {
    to_js(&AtmosphereComposition::earth())
}

/// Compute the Earth Similarity Index for a radius/flux pair.
///
/// Pass `undefined` for an unmeasured observable; it defaults to the Earth
/// reference value inside the scorer.
///
/// # Arguments
/// * `radius_earth` - planet radius (R⊕)
/// * `insolation_flux` - incident flux (S⊕)
#[wasm_bindgen(js_name = esiScore)]
pub fn esi_score(radius_earth: Option<f64>, insolation_flux: Option<f64>) -> Result<JsValue, JsError> {
    to_js(&similarity::esi_score(radius_earth, insolation_flux))
}
