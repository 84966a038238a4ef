//! WASM bindings for the exovet evaluation pipeline.
//!
//! This crate provides JavaScript/TypeScript bindings for the candidate
//! pipeline using `wasm-bindgen` and `serde-wasm-bindgen` for seamless type
//! conversion. The browser view layer drives an [`engine::Engine`] instance
//! and calls the pure scorers directly for live atmosphere exploration.

use wasm_bindgen::prelude::*;

mod engine;
mod explore;

pub use engine::Engine;

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}
