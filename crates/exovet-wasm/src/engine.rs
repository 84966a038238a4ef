//! WASM bindings for the pipeline engine.

use wasm_bindgen::prelude::*;

use catalog::Catalog;
use pipeline::{SortKey, SortOrder, ViewKind};

use crate::to_js;

/// The candidate-evaluation engine exposed to the view layer.
///
/// Construction loads the builtin catalog and runs the pipeline once, so a
/// fresh engine already has consistent views. Threshold setters return
/// whether the write was accepted; the view layer reverts its displayed
/// value on `false`. After a debounce interval the view layer calls
/// `commit`, which settles all pending writes into at most one run.
#[wasm_bindgen]
pub struct Engine {
    inner: pipeline::Engine,
}

#[wasm_bindgen]
impl Engine {
    /// Create an engine over the builtin candidate catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Engine, JsError> {
        let catalog = Catalog::builtin().map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Engine {
            inner: pipeline::Engine::new(catalog),
        })
    }

    /// Create an engine over a caller-supplied JSON catalog.
    ///
    /// # Arguments
    /// * `json` - JSON array of candidate records
    #[wasm_bindgen(js_name = fromCatalogJson)]
    pub fn from_catalog_json(json: &str) -> Result<Engine, JsError> {
        let catalog = Catalog::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Engine {
            inner: pipeline::Engine::new(catalog),
        })
    }

    /// Update the ESI gate; returns false if the value was rejected.
    #[wasm_bindgen(js_name = setEsiThreshold)]
    pub fn set_esi_threshold(&mut self, value: f64) -> bool {
        self.inner.set_esi_threshold(value)
    }

    /// Update the signal gate; returns false if the value was rejected.
    #[wasm_bindgen(js_name = setSignalThreshold)]
    pub fn set_signal_threshold(&mut self, value: f64) -> bool {
        self.inner.set_signal_threshold(value)
    }

    /// Update the habitability gate; returns false if the value was rejected.
    #[wasm_bindgen(js_name = setHabitabilityThreshold)]
    pub fn set_habitability_threshold(&mut self, value: f64) -> bool {
        self.inner.set_habitability_threshold(value)
    }

    /// Current thresholds.
    pub fn thresholds(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.thresholds())
    }

    /// Settle pending threshold writes into at most one pipeline run.
    ///
    /// Returns whether a run happened.
    pub fn commit(&mut self) -> bool {
        self.inner.commit()
    }

    /// Select the active view.
    ///
    /// # Arguments
    /// * `view` - one of `all`, `stage1Passed`, `stage2Evaluated`,
    ///   `finalShortlist`
    #[wasm_bindgen(js_name = setActiveView)]
    pub fn set_active_view(&mut self, view: &str) -> Result<(), JsError> {
        let kind: ViewKind = view.parse().map_err(|e: String| JsError::new(&e))?;
        self.inner.set_active_view(kind);
        Ok(())
    }

    /// Set the free-text search query over the active view.
    #[wasm_bindgen(js_name = setSearch)]
    pub fn set_search(&mut self, query: &str) {
        self.inner.set_search(query);
    }

    /// Set the sort key and direction.
    ///
    /// # Arguments
    /// * `key` - one of `name`, `esiAggregate`, `signalScore`,
    ///   `habitabilityLikelihood`
    /// * `descending` - sort direction
    #[wasm_bindgen(js_name = setSort)]
    pub fn set_sort(&mut self, key: &str, descending: bool) -> Result<(), JsError> {
        let key: SortKey = key.parse().map_err(|e: String| JsError::new(&e))?;
        let order = if descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        self.inner.set_sort(key, order);
        Ok(())
    }

    /// Rows of the active view with search and sort applied.
    pub fn rows(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.rows())
    }

    /// Rows of any view in catalog order, without search or sort.
    #[wasm_bindgen(js_name = viewRows)]
    pub fn view_rows(&self, view: &str) -> Result<JsValue, JsError> {
        let kind: ViewKind = view.parse().map_err(|e: String| JsError::new(&e))?;
        to_js(&self.inner.view_rows(kind))
    }

    /// Detail payload for one candidate, or undefined if unknown.
    pub fn detail(&self, name: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.detail(name))
    }

    /// Status-bar summary of the latest committed run.
    pub fn status(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.status())
    }
}
