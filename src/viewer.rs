//! JavaScript-facing wrapper around [`ReorderEngine`].
//!
//! The host page fetches the source files itself and hands their text to
//! `ReorderView`; it forwards DOM drag events as `(column, row)` pairs and
//! redraws from [`ReorderView::grid`] whenever the render callback fires.

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::engine::ReorderEngine;
use crate::error::ReorderError;
use crate::export::{export_table, ExportShape};
use crate::grid::GridView;
use crate::sources::{Lookup, Lookups, SourceConfig};
use crate::types::Coordinate;

fn to_js(e: ReorderError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The grid controller exported to JavaScript.
#[wasm_bindgen]
pub struct ReorderView {
    engine: ReorderEngine,
    lookups: Lookups,
    config: SourceConfig,
    render_callback: Option<Function>,
}

impl Default for ReorderView {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ReorderView {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> ReorderView {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        ReorderView {
            engine: ReorderEngine::default(),
            lookups: Lookups::default(),
            config: SourceConfig::default(),
            render_callback: None,
        }
    }

    /// Load the table from column-major or row-major JSON.
    #[wasm_bindgen]
    pub fn load_table(&mut self, json: &str) -> Result<(), JsValue> {
        self.engine.load_json(json).map_err(to_js)?;
        self.request_render();
        Ok(())
    }

    /// Set the label → color lookup.
    #[wasm_bindgen]
    pub fn set_colors(&mut self, json: &str) -> Result<(), JsValue> {
        let lookup: Lookup = serde_json::from_str(json)
            .map_err(|e| to_js(ReorderError::Json(e)))?;
        self.lookups.colors = Some(lookup);
        self.request_render();
        Ok(())
    }

    /// Set the tooltip lookup for `column`.
    ///
    /// With `canonical`, the lookup's key order also becomes the column's
    /// sort order.
    #[wasm_bindgen]
    pub fn set_details(&mut self, column: &str, json: &str, canonical: bool) -> Result<(), JsValue> {
        let lookup: Lookup = serde_json::from_str(json)
            .map_err(|e| to_js(ReorderError::Json(e)))?;
        if canonical {
            let order = lookup.keys().map(str::to_string).collect();
            self.engine.resolver_mut().set_canonical_order(column, order);
        }
        self.lookups.set_detail(column, lookup);
        self.request_render();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_canonical_order(&mut self, column: &str, order: Vec<String>) {
        self.engine.resolver_mut().set_canonical_order(column, order);
    }

    /// Name of the column whose labels color each row.
    #[wasm_bindgen]
    pub fn set_color_column(&mut self, column: &str) {
        self.config.color_column = column.to_string();
        self.request_render();
    }

    #[wasm_bindgen]
    pub fn drag_start(&mut self, column: usize, row: usize) -> Result<(), JsValue> {
        self.engine
            .on_drag_start(Coordinate::new(column, row))
            .map_err(to_js)?;
        self.request_render();
        Ok(())
    }

    #[wasm_bindgen]
    pub fn drag_hover(&mut self, column: usize, row: usize) -> Result<(), JsValue> {
        self.engine
            .on_drag_hover(Coordinate::new(column, row))
            .map_err(to_js)?;
        self.request_render();
        Ok(())
    }

    /// Finish the drag. Returns whether a swap was committed.
    #[wasm_bindgen]
    pub fn drag_end(&mut self) -> Result<bool, JsValue> {
        let swap = self.engine.on_drag_end().map_err(to_js)?;
        self.request_render();
        Ok(swap.is_some())
    }

    #[wasm_bindgen]
    pub fn drag_cancel(&mut self) {
        self.engine.on_drag_cancel();
        self.request_render();
    }

    #[wasm_bindgen]
    pub fn sort_by(&mut self, column: &str, ascending: bool) -> Result<(), JsValue> {
        self.engine.sort_by(column, ascending).map_err(to_js)?;
        self.request_render();
        Ok(())
    }

    /// Serialize the committed table; `shape` is `"column-major"` or `"row-major"`.
    #[wasm_bindgen]
    pub fn export(&self, shape: &str) -> Result<String, JsValue> {
        let shape: ExportShape = shape.parse().map_err(to_js)?;
        export_table(&self.engine.snapshot(), shape).map_err(to_js)
    }

    /// The grid to draw: the drag preview while dragging, else the committed table.
    #[wasm_bindgen]
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        let view = self.grid_view();
        serde_wasm_bindgen::to_value(&view)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    #[wasm_bindgen]
    pub fn column_names(&self) -> Vec<String> {
        self.engine
            .snapshot()
            .column_names()
            .map(str::to_string)
            .collect()
    }

    #[wasm_bindgen]
    pub fn height(&self) -> usize {
        self.engine.snapshot().height()
    }

    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.engine.drag_state().is_active()
    }

    /// Register a callback invoked after every state change.
    #[wasm_bindgen]
    pub fn set_render_callback(&mut self, callback: Option<Function>) {
        self.render_callback = callback;
    }
}

impl ReorderView {
    /// Build the view model without crossing into JavaScript.
    #[must_use]
    pub fn grid_view(&self) -> GridView {
        GridView::build(
            &self.engine.draft_snapshot(),
            self.engine.drag_state(),
            self.engine.sort_key(),
            &self.lookups,
            &self.config,
        )
    }

    #[must_use]
    pub fn engine(&self) -> &ReorderEngine {
        &self.engine
    }

    fn request_render(&self) {
        if let Some(callback) = &self.render_callback {
            let _ = callback.call0(&JsValue::NULL);
        }
    }
}
