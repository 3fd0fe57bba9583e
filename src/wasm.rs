//! WASM bindings for SpiceGrid.
//!
//! This module exposes the parser and layout engine to a browser-based
//! schematic viewer. Models cross the boundary as JSON strings.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmSchematic } from 'spicegrid';
//!
//! await init();
//!
//! const view = new WasmSchematic(editor.value, false);
//! draw(JSON.parse(view.layout_json()));
//!
//! editor.oninput = () => {
//!   try {
//!     view.update(editor.value);
//!   } catch (e) {
//!     showError(e); // previous schematic is still available
//!   }
//!   draw(JSON.parse(view.layout_json()));
//! };
//!
//! view.select('X1_1');
//! const details = JSON.parse(view.selected_json());
//! ```

use wasm_bindgen::prelude::*;

use crate::error::SpiceGridError;
use crate::netlist::{MSuffix, ParseOptions};
use crate::session::Session;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: SpiceGridError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible schematic model.
///
/// Wraps a [`Session`], so a failed update keeps the previous circuit and
/// layout, plus the id of the component selected in the view.
#[wasm_bindgen]
pub struct WasmSchematic {
    session: Session,
    selected: Option<String>,
}

#[wasm_bindgen]
impl WasmSchematic {
    /// Parse netlist text with the contextual `m` suffix policy.
    ///
    /// # Arguments
    /// * `netlist` - SPICE netlist text
    /// * `strict` - Reject the text on the first warning
    #[wasm_bindgen(constructor)]
    pub fn new(netlist: &str, strict: bool) -> Result<WasmSchematic, JsValue> {
        Self::with_m_suffix(netlist, strict, "contextual")
    }

    /// Parse netlist text with an explicit `m` suffix policy
    /// (`contextual`, `milli` or `mega`).
    #[wasm_bindgen]
    pub fn with_m_suffix(
        netlist: &str,
        strict: bool,
        m_suffix: &str,
    ) -> Result<WasmSchematic, JsValue> {
        let policy = MSuffix::from_name(m_suffix).ok_or_else(|| {
            to_js(SpiceGridError::invalid_option(format!(
                "unknown m-suffix policy '{}'",
                m_suffix
            )))
        })?;
        let options = ParseOptions::new()
            .with_m_suffix(policy)
            .with_strict(strict);

        let mut session = Session::new(options);
        session.update(netlist).map_err(to_js)?;

        Ok(WasmSchematic {
            session,
            selected: None,
        })
    }

    /// Re-parse edited text. On error the previous model stays current.
    #[wasm_bindgen]
    pub fn update(&mut self, netlist: &str) -> Result<(), JsValue> {
        self.session.update(netlist).map(|_| ()).map_err(to_js)
    }

    /// Message of the last failed update, if the current model is stale.
    #[wasm_bindgen(getter)]
    pub fn last_error(&self) -> Option<String> {
        self.session.last_error().map(str::to_string)
    }

    /// Circuit model and diagnostics as JSON.
    #[wasm_bindgen]
    pub fn circuit_json(&self) -> Result<String, JsValue> {
        let snapshot = self.snapshot()?;
        serde_json::to_string(&snapshot.parsed)
            .map_err(|e| to_js(SpiceGridError::from(e)))
    }

    /// Schematic primitives and canvas extent as JSON.
    #[wasm_bindgen]
    pub fn layout_json(&self) -> Result<String, JsValue> {
        let snapshot = self.snapshot()?;
        serde_json::to_string(&snapshot.layout)
            .map_err(|e| to_js(SpiceGridError::from(e)))
    }

    /// Select a component by id. Returns `false` if no such component exists.
    #[wasm_bindgen]
    pub fn select(&mut self, id: &str) -> bool {
        let found = self.session.component(id).is_some();
        self.selected = found.then(|| id.to_string());
        found
    }

    /// Clear the selection.
    #[wasm_bindgen]
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> Option<String> {
        self.selected.clone()
    }

    /// The selected component as JSON, or `undefined` if nothing is
    /// selected or the component no longer exists.
    #[wasm_bindgen]
    pub fn selected_json(&self) -> Result<Option<String>, JsValue> {
        let Some(component) = self
            .selected
            .as_deref()
            .and_then(|id| self.session.component(id))
        else {
            return Ok(None);
        };
        serde_json::to_string(component)
            .map(Some)
            .map_err(|e| to_js(SpiceGridError::from(e)))
    }

    /// PWL breakpoints of a voltage source, flattened as
    /// `[t0, v0, t1, v1, ...]`. Empty if the component has no waveform.
    #[wasm_bindgen]
    pub fn waveform(&self, id: &str) -> Vec<f64> {
        self.session
            .component(id)
            .and_then(|c| c.waveform())
            .map(|points| points.iter().flat_map(|p| [p.time, p.voltage]).collect())
            .unwrap_or_default()
    }

    /// Number of rows in the array.
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.session.circuit().map_or(0, |c| c.grid_dimensions.rows)
    }

    /// Number of columns in the array.
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.session.circuit().map_or(0, |c| c.grid_dimensions.cols)
    }
}

impl WasmSchematic {
    fn snapshot(&self) -> Result<&crate::session::Snapshot, JsValue> {
        self.session.snapshot().ok_or_else(|| {
            to_js(SpiceGridError::WasmError {
                message: "no netlist has been parsed".to_string(),
            })
        })
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
