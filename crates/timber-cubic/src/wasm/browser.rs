//! Browser WASM bindings
//!
//! The page forwards button clicks (by element ID) and key presses here and
//! re-renders from the returned getters.

use wasm_bindgen::prelude::*;
use web_sys::console;

use super::timber::WasmTimber;
use crate::core::Field;

/// Browser entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserTimber {
    inner: WasmTimber,
}

#[wasm_bindgen]
impl BrowserTimber {
    /// Create a calculator in the initial state
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            inner: WasmTimber::new(),
        }
    }

    /// Handle a click on an element; returns whether it was a key or field
    pub fn handle_click(&mut self, element_id: &str) -> bool {
        self.inner.handle_click(element_id)
    }

    /// Handle focus moving to an element; returns whether it was a field
    pub fn handle_focus(&mut self, element_id: &str) -> bool {
        self.inner.handle_focus(element_id)
    }

    /// Handle a keyboard key; returns whether it was used
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.inner.handle_key(key)
    }

    /// Length field text
    #[wasm_bindgen(getter)]
    pub fn length(&self) -> String {
        self.inner.field_text(Field::Length).to_string()
    }

    /// Circumference field text
    #[wasm_bindgen(getter)]
    pub fn circumference(&self) -> String {
        self.inner.field_text(Field::Circumference).to_string()
    }

    /// `"length"` or `"circumference"`
    #[wasm_bindgen(getter, js_name = activeField)]
    pub fn active_field(&self) -> String {
        self.inner.active_field().id().to_string()
    }

    /// Volume line, e.g. `6′ 9″`
    #[wasm_bindgen(getter)]
    pub fn volume(&self) -> String {
        self.inner.volume_display()
    }

    /// Whole state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        self.inner
            .snapshot_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for BrowserTimber {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Timber Cubic WASM initialized".into());
}
