//! Browser-side app state
//!
//! Routes DOM clicks and keyboard keys into the input controller. Kept free of
//! `wasm-bindgen` so it can be tested natively.

use tracing::trace;

use super::dom::field_element_id;
use super::keypad::WasmKeypad;
use crate::core::{Field, InputController, InputSnapshot, KeyCommand};

/// WASM timber calculator
#[derive(Debug, Default)]
pub struct WasmTimber {
    controller: InputController,
    keypad: WasmKeypad,
    last_pressed: Option<KeyCommand>,
}

impl WasmTimber {
    /// Creates a calculator in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the input controller
    #[must_use]
    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    /// Presses a keypad key
    pub fn press(&mut self, command: KeyCommand) {
        self.controller.apply(command);
        self.last_pressed = Some(command);
    }

    /// Handles a click on any element
    ///
    /// Keypad buttons press their key and field boxes become active.
    /// Returns `false` when the element is neither.
    pub fn handle_click(&mut self, element_id: &str) -> bool {
        if let Some(command) = self.keypad.handle_click(element_id) {
            self.press(command);
            return true;
        }
        if let Some(field) = field_for_element(element_id) {
            self.controller.select_field(field);
            return true;
        }
        trace!(element_id, "click ignored");
        false
    }

    /// Handles focus moving to an element
    ///
    /// Focusing a field box (by tab or tap) makes it active. Returns `false`
    /// for any other element.
    pub fn handle_focus(&mut self, element_id: &str) -> bool {
        match field_for_element(element_id) {
            Some(field) => {
                self.controller.select_field(field);
                true
            }
            None => false,
        }
    }

    /// Handles a `KeyboardEvent.key` value; returns whether it was used
    pub fn handle_key(&mut self, key: &str) -> bool {
        match WasmKeypad::key_to_command(key) {
            Some(command) => {
                self.press(command);
                true
            }
            None => false,
        }
    }

    /// Activates a field
    pub fn select_field(&mut self, field: Field) {
        self.controller.select_field(field);
    }

    /// Text shown for a field (`"0"` when empty)
    #[must_use]
    pub fn field_text(&self, field: Field) -> &str {
        self.controller.buffer(field).display()
    }

    /// Returns the active field
    #[must_use]
    pub fn active_field(&self) -> Field {
        self.controller.active()
    }

    /// Returns the volume line
    #[must_use]
    pub fn volume_display(&self) -> String {
        self.controller.volume_display()
    }

    /// Returns the last pressed key
    #[must_use]
    pub fn last_pressed(&self) -> Option<KeyCommand> {
        self.last_pressed
    }

    /// Returns a copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        self.controller.snapshot()
    }

    /// Current state as JSON, for JavaScript callers
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.snapshot())
    }
}

/// Field whose box has the given element ID
#[must_use]
pub fn field_for_element(element_id: &str) -> Option<Field> {
    Field::ALL
        .into_iter()
        .find(|&field| field_element_id(field) == element_id)
}
