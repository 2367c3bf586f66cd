//! WASM Keypad
//!
//! Same layout and commands as the terminal keypad, expressed as DOM buttons.

use super::dom::{DomElement, MockDom};
use crate::core::KeyCommand;

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The command this button issues
    pub command: KeyCommand,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of grid columns covered
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a new one-column button definition
    #[must_use]
    pub fn new(command: KeyCommand, row: usize, col: usize) -> Self {
        Self {
            command,
            id: button_id(command),
            row,
            col,
            span: 1,
        }
    }

    /// Widens the button to cover `span` columns
    #[must_use]
    pub fn with_span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Creates the `<button>` element
    ///
    /// Function keys carry `key-function` plus their own role class so each
    /// can be styled apart.
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut elem = DomElement::new("button")
            .with_id(&self.id)
            .with_text(&self.command.glyph().to_string())
            .with_class("keypad-btn")
            .with_class(role_class(self.command));
        if !self.command.is_digit() {
            elem = elem.with_class("key-function");
        }
        elem
            .with_class(&format!("keypad-row-{}", self.row))
            .with_class(&format!("keypad-col-{}", self.col))
            .with_attr("data-key", &self.command.name())
            .with_attr("data-span", &self.span.to_string())
    }
}

/// Style class for a key's role: digit, backspace, reset or advance
#[must_use]
pub const fn role_class(command: KeyCommand) -> &'static str {
    match command {
        KeyCommand::Digit(_) => "key-digit",
        KeyCommand::Backspace => "key-backspace",
        KeyCommand::Reset => "key-reset",
        KeyCommand::Advance => "key-advance",
    }
}

/// DOM element ID of the button issuing `command`
#[must_use]
pub fn button_id(command: KeyCommand) -> String {
    format!("btn-{}", command.name())
}

/// WASM Keypad layout definition
/// ```text
/// [ 1 ] [ 2 ] [ 3 ] [ ⌫ ]
/// [ 4 ] [ 5 ] [ 6 ] [ ⟲ ]
/// [ 7 ] [ 8 ] [ 9 ] [ → ]
/// [    0    ]
/// ```
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons = Vec::with_capacity(13);
        let functions = [KeyCommand::Backspace, KeyCommand::Reset, KeyCommand::Advance];
        for (row, function) in functions.into_iter().enumerate() {
            for col in 0..3 {
                let digit = (row * 3 + col + 1) as u8;
                buttons.push(KeypadButtonDef::new(KeyCommand::Digit(digit), row, col));
            }
            buttons.push(KeypadButtonDef::new(function, row, 3));
        }
        buttons.push(KeypadButtonDef::new(KeyCommand::Digit(0), 3, 0).with_span(2));

        Self { buttons }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons
            .iter()
            .find(|b| b.row == row && col >= b.col && col < b.col + b.span)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Creates DOM elements for all keypad buttons
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons.iter().map(KeypadButtonDef::to_element).collect()
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements()
            .into_iter()
            .fold(
                DomElement::new("div").with_id("keypad").with_class("keypad"),
                DomElement::with_child,
            )
    }

    /// Resolves a button click to its command
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeyCommand> {
        self.find_button_by_id(element_id).map(|btn| btn.command)
    }

    /// Maps a `KeyboardEvent.key` value to a keypad command
    #[must_use]
    pub fn key_to_command(key: &str) -> Option<KeyCommand> {
        match key {
            "Backspace" => Some(KeyCommand::Backspace),
            "Enter" | "Tab" | "ArrowRight" => Some(KeyCommand::Advance),
            "Escape" | "Delete" => Some(KeyCommand::Reset),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '0'..='9'), None) => KeyCommand::from_glyph(c),
                    _ => None,
                }
            }
        }
    }
}

/// Extension trait for MockDom to add keypad
pub trait MockDomKeypadExt {
    /// Registers the keypad container and its buttons
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        self.register_element(keypad.create_keypad_element());
        for btn_elem in keypad.create_dom_elements() {
            self.register_element(btn_elem);
        }
    }
}
