//! WASM Driver
//!
//! Implements [`TimberDriver`] by clicking mock DOM elements and reading the
//! results back out of the DOM, so the shared checks exercise the same path a
//! browser would.

use super::dom::{field_element_id, DomEvent, MockDom, ACTIVE_CLASS, RESULT_ID};
use super::keypad::button_id;
use super::timber::WasmTimber;
use crate::core::{Field, KeyCommand};
use crate::driver::TimberDriver;

/// WASM Driver wrapping the app state and a mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    timber: WasmTimber,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver over a fresh page
    #[must_use]
    pub fn new() -> Self {
        Self {
            timber: WasmTimber::new(),
            dom: MockDom::timber(),
        }
    }

    /// Returns a reference to the app state
    #[must_use]
    pub fn timber(&self) -> &WasmTimber {
        &self.timber
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Simulates clicking an element
    pub fn click(&mut self, element_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let handled = self.timber.handle_click(element_id);
        if handled {
            self.sync_dom();
        }
        handled
    }

    /// Simulates focus moving to an element
    pub fn focus(&mut self, element_id: &str) -> bool {
        self.dom.dispatch_event(DomEvent::focus(element_id));
        let handled = self.timber.handle_focus(element_id);
        if handled {
            self.sync_dom();
        }
        handled
    }

    /// Simulates a keyboard key
    pub fn type_key(&mut self, key: &str) -> bool {
        self.dom.dispatch_event(DomEvent::key_press(key));
        let handled = self.timber.handle_key(key);
        if handled {
            self.sync_dom();
        }
        handled
    }

    /// Synchronizes DOM state with app state
    fn sync_dom(&mut self) {
        let active = self.timber.active_field();
        for field in Field::ALL {
            let id = field_element_id(field);
            self.dom.set_element_text(&id, self.timber.field_text(field));
            if let Some(elem) = self.dom.get_element_mut(&id) {
                elem.toggle_class(ACTIVE_CLASS, field == active);
            }
        }
        self.dom
            .set_element_text(RESULT_ID, &self.timber.volume_display());

        let pressed = self.timber.last_pressed().map(button_id);
        for command in all_commands() {
            let id = button_id(command);
            let on = pressed.as_deref() == Some(id.as_str());
            if let Some(elem) = self.dom.get_element_mut(&id) {
                elem.toggle_class("pressed", on);
            }
        }
    }

    /// Gets the volume element's text
    #[must_use]
    pub fn result_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(RESULT_ID)
    }

    /// Gets a field element's text
    #[must_use]
    pub fn field_element_text(&self, field: Field) -> Option<&str> {
        self.dom.get_element_text(&field_element_id(field))
    }
}

fn all_commands() -> impl Iterator<Item = KeyCommand> {
    (0..=9)
        .map(KeyCommand::Digit)
        .chain([KeyCommand::Backspace, KeyCommand::Reset, KeyCommand::Advance])
}

impl TimberDriver for WasmDriver {
    fn press_key(&mut self, command: KeyCommand) {
        self.click(&button_id(command));
    }

    fn select_field(&mut self, field: Field) {
        self.click(&field_element_id(field));
    }

    fn field_text(&self, field: Field) -> String {
        self.field_element_text(field).unwrap_or_default().to_string()
    }

    fn active_field(&self) -> Field {
        Field::ALL
            .into_iter()
            .find(|&field| {
                self.dom
                    .get_element(&field_element_id(field))
                    .is_some_and(|elem| elem.has_class(ACTIVE_CLASS))
            })
            .unwrap_or_default()
    }

    fn get_result(&self) -> String {
        self.result_element_text().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{
        run_all_checks, verify_advance_cycle, verify_backspace, verify_field_selection,
        verify_inch_carry, verify_reference_volumes, verify_reset, verify_zero_until_complete,
    };

    #[test]
    fn test_wasm_driver_new() {
        let driver = WasmDriver::new();
        assert_eq!(driver.result_element_text(), Some("0′ 0″"));
        assert_eq!(driver.field_element_text(Field::Length), Some("0"));
        assert_eq!(driver.active_field(), Field::Length);
    }

    #[test]
    fn test_click_records_events() {
        let mut driver = WasmDriver::new();
        assert!(driver.click("btn-4"));
        assert!(!driver.click("title"));
        let events = driver.dom().event_history();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], DomEvent::click("btn-4"));
    }

    #[test]
    fn test_click_updates_dom() {
        let mut driver = WasmDriver::new();
        for id in ["btn-1", "btn-0", "btn-advance", "btn-2", "btn-0"] {
            driver.click(id);
        }
        assert_eq!(driver.field_element_text(Field::Length), Some("10"));
        assert_eq!(driver.field_element_text(Field::Circumference), Some("20"));
        assert_eq!(driver.result_element_text(), Some("1′ 9″"));
        assert!(driver
            .dom()
            .get_element("field-circumference")
            .unwrap()
            .has_class(ACTIVE_CLASS));
        assert!(!driver
            .dom()
            .get_element("field-length")
            .unwrap()
            .has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_pressed_key_highlight() {
        let mut driver = WasmDriver::new();
        driver.click("btn-3");
        driver.click("btn-7");
        let dom = driver.dom();
        assert!(dom.get_element("btn-7").unwrap().has_class("pressed"));
        assert!(!dom.get_element("btn-3").unwrap().has_class("pressed"));
    }

    #[test]
    fn test_focus_field_box() {
        let mut driver = WasmDriver::new();
        assert!(driver.focus("field-circumference"));
        assert_eq!(driver.dom().focused_element(), Some("field-circumference"));
        assert_eq!(driver.active_field(), Field::Circumference);

        driver.type_key("4");
        assert_eq!(driver.field_element_text(Field::Circumference), Some("4"));
        assert_eq!(driver.field_element_text(Field::Length), Some("0"));
    }

    #[test]
    fn test_focus_other_element() {
        let mut driver = WasmDriver::new();
        assert!(!driver.focus("btn-5"));
        assert_eq!(driver.dom().focused_element(), Some("btn-5"));
        assert_eq!(driver.active_field(), Field::Length);
        assert_eq!(driver.dom().event_history(), [DomEvent::focus("btn-5")]);
    }

    #[test]
    fn test_type_key() {
        let mut driver = WasmDriver::new();
        for key in ["1", "2", "Tab", "3", "6"] {
            assert!(driver.type_key(key));
        }
        assert_eq!(driver.get_result(), "6′ 9″");
        assert!(!driver.type_key("x"));
        assert!(driver.type_key("Delete"));
        assert_eq!(driver.get_result(), "0′ 0″");
    }

    #[test]
    fn test_timber_access() {
        let mut driver = WasmDriver::new();
        driver.press_key(KeyCommand::Digit(2));
        assert_eq!(driver.timber().field_text(Field::Length), "2");
    }

    // ===== Shared checks =====

    #[test]
    fn test_shared_reference_volumes() {
        verify_reference_volumes(&mut WasmDriver::new());
    }

    #[test]
    fn test_shared_inch_carry() {
        verify_inch_carry(&mut WasmDriver::new());
    }

    #[test]
    fn test_shared_zero_until_complete() {
        verify_zero_until_complete(&mut WasmDriver::new());
    }

    #[test]
    fn test_shared_backspace() {
        verify_backspace(&mut WasmDriver::new());
    }

    #[test]
    fn test_shared_advance_cycle() {
        verify_advance_cycle(&mut WasmDriver::new());
    }

    #[test]
    fn test_shared_reset() {
        verify_reset(&mut WasmDriver::new());
    }

    #[test]
    fn test_shared_field_selection() {
        verify_field_selection(&mut WasmDriver::new());
    }

    #[test]
    fn test_all_checks() {
        run_all_checks(&mut WasmDriver::new());
    }
}
