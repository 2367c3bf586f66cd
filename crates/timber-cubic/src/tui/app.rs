//! TUI Application State

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::Keypad;
use super::ui::ScreenLayout;
use crate::core::{Field, InputController, InputSnapshot, KeyCommand, VolumeResult};

/// Timber calculator application state
#[derive(Debug, Default)]
pub struct TimberApp {
    /// Input state machine
    controller: InputController,
    /// Most recent keypad command, highlighted on the keypad
    last_pressed: Option<KeyCommand>,
    /// Whether the app should quit
    should_quit: bool,
}

impl TimberApp {
    /// Creates a new app in the initial state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the input controller
    #[must_use]
    pub fn controller(&self) -> &InputController {
        &self.controller
    }

    /// Returns the active field
    #[must_use]
    pub fn active_field(&self) -> Field {
        self.controller.active()
    }

    /// Text shown in a field box (`"0"` when empty)
    #[must_use]
    pub fn field_display(&self, field: Field) -> &str {
        self.controller.buffer(field).display()
    }

    /// Returns the derived volume
    #[must_use]
    pub fn volume(&self) -> VolumeResult {
        self.controller.volume()
    }

    /// Returns the volume as a display string
    #[must_use]
    pub fn volume_display(&self) -> String {
        self.controller.volume_display()
    }

    /// Returns the last pressed keypad command
    #[must_use]
    pub fn last_pressed(&self) -> Option<KeyCommand> {
        self.last_pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Presses a keypad key
    pub fn press(&mut self, command: KeyCommand) {
        self.controller.apply(command);
        self.last_pressed = Some(command);
    }

    /// Activates a field, as when its box is tapped
    pub fn select_field(&mut self, field: Field) {
        self.controller.select_field(field);
    }

    /// Returns a copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        self.controller.snapshot()
    }

    /// Applies a mapped input action
    pub fn dispatch(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(command) => self.press(command),
            KeyAction::Select(field) => self.select_field(field),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Handles a mouse click at terminal position (`x`, `y`)
    ///
    /// `area` is the full frame. Clicking a field box selects that field;
    /// clicking a key presses it.
    pub fn click(&mut self, area: Rect, x: u16, y: u16) {
        let layout = ScreenLayout::new(area);

        for field in Field::ALL {
            let r = layout.field(field);
            if x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height {
                debug!(%field, x, y, "field box clicked");
                self.select_field(field);
                return;
            }
        }

        if let Some(command) = Keypad::new().command_at(layout.keypad, x, y) {
            self.press(command);
        }
    }
}
