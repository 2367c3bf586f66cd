//! Input state machine driven by keypad commands
//!
//! The controller owns both buffers and the active-field selector. Every
//! operation is total: an operation whose precondition does not hold is a
//! no-op rather than an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::buffer::InputBuffer;
use super::field::Field;
use super::volume::{compute_volume, VolumeResult};
use super::KeyCommand;

/// Session state: two digit buffers plus the active field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputController {
    length: InputBuffer,
    circumference: InputBuffer,
    active: Field,
}

/// Plain copy of the controller state for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Raw length digits
    pub length: String,
    /// Raw circumference digits
    pub circumference: String,
    /// Field receiving digits
    pub active: Field,
    /// Derived volume
    pub volume: VolumeResult,
    /// Formatted volume, e.g. `6′ 9″`
    pub display: String,
}

impl InputController {
    /// Creates a controller in its initial state (both empty, length active)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the field receiving digits
    #[must_use]
    pub fn active(&self) -> Field {
        self.active
    }

    /// Returns the buffer of a field
    #[must_use]
    pub fn buffer(&self, field: Field) -> &InputBuffer {
        match field {
            Field::Length => &self.length,
            Field::Circumference => &self.circumference,
        }
    }

    fn active_buffer_mut(&mut self) -> &mut InputBuffer {
        match self.active {
            Field::Length => &mut self.length,
            Field::Circumference => &mut self.circumference,
        }
    }

    /// Raw length digits
    #[must_use]
    pub fn length(&self) -> &str {
        self.length.as_str()
    }

    /// Raw circumference digits
    #[must_use]
    pub fn circumference(&self) -> &str {
        self.circumference.as_str()
    }

    /// Returns true if neither field holds a digit and length is active
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.length.is_empty() && self.circumference.is_empty() && self.active == Field::Length
    }

    /// Appends a digit to the active field
    pub fn append_digit(&mut self, digit: u8) {
        self.active_buffer_mut().push_digit(digit);
    }

    /// Appends every digit of `digits` to the active field
    ///
    /// Equivalent to one [`append_digit`](Self::append_digit) per digit;
    /// non-digit characters are skipped.
    pub fn append_digits(&mut self, digits: &str) {
        self.active_buffer_mut().push_digits(digits);
    }

    /// Removes the last digit of the active field
    pub fn backspace(&mut self) {
        self.active_buffer_mut().pop();
    }

    /// Moves to circumference, or starts a new computation once both fields
    /// are filled
    pub fn advance(&mut self) {
        if !self.length.is_empty() && !self.circumference.is_empty() {
            debug!(
                length = self.length.as_str(),
                circumference = self.circumference.as_str(),
                "both fields filled, starting over"
            );
            self.reset();
            return;
        }

        if self.active == Field::Length && !self.length.is_empty() {
            debug!("advancing to circumference");
            self.active = Field::Circumference;
        }
    }

    /// Clears both fields and activates length
    pub fn reset(&mut self) {
        self.length.clear();
        self.circumference.clear();
        self.active = Field::Length;
    }

    /// Activates a field directly
    pub fn select_field(&mut self, field: Field) {
        if self.active != field {
            debug!(%field, "field selected");
        }
        self.active = field;
    }

    /// Routes a keypad command to its operation
    pub fn apply(&mut self, command: KeyCommand) {
        trace!(key = %command.name(), active = %self.active, "key pressed");
        match command {
            KeyCommand::Digit(d) => self.append_digit(d),
            KeyCommand::Backspace => self.backspace(),
            KeyCommand::Reset => self.reset(),
            KeyCommand::Advance => self.advance(),
        }
    }

    /// Applies a sequence of commands in order
    pub fn apply_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = KeyCommand>,
    {
        for command in commands {
            self.apply(command);
        }
    }

    /// Derives the volume from the current buffers
    #[must_use]
    pub fn volume(&self) -> VolumeResult {
        compute_volume(self.length.as_str(), self.circumference.as_str())
    }

    /// Formatted volume for the result box
    #[must_use]
    pub fn volume_display(&self) -> String {
        self.volume().to_string()
    }

    /// Captures the current state
    #[must_use]
    pub fn snapshot(&self) -> InputSnapshot {
        let volume = self.volume();
        InputSnapshot {
            length: self.length.as_str().to_string(),
            circumference: self.circumference.as_str().to_string(),
            active: self.active,
            volume,
            display: volume.to_string(),
        }
    }
}
