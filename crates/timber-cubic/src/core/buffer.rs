//! Digit-only text buffer behind each input field

use serde::{Deserialize, Serialize};

/// An unsigned decimal number typed left to right
///
/// Only ASCII digits ever enter the buffer, so the contents are always a
/// (possibly empty) digit string. There is no length limit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputBuffer {
    digits: String,
}

impl InputBuffer {
    /// Placeholder shown for an empty buffer
    pub const PLACEHOLDER: &'static str = "0";

    /// Creates an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single digit; values above 9 are ignored
    pub fn push_digit(&mut self, digit: u8) {
        if let Some(ch) = char::from_digit(u32::from(digit), 10) {
            self.digits.push(ch);
        }
    }

    /// Appends every ASCII digit of `text`, skipping anything else
    pub fn push_digits(&mut self, text: &str) {
        self.digits.extend(text.chars().filter(char::is_ascii_digit));
    }

    /// Removes the last digit; a no-op on an empty buffer
    pub fn pop(&mut self) -> Option<char> {
        self.digits.pop()
    }

    /// Empties the buffer
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Returns the raw digit string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Returns true if no digit has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Text for the field box: the digits, or the `"0"` placeholder
    #[must_use]
    pub fn display(&self) -> &str {
        if self.digits.is_empty() {
            Self::PLACEHOLDER
        } else {
            &self.digits
        }
    }
}
