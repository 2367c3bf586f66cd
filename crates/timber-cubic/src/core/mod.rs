//! Core input model and volume arithmetic
//!
//! Everything in here is plain data-in/data-out: no terminal, no DOM.
//! Front ends drive an [`InputController`] with [`KeyCommand`]s and render
//! whatever [`compute_volume`] derives from the two buffers.

mod buffer;
mod controller;
mod field;
mod sequence;
mod volume;

pub use buffer::InputBuffer;
pub use controller::{InputController, InputSnapshot};
pub use field::Field;
pub use sequence::parse_key_sequence;
pub use volume::{compute_volume, parse_leading_float, VolumeResult, DOYLE_DIVISOR, OVERFLOW_FEET};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for the few fallible library operations
pub type TimberResult<T> = Result<T, TimberError>;

/// Library error types
///
/// The input model itself never fails; only textual key sequences can be
/// malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimberError {
    /// A key sequence contained a symbol with no keypad counterpart
    #[error("Unknown key '{symbol}' at position {position}")]
    UnknownKey {
        /// The offending symbol
        symbol: char,
        /// Character offset within the sequence
        position: usize,
    },
}

/// A single keypad command
///
/// Every variant maps to exactly one [`InputController`] operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommand {
    /// Append a digit (0-9) to the active field
    Digit(u8),
    /// Remove the last digit of the active field
    Backspace,
    /// Clear both fields and return to length
    Reset,
    /// Move to the next field, or start over once both are filled
    Advance,
}

impl KeyCommand {
    /// Backspace glyph
    pub const BACKSPACE_GLYPH: char = '⌫';
    /// Reset glyph
    pub const RESET_GLYPH: char = '⟲';
    /// Advance glyph
    pub const ADVANCE_GLYPH: char = '→';

    /// Returns the keypad label for this command
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('?'),
            Self::Backspace => Self::BACKSPACE_GLYPH,
            Self::Reset => Self::RESET_GLYPH,
            Self::Advance => Self::ADVANCE_GLYPH,
        }
    }

    /// Maps a keypad glyph (or its ASCII alias) back to a command
    ///
    /// Aliases: `<` backspace, `r`/`R` reset, `>` advance.
    #[must_use]
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' => ch.to_digit(10).map(|d| Self::Digit(d as u8)),
            Self::BACKSPACE_GLYPH | '<' => Some(Self::Backspace),
            Self::RESET_GLYPH | 'r' | 'R' => Some(Self::Reset),
            Self::ADVANCE_GLYPH | '>' => Some(Self::Advance),
            _ => None,
        }
    }

    /// Short name used for element IDs and log fields
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Backspace => "backspace".to_string(),
            Self::Reset => "reset".to_string(),
            Self::Advance => "advance".to_string(),
        }
    }

    /// Returns true for the digit keys
    #[must_use]
    pub fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_display() {
        let err = TimberError::UnknownKey {
            symbol: 'x',
            position: 3,
        };
        assert_eq!(err.to_string(), "Unknown key 'x' at position 3");
    }

    #[test]
    fn test_timber_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(TimberError::UnknownKey {
            symbol: '+',
            position: 0,
        });
        assert!(err.to_string().contains("Unknown key"));
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(KeyCommand::Digit(0).glyph(), '0');
        assert_eq!(KeyCommand::Digit(9).glyph(), '9');
        assert_eq!(KeyCommand::Backspace.glyph(), '⌫');
        assert_eq!(KeyCommand::Reset.glyph(), '⟲');
        assert_eq!(KeyCommand::Advance.glyph(), '→');
    }

    #[test]
    fn test_from_glyph_roundtrips_every_key() {
        let all = (0..=9)
            .map(KeyCommand::Digit)
            .chain([KeyCommand::Backspace, KeyCommand::Reset, KeyCommand::Advance]);
        for cmd in all {
            assert_eq!(KeyCommand::from_glyph(cmd.glyph()), Some(cmd));
        }
    }

    #[test]
    fn test_from_glyph_aliases() {
        assert_eq!(KeyCommand::from_glyph('<'), Some(KeyCommand::Backspace));
        assert_eq!(KeyCommand::from_glyph('r'), Some(KeyCommand::Reset));
        assert_eq!(KeyCommand::from_glyph('R'), Some(KeyCommand::Reset));
        assert_eq!(KeyCommand::from_glyph('>'), Some(KeyCommand::Advance));
        assert_eq!(KeyCommand::from_glyph('.'), None);
        assert_eq!(KeyCommand::from_glyph('a'), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(KeyCommand::Digit(7).name(), "7");
        assert_eq!(KeyCommand::Backspace.name(), "backspace");
        assert_eq!(KeyCommand::Reset.name(), "reset");
        assert_eq!(KeyCommand::Advance.name(), "advance");
    }

    #[test]
    fn test_is_digit() {
        assert!(KeyCommand::Digit(3).is_digit());
        assert!(!KeyCommand::Advance.is_digit());
    }

    #[test]
    fn test_key_command_serde() {
        let json = serde_json::to_string(&KeyCommand::Digit(4)).unwrap();
        assert_eq!(json, r#"{"digit":4}"#);
        let back: KeyCommand = serde_json::from_str(r#""advance""#).unwrap();
        assert_eq!(back, KeyCommand::Advance);
    }
}
