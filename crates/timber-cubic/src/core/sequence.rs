//! Textual keypad sequences, e.g. `"12→36"`

use super::{KeyCommand, TimberError, TimberResult};

/// Parses a string of keypad glyphs into commands
///
/// Accepts the keypad glyphs (`0-9 ⌫ ⟲ →`) and their ASCII aliases
/// (`<`, `r`, `>`). Whitespace is skipped.
pub fn parse_key_sequence(text: &str) -> TimberResult<Vec<KeyCommand>> {
    text.chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, symbol)| {
            KeyCommand::from_glyph(symbol).ok_or(TimberError::UnknownKey { symbol, position })
        })
        .collect()
}
