//! Which input box receives keypad digits

use serde::{Deserialize, Serialize};

/// The two input fields of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Log length in feet
    #[default]
    Length,
    /// Mid-girth circumference in inches
    Circumference,
}

impl Field {
    /// Both fields in screen order
    pub const ALL: [Self; 2] = [Self::Length, Self::Circumference];

    /// Display label shown above the field value
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Length => "Length (ft)",
            Self::Circumference => "Circumference (in)",
        }
    }

    /// Stable identifier (element IDs, JSON keys)
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Circumference => "circumference",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
