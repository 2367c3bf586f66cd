//! Timber Cubic - Doyle log-scale volume from a keypad
//!
//! Enter a log's length in feet and its circumference in inches on a
//! thirteen-key pad; the board-foot volume is recomputed after every
//! key as `C² · L / 2304` and shown in feet and inches.
//!
//! The same input state machine backs two front ends: a terminal UI
//! (feature `tui`, on by default) and a browser build (feature `wasm`).
//!
//! # Example
//!
//! ```rust
//! use timber_cubic::prelude::*;
//!
//! let mut input = InputController::new();
//! input.apply_all(parse_key_sequence("12→36").unwrap());
//! assert_eq!(input.volume_display(), "6′ 9″");
//!
//! // Advance with both fields filled starts over
//! input.apply(KeyCommand::Advance);
//! assert!(input.is_initial());
//!
//! assert_eq!(compute_volume("8", "24").to_string(), "2′ 0″");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - always available for testing
/// (the mock DOM runs without browser bindings)
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        compute_volume, parse_key_sequence, Field, InputBuffer, InputController, InputSnapshot,
        KeyCommand, TimberError, TimberResult, VolumeResult,
    };
    pub use crate::driver::TimberDriver;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver, WasmTimber};
}
