//! Terminal front end
//!
//! Keyboard and mouse both drive the same [`TimberApp`]; the screen is redrawn
//! from its state after every event.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::TimberApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, ScreenLayout, TimberUI};
