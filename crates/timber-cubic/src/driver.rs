//! Front-end agnostic driver
//!
//! Every front end exposes the same handful of interactions: press a keypad
//! key, tap a field, read back what is shown. The `verify_*` functions below
//! are written once against [`TimberDriver`] and run against the terminal app
//! and the browser app alike.

use crate::core::{parse_key_sequence, Field, KeyCommand, TimberResult};

/// Interactions shared by the TUI and WASM front ends
///
/// # Example
///
/// ```rust,ignore
/// fn verify_twelve_by_thirty_six<D: TimberDriver>(driver: &mut D) {
///     press(driver, "12→36");
///     assert_eq!(driver.get_result(), "6′ 9″");
/// }
///
/// verify_twelve_by_thirty_six(&mut TuiDriver::new());
/// verify_twelve_by_thirty_six(&mut WasmDriver::new());
/// ```
pub trait TimberDriver {
    /// Presses one keypad key
    fn press_key(&mut self, command: KeyCommand);

    /// Taps a field to make it active
    fn select_field(&mut self, field: Field);

    /// Text currently shown for a field (`"0"` when empty)
    fn field_text(&self, field: Field) -> String;

    /// The field digits are routed to
    fn active_field(&self) -> Field;

    /// The volume line, e.g. `6′ 9″`
    fn get_result(&self) -> String;

    /// Returns to the initial state
    fn reset(&mut self) {
        self.press_key(KeyCommand::Reset);
    }

    /// Presses every key in a glyph sequence such as `"12→36"`
    fn press_sequence(&mut self, sequence: &str) -> TimberResult<()> {
        for command in parse_key_sequence(sequence)? {
            self.press_key(command);
        }
        Ok(())
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{Field, KeyCommand, TimberDriver};
    use crate::tui::TimberApp;

    /// TUI-specific driver wrapping the terminal app
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: TimberApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: TimberApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &TimberApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut TimberApp {
            &mut self.app
        }
    }

    impl TimberDriver for TuiDriver {
        fn press_key(&mut self, command: KeyCommand) {
            self.app.press(command);
        }

        fn select_field(&mut self, field: Field) {
            self.app.select_field(field);
        }

        fn field_text(&self, field: Field) -> String {
            self.app.field_display(field).to_string()
        }

        fn active_field(&self) -> Field {
            self.app.active_field()
        }

        fn get_result(&self) -> String {
            self.app.volume_display()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====
// These run against ANY TimberDriver implementation

fn press<D: TimberDriver>(driver: &mut D, keys: &str) {
    let result = driver.press_sequence(keys);
    assert!(result.is_ok(), "invalid key sequence {keys:?}: {result:?}");
}

/// Verifies the worked examples of the Doyle rule
pub fn verify_reference_volumes<D: TimberDriver>(driver: &mut D) {
    let cases = [
        ("12→36", "6′ 9″"),
        ("8→24", "2′ 0″"),
        ("10→20", "1′ 9″"),
    ];
    for (keys, expected) in cases {
        driver.reset();
        press(driver, keys);
        assert_eq!(driver.get_result(), expected, "keys {keys}");
    }
    driver.reset();
}

/// Verifies that twelve rounded inches carry into the next foot
pub fn verify_inch_carry<D: TimberDriver>(driver: &mut D) {
    driver.reset();
    press(driver, "1→47");
    assert_eq!(driver.get_result(), "1′ 0″");
    driver.reset();
}

/// Verifies the volume stays zero until both fields hold a positive value
pub fn verify_zero_until_complete<D: TimberDriver>(driver: &mut D) {
    driver.reset();
    assert_eq!(driver.get_result(), "0′ 0″");

    press(driver, "12");
    assert_eq!(driver.get_result(), "0′ 0″");

    press(driver, "→0");
    assert_eq!(driver.get_result(), "0′ 0″");

    press(driver, "36");
    assert_eq!(driver.get_result(), "6′ 9″");
    driver.reset();
}

/// Verifies backspace edits only the active field and is a no-op when empty
pub fn verify_backspace<D: TimberDriver>(driver: &mut D) {
    driver.reset();
    press(driver, "123");
    driver.press_key(KeyCommand::Backspace);
    assert_eq!(driver.field_text(Field::Length), "12");

    press(driver, "⌫⌫⌫");
    assert_eq!(driver.field_text(Field::Length), "0");
    assert_eq!(driver.active_field(), Field::Length);

    press(driver, "5→6⌫");
    assert_eq!(driver.field_text(Field::Length), "5");
    assert_eq!(driver.field_text(Field::Circumference), "0");
    driver.reset();
}

/// Verifies the advance key: move on, ignore, or start over
pub fn verify_advance_cycle<D: TimberDriver>(driver: &mut D) {
    driver.reset();

    // Empty length: nothing happens
    driver.press_key(KeyCommand::Advance);
    assert_eq!(driver.active_field(), Field::Length);

    // Length filled: focus moves on
    press(driver, "8→");
    assert_eq!(driver.active_field(), Field::Circumference);

    // Circumference empty: nothing happens
    driver.press_key(KeyCommand::Advance);
    assert_eq!(driver.active_field(), Field::Circumference);
    assert_eq!(driver.field_text(Field::Length), "8");

    // Both filled: start over
    press(driver, "24");
    assert_eq!(driver.get_result(), "2′ 0″");
    driver.press_key(KeyCommand::Advance);
    assert_eq!(driver.active_field(), Field::Length);
    assert_eq!(driver.field_text(Field::Length), "0");
    assert_eq!(driver.field_text(Field::Circumference), "0");
    assert_eq!(driver.get_result(), "0′ 0″");
}

/// Verifies the reset key clears everything from any state
pub fn verify_reset<D: TimberDriver>(driver: &mut D) {
    press(driver, "12→36");
    driver.press_key(KeyCommand::Reset);
    assert_eq!(driver.field_text(Field::Length), "0");
    assert_eq!(driver.field_text(Field::Circumference), "0");
    assert_eq!(driver.active_field(), Field::Length);
    assert_eq!(driver.get_result(), "0′ 0″");
}

/// Verifies tapping a field routes digits into it
pub fn verify_field_selection<D: TimberDriver>(driver: &mut D) {
    driver.reset();
    driver.select_field(Field::Circumference);
    press(driver, "36");
    driver.select_field(Field::Length);
    press(driver, "12");
    assert_eq!(driver.field_text(Field::Length), "12");
    assert_eq!(driver.field_text(Field::Circumference), "36");
    assert_eq!(driver.get_result(), "6′ 9″");
    driver.reset();
}

/// Runs every shared check
pub fn run_all_checks<D: TimberDriver>(driver: &mut D) {
    verify_reference_volumes(driver);
    verify_inch_carry(driver);
    verify_zero_until_complete(driver);
    verify_backspace(driver);
    verify_advance_cycle(driver);
    verify_reset(driver);
    verify_field_selection(driver);
}
