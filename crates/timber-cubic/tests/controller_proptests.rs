//! Property-based tests for the input controller and the volume rule

use proptest::prelude::*;
use timber_cubic::core::{compute_volume, Field, InputController, KeyCommand, VolumeResult};

fn key_command_strategy() -> impl Strategy<Value = KeyCommand> {
    prop_oneof![
        6 => (0u8..=9u8).prop_map(KeyCommand::Digit),
        2 => Just(KeyCommand::Backspace),
        1 => Just(KeyCommand::Reset),
        2 => Just(KeyCommand::Advance),
    ]
}

fn digits_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,6}"
}

// ===== Controller invariants =====

proptest! {
    /// Buffers only ever hold ASCII digits
    #[test]
    fn prop_buffers_hold_digits(keys in prop::collection::vec(key_command_strategy(), 0..60)) {
        let mut input = InputController::new();
        for k in keys {
            input.apply(k);
            prop_assert!(input.length().chars().all(|c| c.is_ascii_digit()));
            prop_assert!(input.circumference().chars().all(|c| c.is_ascii_digit()));
        }
    }

    /// Circumference is only active once length has digits, unless reset
    #[test]
    fn prop_circumference_active_implies_length(
        keys in prop::collection::vec(key_command_strategy(), 0..60)
    ) {
        let mut input = InputController::new();
        for k in keys {
            input.apply(k);
            if input.active() == Field::Circumference {
                prop_assert!(!input.length().is_empty());
            }
        }
    }

    /// Reset always returns to the initial state
    #[test]
    fn prop_reset_from_anywhere(keys in prop::collection::vec(key_command_strategy(), 0..40)) {
        let mut input = InputController::new();
        input.apply_all(keys);
        input.apply(KeyCommand::Reset);
        prop_assert!(input.is_initial());
        prop_assert_eq!(input.volume(), VolumeResult::ZERO);
    }

    /// Backspace never touches the inactive field
    #[test]
    fn prop_backspace_only_active(keys in prop::collection::vec(key_command_strategy(), 0..40)) {
        let mut input = InputController::new();
        input.apply_all(keys);
        let before = input.clone();
        input.apply(KeyCommand::Backspace);
        match before.active() {
            Field::Length => prop_assert_eq!(input.circumference(), before.circumference()),
            Field::Circumference => prop_assert_eq!(input.length(), before.length()),
        }
        prop_assert_eq!(input.active(), before.active());
    }

    /// Advance with both fields filled starts over
    #[test]
    fn prop_advance_when_full_resets(l in digits_strategy(), c in digits_strategy()) {
        let mut input = InputController::new();
        input.append_digits(&l);
        input.apply(KeyCommand::Advance);
        input.append_digits(&c);
        prop_assert_eq!(input.active(), Field::Circumference);
        input.apply(KeyCommand::Advance);
        prop_assert!(input.is_initial());
    }

    /// The displayed volume always matches a direct computation
    #[test]
    fn prop_volume_matches_fields(keys in prop::collection::vec(key_command_strategy(), 0..40)) {
        let mut input = InputController::new();
        input.apply_all(keys);
        prop_assert_eq!(input.volume(), compute_volume(input.length(), input.circumference()));
    }
}

// ===== Volume rule =====

proptest! {
    /// Inches are always within 0..=11
    #[test]
    fn prop_inches_in_range(l in 1u32..10_000, c in 1u32..10_000) {
        let v = compute_volume(&l.to_string(), &c.to_string());
        prop_assert!(v.inches <= 11);
        prop_assert!(v.feet >= 0.0);
        prop_assert_eq!(v.feet.fract(), 0.0);
    }

    /// The result is within half an inch of the exact volume
    #[test]
    fn prop_close_to_exact(l in 1u32..1_000, c in 1u32..1_000) {
        let exact = f64::from(c) * f64::from(c) * f64::from(l) / 2304.0;
        let v = compute_volume(&l.to_string(), &c.to_string());
        let shown = v.feet + f64::from(v.inches) / 12.0;
        prop_assert!((shown - exact).abs() <= 0.5 / 12.0 + 1e-9);
    }

    /// Zero or missing in either field gives zero
    #[test]
    fn prop_zero_field_gives_zero(x in digits_strategy()) {
        prop_assert!(compute_volume(&x, "0").is_zero());
        prop_assert!(compute_volume("0", &x).is_zero());
        prop_assert!(compute_volume(&x, "").is_zero());
        prop_assert!(compute_volume("", &x).is_zero());
    }

    /// Volume never decreases as circumference grows
    #[test]
    fn prop_monotonic_in_circumference(l in 1u32..500, c in 1u32..500) {
        let a = compute_volume(&l.to_string(), &c.to_string());
        let b = compute_volume(&l.to_string(), &(c + 1).to_string());
        let as_inches = |v: VolumeResult| v.feet * 12.0 + f64::from(v.inches);
        prop_assert!(as_inches(b) >= as_inches(a));
    }
}
