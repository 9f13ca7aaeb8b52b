//! Property-based tests for the accumulator

use proptest::prelude::*;
use simple_calculator::core::format::format_number;
use simple_calculator::core::{CalcError, CalculatorState, Input, Operation};

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => digit_strategy().prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        2 => operation_strategy().prop_map(Input::Operator),
        1 => Just(Input::Equals),
        1 => Just(Input::Clear),
        1 => Just(Input::ToggleSign),
        1 => Just(Input::Percent),
    ]
}

/// Inputs that never set a pending operation
fn entry_input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => digit_strategy().prop_map(Input::Digit),
        1 => Just(Input::Decimal),
        1 => Just(Input::ToggleSign),
        1 => Just(Input::Percent),
    ]
}

/// Replays presses under the error policy
fn replay(inputs: &[Input]) -> CalculatorState {
    inputs
        .iter()
        .fold(CalculatorState::new(), |state, &input| state.apply(input).state)
}

fn type_number(state: CalculatorState, digits: &[u8]) -> CalculatorState {
    digits
        .iter()
        .fold(state, |s, &d| s.apply(Input::Digit(d)).state)
}

// ===== Properties =====

proptest! {
    /// Digits typed from a fresh state concatenate
    #[test]
    fn prop_digits_concatenate(first in 1u8..=9, rest in prop::collection::vec(digit_strategy(), 0..12)) {
        let mut digits = vec![first];
        digits.extend(rest);
        let state = type_number(CalculatorState::new(), &digits);
        let expected: String = digits.iter().map(u8::to_string).collect();
        prop_assert_eq!(state.display(), expected.as_str());
    }

    /// Leading zeros are replaced by the first non-zero digit
    #[test]
    fn prop_leading_zeros_collapse(zeros in 1usize..5, d in 1u8..=9) {
        let mut digits = vec![0; zeros];
        digits.push(d);
        let state = type_number(CalculatorState::new(), &digits);
        prop_assert_eq!(state.display(), d.to_string());
    }

    /// A second decimal point in the same entry changes nothing
    #[test]
    fn prop_decimal_idempotent(inputs in prop::collection::vec(input_strategy(), 0..20)) {
        let once = replay(&inputs).apply(Input::Decimal).state;
        let twice = once.apply(Input::Decimal).state;
        prop_assert_eq!(once, twice);
    }

    /// Equals with nothing pending leaves the state untouched
    #[test]
    fn prop_equals_without_pending_is_noop(inputs in prop::collection::vec(entry_input_strategy(), 0..20)) {
        let state = replay(&inputs);
        prop_assert!(state.pending().is_none());
        prop_assert_eq!(state.try_apply(Input::Equals), Ok(state));
    }

    /// Clear always returns to the initial state
    #[test]
    fn prop_clear_resets(inputs in prop::collection::vec(input_strategy(), 0..30)) {
        let state = replay(&inputs).apply(Input::Clear).state;
        prop_assert_eq!(state, CalculatorState::new());
    }

    /// Division by zero always shows Error and resets
    #[test]
    fn prop_divide_by_zero_resets(digits in prop::collection::vec(digit_strategy(), 1..8)) {
        let state = type_number(CalculatorState::new(), &digits)
            .apply(Input::Operator(Operation::Divide))
            .state
            .apply(Input::Digit(0))
            .state;
        let transition = state.apply(Input::Equals);
        prop_assert_eq!(transition.display.as_str(), "Error");
        prop_assert_eq!(transition.error, Some(CalcError::DivisionByZero));
        prop_assert_eq!(transition.state, CalculatorState::new());
    }

    /// The running value is never NaN or infinite
    #[test]
    fn prop_accumulated_stays_finite(inputs in prop::collection::vec(input_strategy(), 0..60)) {
        let mut state = CalculatorState::new();
        for input in inputs {
            state = state.apply(input).state;
            prop_assert!(state.accumulated().is_finite());
        }
    }

    /// The display never holds more than one decimal point
    #[test]
    fn prop_single_decimal_point(inputs in prop::collection::vec(input_strategy(), 0..60)) {
        let mut state = CalculatorState::new();
        for input in inputs {
            let transition = state.apply(input);
            prop_assert!(transition.display.matches('.').count() <= 1, "{}", transition.display);
            state = transition.state;
            prop_assert!(state.display().matches('.').count() <= 1, "{}", state.display());
        }
    }

    /// Operator, percent and clear always close the entry; equals closes it
    /// unless it was a no-op
    #[test]
    fn prop_entry_closed_after_non_digit_keys(inputs in prop::collection::vec(input_strategy(), 0..60)) {
        let mut state = CalculatorState::new();
        for input in inputs {
            let next = state.apply(input).state;
            match input {
                Input::Operator(_) | Input::Percent | Input::Clear => {
                    prop_assert!(next.is_new_entry(), "{:?} after {:?}", next, input);
                }
                Input::Equals => {
                    prop_assert!(next.is_new_entry() || next == state, "{:?}", next);
                }
                _ => {}
            }
            state = next;
        }
    }

    /// Equals after a second operand always closes the entry
    #[test]
    fn prop_evaluation_closes_entry(
        a in prop::collection::vec(digit_strategy(), 1..6),
        op in operation_strategy(),
        b in prop::collection::vec(digit_strategy(), 1..6),
    ) {
        let state = type_number(CalculatorState::new(), &a).apply(Input::Operator(op)).state;
        let state = type_number(state, &b).apply(Input::Equals).state;
        prop_assert!(state.is_new_entry());
        prop_assert!(state.pending().is_none());
    }

    /// Operators chain left to right with no precedence
    #[test]
    fn prop_chaining_left_to_right(
        a in 1u8..=9,
        op1 in operation_strategy(),
        b in 1u8..=9,
        op2 in operation_strategy(),
        c in 1u8..=9,
    ) {
        let state = replay(&[
            Input::Digit(a),
            Input::Operator(op1),
            Input::Digit(b),
            Input::Operator(op2),
            Input::Digit(c),
            Input::Equals,
        ]);
        let first = op1.apply(f64::from(a), f64::from(b)).unwrap();
        let expected = op2.apply(first, f64::from(c)).unwrap();
        prop_assert_eq!(state.display(), format_number(expected));
    }

    /// Toggling the sign twice restores a typed integer
    #[test]
    fn prop_toggle_sign_twice(digits in prop::collection::vec(1u8..=9, 1..10)) {
        let typed = type_number(CalculatorState::new(), &digits);
        let toggled = typed
            .apply(Input::ToggleSign)
            .state
            .apply(Input::ToggleSign)
            .state;
        prop_assert_eq!(toggled.display(), typed.display());
    }
}

// ===== Scenarios =====

#[test]
fn test_scenario_addition() {
    let state = replay(&[
        Input::Digit(5),
        Input::Operator(Operation::Add),
        Input::Digit(3),
        Input::Equals,
    ]);
    assert_eq!(state.display(), "8");
}

#[test]
fn test_scenario_percent() {
    let state = replay(&[Input::Digit(9), Input::Percent]);
    assert_eq!(state.display(), "0.09");
}

#[test]
fn test_scenario_toggle_sign() {
    let state = replay(&[Input::Digit(6), Input::ToggleSign]);
    assert_eq!(state.display(), "-6");
}

#[test]
fn test_scenario_no_precedence() {
    let state = replay(&[
        Input::Digit(3),
        Input::Operator(Operation::Add),
        Input::Digit(4),
        Input::Operator(Operation::Multiply),
        Input::Digit(2),
        Input::Equals,
    ]);
    assert_eq!(state.display(), "14");
}
