use super::*;

// =============================================================
// Defaults and formatting
// =============================================================

#[test]
fn default_state_has_no_balance() {
    let state = BalanceState::default();
    assert!(!state.has_balance());
    assert!(state.history.is_empty());
    assert!(!state.top_up_success);
}

#[test]
fn formatted_balance_shows_placeholder_until_loaded() {
    assert_eq!(BalanceState::default().formatted_balance(), "Загрузка...");
}

#[test]
fn formatted_balance_uses_two_decimals_and_ruble_sign() {
    let state = BalanceState { balance: Some(1234.5), ..BalanceState::default() };
    assert_eq!(state.formatted_balance(), "1234.50 ₽");

    let state = BalanceState { balance: Some(0.0), ..BalanceState::default() };
    assert_eq!(state.formatted_balance(), "0.00 ₽");
}

// =============================================================
// Amount coercion
// =============================================================

#[test]
fn coerce_amount_parses_decimal_strings() {
    assert_eq!(coerce_amount("1500.00"), 1500.0);
    assert_eq!(coerce_amount("0.05"), 0.05);
}

#[test]
fn coerce_amount_treats_garbage_as_zero() {
    assert_eq!(coerce_amount(""), 0.0);
    assert_eq!(coerce_amount("not-a-number"), 0.0);
}
