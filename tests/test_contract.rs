use chrono::NaiveDate;

use btc_basis::contract::{days_to_expiry, expiry_date, next_quarter_symbol};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ── Quarter selection ───────────────────────────────────────────────

#[test]
fn january_resolves_to_march_of_same_year() {
    // March 29, 2024 is a Friday
    assert_eq!(next_quarter_symbol(date(2024, 1, 15)), "BTCUSD_240329");
}

#[test]
fn february_resolves_to_march_of_same_year() {
    assert_eq!(next_quarter_symbol(date(2024, 2, 1)), "BTCUSD_240329");
}

#[test]
fn leap_day_resolves_to_march_of_same_year() {
    assert_eq!(next_quarter_symbol(date(2024, 2, 29)), "BTCUSD_240329");
}

#[test]
fn march_skips_to_june_contract() {
    // The current month is never targeted, even on its first day
    assert_eq!(next_quarter_symbol(date(2024, 3, 1)), "BTCUSD_240628");
}

#[test]
fn summer_resolves_to_september() {
    assert_eq!(next_quarter_symbol(date(2024, 6, 15)), "BTCUSD_240927");
}

#[test]
fn december_rolls_over_to_march_of_next_year() {
    // March 28, 2025 is the last Friday of that month
    assert_eq!(next_quarter_symbol(date(2024, 12, 1)), "BTCUSD_250328");
    assert_eq!(next_quarter_symbol(date(2024, 12, 31)), "BTCUSD_250328");
}

// ── Last-Friday scan ────────────────────────────────────────────────

#[test]
fn month_ending_on_friday_needs_no_backward_steps() {
    // March 31, 2028 is itself a Friday
    assert_eq!(next_quarter_symbol(date(2028, 1, 15)), "BTCUSD_280331");
    // So is December 31, 2027
    assert_eq!(next_quarter_symbol(date(2027, 10, 1)), "BTCUSD_271231");
}

// ── Symbol parsing ──────────────────────────────────────────────────

#[test]
fn expiry_date_round_trips_generated_symbols() {
    let symbol = next_quarter_symbol(date(2024, 1, 15));
    assert_eq!(expiry_date(&symbol), Some(date(2024, 3, 29)));
}

#[test]
fn expiry_date_rejects_malformed_symbols() {
    assert_eq!(expiry_date("ETHUSD_240329"), None);
    assert_eq!(expiry_date("BTCUSD_24032"), None);
    assert_eq!(expiry_date("BTCUSD_2403XX"), None);
    // month 13 is not a calendar date
    assert_eq!(expiry_date("BTCUSD_241301"), None);
}

#[test]
fn days_to_expiry_counts_down_and_clamps_at_zero() {
    assert_eq!(days_to_expiry("BTCUSD_240329", date(2024, 3, 25)), Some(4));
    assert_eq!(days_to_expiry("BTCUSD_240329", date(2024, 3, 29)), Some(0));
    assert_eq!(days_to_expiry("BTCUSD_240329", date(2024, 4, 10)), Some(0));
    assert_eq!(days_to_expiry("not-a-symbol", date(2024, 4, 10)), None);
}
