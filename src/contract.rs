use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Quarterly contracts expire in March, June, September and December.
const QUARTER_MONTHS: [u32; 4] = [3, 6, 9, 12];

/// Symbol of the nearest upcoming quarterly futures contract, e.g. `BTCUSD_240329`.
///
/// The expiry is the last Friday of the next quarter-end month strictly after
/// the current month; a December date rolls over to March of the following year.
/// `today` is injectable so resolution is testable against fixed dates.
pub fn next_quarter_symbol(today: NaiveDate) -> String {
    let (target_year, target_month) = match QUARTER_MONTHS.iter().find(|&&m| today.month() < m) {
        Some(&month) => (today.year(), month),
        None => (today.year() + 1, QUARTER_MONTHS[0]),
    };

    let mut expiry = last_day_of_month(target_year, target_month);
    while expiry.weekday() != Weekday::Fri {
        expiry = expiry - Duration::days(1);
    }

    format!(
        "BTCUSD_{:02}{:02}{:02}",
        target_year % 100,
        target_month,
        expiry.day()
    )
}

/// Expiry date encoded in a quarterly contract symbol's trailing `YYMMDD`.
/// Returns `None` when the suffix is not a valid calendar date.
pub fn expiry_date(symbol: &str) -> Option<NaiveDate> {
    let suffix = symbol.strip_prefix("BTCUSD_")?;
    if suffix.len() != 6 || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(suffix, "%y%m%d").ok()
}

/// Whole days remaining until contract expiry, clamped at zero.
pub fn days_to_expiry(symbol: &str, today: NaiveDate) -> Option<i64> {
    let expiry = expiry_date(symbol)?;
    Some((expiry - today).num_days().max(0))
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // month is always one of the quarter months, so both constructions succeed
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
}
