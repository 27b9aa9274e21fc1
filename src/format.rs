//! Display-boundary formatting helpers.
//!
//! These produce human-readable strings only; calculation code never
//! consumes them. Rendering is string-based throughout so no value ever
//! round-trips through a float.

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// format a monetary value as AUD currency, e.g. `$1,234.56`
pub fn format_currency(value: Money) -> String {
    let v = value.as_decimal().round_dp(2);
    let negative = v.is_sign_negative() && !v.is_zero();
    let (whole, frac) = split_two_dp(v.abs());
    let grouped = group_thousands(&whole);
    if negative {
        format!("-${grouped}.{frac}")
    } else {
        format!("${grouped}.{frac}")
    }
}

/// format a rate as a percentage, e.g. `8.95%`
pub fn format_percentage(rate: Rate) -> String {
    let v = rate.as_percentage().round_dp(2);
    let negative = v.is_sign_negative() && !v.is_zero();
    let (whole, frac) = split_two_dp(v.abs());
    if negative {
        format!("-{whole}.{frac}%")
    } else {
        format!("{whole}.{frac}%")
    }
}

/// split a non-negative decimal into whole digits and exactly two
/// fractional digits
fn split_two_dp(v: Decimal) -> (String, String) {
    let s = v.to_string();
    match s.split_once('.') {
        Some((whole, frac)) => {
            let mut frac = frac.to_string();
            frac.truncate(2);
            while frac.len() < 2 {
                frac.push('0');
            }
            (whole.to_string(), frac)
        }
        None => (s, "00".to_string()),
    }
}

/// insert thousands separators into a run of digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
