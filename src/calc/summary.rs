use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};

/// annualized effective-rate approximation
///
/// `(total_interest / loan_amount) / (term_months / 12)`, reported as an
/// annual percentage. This is a simple-interest-equivalent figure, NOT a
/// true effective annual rate or IRR; downstream comparison views assume
/// exactly this formula, so it must not be swapped for compounding math.
pub fn effective_rate(total_interest: Money, loan_amount: Money, term_months: u32) -> Rate {
    if loan_amount.is_zero() || term_months == 0 {
        return Rate::ZERO;
    }

    let years = Decimal::from(term_months) / Decimal::from(12);
    let fraction = total_interest.as_decimal() / loan_amount.as_decimal() / years;
    Rate::from_decimal(fraction)
}
