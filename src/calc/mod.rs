pub mod amortization;
pub mod summary;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::request::LoanRequest;

pub use amortization::{monthly_payment, AmortizationEntry, AmortizationSchedule};
pub use summary::effective_rate;

/// complete result of a loan calculation
///
/// Produced fresh per request and never mutated; callers own the value
/// outright, so concurrent calculations need no coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanCalculationResult {
    pub monthly_payment: Money,
    /// sum of every scheduled payment, final-period adjustment included
    pub total_amount: Money,
    pub total_interest: Money,
    /// documented simple-interest-equivalent approximation, see
    /// [`summary::effective_rate`]
    pub effective_rate: Rate,
    pub schedule: AmortizationSchedule,
}

/// run the full calculation for a validated request
///
/// Precondition: the request came through `LoanRequestBuilder::build`. A
/// request that violates the contract anyway (zero term, nonpositive
/// amount) fails loudly with a typed error rather than producing nonsense
/// figures.
pub fn calculate(request: &LoanRequest) -> Result<LoanCalculationResult> {
    let schedule = AmortizationSchedule::for_request(request)?;

    let total_amount = schedule.total_payment;
    let total_interest = total_amount - request.loan_amount;
    let effective_rate =
        summary::effective_rate(total_interest, request.loan_amount, request.term_months);

    Ok(LoanCalculationResult {
        monthly_payment: schedule.monthly_payment,
        total_amount,
        total_interest,
        effective_rate,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculatorConfig;
    use crate::types::{LoanPurpose, SecurityType};
    use rust_decimal_macros::dec;

    fn one_year_request() -> LoanRequest {
        LoanRequest::builder()
            .loan_amount(Money::from_major(150_000))
            .interest_rate(dec!(5))
            .term_months(12)
            .purpose(LoanPurpose::WorkingCapital)
            .security(SecurityType::BusinessAssets)
            .build(&CalculatorConfig::default())
            .unwrap()
    }

    #[test]
    fn test_one_year_loan_summary() {
        let result = calculate(&one_year_request()).unwrap();

        assert_eq!(result.schedule.entries.len(), 12);

        // standard annuity formula puts total interest near $4,093
        assert!((result.total_interest.as_decimal() - dec!(4093)).abs() < dec!(5));

        // totals identity
        let summed = result
            .schedule
            .entries
            .iter()
            .map(|e| e.payment)
            .fold(Money::ZERO, |acc, x| acc + x);
        assert_eq!(result.total_amount, summed);
        assert_eq!(result.total_interest, result.total_amount - Money::from_major(150_000));
        assert!(result.total_interest.is_positive());
    }

    #[test]
    fn test_principal_portions_grow_month_over_month() {
        let result = calculate(&one_year_request()).unwrap();

        let entries = &result.schedule.entries;
        for i in 1..entries.len() {
            assert!(entries[i].principal > entries[i - 1].principal);
            assert!(entries[i].principal.is_positive());
        }
    }

    #[test]
    fn test_effective_rate_reflects_documented_formula() {
        let result = calculate(&one_year_request()).unwrap();

        let expected = summary::effective_rate(
            result.total_interest,
            Money::from_major(150_000),
            12,
        );
        assert_eq!(result.effective_rate, expected);
        assert!(result.effective_rate.as_percentage() > dec!(0));
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let request = one_year_request();
        let first = calculate(&request).unwrap();
        let second = calculate(&request).unwrap();
        assert_eq!(first, second);
    }
}
