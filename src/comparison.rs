use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calc::{monthly_payment, LoanCalculationResult};
use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::request::LoanRequest;

/// one row of the repayment comparison table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankComparisonRow {
    pub lender: String,
    pub rate: Rate,
    pub comparison_rate: Rate,
    pub fees: Money,
    pub monthly_payment: Money,
    /// reference payment minus the calculated payment; positive means the
    /// calculated loan is cheaper
    pub monthly_savings: Money,
    /// marks the row representing the current calculation
    pub is_reference_institution: bool,
}

/// savings comparison against the reference-lender table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankComparison {
    pub rows: Vec<BankComparisonRow>,
    /// headline figure: mean of the bank rows' monthly savings
    pub monthly_savings: Money,
    pub approval_days: u32,
    pub settlement_days: u32,
}

/// compare a calculated loan against the configured reference lenders
///
/// Each lender's equivalent payment uses the same annuity formula with the
/// request's amount and term held fixed. A lender whose rate ties the
/// calculated rate shows zero savings; that is a displayable outcome, not
/// an error. Approval and settlement days are static policy constants
/// copied from config.
pub fn compare_against_banks(
    result: &LoanCalculationResult,
    request: &LoanRequest,
    config: &CalculatorConfig,
) -> Result<BankComparison> {
    let mut rows = Vec::with_capacity(config.reference_lenders.len() + 1);

    rows.push(BankComparisonRow {
        lender: config.comparison_terms.lender_name.clone(),
        rate: request.interest_rate,
        comparison_rate: result.effective_rate,
        fees: Money::ZERO,
        monthly_payment: result.monthly_payment,
        monthly_savings: Money::ZERO,
        is_reference_institution: true,
    });

    let mut total_savings = Money::ZERO;
    let mut bank_rows = 0u32;

    for lender in &config.reference_lenders {
        let payment = monthly_payment(request.loan_amount, lender.rate, request.term_months)?;
        let savings = payment - result.monthly_payment;

        total_savings += savings;
        bank_rows += 1;

        rows.push(BankComparisonRow {
            lender: lender.name.clone(),
            rate: lender.rate,
            comparison_rate: lender.comparison_rate,
            fees: lender.fees,
            monthly_payment: payment,
            monthly_savings: savings,
            is_reference_institution: false,
        });
    }

    let monthly_savings = if bank_rows == 0 {
        Money::ZERO
    } else {
        total_savings / Decimal::from(bank_rows)
    };

    Ok(BankComparison {
        rows,
        monthly_savings,
        approval_days: config.comparison_terms.approval_days,
        settlement_days: config.comparison_terms.settlement_days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::calculate;
    use crate::types::{LoanPurpose, ReferenceLender, SecurityType};
    use rust_decimal_macros::dec;

    fn request_and_result(config: &CalculatorConfig) -> (LoanRequest, LoanCalculationResult) {
        let request = LoanRequest::builder()
            .loan_amount(Money::from_major(500_000))
            .interest_rate(dec!(8.95))
            .term_months(240)
            .purpose(LoanPurpose::Property)
            .security(SecurityType::Property)
            .build(config)
            .unwrap();
        let result = calculate(&request).unwrap();
        (request, result)
    }

    #[test]
    fn test_comparison_rows_cover_all_lenders_plus_own() {
        let config = CalculatorConfig::default();
        let (request, result) = request_and_result(&config);

        let comparison = compare_against_banks(&result, &request, &config).unwrap();

        assert_eq!(comparison.rows.len(), config.reference_lenders.len() + 1);
        assert!(comparison.rows[0].is_reference_institution);
        assert!(comparison.rows[1..].iter().all(|r| !r.is_reference_institution));
        assert_eq!(comparison.approval_days, config.comparison_terms.approval_days);
        assert_eq!(comparison.settlement_days, config.comparison_terms.settlement_days);
    }

    #[test]
    fn test_higher_bank_rates_show_positive_savings() {
        let config = CalculatorConfig::default();
        let (request, result) = request_and_result(&config);

        let comparison = compare_against_banks(&result, &request, &config).unwrap();

        // every default reference lender charges more than 8.95%
        for row in &comparison.rows[1..] {
            assert!(row.monthly_savings.is_positive());
            assert!(row.monthly_payment > result.monthly_payment);
        }
        assert!(comparison.monthly_savings.is_positive());
    }

    #[test]
    fn test_rate_tie_yields_zero_savings() {
        let config = CalculatorConfig::default().with_lenders(vec![ReferenceLender::new(
            "Matched Bank",
            Rate::from_percentage(dec!(8.95)),
            Rate::from_percentage(dec!(9.10)),
            Money::from_major(2_000),
        )]);
        let (request, result) = request_and_result(&config);

        let comparison = compare_against_banks(&result, &request, &config).unwrap();

        let matched = &comparison.rows[1];
        assert_eq!(matched.monthly_savings, Money::ZERO);
        assert_eq!(matched.monthly_payment, result.monthly_payment);
        assert_eq!(comparison.monthly_savings, Money::ZERO);
    }

    #[test]
    fn test_headline_savings_is_mean_of_bank_rows() {
        let config = CalculatorConfig::default();
        let (request, result) = request_and_result(&config);

        let comparison = compare_against_banks(&result, &request, &config).unwrap();

        let bank_rows = &comparison.rows[1..];
        let summed = bank_rows
            .iter()
            .map(|r| r.monthly_savings)
            .fold(Money::ZERO, |acc, x| acc + x);
        let mean = summed / Decimal::from(bank_rows.len() as u32);
        assert_eq!(comparison.monthly_savings, mean);
    }

    #[test]
    fn test_empty_lender_table() {
        let config = CalculatorConfig::default().with_lenders(Vec::new());
        let (request, result) = request_and_result(&config);

        let comparison = compare_against_banks(&result, &request, &config).unwrap();

        assert_eq!(comparison.rows.len(), 1);
        assert_eq!(comparison.monthly_savings, Money::ZERO);
    }
}
