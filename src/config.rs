use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{LoanPurpose, ReferenceLender};

/// calculator configuration
///
/// Everything here is policy/content, not calculation logic: domain bounds
/// for validation, per-purpose default rates, the reference-lender table
/// used by comparisons, and the narrative comparison constants. Callers
/// inject their own to change rates or lenders without touching the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub amount_limits: AmountLimits,
    pub rate_limits: RateLimits,
    pub term_limits: TermLimits,
    pub security_limits: SecurityLimits,
    pub purpose_rates: PurposeRates,
    pub reference_lenders: Vec<ReferenceLender>,
    pub comparison_terms: ComparisonTerms,
}

/// loan amount bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountLimits {
    pub minimum: Money,
    pub maximum: Money,
}

/// interest rate bounds; the lower bound is always "greater than zero"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateLimits {
    pub maximum: Rate,
}

/// loan term bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermLimits {
    pub maximum_months: u32,
}

/// security-related bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecurityLimits {
    pub maximum_property_lvr: Rate,
}

/// default annual rates by loan purpose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PurposeRates {
    pub business: Rate,
    pub investment: Rate,
    pub property: Rate,
    pub working_capital: Rate,
}

impl PurposeRates {
    /// default rate for a purpose
    pub fn for_purpose(&self, purpose: LoanPurpose) -> Rate {
        match purpose {
            LoanPurpose::Business => self.business,
            LoanPurpose::Investment => self.investment,
            LoanPurpose::Property => self.property,
            LoanPurpose::WorkingCapital => self.working_capital,
        }
    }
}

/// narrative constants for the comparison view
///
/// Approval and settlement times are static policy figures, not derived
/// from loan parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTerms {
    pub lender_name: String,
    pub approval_days: u32,
    pub settlement_days: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            amount_limits: AmountLimits {
                minimum: Money::from_major(150_000),
                maximum: Money::from_major(5_000_000),
            },
            rate_limits: RateLimits {
                maximum: Rate::from_percentage(dec!(30)),
            },
            term_limits: TermLimits {
                maximum_months: 360,
            },
            security_limits: SecurityLimits {
                maximum_property_lvr: Rate::from_percentage(dec!(80)),
            },
            purpose_rates: PurposeRates {
                business: Rate::from_percentage(dec!(9.95)),
                investment: Rate::from_percentage(dec!(9.45)),
                property: Rate::from_percentage(dec!(8.95)),
                working_capital: Rate::from_percentage(dec!(10.95)),
            },
            reference_lenders: vec![
                ReferenceLender::new(
                    "Commonwealth Bank",
                    Rate::from_percentage(dec!(10.45)),
                    Rate::from_percentage(dec!(10.72)),
                    Money::from_major(2_495),
                ),
                ReferenceLender::new(
                    "Westpac",
                    Rate::from_percentage(dec!(10.29)),
                    Rate::from_percentage(dec!(10.54)),
                    Money::from_major(2_600),
                ),
                ReferenceLender::new(
                    "NAB",
                    Rate::from_percentage(dec!(10.65)),
                    Rate::from_percentage(dec!(10.91)),
                    Money::from_major(2_250),
                ),
                ReferenceLender::new(
                    "ANZ",
                    Rate::from_percentage(dec!(10.38)),
                    Rate::from_percentage(dec!(10.61)),
                    Money::from_major(2_375),
                ),
                ReferenceLender::new(
                    "Macquarie",
                    Rate::from_percentage(dec!(9.89)),
                    Rate::from_percentage(dec!(10.14)),
                    Money::from_major(3_150),
                ),
            ],
            comparison_terms: ComparisonTerms {
                lender_name: "Your calculated loan".to_string(),
                approval_days: 2,
                settlement_days: 7,
            },
        }
    }
}

impl CalculatorConfig {
    /// default rate for a loan purpose
    pub fn default_rate(&self, purpose: LoanPurpose) -> Rate {
        self.purpose_rates.for_purpose(purpose)
    }

    /// replace the reference-lender table
    pub fn with_lenders(mut self, lenders: Vec<ReferenceLender>) -> Self {
        self.reference_lenders = lenders;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = CalculatorConfig::default();
        assert_eq!(config.amount_limits.minimum, Money::from_major(150_000));
        assert_eq!(config.amount_limits.maximum, Money::from_major(5_000_000));
        assert_eq!(config.rate_limits.maximum, Rate::from_percentage(dec!(30)));
        assert_eq!(config.term_limits.maximum_months, 360);
    }

    #[test]
    fn test_purpose_rate_lookup() {
        let config = CalculatorConfig::default();
        assert_eq!(
            config.default_rate(LoanPurpose::Property),
            Rate::from_percentage(dec!(8.95))
        );
        assert!(
            config.default_rate(LoanPurpose::WorkingCapital)
                > config.default_rate(LoanPurpose::Business)
        );
    }

    #[test]
    fn test_lender_table_override() {
        let config = CalculatorConfig::default().with_lenders(vec![ReferenceLender::new(
            "Test Bank",
            Rate::from_percentage(dec!(9.5)),
            Rate::from_percentage(dec!(9.7)),
            Money::from_major(1_000),
        )]);
        assert_eq!(config.reference_lenders.len(), 1);
        assert_eq!(config.reference_lenders[0].name, "Test Bank");
    }
}
