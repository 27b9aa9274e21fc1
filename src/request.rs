use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};
use crate::format::{format_currency, format_percentage};
use crate::types::{LoanPurpose, SecurityType};

/// a validated loan request
///
/// Construct through [`LoanRequestBuilder`]; the builder refuses to produce
/// a request while any validation rule is violated, so holding a
/// `LoanRequest` means the figures are in domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub loan_amount: Money,
    /// annual nominal rate
    pub interest_rate: Rate,
    pub term_months: u32,
    pub purpose: LoanPurpose,
    pub security: SecurityType,
    /// loan-to-value ratio, meaningful for property security only
    pub lvr: Option<Rate>,
}

impl LoanRequest {
    /// builder for loan requests
    pub fn builder() -> LoanRequestBuilder {
        LoanRequestBuilder::new()
    }
}

/// builder for loan requests
///
/// All fields are optional until `build`; `validate` reports every violated
/// rule at once so a form can display the full list, rather than stopping
/// at the first problem.
#[derive(Debug, Clone, Default)]
pub struct LoanRequestBuilder {
    loan_amount: Option<Money>,
    interest_rate: Option<Decimal>,
    term_months: Option<u32>,
    purpose: Option<LoanPurpose>,
    security: Option<SecurityType>,
    lvr: Option<Decimal>,
}

impl LoanRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loan_amount(mut self, amount: Money) -> Self {
        self.loan_amount = Some(amount);
        self
    }

    /// annual rate as a percentage (e.g., 8.95 for 8.95% p.a.)
    pub fn interest_rate(mut self, percent: Decimal) -> Self {
        self.interest_rate = Some(percent);
        self
    }

    pub fn term_months(mut self, months: u32) -> Self {
        self.term_months = Some(months);
        self
    }

    pub fn purpose(mut self, purpose: LoanPurpose) -> Self {
        self.purpose = Some(purpose);
        self
    }

    pub fn security(mut self, security: SecurityType) -> Self {
        self.security = Some(security);
        self
    }

    /// loan-to-value ratio as a percentage (e.g., 65 for 65%)
    pub fn lvr(mut self, percent: Decimal) -> Self {
        self.lvr = Some(percent);
        self
    }

    /// fill the interest rate from the purpose's default when unset
    pub fn use_default_rate(mut self, config: &CalculatorConfig) -> Self {
        if self.interest_rate.is_none() {
            if let Some(purpose) = self.purpose {
                self.interest_rate = Some(config.default_rate(purpose).as_percentage());
            }
        }
        self
    }

    /// validate against config policy; empty means valid
    ///
    /// Rules apply in order and accumulate; nothing short-circuits.
    pub fn validate(&self, config: &CalculatorConfig) -> Vec<String> {
        let mut issues = Vec::new();

        match self.loan_amount {
            None => issues.push("Loan amount is required.".to_string()),
            Some(amount) => {
                if amount < config.amount_limits.minimum {
                    issues.push(format!(
                        "Loan amount must be at least {}.",
                        format_currency(config.amount_limits.minimum)
                    ));
                } else if amount > config.amount_limits.maximum {
                    issues.push(format!(
                        "Loan amount cannot exceed {}.",
                        format_currency(config.amount_limits.maximum)
                    ));
                }
            }
        }

        match self.interest_rate {
            None => issues.push("Interest rate is required.".to_string()),
            Some(percent) => {
                if percent <= Decimal::ZERO {
                    issues.push("Interest rate must be greater than zero.".to_string());
                } else if Rate::from_percentage(percent) > config.rate_limits.maximum {
                    issues.push(format!(
                        "Interest rate cannot exceed {}.",
                        format_percentage(config.rate_limits.maximum)
                    ));
                }
            }
        }

        match self.term_months {
            None => issues.push("Loan term is required.".to_string()),
            Some(0) => issues.push("Loan term must be at least 1 month.".to_string()),
            Some(months) => {
                if months > config.term_limits.maximum_months {
                    issues.push(format!(
                        "Loan term cannot exceed {} months.",
                        config.term_limits.maximum_months
                    ));
                }
            }
        }

        if self.purpose.is_none() {
            issues.push("Loan purpose is required.".to_string());
        }

        if self.security.is_none() {
            issues.push("Security type is required.".to_string());
        }

        if self.security == Some(SecurityType::Property) {
            if let Some(lvr) = self.lvr {
                let lvr = Rate::from_percentage(lvr);
                if lvr.is_negative() || lvr > config.security_limits.maximum_property_lvr {
                    issues.push(format!(
                        "LVR must be between 0.00% and {}.",
                        format_percentage(config.security_limits.maximum_property_lvr)
                    ));
                }
            }
        }

        issues
    }

    /// build the request, refusing while any rule is violated
    pub fn build(self, config: &CalculatorConfig) -> Result<LoanRequest> {
        let issues = self.validate(config);
        if !issues.is_empty() {
            return Err(CalcError::Validation { issues });
        }

        let (Some(loan_amount), Some(percent), Some(term_months), Some(purpose), Some(security)) = (
            self.loan_amount,
            self.interest_rate,
            self.term_months,
            self.purpose,
            self.security,
        ) else {
            return Err(CalcError::Calculation {
                message: "required field missing after validation".to_string(),
            });
        };

        Ok(LoanRequest {
            loan_amount,
            interest_rate: Rate::from_percentage(percent),
            term_months,
            purpose,
            security,
            lvr: self.lvr.map(Rate::from_percentage),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn mid_range() -> LoanRequestBuilder {
        LoanRequest::builder()
            .loan_amount(Money::from_major(500_000))
            .interest_rate(dec!(8.95))
            .term_months(240)
            .purpose(LoanPurpose::Property)
            .security(SecurityType::Property)
            .lvr(dec!(65))
    }

    #[test]
    fn test_empty_builder_reports_all_missing_fields() {
        let issues = LoanRequest::builder().validate(&CalculatorConfig::default());

        assert!(issues.len() >= 3);
        assert!(issues.contains(&"Loan amount is required.".to_string()));
        assert!(issues.contains(&"Interest rate is required.".to_string()));
        assert!(issues.contains(&"Loan term is required.".to_string()));
    }

    #[test]
    fn test_mid_range_request_is_valid() {
        let config = CalculatorConfig::default();
        assert!(mid_range().validate(&config).is_empty());

        let request = mid_range().build(&config).unwrap();
        assert_eq!(request.loan_amount, Money::from_major(500_000));
        assert_eq!(request.interest_rate, Rate::from_percentage(dec!(8.95)));
        assert_eq!(request.term_months, 240);
        assert_eq!(request.lvr, Some(Rate::from_percentage(dec!(65))));
    }

    #[test]
    fn test_amount_bounds_name_the_violated_bound() {
        let config = CalculatorConfig::default();

        let low = mid_range().loan_amount(Money::from_major(100_000));
        assert_eq!(
            low.validate(&config),
            vec!["Loan amount must be at least $150,000.00.".to_string()]
        );

        let high = mid_range().loan_amount(Money::from_major(6_000_000));
        assert_eq!(
            high.validate(&config),
            vec!["Loan amount cannot exceed $5,000,000.00.".to_string()]
        );
    }

    #[test]
    fn test_rate_bounds() {
        let config = CalculatorConfig::default();

        let zero = mid_range().interest_rate(dec!(0));
        assert_eq!(
            zero.validate(&config),
            vec!["Interest rate must be greater than zero.".to_string()]
        );

        let high = mid_range().interest_rate(dec!(31.5));
        assert_eq!(
            high.validate(&config),
            vec!["Interest rate cannot exceed 30.00%.".to_string()]
        );
    }

    #[test]
    fn test_term_bounds() {
        let config = CalculatorConfig::default();

        let zero = mid_range().term_months(0);
        assert_eq!(
            zero.validate(&config),
            vec!["Loan term must be at least 1 month.".to_string()]
        );

        let long = mid_range().term_months(420);
        assert_eq!(
            long.validate(&config),
            vec!["Loan term cannot exceed 360 months.".to_string()]
        );
    }

    #[test]
    fn test_lvr_rule_applies_to_property_security_only() {
        let config = CalculatorConfig::default();

        let breached = mid_range().lvr(dec!(85));
        assert_eq!(
            breached.validate(&config),
            vec!["LVR must be between 0.00% and 80.00%.".to_string()]
        );

        // same LVR against non-property security is ignored
        let unsecured = mid_range()
            .security(SecurityType::PersonalGuarantee)
            .lvr(dec!(85));
        assert!(unsecured.validate(&config).is_empty());

        // absent LVR is fine even for property security
        let mut no_lvr = mid_range();
        no_lvr.lvr = None;
        assert!(no_lvr.validate(&config).is_empty());
    }

    #[test]
    fn test_validation_accumulates_without_short_circuit() {
        let config = CalculatorConfig::default();
        let builder = LoanRequest::builder()
            .loan_amount(Money::from_major(10_000))
            .interest_rate(dec!(45))
            .term_months(0);

        let issues = builder.validate(&config);
        assert_eq!(issues.len(), 5); // amount, rate, term, purpose, security
    }

    #[test]
    fn test_build_refuses_invalid_draft() {
        let config = CalculatorConfig::default();
        let err = LoanRequest::builder().build(&config).unwrap_err();
        match err {
            CalcError::Validation { issues } => assert!(issues.len() >= 3),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_use_default_rate_from_purpose() {
        let config = CalculatorConfig::default();
        let request = LoanRequest::builder()
            .loan_amount(Money::from_major(750_000))
            .term_months(120)
            .purpose(LoanPurpose::Business)
            .security(SecurityType::BusinessAssets)
            .use_default_rate(&config)
            .build(&config)
            .unwrap();

        assert_eq!(request.interest_rate, config.default_rate(LoanPurpose::Business));
    }
}
