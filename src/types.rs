use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Rate};

/// unique identifier for a saved calculation
pub type CalculationId = Uuid;

/// what the borrower is raising the loan for
///
/// Selects a default/reference rate only; calculation mechanics are
/// identical across purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanPurpose {
    Business,
    Investment,
    Property,
    WorkingCapital,
}

impl LoanPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanPurpose::Business => "business",
            LoanPurpose::Investment => "investment",
            LoanPurpose::Property => "property",
            LoanPurpose::WorkingCapital => "working-capital",
        }
    }
}

impl std::fmt::Display for LoanPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// security offered against the loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecurityType {
    Property,
    BusinessAssets,
    PersonalGuarantee,
    Other,
}

impl SecurityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityType::Property => "property",
            SecurityType::BusinessAssets => "business-assets",
            SecurityType::PersonalGuarantee => "personal-guarantee",
            SecurityType::Other => "other",
        }
    }
}

impl std::fmt::Display for SecurityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// one row of the static reference-lender rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLender {
    pub name: String,
    /// advertised annual rate
    pub rate: Rate,
    /// comparison rate including typical fees and charges
    pub comparison_rate: Rate,
    /// flat upfront fee estimate
    pub fees: Money,
}

impl ReferenceLender {
    pub fn new(name: &str, rate: Rate, comparison_rate: Rate, fees: Money) -> Self {
        Self {
            name: name.to_string(),
            rate,
            comparison_rate,
            fees,
        }
    }
}
