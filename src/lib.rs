pub mod calc;
pub mod comparison;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod request;
pub mod store;
pub mod types;

// re-export key types
pub use calc::{
    calculate, effective_rate, monthly_payment, AmortizationEntry, AmortizationSchedule,
    LoanCalculationResult,
};
pub use comparison::{compare_against_banks, BankComparison, BankComparisonRow};
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{CalcError, Result};
pub use format::{format_currency, format_percentage};
pub use request::{LoanRequest, LoanRequestBuilder};
pub use store::{CalculationStore, MemoryStore, SavedCalculation};
pub use types::{CalculationId, LoanPurpose, ReferenceLender, SecurityType};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
