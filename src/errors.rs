use thiserror::Error;
use uuid::Uuid;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("loan request failed validation: {}", .issues.join("; "))]
    Validation {
        issues: Vec<String>,
    },

    #[error("invalid loan term: {months} months")]
    InvalidTerm {
        months: u32,
    },

    #[error("invalid loan amount: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("calculation error: {message}")]
    Calculation {
        message: String,
    },

    #[error("calculation not found: {id}")]
    CalculationNotFound {
        id: Uuid,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
