use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};
use crate::request::LoanRequest;

/// one payment period in an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-indexed payment period
    pub month: u32,
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// outstanding principal after this period's payment
    pub balance: Money,
    pub cumulative_principal: Money,
    pub cumulative_interest: Money,
}

/// fixed-payment amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: Money,
    pub interest_rate: Rate,
    pub term_months: u32,
    pub monthly_payment: Money,
    pub entries: Vec<AmortizationEntry>,
    pub total_payment: Money,
    pub total_interest: Money,
}

impl AmortizationSchedule {
    /// generate the schedule for a validated request
    pub fn for_request(request: &LoanRequest) -> Result<Self> {
        Self::generate(
            request.loan_amount,
            request.interest_rate,
            request.term_months,
        )
    }

    /// generate a fixed-payment schedule
    ///
    /// Interest for each period accrues on the prior period's closing
    /// balance. The final period's principal portion is exactly the
    /// remaining balance and its payment is adjusted to match, so the
    /// schedule closes out at exactly zero rather than leaving residual
    /// cents to drift.
    pub fn generate(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Self> {
        if term_months == 0 {
            return Err(CalcError::InvalidTerm { months: term_months });
        }
        if !principal.is_positive() {
            return Err(CalcError::InvalidAmount { amount: principal });
        }
        if annual_rate.is_negative() {
            return Err(CalcError::InvalidRate { rate: annual_rate });
        }

        let monthly_rate = annual_rate.monthly_rate().as_decimal();
        let payment = monthly_payment(principal, annual_rate, term_months)?;

        let mut entries = Vec::with_capacity(term_months as usize);
        let mut balance = principal;
        let mut cumulative_principal = Money::ZERO;
        let mut cumulative_interest = Money::ZERO;

        for month in 1..=term_months {
            let interest = Money::from_decimal(balance.as_decimal() * monthly_rate);

            let (payment_amount, principal_portion) = if month == term_months {
                (balance + interest, balance)
            } else {
                (payment, payment - interest)
            };

            let ending_balance = (balance - principal_portion).max(Money::ZERO);

            cumulative_principal += principal_portion;
            cumulative_interest += interest;

            entries.push(AmortizationEntry {
                month,
                payment: payment_amount,
                principal: principal_portion,
                interest,
                balance: ending_balance,
                cumulative_principal,
                cumulative_interest,
            });

            balance = ending_balance;
        }

        let total_payment = entries
            .iter()
            .map(|e| e.payment)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_interest = entries
            .iter()
            .map(|e| e.interest)
            .fold(Money::ZERO, |acc, x| acc + x);

        Ok(Self {
            principal,
            interest_rate: annual_rate,
            term_months,
            monthly_payment: payment,
            entries,
            total_payment,
            total_interest,
        })
    }

    /// get the entry for a specific period
    pub fn entry(&self, month: u32) -> Option<&AmortizationEntry> {
        if month == 0 {
            return None;
        }
        self.entries.get((month - 1) as usize)
    }

    /// outstanding balance after a given period's payment
    pub fn balance_after(&self, month: u32) -> Money {
        self.entry(month).map(|e| e.balance).unwrap_or(self.principal)
    }
}

/// fixed monthly payment for an amortizing loan
///
/// `payment = P * r * (1 + r)^n / ((1 + r)^n - 1)` with monthly periodic
/// rate `r`; a zero rate degenerates to straight principal division.
pub fn monthly_payment(principal: Money, annual_rate: Rate, term_months: u32) -> Result<Money> {
    if term_months == 0 {
        return Err(CalcError::InvalidTerm { months: term_months });
    }

    let monthly_rate = annual_rate.monthly_rate().as_decimal();

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let base = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..term_months {
        compound *= base;
    }

    let denominator = compound - Decimal::ONE;
    if denominator.is_zero() {
        return Err(CalcError::Calculation {
            message: format!("degenerate annuity factor for rate {annual_rate}"),
        });
    }

    let numerator = principal.as_decimal() * monthly_rate * compound;
    Ok(Money::from_decimal(numerator / denominator))
}
