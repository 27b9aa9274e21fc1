/// repayment schedule - validation messages and the amortization table
use loan_calc_rs::{
    calculate, format_currency, CalculatorConfig, LoanPurpose, LoanRequest, Money, SecurityType,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::default();

    // an incomplete draft reports every problem at once
    let draft = LoanRequest::builder().loan_amount(Money::from_major(80_000));
    for issue in draft.validate(&config) {
        println!("validation: {issue}");
    }
    println!();

    let request = LoanRequest::builder()
        .loan_amount(Money::from_major(150_000))
        .interest_rate(dec!(5))
        .term_months(12)
        .purpose(LoanPurpose::WorkingCapital)
        .security(SecurityType::BusinessAssets)
        .build(&config)?;

    let result = calculate(&request)?;

    println!(
        "{:>5} {:>14} {:>14} {:>14} {:>14}",
        "month", "payment", "principal", "interest", "balance"
    );
    for entry in &result.schedule.entries {
        println!(
            "{:>5} {:>14} {:>14} {:>14} {:>14}",
            entry.month,
            format_currency(entry.payment),
            format_currency(entry.principal),
            format_currency(entry.interest),
            format_currency(entry.balance),
        );
    }

    println!();
    println!("total repaid:   {}", format_currency(result.total_amount));
    println!("total interest: {}", format_currency(result.total_interest));

    Ok(())
}
