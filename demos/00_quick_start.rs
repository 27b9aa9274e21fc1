/// quick start - minimal repayment calculation
use loan_calc_rs::{
    calculate, format_currency, format_percentage, CalculatorConfig, LoanPurpose, LoanRequest,
    Money, SecurityType,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::default();

    // a $500,000 property-backed loan over 20 years
    let request = LoanRequest::builder()
        .loan_amount(Money::from_major(500_000))
        .interest_rate(dec!(8.95))
        .term_months(240)
        .purpose(LoanPurpose::Property)
        .security(SecurityType::Property)
        .lvr(dec!(65))
        .build(&config)?;

    let result = calculate(&request)?;

    println!("monthly payment:  {}", format_currency(result.monthly_payment));
    println!("total repayments: {}", format_currency(result.total_amount));
    println!("total interest:   {}", format_currency(result.total_interest));
    println!("effective rate:   {}", format_percentage(result.effective_rate));

    Ok(())
}
