/// bank comparison - line the calculated loan up against reference rates
use loan_calc_rs::{
    calculate, compare_against_banks, format_currency, format_percentage, CalculatorConfig,
    LoanPurpose, LoanRequest, Money, SecurityType,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::default();

    let request = LoanRequest::builder()
        .loan_amount(Money::from_major(1_000_000))
        .interest_rate(dec!(8.95))
        .term_months(300)
        .purpose(LoanPurpose::Investment)
        .security(SecurityType::Property)
        .lvr(dec!(70))
        .build(&config)?;

    let result = calculate(&request)?;
    let comparison = compare_against_banks(&result, &request, &config)?;

    println!(
        "  {:<22} {:>8} {:>10} {:>14} {:>14}",
        "lender", "rate", "fees", "payment", "savings"
    );
    for row in &comparison.rows {
        let marker = if row.is_reference_institution { "*" } else { " " };
        println!(
            "{marker} {:<22} {:>8} {:>10} {:>14} {:>14}",
            row.lender,
            format_percentage(row.rate),
            format_currency(row.fees),
            format_currency(row.monthly_payment),
            format_currency(row.monthly_savings),
        );
    }

    println!();
    println!(
        "average monthly savings: {}",
        format_currency(comparison.monthly_savings)
    );
    println!(
        "approval in {} days, settlement in {} days",
        comparison.approval_days, comparison.settlement_days
    );

    Ok(())
}
