/// saved calculations - capture a result and round-trip it as json
use loan_calc_rs::chrono::{TimeZone, Utc};
use loan_calc_rs::{
    calculate, CalculationStore, CalculatorConfig, LoanPurpose, LoanRequest, MemoryStore, Money,
    SafeTimeProvider, SavedCalculation, SecurityType, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CalculatorConfig::default();

    // rate comes from the purpose's default when not quoted explicitly
    let request = LoanRequest::builder()
        .loan_amount(Money::from_major(2_500_000))
        .term_months(120)
        .purpose(LoanPurpose::Business)
        .security(SecurityType::BusinessAssets)
        .use_default_rate(&config)
        .build(&config)?;

    let result = calculate(&request)?;

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    ));
    let saved = SavedCalculation::capture("Warehouse acquisition", request, result, &time);

    let mut store = MemoryStore::new();
    let id = store.save(saved)?;

    let loaded = store.load(id)?;
    println!("{}", loaded.to_json_pretty()?);

    Ok(())
}
