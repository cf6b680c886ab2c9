//! Offset Quote Example
//!
//! Prices offsetting a year of demo-profile emissions against every listed
//! carbon credit, then shows how much a usage change and a region change would
//! save.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_offset_quote
//! ```

use prompttax_core::compare::compare_regions;
use prompttax_core::offset::{describe_cost, describe_tons, quote_all};
use prompttax_core::scenario::{simulate, Adjustments};
use prompttax_core::{
    builtin, demo_profile, to_tons, Calculator, Category, EngineResult, Period, ReferenceData,
};

fn main() -> EngineResult<()> {
    let reference = builtin();
    let calculator = Calculator::new(reference);
    let profile = demo_profile();

    let annual = calculator.calculate(&profile, "US", Period::Annual)?;
    println!("Annual emissions: {}", describe_tons(to_tons(annual.co2_grams)));
    println!();

    println!("Offset options:");
    for quote in quote_all(annual.co2_grams, reference) {
        let Some(credit) = reference.credit(&quote.credit_id) else {
            continue;
        };
        println!(
            "  {:<45} {:>8}/t  {:>7}  {}",
            credit.project_name,
            format!("${:.2}", credit.price_per_ton_usd),
            describe_cost(quote.cost_usd),
            credit.verification_standard
        );
    }
    println!();

    let adjustments = Adjustments::new()
        .with(Category::Chatbots, -30.0)
        .with(Category::AiVideoGen, -100.0);
    let outcome = simulate(&calculator, &profile, &adjustments, "US", Period::Annual)?;
    println!(
        "Cutting chatbots 30% and dropping video: {:+.0} g CO₂/year ({:+.1}%)",
        outcome.co2_delta_grams, outcome.co2_delta_pct
    );

    let cmp = compare_regions(&calculator, &profile, "US", "SE", Period::Annual)?;
    println!(
        "Same usage in Sweden: {:+.0} g CO₂/year",
        cmp.co2_delta_grams
    );

    Ok(())
}
