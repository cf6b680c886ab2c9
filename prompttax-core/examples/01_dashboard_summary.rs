//! Dashboard Summary Example
//!
//! Computes the figures shown on the PromptTax dashboard for the demo usage
//! profile: totals with their uncertainty band, the per-category breakdown and
//! a week of synthetic trend data.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_dashboard_summary -- GB monthly
//! ```

use std::env;

use prompttax_core::constants::DEFAULT_TREND_DAYS;
use prompttax_core::{
    calculate_impact, demo_profile, format_value, generate_series, ImpactError, Period,
    UnitFamily,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let region = args.next().unwrap_or_else(|| "US".to_string());
    let period: Period = match args.next() {
        Some(name) => name.parse()?,
        None => Period::Daily,
    };

    println!("PromptTax Dashboard ({region}, {period})");
    println!("================================\n");

    let profile = demo_profile();
    let result = match calculate_impact(&profile, &region, period) {
        Ok(result) => result,
        Err(ImpactError::UnknownRegion { code }) => {
            eprintln!("No coefficients for region '{code}'");
            return Ok(());
        }
    };

    let co2 = format_value(result.co2_grams, UnitFamily::Grams);
    let (low, high) = result.uncertainty_range(result.co2_grams);
    println!("CO₂:         {co2} (±{}%)", result.uncertainty_pct);
    println!(
        "             {} – {}",
        format_value(low, UnitFamily::Grams),
        format_value(high, UnitFamily::Grams)
    );
    println!("Electricity: {}", format_value(result.electricity_kwh, UnitFamily::KilowattHours));
    println!("Water:       {}", format_value(result.water_liters, UnitFamily::Liters));
    println!("PM2.5:       {}", format_value(result.pm25_mg, UnitFamily::Milligrams));
    println!("SO₂:         {}", format_value(result.so2_mg, UnitFamily::Milligrams));
    println!("NOx:         {}", format_value(result.nox_mg, UnitFamily::Milligrams));
    println!();

    println!("Breakdown:");
    for slice in &result.breakdown {
        let share = if result.co2_grams > 0.0 {
            slice.co2_grams / result.co2_grams * 100.0
        } else {
            0.0
        };
        println!(
            "  {:<14} {:>8}  {:>5.1}%",
            slice.category.id(),
            format_value(slice.co2_grams, UnitFamily::Grams).to_string(),
            share
        );
    }
    println!();

    let series = generate_series(&profile, &region, DEFAULT_TREND_DAYS)?;
    println!("Last {DEFAULT_TREND_DAYS} days (synthetic), most recent week:");
    for point in series.iter().rev().take(7).rev() {
        println!("  {}  {:>7.2} g  {:.4} kWh", point.date, point.co2, point.kwh);
    }
    let peak = series.iter().map(|p| p.co2).fold(0.0, f64::max);
    println!("  peak day: {peak:.2} g");

    Ok(())
}
