use aqi_core::breakpoints;
use aqi_core::category::AqiCategory;
use aqi_core::error::AqiError;
use aqi_core::model::Pollutant;

pub fn list() -> Result<(), AqiError> {
    println!("Supported pollutants:\n");
    for (pollutant, segments) in breakpoints::table() {
        println!(
            "  {:<6} {:<6} {} segments, 0 - {} {}",
            pollutant,
            pollutant.unit(),
            segments.len(),
            breakpoints::max_concentration(pollutant),
            pollutant.unit()
        );
    }
    println!();
    println!("Concentrations above a table's maximum are reported as AQI 500.");
    Ok(())
}

pub fn explain(pollutant: &str) -> Result<(), AqiError> {
    let pollutant: Pollutant = pollutant.parse()?;
    let segments = breakpoints::segments_for(pollutant);

    println!("{} breakpoints ({})\n", pollutant, pollutant.unit());
    println!(
        "  {:<12}  {:<12}  {:<9}  Category",
        "Low", "High", "AQI"
    );
    println!("  {}", "-".repeat(70));

    for seg in segments {
        let category = AqiCategory::classify(seg.aqi_low);
        println!(
            "  {:<12}  {:<12}  {:<9}  {}",
            seg.conc_low,
            seg.conc_high,
            format!("{}-{}", seg.aqi_low, seg.aqi_high),
            category
        );
    }

    println!();
    println!("AQI = ((AQI high - AQI low) / (C high - C low)) * (C - C low) + AQI low,");
    println!("truncated to an integer. Values between two segments or above the");
    println!("last one are reported as AQI 500.");
    println!();

    Ok(())
}
