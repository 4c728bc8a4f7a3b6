use aqi_core::calculate::outcome::{Evaluation, PollutantResult};
use aqi_core::CycleReport;

const RULE_HEAVY: &str = "==============================================";
const RULE_LIGHT: &str = "----------------------------------------------";

pub fn print_assessment(result: &PollutantResult) {
    println!("{}", format_assessment(result));
}

pub fn format_assessment(result: &PollutantResult) -> String {
    format!(
        "  {}: AQI {}\n    {}",
        result.pollutant, result.aqi, result.reason
    )
}

pub fn print_evaluation(evaluation: &Evaluation, verbose: bool) {
    println!("{}", format_evaluation(evaluation, verbose));
}

pub fn format_evaluation(evaluation: &Evaluation, verbose: bool) -> String {
    let mut lines = vec![format!(
        "  Overall: AQI {} ({}, dominant {})\n",
        evaluation.final_aqi, evaluation.category, evaluation.dominant_pollutant
    )];

    for r in &evaluation.pollutant_results {
        let saturated_marker = if r.saturated { " (saturated)" } else { "" };
        let dominant_marker = if r.pollutant == evaluation.dominant_pollutant {
            " *"
        } else {
            ""
        };
        lines.push(format!(
            "  {:<6} {:>10} {:<6} -> AQI {:>3}{}{}",
            r.pollutant, r.concentration, r.unit, r.aqi, saturated_marker, dominant_marker
        ));
        if verbose {
            lines.push(format!("    {}", r.reason));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "  {} [{}]: {}",
        evaluation.category, evaluation.color, evaluation.message
    ));
    lines.join("\n")
}

/// Monitor dashboard for one cycle.
pub fn format_dashboard(report: &CycleReport) -> String {
    let eval = &report.evaluation;
    let mut lines = vec![
        RULE_HEAVY.to_string(),
        "          REAL-TIME AQI MONITOR".to_string(),
        RULE_HEAVY.to_string(),
        String::new(),
    ];

    for r in &eval.pollutant_results {
        // Debug keeps the trailing ".0" on whole numbers
        let value = format!("{:?}", r.concentration);
        lines.push(format!("{:<6} : {:<10} → AQI: {}", r.pollutant, value, r.aqi));
    }

    lines.push(String::new());
    lines.push(RULE_LIGHT.to_string());
    lines.push(format!(" Dominant Pollutant : {}", eval.dominant_pollutant));
    lines.push(format!(" Final AQI          : {}", eval.final_aqi));
    lines.push(format!(" Category           : {}", eval.category));
    lines.push(format!(" Health Message     : {}", eval.message));
    lines.push(RULE_LIGHT.to_string());
    lines.push(format!(" cycle {} ({} source)\n", report.cycle, report.source));
    lines.join("\n")
}
