//! # CartonCalc CLI
//!
//! Terminal front end for the carton cost comparison engine. Prompts for the
//! box dimensions and commercial parameters (with sensible defaults), runs
//! the full RSC vs Wrap-Around comparison, and prints the report.
//!
//! Pass `--json` to emit the raw [`ComparisonResult`] as JSON instead, for
//! piping into other tools.

use std::io::{self, BufRead, Write};

use carton_core::calculations::comparison::{compare, ComparisonInput};
use carton_core::calculations::AdhesiveResult;
use carton_core::materials::FluteProfile;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_flute(default: FluteProfile) -> FluteProfile {
    print!("Flute profile E/B/C/BC [{}]: ", default.code());
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    FluteProfile::from_str_flexible(trimmed).unwrap_or(default)
}

fn main() {
    let json_output = std::env::args().any(|a| a == "--json");

    let mut input = ComparisonInput::default();

    if !json_output {
        println!("CartonCalc - RSC vs Wrap-Around Cost Comparison");
        println!("===============================================");
        println!();

        input.dims.length_mm = prompt_f64("Inner length (mm) [400]: ", 400.0);
        input.dims.width_mm = prompt_f64("Inner width (mm) [300]: ", 300.0);
        input.dims.height_mm = prompt_f64("Inner height (mm) [200]: ", 200.0);
        input.flute = prompt_flute(FluteProfile::C);
        input.rsc_price_per_1000 = prompt_f64("RSC blank price per 1000 [610]: ", 610.0);
        input.wa_price_per_1000 = prompt_f64("WA blank price per 1000 [555]: ", 555.0);
        input.production_volume = prompt_f64("Cartons per year [500000]: ", 500_000.0);

        if let Err(e) = input.dims.validate() {
            println!();
            println!("Warning: {} - results may not be physically meaningful.", e);
        }
        println!();
    }

    let result = compare(&input);

    if json_output {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("═══════════════════════════════════════════════");
    println!("  COMPARISON RESULTS");
    println!("═══════════════════════════════════════════════");
    println!();
    println!("Blank geometry ({}):", input.flute.display_name());
    println!(
        "  RSC:         {:.1} x {:.1} mm = {:.4} m²",
        result.rsc_blank.blank_length_mm,
        result.rsc_blank.blank_width_mm,
        result.rsc_blank.area_m2
    );
    println!(
        "  Wrap-Around: {:.1} x {:.1} mm = {:.4} m²",
        result.wa_blank.blank_length_mm, result.wa_blank.blank_width_mm, result.wa_blank.area_m2
    );
    println!("  Area savings: {:.2} %", result.area_savings_pct);
    println!();

    println!("Closure:");
    match &result.rsc_adhesive {
        AdhesiveResult::Tape(t) => println!(
            "  RSC ({}): {:.3} m tape, {:.4} per box",
            t.pattern, t.tape_length_m, t.cost_per_box
        ),
        AdhesiveResult::Hotmelt(h) => println!(
            "  RSC (hot-melt): {:.3} m seam, {:.2} g, {:.4} per box",
            h.seam_length_m,
            h.hotmelt_kg * 1000.0,
            h.cost_per_box
        ),
    }
    println!(
        "  Wrap-Around (hot-melt): {:.3} m seam, {:.2} g, {:.4} per box",
        result.wa_adhesive.seam_length_m,
        result.wa_adhesive.hotmelt_kg * 1000.0,
        result.wa_adhesive.cost_per_box
    );
    println!();

    println!("Cost per box:");
    println!("  RSC:         {:.4}", result.rsc_cost_per_box);
    println!("  Wrap-Around: {:.4}", result.wa_cost_per_box);
    println!(
        "  Savings:     {:.4} per box ({:.2} %), {:.2} per year",
        result.cost_savings_per_box, result.cost_savings_pct, result.annual_savings
    );
    println!();

    println!("Line throughput:");
    println!(
        "  {:.0} cartons/day, {:.0} cartons/year ({:.1} % availability)",
        result.throughput.cartons_per_day,
        result.throughput.cartons_per_year,
        result.throughput.availability_pct
    );
    println!();

    println!("Annual TCO:");
    println!(
        "  RSC:         {:.0} total, {:.4} per box",
        result.rsc_tco.total, result.rsc_tco.per_box
    );
    println!(
        "  Wrap-Around: {:.0} total, {:.4} per box",
        result.wa_tco.total, result.wa_tco.per_box
    );
    println!();

    println!("Sustainability:");
    println!(
        "  RSC:         {:.3} kg/box, {:.0} kg CO2/year",
        result.rsc_sustainability.weight_kg_per_box, result.rsc_sustainability.co2_total_kg
    );
    println!(
        "  Wrap-Around: {:.3} kg/box, {:.0} kg CO2/year",
        result.wa_sustainability.weight_kg_per_box, result.wa_sustainability.co2_total_kg
    );
    println!();

    println!("Recommendation (winner: {}):", result.recommendation.winner);
    for finding in &result.recommendation.findings {
        println!("  - {}", finding);
    }
}
