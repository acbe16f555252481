//! # Grounding Grid CLI
//!
//! Runs an IEEE 80 grounding grid assessment from the terminal.
//!
//! ```text
//! grounding_cli                 # prompt for the main fields
//! grounding_cli substation.json # load a saved configuration
//! ```
//!
//! Prints a formatted report followed by the JSON result. On error, prints
//! the message and the JSON error and exits with status 1.

use std::io::{self, BufRead, Write};
use std::path::Path;

use grounding_core::calculations::{calculate, GridAssessment};
use grounding_core::materials::{ConductorMaterial, SoilType};
use grounding_core::{load_config, CalcError, CalcResult, GridConfig};

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_config() -> CalcResult<GridConfig> {
    let defaults = GridConfig::default();

    let width_m = prompt_f64(&format!("Grid width (m) [{}]: ", defaults.width_m), defaults.width_m);
    let length_m = prompt_f64(&format!("Grid length (m) [{}]: ", defaults.length_m), defaults.length_m);
    let rho1_ohm_m = prompt_f64(
        &format!("Upper-layer resistivity (ohm-m) [{}]: ", defaults.rho1_ohm_m),
        defaults.rho1_ohm_m,
    );
    let rho2_ohm_m = prompt_f64(
        &format!("Lower-layer resistivity (ohm-m) [{}]: ", defaults.rho2_ohm_m),
        defaults.rho2_ohm_m,
    );
    let mesh_current_a = prompt_f64(
        &format!("Grid current (A) [{}]: ", defaults.mesh_current_a),
        defaults.mesh_current_a,
    );
    let fault_duration_s = prompt_f64(
        &format!("Fault duration (s) [{}]: ", defaults.fault_duration_s),
        defaults.fault_duration_s,
    );
    let min_mesh_resistance_ohm = prompt_f64(
        &format!("Target grid resistance (ohm) [{}]: ", defaults.min_mesh_resistance_ohm),
        defaults.min_mesh_resistance_ohm,
    );
    let rods = prompt_u32(&format!("Ground rods [{}]: ", defaults.rods), defaults.rods);

    let soil = match read_line(&format!("Surface soil [{}]: ", defaults.soil)) {
        Some(name) => SoilType::from_str_flexible(&name)?,
        None => defaults.soil,
    };
    let conductor = match read_line(&format!("Conductor material [{}]: ", defaults.conductor)) {
        Some(name) => ConductorMaterial::from_str_flexible(&name)?,
        None => defaults.conductor,
    };

    Ok(GridConfig {
        width_m,
        length_m,
        rho1_ohm_m,
        rho2_ohm_m,
        mesh_current_a,
        fault_duration_s,
        min_mesh_resistance_ohm,
        rods,
        soil,
        conductor,
        ..defaults
    })
}

fn print_report(config: &GridConfig, result: &GridAssessment) {
    println!("═══════════════════════════════════════");
    println!("  GROUNDING GRID ASSESSMENT (IEEE 80)");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Grid:      {:.1} x {:.1} m, spacing {:.1} m, depth {:.2} m",
        config.width_m, config.length_m, config.conductor_spacing_m, config.burial_depth_m);
    println!("  Soil:      rho1 = {:.0}, rho2 = {:.0} ohm-m, surface {}",
        config.rho1_ohm_m, config.rho2_ohm_m, config.soil);
    println!("  Fault:     {:.0} A for {:.2} s", config.mesh_current_a, config.fault_duration_s);
    println!("  Conductor: {}, {} rods", config.conductor, config.rods);
    println!();
    println!("Soil Model:");
    println!("  alpha = {:.3}, beta = {:.3}, rho_a = {:.1} ohm-m",
        result.apparent_resistivity.alpha,
        result.apparent_resistivity.beta,
        result.apparent_resistivity.rho_apparent_ohm_m
    );
    println!("  Cs    = {:.4}", result.correction_factor);
    println!();
    println!("Conductor:");
    println!("  Section  = {:.3} mm²", result.cable_section_mm2);
    println!("  Diameter = {:.5} m", result.cable_diameter_m);
    println!();
    println!("Grid:");
    println!("  Km = {:.4}, Ki = {:.3}, Ks = {:.4}", result.km, result.ki, result.ks);
    println!("  Rg (proposed) = {:.3} ohm", result.proposed_resistance_ohm);
    println!("  Sized side    = {:.0} m", result.sized_grid_length_m);
    println!("  Lt            = {:.0} m", result.total_conductor_length_m);
    println!("  Rg (final)    = {:.3} ohm", result.final_resistance_ohm);
    println!("  GPR           = {:.0} V", result.gpr_v);
    println!();
    println!("Safety Checks:");
    println!("  Touch: {:.2} ({:.0}/{:.0} V) {}",
        result.touch_unity,
        result.touch_voltage_mesh_v,
        result.tolerable_touch_v,
        status_icon(result.touch_unity <= 1.0)
    );
    println!("  Step:  {:.2} ({:.0}/{:.0} V) {}",
        result.step_unity,
        result.step_voltage_mesh_v,
        result.tolerable_step_v,
        status_icon(result.step_unity <= 1.0)
    );
    println!("  GPR below touch limit: {}", status_icon(result.gpr_within_touch_limit()));
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {} (governs: {})",
        if result.passes() { "PASS" } else { "FAIL" },
        result.governing_condition()
    );
    println!("═══════════════════════════════════════");
}

fn report_error(e: &CalcError) -> ! {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    std::process::exit(1);
}

fn main() {
    println!("Grounding Grid Calculator - IEEE Std 80-2013");
    println!("============================================");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path)),
        None => prompt_config(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => report_error(&e),
    };

    println!();
    match calculate(&config) {
        Ok(result) => {
            print_report(&config, &result);

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => report_error(&e),
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
