//! # IEEE Std 80-2013 Formulas
//!
//! Plain numeric equations used by the grounding calculations. Functions take
//! raw `f64` arguments in the fixed unit set and never validate: the
//! configuration-level wrappers in [`crate::calculations`] check the domain
//! before calling into this module.
//!
//! ## Notation
//!
//! - `ρ1`, `ρ2` = Upper/lower soil layer resistivity (Ω·m)
//! - `ρs` = Surface material resistivity (Ω·m)
//! - `Cs` = Surface layer derating factor
//! - `h` = Grid burial depth (m)
//! - `A` = Grid area (m²)
//! - `D` = Spacing between parallel conductors (m)
//! - `d` = Conductor diameter (m)
//! - `n` = Geometric conductor count
//! - `IG` = Maximum grid current (A)
//! - `tc`, `ts` = Fault / shock duration (s)
//! - `LM` = Effective buried conductor length (m)
//!
//! ## References
//!
//! - IEEE Std 80-2013, Guide for Safety in AC Substation Grounding

use std::f64::consts::PI;

/// Body-current constant k = 0.116 for a 50 kg person (IEEE 80 Eq. 29/32)
pub const BODY_CONSTANT_50KG: f64 = 0.116;

/// Body resistance RB (Ω)
pub const BODY_RESISTANCE_OHM: f64 = 1000.0;

/// Reference depth h0 for the Kh correction (m)
pub const REFERENCE_DEPTH_M: f64 = 1.0;

/// Equivalent horizontal conductor length credited per ground rod (m)
pub const ROD_EQUIVALENT_LENGTH_M: f64 = 3.0;

/// Lower bound applied to the two resistance terms of Eq. 57
pub const MIN_RESISTANCE_TERM: f64 = 0.001;

/// Lower bound applied to the conductor length of Eq. 57 (m)
pub const MIN_EFFECTIVE_LENGTH_M: f64 = 1.0;

/// Constant of the conductor sizing equation in kcmil form (Eq. 37)
const SECTION_CONSTANT_KCMIL: f64 = 197.4;

/// kcmil → mm²
const KCMIL_TO_MM2: f64 = 0.000506707;

/// Surface layer thickness constant of Eq. 27 (m)
const SURFACE_LAYER_CONSTANT_M: f64 = 0.09;

// =============================================================================
// SOIL
// =============================================================================

/// Two-layer soil decomposition used to pick an apparent resistivity.
///
/// # Formulas
/// - r = √(A/π)
/// - α = r / d1
/// - β = ρ2 / ρ1
/// - ρa = N·ρ1
///
/// # Returns
/// (α, β, ρa)
#[inline]
pub fn apparent_resistivity(area: f64, d1: f64, rho1: f64, rho2: f64, n: f64) -> (f64, f64, f64) {
    let r = (area / PI).sqrt();
    (r / d1, rho2 / rho1, n * rho1)
}

/// Surface layer derating factor (Eq. 27)
///
/// ```text
/// Cs = 1 - 0.09(1 - ρ2/ρ1) / (2h + 0.09)
/// ```
#[inline]
pub fn surface_derating_factor(rho1: f64, rho2: f64, h: f64) -> f64 {
    1.0 - (SURFACE_LAYER_CONSTANT_M * (1.0 - rho2 / rho1)) / (2.0 * h + SURFACE_LAYER_CONSTANT_M)
}

// =============================================================================
// TOLERABLE VOLTAGES (50 kg BODY)
// =============================================================================

/// Tolerable step voltage for a 50 kg body (Eq. 29)
///
/// ```text
/// Estep50 = (1000 + 6·Cs·ρs) · 0.116 / √ts
/// ```
#[inline]
pub fn step_voltage_50kg(cs: f64, rho_s: f64, ts: f64) -> f64 {
    (BODY_RESISTANCE_OHM + 6.0 * cs * rho_s) * (BODY_CONSTANT_50KG / ts.sqrt())
}

/// Tolerable touch voltage for a 50 kg body (Eq. 32)
///
/// ```text
/// Etouch50 = (1000 + 1.5·Cs·ρs) · 0.116 / √ts
/// ```
#[inline]
pub fn touch_voltage_50kg(cs: f64, rho_s: f64, ts: f64) -> f64 {
    (BODY_RESISTANCE_OHM + 1.5 * cs * rho_s) * (BODY_CONSTANT_50KG / ts.sqrt())
}

// =============================================================================
// CONDUCTOR SIZING
// =============================================================================

/// Minimum conductor cross-section for the fault current (Eq. 37), in mm²
///
/// ```text
/// T0 = TCAP / (tc·αr·ρr)
/// T1 = (K0 + Tm) / (K0 + Ta)
/// A  = I · 197.4 / √(T0·ln T1) · 0.000506707
/// ```
///
/// # Arguments
/// * `current` - Fault current (A)
/// * `tcap` - Thermal capacity per unit volume (J/(cm³·°C))
/// * `tc` - Current duration (s)
/// * `alpha_r` - Thermal coefficient of resistivity (1/°C)
/// * `rho_r` - Conductor resistivity at reference temperature (µΩ·cm)
/// * `k0` - 1/α0 (°C)
/// * `tm` - Maximum allowable temperature (°C)
/// * `ta` - Ambient temperature (°C)
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn conductor_section_mm2(
    current: f64,
    tcap: f64,
    tc: f64,
    alpha_r: f64,
    rho_r: f64,
    k0: f64,
    tm: f64,
    ta: f64,
) -> f64 {
    let t0 = tcap / (tc * alpha_r * rho_r);
    let t1 = (k0 + tm) / (k0 + ta);
    current * (SECTION_CONSTANT_KCMIL / (t0 * t1.ln()).sqrt()) * KCMIL_TO_MM2
}

/// Diameter of a round conductor with the given section (mm² in, m out)
#[inline]
pub fn conductor_diameter_m(section_mm2: f64) -> f64 {
    2.0 * (section_mm2 / PI).sqrt() * 0.001
}

// =============================================================================
// GRID RESISTANCE
// =============================================================================

/// Grid resistance (Eq. 57)
///
/// ```text
/// Rg = ρ2 · (1/L + 1/√(20A) · (1 + 1/(1 + h·√(20/A))))
/// ```
///
/// Both bracketed terms are floored at 0.001 and L at 1.0 so that tiny or
/// degenerate grids stay finite.
#[inline]
pub fn grid_resistance(rho2: f64, area: f64, h: f64, length: f64) -> f64 {
    let eq1 = (1.0 / (20.0 * area).sqrt()).max(MIN_RESISTANCE_TERM);
    let eq2 = (1.0 / (1.0 + h * (20.0 / area).sqrt())).max(MIN_RESISTANCE_TERM);
    let effective_length = length.max(MIN_EFFECTIVE_LENGTH_M);

    rho2 * (1.0 / effective_length + eq1 * (1.0 + eq2))
}

// =============================================================================
// MESH FACTORS
// =============================================================================

/// Terms T1 + T2 - T3 inside the first logarithm of Km.
///
/// ```text
/// D²/(16·h·d) + (D + 2h)²/(8·D·d) - h/(4·d)
/// ```
#[inline]
pub fn km_spacing_terms(spacing: f64, h: f64, d: f64) -> f64 {
    let t1 = (spacing * spacing) / (16.0 * h * d);
    let t2 = (spacing + 2.0 * h).powi(2) / (8.0 * spacing * d);
    let t3 = h / (4.0 * d);
    t1 + t2 - t3
}

/// Geometric spacing factor Km (Eq. 86)
///
/// ```text
/// Kii = (2n)^(-2/n)
/// Kh  = √(1 + h/h0)
/// Km  = 1/(2π) · [ln(T1 + T2 - T3) + Kii/Kh · ln(8/(π(2n - 1)))]
/// ```
#[inline]
pub fn km_factor(spacing: f64, h: f64, d: f64, n: f64) -> f64 {
    let kii = (2.0 * n).powf(-2.0 / n);
    let kh = (1.0 + h / REFERENCE_DEPTH_M).sqrt();

    (1.0 / (2.0 * PI)) * (km_spacing_terms(spacing, h, d).ln() + (kii / kh) * (8.0 / (PI * (2.0 * n - 1.0))).ln())
}

/// Irregularity factor Ki (Eq. 94)
///
/// ```text
/// Ki = 0.644 + 0.148·√(nw·nl)
/// ```
#[inline]
pub fn ki_factor(n_width: f64, n_length: f64) -> f64 {
    0.644 + 0.148 * (n_width * n_length).sqrt()
}

/// Spacing factor for step voltage Ks (Eq. 99)
///
/// ```text
/// Ks = 1/(2πh) + 1/(D + h) + 1/D · 0.5^(n-2)
/// ```
///
/// Note: only the first term is scaled by 1/π.
#[inline]
pub fn ks_factor(spacing: f64, h: f64, n: f64) -> f64 {
    let p1 = (1.0 / PI) * (1.0 / (2.0 * h));
    let p2 = 1.0 / (spacing + h);
    let p3 = (1.0 / spacing) * 0.5_f64.powf(n - 2.0);
    p1 + p2 + p3
}

// =============================================================================
// MESH VOLTAGES AND GPR
// =============================================================================

/// Mesh touch or step voltage (Eq. 85 / Eq. 97)
///
/// ```text
/// E = ρ · IG · K · Ki / L
/// ```
///
/// Pass Km for the touch (mesh) voltage and Ks for the step voltage.
#[inline]
pub fn mesh_voltage(rho: f64, current: f64, k: f64, ki: f64, length: f64) -> f64 {
    rho * current * k * ki / length
}

/// Ground potential rise GPR = IG · Rg
#[inline]
pub fn ground_potential_rise(resistance: f64, current: f64) -> f64 {
    resistance * current
}
