//! # Grid Assessment
//!
//! Runs every formula in dependency order for one configuration and checks
//! the mesh voltages against the tolerable 50 kg limits.
//!
//! ## Sequence
//!
//! 1. Apparent resistivity, Cs, tolerable step/touch voltages
//! 2. Conductor section and diameter
//! 3. Km, Ki, Ks and the resistance of the proposed grid
//! 4. Grid-sizing search and total conductor length Lt
//! 5. Mesh touch/step voltages over Lt
//! 6. A final configuration with length = Lt; its resistance and GPR
//!
//! ## Example
//!
//! ```rust
//! use grounding_core::calculations::assessment::calculate;
//! use grounding_core::config::GridConfig;
//!
//! let result = calculate(&GridConfig::default()).unwrap();
//! println!("Em = {:.0} V vs Etouch50 = {:.0} V", result.touch_voltage_mesh_v, result.tolerable_touch_v);
//! println!("Pass: {}", result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::conductor::{cable_diameter, cable_section};
use crate::calculations::mesh::{gpr, ki_factor, km_factor, ks_factor};
use crate::calculations::resistance::{ground_resistance, mesh_calc};
use crate::calculations::safety::{apparent_resistivity, correction_factor, step_voltage, touch_voltage, ApparentResistivity};
use crate::config::GridConfig;
use crate::equations::ieee80;
use crate::errors::CalcResult;

/// Results of a full grid assessment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "correction_factor": 0.9306,
///   "tolerable_touch_v": 851.07,
///   "touch_voltage_mesh_v": 4950.5,
///   "touch_unity": 5.82,
///   "gpr_v": 3665.7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridAssessment {
    /// α, β, ρa decomposition of the two-layer soil
    pub apparent_resistivity: ApparentResistivity,

    /// Surface layer derating factor Cs
    pub correction_factor: f64,

    /// Tolerable step voltage, 50 kg body (V)
    pub tolerable_step_v: f64,

    /// Tolerable touch voltage, 50 kg body (V)
    pub tolerable_touch_v: f64,

    /// Minimum conductor section (mm²)
    pub cable_section_mm2: f64,

    /// Conductor diameter (m)
    pub cable_diameter_m: f64,

    /// Geometric spacing factor Km
    pub km: f64,

    /// Irregularity factor Ki
    pub ki: f64,

    /// Step spacing factor Ks
    pub ks: f64,

    /// Resistance of the grid as proposed (Ω)
    pub proposed_resistance_ohm: f64,

    /// Smallest square grid side meeting the target resistance (m)
    pub sized_grid_length_m: f64,

    /// Sized grid length plus rod equivalent length (m)
    pub total_conductor_length_m: f64,

    /// Mesh touch voltage Em (V)
    pub touch_voltage_mesh_v: f64,

    /// Mesh step voltage Es (V)
    pub step_voltage_mesh_v: f64,

    /// Resistance with grid length = total conductor length (Ω)
    pub final_resistance_ohm: f64,

    /// Ground potential rise (V)
    pub gpr_v: f64,

    /// Em / Etouch50
    pub touch_unity: f64,

    /// Es / Estep50
    pub step_unity: f64,
}

impl GridAssessment {
    /// Check if both mesh voltages are within the tolerable limits (unity ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.touch_unity <= 1.0 && self.step_unity <= 1.0
    }

    /// GPR below the tolerable touch voltage means no further mesh analysis
    /// is needed for this design.
    pub fn gpr_within_touch_limit(&self) -> bool {
        self.gpr_v <= self.tolerable_touch_v
    }

    /// Name of the check with the highest unity ratio
    pub fn governing_condition(&self) -> &'static str {
        if self.touch_unity >= self.step_unity {
            "Touch"
        } else {
            "Step"
        }
    }
}

/// Assess a grid configuration.
///
/// # Returns
///
/// * `Ok(GridAssessment)` - All computed quantities and design checks
/// * `Err(CalcError)` - Invalid input, or `NotSizable` from the sizing search
pub fn calculate(config: &GridConfig) -> CalcResult<GridAssessment> {
    config.validate()?;

    let apparent = apparent_resistivity(config)?;
    let cs = correction_factor(config)?;
    let tolerable_step_v = step_voltage(config)?;
    let tolerable_touch_v = touch_voltage(config)?;

    let cable_section_mm2 = cable_section(config)?;
    let cable_diameter_m = cable_diameter(config)?;

    let km = km_factor(config)?;
    let ki = ki_factor(config)?;
    let ks = ks_factor(config)?;
    let proposed_resistance_ohm = ground_resistance(config)?;

    let sized_grid_length_m = mesh_calc(config)?;
    let total_conductor_length_m =
        sized_grid_length_m + f64::from(config.rods) * ieee80::ROD_EQUIVALENT_LENGTH_M;

    let touch_voltage_mesh_v = ieee80::mesh_voltage(
        config.rho2_ohm_m,
        config.mesh_current_a,
        km,
        ki,
        total_conductor_length_m,
    );
    let step_voltage_mesh_v = ieee80::mesh_voltage(
        config.rho2_ohm_m,
        config.mesh_current_a,
        ks,
        ki,
        total_conductor_length_m,
    );

    let final_config = config.with_length(total_conductor_length_m);
    let final_resistance_ohm = ground_resistance(&final_config)?;
    let gpr_v = gpr(&final_config)?;

    Ok(GridAssessment {
        apparent_resistivity: apparent,
        correction_factor: cs,
        tolerable_step_v,
        tolerable_touch_v,
        cable_section_mm2,
        cable_diameter_m,
        km,
        ki,
        ks,
        proposed_resistance_ohm,
        sized_grid_length_m,
        total_conductor_length_m,
        touch_voltage_mesh_v,
        step_voltage_mesh_v,
        final_resistance_ohm,
        gpr_v,
        touch_unity: touch_voltage_mesh_v / tolerable_touch_v,
        step_unity: step_voltage_mesh_v / tolerable_step_v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::mesh::{overall_conductor_length, step_voltage_mesh, touch_voltage_mesh};
    use crate::errors::CalcError;
    use crate::materials::SoilType;

    fn close(actual: f64, expected: f64) -> bool {
        ((actual - expected) / expected).abs() < 1e-9
    }

    #[test]
    fn test_reference_assessment() {
        let result = calculate(&GridConfig::default()).unwrap();

        assert!(close(result.correction_factor, 0.930642201834862));
        assert!(close(result.cable_section_mm2, 3.25774134110883));
        assert!(close(result.proposed_resistance_ohm, 8.230239117421327));
        assert_eq!(result.sized_grid_length_m, 208.0);
        assert_eq!(result.total_conductor_length_m, 238.0);
        assert!(close(result.final_resistance_ohm, 3.054789753675832));
        assert!(close(result.gpr_v, 3665.7477044109983));
    }

    #[test]
    fn test_matches_individual_operations() {
        let config = GridConfig::default();
        let result = calculate(&config).unwrap();
        assert_eq!(result.touch_voltage_mesh_v, touch_voltage_mesh(&config).unwrap());
        assert_eq!(result.step_voltage_mesh_v, step_voltage_mesh(&config).unwrap());
        assert_eq!(result.total_conductor_length_m, overall_conductor_length(&config).unwrap());
    }

    #[test]
    fn test_total_length_counts_rods() {
        let mut config = GridConfig::default();
        config.rods = 0;
        let result = calculate(&config).unwrap();
        assert_eq!(result.total_conductor_length_m, result.sized_grid_length_m);
    }

    #[test]
    fn test_zero_current_is_rejected() {
        let mut config = GridConfig::default();
        config.mesh_current_a = 0.0;
        let err = calculate(&config).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "mesh_current_a"));
    }

    #[test]
    fn test_reference_design_fails_touch() {
        let result = calculate(&GridConfig::default()).unwrap();

        // Em ≈ 4950 V against Etouch50 ≈ 851 V
        assert!(result.touch_unity > 5.0);
        assert!(!result.passes());
        assert!(!result.gpr_within_touch_limit());
        assert_eq!(result.governing_condition(), "Touch");
    }

    #[test]
    fn test_small_current_passes() {
        let mut config = GridConfig::default().with_soil(SoilType::Granite);
        config.mesh_current_a = 50.0;
        let result = calculate(&config).unwrap();
        assert!(result.passes(), "touch unity {}", result.touch_unity);
        assert!(result.gpr_within_touch_limit());
    }

    #[test]
    fn test_not_sizable_propagates() {
        let mut config = GridConfig::default();
        config.min_mesh_resistance_ohm = 0.5;
        assert!(matches!(calculate(&config), Err(CalcError::NotSizable { .. })));
    }

    #[test]
    fn test_invalid_input() {
        let mut config = GridConfig::default();
        config.burial_depth_m = 0.0;
        assert!(matches!(calculate(&config), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_serialization() {
        let result = calculate(&GridConfig::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"gpr_v\""));
        let roundtrip: GridAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(result.sized_grid_length_m, roundtrip.sized_grid_length_m);
        assert_eq!(result.touch_unity, roundtrip.touch_unity);
    }
}
