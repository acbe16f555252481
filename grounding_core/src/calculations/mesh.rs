//! # Mesh Factors, Mesh Voltages and GPR
//!
//! Geometric factors Km, Ki, Ks of the proposed grid, the total conductor
//! length from the sizing search, and the voltages that depend on them.
//!
//! ## Calling Order
//!
//! The GPR must be evaluated on a configuration whose grid length is the
//! total conductor length:
//!
//! ```rust
//! use grounding_core::calculations::mesh::{gpr, overall_conductor_length};
//! use grounding_core::calculations::resistance::ground_resistance;
//! use grounding_core::config::GridConfig;
//!
//! let config = GridConfig::default();
//! let lt = overall_conductor_length(&config).unwrap();
//! let final_config = config.with_length(lt);
//!
//! let rise = gpr(&final_config).unwrap();
//! assert_eq!(rise, ground_resistance(&final_config).unwrap() * 1200.0);
//! ```

use crate::calculations::conductor::cable_diameter;
use crate::calculations::resistance::{ground_resistance, mesh_calc};
use crate::config::GridConfig;
use crate::equations::ieee80;
use crate::errors::{CalcError, CalcResult};

/// Geometric spacing factor Km (Eq. 86).
///
/// Needs a non-zero conductor diameter (so a non-zero grid current), at least
/// one conductor run (n >= 1) and a positive, finite argument for the spacing
/// logarithm. Each is reported as `InvalidInput` otherwise.
pub fn km_factor(config: &GridConfig) -> CalcResult<f64> {
    let diameter = cable_diameter(config)?;
    if diameter <= 0.0 {
        return Err(CalcError::invalid_input(
            "mesh_current_a",
            config.mesh_current_a.to_string(),
            "Km needs a conductor diameter above zero; a zero grid current sizes no conductor",
        ));
    }

    let n = config.max_conductor_count();

    if n < 1.0 {
        return Err(CalcError::invalid_input(
            "conductor_spacing_m",
            config.conductor_spacing_m.to_string(),
            format!("Grid needs at least one conductor run per axis, got n = {}", n),
        ));
    }

    let spacing_terms = ieee80::km_spacing_terms(config.conductor_spacing_m, config.burial_depth_m, diameter);
    if !(spacing_terms > 0.0 && spacing_terms.is_finite()) {
        return Err(CalcError::invalid_input(
            "conductor_spacing_m",
            config.conductor_spacing_m.to_string(),
            "Spacing, depth and conductor diameter give a non-positive or non-finite Km log argument",
        ));
    }

    Ok(ieee80::km_factor(
        config.conductor_spacing_m,
        config.burial_depth_m,
        diameter,
        n,
    ))
}

/// Irregularity factor Ki (Eq. 94).
pub fn ki_factor(config: &GridConfig) -> CalcResult<f64> {
    config.validate()?;
    Ok(ieee80::ki_factor(
        config.conductors_along_width(),
        config.conductors_along_length(),
    ))
}

/// Step spacing factor Ks (Eq. 99).
pub fn ks_factor(config: &GridConfig) -> CalcResult<f64> {
    config.validate()?;
    Ok(ieee80::ks_factor(
        config.conductor_spacing_m,
        config.burial_depth_m,
        config.max_conductor_count(),
    ))
}

/// Total conductor length Lt = sized grid side + 3 m per rod.
pub fn overall_conductor_length(config: &GridConfig) -> CalcResult<f64> {
    let grid_length = mesh_calc(config)?;
    Ok(grid_length + f64::from(config.rods) * ieee80::ROD_EQUIVALENT_LENGTH_M)
}

/// Mesh touch voltage Em (Eq. 85), in volts.
pub fn touch_voltage_mesh(config: &GridConfig) -> CalcResult<f64> {
    let km = km_factor(config)?;
    let ki = ki_factor(config)?;
    let lt = overall_conductor_length(config)?;
    Ok(ieee80::mesh_voltage(config.rho2_ohm_m, config.mesh_current_a, km, ki, lt))
}

/// Mesh step voltage Es (Eq. 97), in volts.
pub fn step_voltage_mesh(config: &GridConfig) -> CalcResult<f64> {
    let ks = ks_factor(config)?;
    let ki = ki_factor(config)?;
    let lt = overall_conductor_length(config)?;
    Ok(ieee80::mesh_voltage(config.rho2_ohm_m, config.mesh_current_a, ks, ki, lt))
}

/// Ground potential rise (V) of the configuration as given.
///
/// The length is not replaced automatically; see the module docs.
pub fn gpr(config: &GridConfig) -> CalcResult<f64> {
    let resistance = ground_resistance(config)?;
    Ok(ieee80::ground_potential_rise(resistance, config.mesh_current_a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        ((actual - expected) / expected).abs() < 1e-9
    }

    #[test]
    fn test_factors_reference() {
        let config = GridConfig::default();
        assert!(close(km_factor(&config).unwrap(), 1.1556614988263534));
        assert!(close(ki_factor(&config).unwrap(), 2.124));
        assert!(close(ks_factor(&config).unwrap(), 0.45220125523140975));
    }

    #[test]
    fn test_km_requires_one_conductor_run() {
        let config = GridConfig::default().with_grid_size(3.0, 3.0);
        let err = km_factor(&config).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "conductor_spacing_m"));
    }

    #[test]
    fn test_zero_current_rejected_by_km() {
        let mut config = GridConfig::default();
        config.mesh_current_a = 0.0;
        assert!(config.validate().is_ok());

        let err = km_factor(&config).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "mesh_current_a"));
        assert!(matches!(
            touch_voltage_mesh(&config),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "mesh_current_a"
        ));
    }

    #[test]
    fn test_overflowing_grid_rejected() {
        let config = GridConfig::default().with_grid_size(1e200, 1e200);
        assert!(matches!(ki_factor(&config), Err(CalcError::InvalidInput { .. })));
        assert!(matches!(
            crate::calculations::safety::apparent_resistivity(&config),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_zero_current_step_voltage_is_zero() {
        // Ks does not depend on the conductor diameter
        let mut config = GridConfig::default();
        config.mesh_current_a = 0.0;
        assert_eq!(step_voltage_mesh(&config).unwrap(), 0.0);
    }

    #[test]
    fn test_km_uses_larger_axis() {
        let config = GridConfig::default();
        let long = config.with_length(140.0);
        let n_long = long.max_conductor_count();
        assert_eq!(n_long, 20.0);
        assert!(km_factor(&long).unwrap() != km_factor(&config).unwrap());
    }

    #[test]
    fn test_overall_conductor_length_reference() {
        let lt = overall_conductor_length(&GridConfig::default()).unwrap();
        assert_eq!(lt, 238.0);
    }

    #[test]
    fn test_rods_add_three_meters_each() {
        let mut config = GridConfig::default();
        config.rods = 0;
        let bare = overall_conductor_length(&config).unwrap();
        config.rods = 4;
        assert_eq!(overall_conductor_length(&config).unwrap(), bare + 12.0);
    }

    #[test]
    fn test_mesh_voltages_reference() {
        let config = GridConfig::default();
        assert!(close(touch_voltage_mesh(&config).unwrap(), 4950.5042490901));
        assert!(close(step_voltage_mesh(&config).unwrap(), 1937.0933770316258));
    }

    #[test]
    fn test_gpr_end_to_end() {
        let config = GridConfig::default();
        let lt = overall_conductor_length(&config).unwrap();
        let final_config = config.with_length(lt);

        let rise = gpr(&final_config).unwrap();
        assert_eq!(rise, ground_resistance(&final_config).unwrap() * 1200.0);
        assert!(close(rise, 3665.7477044109983));
    }

    #[test]
    fn test_mesh_voltage_propagates_not_sizable() {
        let mut config = GridConfig::default();
        config.min_mesh_resistance_ohm = 0.5;
        assert!(matches!(touch_voltage_mesh(&config), Err(CalcError::NotSizable { .. })));
    }

    #[test]
    fn test_idempotent() {
        let config = GridConfig::default();
        assert_eq!(
            touch_voltage_mesh(&config).unwrap().to_bits(),
            touch_voltage_mesh(&config).unwrap().to_bits()
        );
        assert_eq!(gpr(&config).unwrap().to_bits(), gpr(&config).unwrap().to_bits());
    }
}
