//! # Soil Model and Tolerable Voltages
//!
//! Apparent resistivity decomposition, surface derating factor Cs and the
//! tolerable step/touch voltages for a 50 kg body.
//!
//! ## Example
//!
//! ```rust
//! use grounding_core::calculations::safety::{correction_factor, touch_voltage};
//! use grounding_core::config::GridConfig;
//!
//! let config = GridConfig::default();
//! let cs = correction_factor(&config).unwrap();
//! let touch = touch_voltage(&config).unwrap();
//! assert!(cs < 1.0);
//! assert!(touch > 800.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::equations::ieee80;
use crate::errors::CalcResult;

/// Two-layer soil decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApparentResistivity {
    /// Equivalent grid radius over the mesh diameter reference, r/d1
    pub alpha: f64,
    /// Resistivity ratio ρ2/ρ1
    pub beta: f64,
    /// Apparent resistivity ρa = N·ρ1 (Ω·m)
    pub rho_apparent_ohm_m: f64,
}

/// Decompose the two-layer soil into (α, β, ρa).
pub fn apparent_resistivity(config: &GridConfig) -> CalcResult<ApparentResistivity> {
    config.validate()?;

    let (alpha, beta, rho_apparent_ohm_m) = ieee80::apparent_resistivity(
        config.area_m2(),
        config.mesh_diameter_m,
        config.rho1_ohm_m,
        config.rho2_ohm_m,
        config.layer_coefficient,
    );
    Ok(ApparentResistivity {
        alpha,
        beta,
        rho_apparent_ohm_m,
    })
}

/// Surface layer derating factor Cs (Eq. 27).
pub fn correction_factor(config: &GridConfig) -> CalcResult<f64> {
    config.validate()?;
    Ok(ieee80::surface_derating_factor(
        config.rho1_ohm_m,
        config.rho2_ohm_m,
        config.burial_depth_m,
    ))
}

/// Tolerable step voltage for a 50 kg body (Eq. 29), in volts.
pub fn step_voltage(config: &GridConfig) -> CalcResult<f64> {
    let cs = correction_factor(config)?;
    Ok(ieee80::step_voltage_50kg(
        cs,
        config.soil.resistivity_ohm_m(),
        config.fault_duration_s,
    ))
}

/// Tolerable touch voltage for a 50 kg body (Eq. 32), in volts.
pub fn touch_voltage(config: &GridConfig) -> CalcResult<f64> {
    let cs = correction_factor(config)?;
    Ok(ieee80::touch_voltage_50kg(
        cs,
        config.soil.resistivity_ohm_m(),
        config.fault_duration_s,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::materials::SoilType;

    #[test]
    fn test_apparent_resistivity_reference() {
        let result = apparent_resistivity(&GridConfig::default()).unwrap();
        assert!((result.alpha - 387.1889298857152).abs() < 1e-9);
        assert!((result.beta - 0.16).abs() < 1e-12);
        assert!((result.rho_apparent_ohm_m - 1675.0).abs() < 1e-9);
    }

    #[test]
    fn test_correction_factor_reference() {
        let cs = correction_factor(&GridConfig::default()).unwrap();
        assert!((cs - 0.930642201834862).abs() < 1e-12);
    }

    #[test]
    fn test_tolerable_voltages_reference() {
        let config = GridConfig::default();
        let step = step_voltage(&config).unwrap();
        let touch = touch_voltage(&config).unwrap();
        assert!((step - 2912.121580811065).abs() < 1e-6);
        assert!((touch - 851.0669751292255).abs() < 1e-6);
    }

    #[test]
    fn test_soil_selection_changes_limits() {
        let stone = GridConfig::default();
        let granite = stone.with_soil(SoilType::Granite);
        assert!(touch_voltage(&granite).unwrap() > touch_voltage(&stone).unwrap());

        // Unspecified soil carries the crushed-stone resistivity
        let generic = stone.with_soil(SoilType::Unspecified);
        assert_eq!(step_voltage(&generic).unwrap(), step_voltage(&stone).unwrap());
    }

    #[test]
    fn test_longer_fault_lowers_limits() {
        let config = GridConfig::default();
        let mut slow = config.clone();
        slow.fault_duration_s = 2.0;
        assert!(step_voltage(&slow).unwrap() < step_voltage(&config).unwrap());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut config = GridConfig::default();
        config.fault_duration_s = 0.0;
        assert!(matches!(step_voltage(&config), Err(CalcError::InvalidInput { .. })));
        assert!(matches!(touch_voltage(&config), Err(CalcError::InvalidInput { .. })));
    }

    #[test]
    fn test_idempotent() {
        let config = GridConfig::default();
        assert_eq!(
            correction_factor(&config).unwrap().to_bits(),
            correction_factor(&config).unwrap().to_bits()
        );
        assert_eq!(apparent_resistivity(&config).unwrap(), apparent_resistivity(&config).unwrap());
    }
}
