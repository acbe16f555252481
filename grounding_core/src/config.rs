//! # Grid Configuration
//!
//! [`GridConfig`] is the single input record every formula reads. It holds
//! the grid geometry, the two-layer soil and fault parameters, the thermal
//! limits used for conductor sizing, and the soil/conductor selectors.
//!
//! A configuration is a value. Multi-stage evaluations never mutate it; they
//! derive a new configuration with one of the `with_*` methods (the
//! grid-sizing search uses [`GridConfig::with_grid_size`] for each trial, the
//! GPR stage uses [`GridConfig::with_length`] for the total conductor length).
//!
//! Area and conductor counts are computed from the current width and length
//! on every access, so a derived configuration can never carry a stale area.
//!
//! ## JSON Example
//!
//! Missing fields fall back to the reference configuration:
//!
//! ```json
//! {
//!   "width_m": 70.0,
//!   "length_m": 70.0,
//!   "rho2_ohm_m": 400.0,
//!   "mesh_current_a": 1200.0,
//!   "soil": "CrushedStone",
//!   "conductor": "CommercialCopper"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{ConductorMaterial, SoilType};

/// Grounding grid design input (meters, ohms, amperes, seconds, °C).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid width (m)
    pub width_m: f64,

    /// Grid length (m)
    pub length_m: f64,

    /// Upper-layer soil resistivity ρ1 (Ω·m)
    pub rho1_ohm_m: f64,

    /// Lower-layer soil resistivity ρ2 (Ω·m)
    pub rho2_ohm_m: f64,

    /// Layering coefficient N for the apparent resistivity (dimensionless)
    pub layer_coefficient: f64,

    /// Maximum grid current IG (A)
    pub mesh_current_a: f64,

    /// Fault (shock) duration tc = ts (s)
    pub fault_duration_s: f64,

    /// Target grid resistance the sizing search must reach (Ω)
    pub min_mesh_resistance_ohm: f64,

    /// Maximum allowable conductor temperature Tm (°C)
    pub max_mesh_temp_c: f64,

    /// Ambient temperature Ta (°C)
    pub ambient_temp_c: f64,

    /// Burial depth of the grid h (m)
    pub burial_depth_m: f64,

    /// Equivalent mesh diameter reference d1 (m)
    pub mesh_diameter_m: f64,

    /// Spacing between parallel conductors D (m)
    pub conductor_spacing_m: f64,

    /// Number of vertical ground rods
    pub rods: u32,

    /// Surface soil category (table selector)
    pub soil: SoilType,

    /// Grid conductor material (table selector)
    pub conductor: ConductorMaterial,
}

impl Default for GridConfig {
    /// The reference configuration: 70 m x 70 m grid, 1200 A, crushed stone,
    /// commercial hard-drawn copper.
    fn default() -> Self {
        GridConfig {
            width_m: 70.0,
            length_m: 70.0,
            rho1_ohm_m: 2500.0,
            rho2_ohm_m: 400.0,
            layer_coefficient: 0.67,
            mesh_current_a: 1200.0,
            fault_duration_s: 0.5,
            min_mesh_resistance_ohm: 2.78,
            max_mesh_temp_c: 850.0,
            ambient_temp_c: 40.0,
            burial_depth_m: 0.5,
            mesh_diameter_m: 0.102,
            conductor_spacing_m: 7.0,
            rods: 10,
            soil: SoilType::CrushedStone,
            conductor: ConductorMaterial::CommercialCopper,
        }
    }
}

impl GridConfig {
    /// Validate input parameters.
    ///
    /// Checks the invariants shared by every formula. Operation-specific
    /// domain limits (temperatures for conductor sizing, conductor count for
    /// Km) are checked by those operations.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("width_m", self.width_m, "Grid width must be positive"),
            ("length_m", self.length_m, "Grid length must be positive"),
            ("rho1_ohm_m", self.rho1_ohm_m, "Upper-layer resistivity must be positive"),
            ("rho2_ohm_m", self.rho2_ohm_m, "Lower-layer resistivity must be positive"),
            ("fault_duration_s", self.fault_duration_s, "Fault duration must be positive"),
            (
                "min_mesh_resistance_ohm",
                self.min_mesh_resistance_ohm,
                "Target grid resistance must be positive",
            ),
            ("burial_depth_m", self.burial_depth_m, "Burial depth must be positive"),
            ("mesh_diameter_m", self.mesh_diameter_m, "Mesh diameter reference must be positive"),
            ("conductor_spacing_m", self.conductor_spacing_m, "Conductor spacing must be positive"),
        ];
        for (field, value, reason) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
        }

        let non_negative = [
            ("layer_coefficient", self.layer_coefficient, "Layering coefficient cannot be negative"),
            ("mesh_current_a", self.mesh_current_a, "Grid current cannot be negative"),
        ];
        for (field, value, reason) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), reason));
            }
        }

        for (field, value) in [
            ("max_mesh_temp_c", self.max_mesh_temp_c),
            ("ambient_temp_c", self.ambient_temp_c),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Temperature must be finite"));
            }
        }

        let conductor_product = self.conductors_along_width() * self.conductors_along_length();
        if !self.area_m2().is_finite() || !conductor_product.is_finite() {
            return Err(CalcError::invalid_input(
                "width_m",
                format!("{} x {}", self.width_m, self.length_m),
                "Grid area or conductor count overflows",
            ));
        }
        Ok(())
    }

    /// Grid plan area A = width × length (m²)
    pub fn area_m2(&self) -> f64 {
        self.width_m * self.length_m
    }

    /// Number of conductor runs across the width
    pub fn conductors_along_width(&self) -> f64 {
        self.width_m / self.conductor_spacing_m
    }

    /// Number of conductor runs along the length
    pub fn conductors_along_length(&self) -> f64 {
        self.length_m / self.conductor_spacing_m
    }

    /// Geometric conductor count n = max(n_width, n_length)
    pub fn max_conductor_count(&self) -> f64 {
        self.conductors_along_width().max(self.conductors_along_length())
    }

    /// Copy with a new grid width
    pub fn with_width(&self, width_m: f64) -> Self {
        GridConfig {
            width_m,
            ..self.clone()
        }
    }

    /// Copy with a new grid length
    pub fn with_length(&self, length_m: f64) -> Self {
        GridConfig {
            length_m,
            ..self.clone()
        }
    }

    /// Copy with new width and length
    pub fn with_grid_size(&self, width_m: f64, length_m: f64) -> Self {
        GridConfig {
            width_m,
            length_m,
            ..self.clone()
        }
    }

    /// Copy with a different surface soil
    pub fn with_soil(&self, soil: SoilType) -> Self {
        GridConfig { soil, ..self.clone() }
    }

    /// Copy with a different conductor material
    pub fn with_conductor(&self, conductor: ConductorMaterial) -> Self {
        GridConfig {
            conductor,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_configuration_is_valid() {
        let config = GridConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.area_m2(), 4900.0);
        assert_eq!(config.conductors_along_width(), 10.0);
        assert_eq!(config.conductors_along_length(), 10.0);
    }

    #[test]
    fn test_derived_values_follow_overrides() {
        let config = GridConfig::default().with_length(140.0);
        assert_eq!(config.area_m2(), 9800.0);
        assert_eq!(config.conductors_along_length(), 20.0);
        assert_eq!(config.max_conductor_count(), 20.0);
        assert_eq!(config.width_m, 70.0);
    }

    #[test]
    fn test_overrides_leave_original_untouched() {
        let original = GridConfig::default();
        let trial = original.with_grid_size(1.0, 1.0);
        assert_eq!(trial.area_m2(), 1.0);
        assert_eq!(original.width_m, 70.0);
        assert_eq!(original.length_m, 70.0);

        let swapped = original
            .with_soil(SoilType::Granite)
            .with_conductor(ConductorMaterial::Steel1020)
            .with_width(35.0);
        assert_eq!(swapped.soil, SoilType::Granite);
        assert_eq!(swapped.conductor, ConductorMaterial::Steel1020);
        assert_eq!(swapped.area_m2(), 35.0 * 70.0);
    }

    #[test]
    fn test_invalid_spacing() {
        let mut config = GridConfig::default();
        config.conductor_spacing_m = 0.0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "conductor_spacing_m"));
    }

    #[test]
    fn test_invalid_duration_and_nan() {
        let mut config = GridConfig::default();
        config.fault_duration_s = -0.5;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.rho2_ohm_m = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = GridConfig::default();
        config.ambient_temp_c = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overflowing_geometry_rejected() {
        let huge = GridConfig::default().with_grid_size(1e200, 1e200);
        let err = huge.validate().unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "width_m"));

        let mut dense = GridConfig::default().with_grid_size(1e150, 1e150);
        dense.conductor_spacing_m = 1e-10;
        assert!(dense.area_m2().is_finite());
        assert!(dense.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "width_m": 50.0, "soil": "Granite", "rods": 4 }"#;
        let config: GridConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.width_m, 50.0);
        assert_eq!(config.length_m, 70.0);
        assert_eq!(config.soil, SoilType::Granite);
        assert_eq!(config.rods, 4);
        assert_eq!(config.conductor, ConductorMaterial::CommercialCopper);
    }

    #[test]
    fn test_serialization() {
        let config = GridConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let roundtrip: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}
