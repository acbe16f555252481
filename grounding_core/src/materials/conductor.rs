//! Conductor Material Constants (IEEE Std 80-2013 Table 1)
//!
//! Thermal and resistive constants used to size the grid conductor for the
//! fault current (Equation 37).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Grid conductor materials in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConductorMaterial {
    /// Copper, annealed soft-drawn
    AnnealedCopper,
    /// Copper, commercial hard-drawn
    CommercialCopper,
    CopperCladSteel,
    AluminumCladSteel,
    Steel1020,
    StainlessCladSteel,
    ZincCoatedSteel,
    StainlessSteel304,
}

impl ConductorMaterial {
    /// All conductor variants, in the same order as [`CONDUCTOR_TABLE`]
    pub const ALL: [ConductorMaterial; 8] = [
        ConductorMaterial::AnnealedCopper,
        ConductorMaterial::CommercialCopper,
        ConductorMaterial::CopperCladSteel,
        ConductorMaterial::AluminumCladSteel,
        ConductorMaterial::Steel1020,
        ConductorMaterial::StainlessCladSteel,
        ConductorMaterial::ZincCoatedSteel,
        ConductorMaterial::StainlessSteel304,
    ];

    /// Row position in [`CONDUCTOR_TABLE`]
    pub fn index(&self) -> usize {
        match self {
            ConductorMaterial::AnnealedCopper => 0,
            ConductorMaterial::CommercialCopper => 1,
            ConductorMaterial::CopperCladSteel => 2,
            ConductorMaterial::AluminumCladSteel => 3,
            ConductorMaterial::Steel1020 => 4,
            ConductorMaterial::StainlessCladSteel => 5,
            ConductorMaterial::ZincCoatedSteel => 6,
            ConductorMaterial::StainlessSteel304 => 7,
        }
    }

    /// Select a conductor by table row
    pub fn from_index(index: usize) -> CalcResult<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            CalcError::invalid_input(
                "conductor_index",
                index.to_string(),
                format!("Conductor table has {} rows (0..={})", Self::ALL.len(), Self::ALL.len() - 1),
            )
        })
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "ANNEALEDCOPPER" | "SOFTCOPPER" => Ok(ConductorMaterial::AnnealedCopper),
            "COMMERCIALCOPPER" | "HARDCOPPER" | "COPPER" => Ok(ConductorMaterial::CommercialCopper),
            "COPPERCLADSTEEL" | "CCS" => Ok(ConductorMaterial::CopperCladSteel),
            "ALUMINUMCLADSTEEL" | "ALUMINIUMCLADSTEEL" | "ACS" => Ok(ConductorMaterial::AluminumCladSteel),
            "STEEL1020" | "1020" | "STEEL" => Ok(ConductorMaterial::Steel1020),
            "STAINLESSCLADSTEEL" => Ok(ConductorMaterial::StainlessCladSteel),
            "ZINCCOATEDSTEEL" | "ZINC" | "GALVANIZEDSTEEL" => Ok(ConductorMaterial::ZincCoatedSteel),
            "STAINLESSSTEEL304" | "STAINLESS304" | "304" => Ok(ConductorMaterial::StainlessSteel304),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Table row for this material
    pub fn properties(&self) -> &'static ConductorProperties {
        &CONDUCTOR_TABLE[self.index()]
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.properties().label
    }
}

impl std::fmt::Display for ConductorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Material constants for one conductor (IEEE 80 Table 1, reference temperature 20 °C)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConductorProperties {
    pub material: ConductorMaterial,
    pub label: &'static str,
    /// Thermal coefficient of resistivity αr (1/°C)
    pub alpha_r: f64,
    /// K0 = 1/α0 (°C)
    pub k0: f64,
    /// Resistivity at reference temperature ρr (µΩ·cm)
    pub rho_r: f64,
    /// Thermal capacity per unit volume TCAP (J/(cm³·°C))
    pub tcap: f64,
}

/// Conductor constants table, indexed by [`ConductorMaterial::index`]
pub static CONDUCTOR_TABLE: [ConductorProperties; 8] = [
    ConductorProperties {
        material: ConductorMaterial::AnnealedCopper,
        label: "Copper, annealed soft-drawn",
        alpha_r: 0.00393,
        k0: 234.0,
        rho_r: 1.72,
        tcap: 3.4,
    },
    ConductorProperties {
        material: ConductorMaterial::CommercialCopper,
        label: "Copper, commercial hard-drawn",
        alpha_r: 0.00381,
        k0: 242.0,
        rho_r: 1.78,
        tcap: 3.4,
    },
    ConductorProperties {
        material: ConductorMaterial::CopperCladSteel,
        label: "Copper-clad steel",
        alpha_r: 0.00378,
        k0: 245.0,
        rho_r: 10.1,
        tcap: 3.8,
    },
    ConductorProperties {
        material: ConductorMaterial::AluminumCladSteel,
        label: "Aluminum-clad steel",
        alpha_r: 0.0036,
        k0: 258.0,
        rho_r: 8.48,
        tcap: 3.561,
    },
    ConductorProperties {
        material: ConductorMaterial::Steel1020,
        label: "Steel 1020",
        alpha_r: 0.00377,
        k0: 245.0,
        rho_r: 15.9,
        tcap: 3.8,
    },
    ConductorProperties {
        material: ConductorMaterial::StainlessCladSteel,
        label: "Stainless-clad steel",
        alpha_r: 0.00377,
        k0: 245.0,
        rho_r: 17.5,
        tcap: 4.4,
    },
    ConductorProperties {
        material: ConductorMaterial::ZincCoatedSteel,
        label: "Zinc-coated steel",
        alpha_r: 0.0032,
        k0: 293.0,
        rho_r: 20.1,
        tcap: 3.9,
    },
    ConductorProperties {
        material: ConductorMaterial::StainlessSteel304,
        label: "Stainless steel 304",
        alpha_r: 0.0013,
        k0: 749.0,
        rho_r: 72.0,
        tcap: 4.0,
    },
];

/// Look up a conductor row by position.
///
/// # Example
///
/// ```rust
/// use grounding_core::materials::lookup_conductor;
///
/// let row = lookup_conductor(1).unwrap();
/// assert_eq!(row.k0, 242.0);
/// assert!(lookup_conductor(8).is_err());
/// ```
pub fn lookup_conductor(index: usize) -> CalcResult<&'static ConductorProperties> {
    ConductorMaterial::from_index(index).map(|material| material.properties())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, material) in ConductorMaterial::ALL.iter().enumerate() {
            assert_eq!(material.index(), i);
            assert_eq!(CONDUCTOR_TABLE[i].material, *material);
        }
    }

    #[test]
    fn test_commercial_copper_constants() {
        let props = ConductorMaterial::CommercialCopper.properties();
        assert_eq!(props.alpha_r, 0.00381);
        assert_eq!(props.k0, 242.0);
        assert_eq!(props.rho_r, 1.78);
        assert_eq!(props.tcap, 3.4);
    }

    #[test]
    fn test_all_constants_positive() {
        for row in CONDUCTOR_TABLE.iter() {
            assert!(row.alpha_r > 0.0, "{} alpha_r", row.label);
            assert!(row.k0 > 0.0, "{} k0", row.label);
            assert!(row.rho_r > 0.0, "{} rho_r", row.label);
            assert!(row.tcap > 0.0, "{} tcap", row.label);
        }
    }

    #[test]
    fn test_lookup_bounds() {
        let last = lookup_conductor(7).unwrap();
        assert_eq!(last.material, ConductorMaterial::StainlessSteel304);

        let err = lookup_conductor(8).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "conductor_index"));
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(
            ConductorMaterial::from_str_flexible("commercial-copper").unwrap(),
            ConductorMaterial::CommercialCopper
        );
        assert_eq!(
            ConductorMaterial::from_str_flexible("Stainless Steel 304").unwrap(),
            ConductorMaterial::StainlessSteel304
        );
        assert!(ConductorMaterial::from_str_flexible("gold").is_err());
    }
}
