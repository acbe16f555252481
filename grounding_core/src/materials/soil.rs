//! Soil Resistivity Table
//!
//! Typical resistivity of the surface material under a substation, used for
//! the tolerable step and touch voltages (IEEE Std 80-2013, Clause 7).
//! `Unspecified` is the generic fallback and carries the crushed-stone value.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Soil categories in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Swamp,
    Silt,
    Humus,
    ClayeySand,
    SilicaSand,
    CrushedStone,
    Limestone,
    Granite,
    Unspecified,
}

impl SoilType {
    /// All soil variants, in the same order as [`SOIL_TABLE`]
    pub const ALL: [SoilType; 9] = [
        SoilType::Swamp,
        SoilType::Silt,
        SoilType::Humus,
        SoilType::ClayeySand,
        SoilType::SilicaSand,
        SoilType::CrushedStone,
        SoilType::Limestone,
        SoilType::Granite,
        SoilType::Unspecified,
    ];

    /// Row position in [`SOIL_TABLE`]
    pub fn index(&self) -> usize {
        match self {
            SoilType::Swamp => 0,
            SoilType::Silt => 1,
            SoilType::Humus => 2,
            SoilType::ClayeySand => 3,
            SoilType::SilicaSand => 4,
            SoilType::CrushedStone => 5,
            SoilType::Limestone => 6,
            SoilType::Granite => 7,
            SoilType::Unspecified => 8,
        }
    }

    /// Select a soil by table row
    pub fn from_index(index: usize) -> CalcResult<Self> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            CalcError::invalid_input(
                "soil_index",
                index.to_string(),
                format!("Soil table has {} rows (0..={})", Self::ALL.len(), Self::ALL.len() - 1),
            )
        })
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "SWAMP" | "MARSH" => Ok(SoilType::Swamp),
            "SILT" | "MUD" => Ok(SoilType::Silt),
            "HUMUS" => Ok(SoilType::Humus),
            "CLAYEYSAND" | "CLAYSAND" => Ok(SoilType::ClayeySand),
            "SILICASAND" | "SAND" => Ok(SoilType::SilicaSand),
            "CRUSHEDSTONE" | "GRAVEL" | "STONE" => Ok(SoilType::CrushedStone),
            "LIMESTONE" => Ok(SoilType::Limestone),
            "GRANITE" => Ok(SoilType::Granite),
            "UNSPECIFIED" | "DEFAULT" => Ok(SoilType::Unspecified),
            _ => Err(CalcError::material_not_found(s)),
        }
    }

    /// Table row for this soil
    pub fn properties(&self) -> &'static SoilProperties {
        &SOIL_TABLE[self.index()]
    }

    /// Surface resistivity ρs (Ω·m)
    pub fn resistivity_ohm_m(&self) -> f64 {
        self.properties().resistivity_ohm_m
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        self.properties().label
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of the soil table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilProperties {
    pub soil: SoilType,
    pub label: &'static str,
    /// Resistivity (Ω·m)
    pub resistivity_ohm_m: f64,
}

/// Soil resistivity table, indexed by [`SoilType::index`]
pub static SOIL_TABLE: [SoilProperties; 9] = [
    SoilProperties { soil: SoilType::Swamp, label: "Swamp", resistivity_ohm_m: 50.0 },
    SoilProperties { soil: SoilType::Silt, label: "Silt", resistivity_ohm_m: 100.0 },
    SoilProperties { soil: SoilType::Humus, label: "Humus", resistivity_ohm_m: 150.0 },
    SoilProperties { soil: SoilType::ClayeySand, label: "Clayey Sand", resistivity_ohm_m: 200.0 },
    SoilProperties { soil: SoilType::SilicaSand, label: "Silica Sand", resistivity_ohm_m: 1000.0 },
    SoilProperties { soil: SoilType::CrushedStone, label: "Crushed Stone", resistivity_ohm_m: 3000.0 },
    SoilProperties { soil: SoilType::Limestone, label: "Limestone", resistivity_ohm_m: 5000.0 },
    SoilProperties { soil: SoilType::Granite, label: "Granite", resistivity_ohm_m: 10000.0 },
    SoilProperties { soil: SoilType::Unspecified, label: "Unspecified", resistivity_ohm_m: 3000.0 },
];

/// Look up a soil row by position.
///
/// # Example
///
/// ```rust
/// use grounding_core::materials::lookup_soil;
///
/// let row = lookup_soil(5).unwrap();
/// assert_eq!(row.label, "Crushed Stone");
/// assert!(lookup_soil(9).is_err());
/// ```
pub fn lookup_soil(index: usize) -> CalcResult<&'static SoilProperties> {
    SoilType::from_index(index).map(|soil| soil.properties())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_enum() {
        for (i, soil) in SoilType::ALL.iter().enumerate() {
            assert_eq!(soil.index(), i);
            assert_eq!(SOIL_TABLE[i].soil, *soil);
        }
    }

    #[test]
    fn test_resistivities() {
        assert_eq!(SoilType::Swamp.resistivity_ohm_m(), 50.0);
        assert_eq!(SoilType::CrushedStone.resistivity_ohm_m(), 3000.0);
        assert_eq!(SoilType::Granite.resistivity_ohm_m(), 10000.0);
        assert_eq!(SoilType::Unspecified.resistivity_ohm_m(), 3000.0);
    }

    #[test]
    fn test_lookup_bounds() {
        let last = lookup_soil(8).unwrap();
        assert_eq!(last.soil, SoilType::Unspecified);

        let err = lookup_soil(9).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_from_str_flexible() {
        assert_eq!(SoilType::from_str_flexible("crushed stone").unwrap(), SoilType::CrushedStone);
        assert_eq!(SoilType::from_str_flexible("Clayey_Sand").unwrap(), SoilType::ClayeySand);
        assert_eq!(SoilType::from_str_flexible("MUD").unwrap(), SoilType::Silt);
        assert!(matches!(
            SoilType::from_str_flexible("basalt"),
            Err(CalcError::MaterialNotFound { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&SoilType::Limestone).unwrap();
        assert_eq!(json, "\"Limestone\"");
        let parsed: SoilType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SoilType::Limestone);
    }
}
