//! # Reference Tables
//!
//! Fixed lookup tables read by the formulas:
//!
//! - **Soil**: surface resistivity by soil category
//! - **Conductor**: thermal and resistive constants by grid conductor material
//!
//! Both tables are `static` arrays. A configuration selects rows through the
//! [`SoilType`] and [`ConductorMaterial`] enums; the index lookups exist for
//! callers that only know a table position.
//!
//! ## Example
//!
//! ```rust
//! use grounding_core::materials::{ConductorMaterial, SoilType};
//!
//! assert_eq!(SoilType::CrushedStone.resistivity_ohm_m(), 3000.0);
//! assert_eq!(ConductorMaterial::CommercialCopper.properties().k0, 242.0);
//! ```

pub mod conductor;
pub mod soil;

pub use conductor::{lookup_conductor, ConductorMaterial, ConductorProperties, CONDUCTOR_TABLE};
pub use soil::{lookup_soil, SoilProperties, SoilType, SOIL_TABLE};
