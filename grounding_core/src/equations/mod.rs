//! # Grounding Equations
//!
//! The numeric formulas of IEEE Std 80-2013 used by the calculations, kept
//! in one place so they can be checked line by line against the standard.
//!
//! ## Modules
//!
//! - [`ieee80`] - Pure formulas on raw `f64` arguments
//! - [`registry`] - Equation metadata and the EQUATIONS.md generator
//!
//! ## References
//!
//! - IEEE Std 80-2013: Guide for Safety in AC Substation Grounding

pub mod ieee80;
pub mod registry;

pub use ieee80::{
    apparent_resistivity,
    conductor_diameter_m,
    conductor_section_mm2,
    grid_resistance,
    ground_potential_rise,
    ki_factor,
    km_factor,
    km_spacing_terms,
    ks_factor,
    mesh_voltage,
    step_voltage_50kg,
    surface_derating_factor,
    touch_voltage_50kg,
};

pub use registry::{
    assessment_equations,
    generate_equations_markdown,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
};
