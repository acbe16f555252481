//! # Grounding Grid Calculations
//!
//! Every operation takes a [`GridConfig`](crate::config::GridConfig) by
//! reference, validates it, and returns a `CalcResult`. Nothing is cached:
//! calling an operation twice on the same configuration gives the same value.
//!
//! ## Available Calculations
//!
//! - [`safety`] - Apparent resistivity, Cs, tolerable step/touch voltages
//! - [`conductor`] - Conductor section and diameter
//! - [`resistance`] - Grid resistance and the grid-sizing search
//! - [`mesh`] - Km, Ki, Ks, total conductor length, mesh voltages, GPR
//! - [`assessment`] - The full sequence with pass/fail checks

pub mod assessment;
pub mod conductor;
pub mod mesh;
pub mod resistance;
pub mod safety;

// Re-export commonly used types
pub use assessment::{calculate, GridAssessment};
pub use safety::ApparentResistivity;
