//! # grounding_core - Substation Grounding Grid Calculations
//!
//! `grounding_core` evaluates a rectangular substation grounding grid against
//! IEEE Std 80-2013: tolerable step and touch voltages, conductor sizing, grid
//! resistance, the mesh voltages a fault produces, and the ground potential
//! rise. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: operations take a `&GridConfig` and return a value
//! - **Computed geometry**: area and conductor counts are derived on access
//! - **Fail fast**: invalid input is reported as a structured [`CalcError`]
//!
//! ## Quick Start
//!
//! ```rust
//! use grounding_core::calculations::calculate;
//! use grounding_core::GridConfig;
//!
//! let result = calculate(&GridConfig::default()).unwrap();
//! assert_eq!(result.total_conductor_length_m, 238.0);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Grid configuration and its reference values
//! - [`materials`] - Soil and conductor property tables
//! - [`calculations`] - Every grounding operation and the full assessment
//! - [`equations`] - IEEE 80 formulas and the equation registry
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON configuration load/save with atomic writes

pub mod calculations;
pub mod config;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use config::GridConfig;
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_config, save_config};
