//! # Conductor Sizing
//!
//! Minimum grid conductor section for the fault current (IEEE 80 Eq. 37) and
//! the matching round-conductor diameter used by the Km factor.
//!
//! The sizing equation takes ln((K0 + Tm)/(K0 + Ta)), so the ambient
//! temperature must sit above the material's -K0 offset and the maximum
//! temperature must exceed ambient. Both are checked here.

use crate::config::GridConfig;
use crate::equations::ieee80;
use crate::errors::{CalcError, CalcResult};

fn validate_temperatures(config: &GridConfig) -> CalcResult<()> {
    let k0 = config.conductor.properties().k0;

    if k0 + config.ambient_temp_c <= 0.0 {
        return Err(CalcError::invalid_input(
            "ambient_temp_c",
            config.ambient_temp_c.to_string(),
            format!("Ambient temperature must be above -{} C for {}", k0, config.conductor),
        ));
    }
    if config.max_mesh_temp_c <= config.ambient_temp_c {
        return Err(CalcError::invalid_input(
            "max_mesh_temp_c",
            config.max_mesh_temp_c.to_string(),
            "Maximum conductor temperature must exceed the ambient temperature",
        ));
    }
    Ok(())
}

/// Minimum conductor cross-section (mm²).
///
/// # Example
///
/// ```rust
/// use grounding_core::calculations::conductor::cable_section;
/// use grounding_core::config::GridConfig;
///
/// let section = cable_section(&GridConfig::default()).unwrap();
/// assert!((section - 3.2577).abs() < 1e-3);
/// ```
pub fn cable_section(config: &GridConfig) -> CalcResult<f64> {
    config.validate()?;
    validate_temperatures(config)?;

    let props = config.conductor.properties();
    Ok(ieee80::conductor_section_mm2(
        config.mesh_current_a,
        props.tcap,
        config.fault_duration_s,
        props.alpha_r,
        props.rho_r,
        props.k0,
        config.max_mesh_temp_c,
        config.ambient_temp_c,
    ))
}

/// Conductor diameter (m) for the section returned by [`cable_section`].
pub fn cable_diameter(config: &GridConfig) -> CalcResult<f64> {
    let section = cable_section(config)?;
    Ok(ieee80::conductor_diameter_m(section))
}
