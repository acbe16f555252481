//! # Grid Resistance and Grid Sizing
//!
//! Grid resistance per IEEE 80 Eq. 57, and the search for the smallest
//! square grid that reaches the target resistance.
//!
//! ## Sizing Search
//!
//! Trial grids are square, start at 1 m and grow in 1 m steps. Each trial is
//! a new configuration derived with [`GridConfig::with_grid_size`], so its
//! area always matches the trial side. The resistance is non-increasing in
//! the side length, but the 0.001 floor on the area term bounds it from
//! below by roughly `0.002·ρ2`; targets under that floor are reported as
//! [`CalcError::NotSizable`] once the side passes [`MAX_GRID_SIDE_M`].

use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::equations::ieee80;
use crate::errors::{CalcError, CalcResult};

/// Side length at which the sizing search gives up (m)
pub const MAX_GRID_SIDE_M: f64 = 1_000_000.0;

/// First trial side and step of the sizing search (m)
pub const GRID_SEARCH_STEP_M: f64 = 1.0;

fn resistance_of(config: &GridConfig) -> f64 {
    ieee80::grid_resistance(
        config.rho2_ohm_m,
        config.area_m2(),
        config.burial_depth_m,
        config.length_m,
    )
}

/// Grid resistance to remote earth (Ω).
///
/// Uses the configuration's own grid length as the conductor length, so
/// callers evaluating the final design pass a configuration whose length has
/// been replaced by the total conductor length.
pub fn ground_resistance(config: &GridConfig) -> CalcResult<f64> {
    config.validate()?;
    Ok(resistance_of(config))
}

/// Smallest square grid side (m) whose resistance is at or below
/// `min_mesh_resistance_ohm`.
///
/// # Errors
///
/// - `InvalidInput` if the configuration is invalid
/// - `NotSizable` if the side would have to exceed [`MAX_GRID_SIDE_M`]
///
/// # Example
///
/// ```rust
/// use grounding_core::calculations::resistance::mesh_calc;
/// use grounding_core::config::GridConfig;
///
/// assert_eq!(mesh_calc(&GridConfig::default()).unwrap(), 208.0);
/// ```
pub fn mesh_calc(config: &GridConfig) -> CalcResult<f64> {
    config.validate()?;

    let target = config.min_mesh_resistance_ohm;
    let mut trial = config.with_grid_size(GRID_SEARCH_STEP_M, GRID_SEARCH_STEP_M);
    let mut resistance = resistance_of(&trial);
    let mut steps: u64 = 0;

    while resistance > target {
        let side = trial.length_m + GRID_SEARCH_STEP_M;
        if side > MAX_GRID_SIDE_M {
            warn!(
                target_ohm = target,
                rho2_ohm_m = config.rho2_ohm_m,
                last_resistance_ohm = resistance,
                "cannot size a grid for the target resistance"
            );
            return Err(CalcError::not_sizable(target, MAX_GRID_SIDE_M));
        }
        trial = trial.with_grid_size(side, side);
        resistance = resistance_of(&trial);
        steps += 1;
    }

    debug!(side_m = trial.length_m, resistance_ohm = resistance, steps, "grid sized");
    Ok(trial.length_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_resistance_reference() {
        let rg = ground_resistance(&GridConfig::default()).unwrap();
        assert!((rg - 8.230239117421327).abs() < 1e-9);
    }

    #[test]
    fn test_ground_resistance_uses_current_area() {
        let base = GridConfig::default();
        let longer = base.with_length(238.0);
        let rg = ground_resistance(&longer).unwrap();
        assert!((rg - 3.054789753675832).abs() < 1e-9);
        assert!(rg < ground_resistance(&base).unwrap());
    }

    #[test]
    fn test_resistance_non_increasing_in_side() {
        let base = GridConfig::default();
        let mut previous = f64::INFINITY;
        for side in 1..=2000 {
            let side = side as f64;
            let rg = ground_resistance(&base.with_grid_size(side, side)).unwrap();
            assert!(rg <= previous, "resistance rose at side {}", side);
            previous = rg;
        }
    }

    #[test]
    fn test_mesh_calc_reference() {
        let side = mesh_calc(&GridConfig::default()).unwrap();
        assert_eq!(side, 208.0);
    }

    #[test]
    fn test_mesh_calc_is_minimal() {
        let config = GridConfig::default();
        let side = mesh_calc(&config).unwrap();
        let target = config.min_mesh_resistance_ohm;

        let at = ground_resistance(&config.with_grid_size(side, side)).unwrap();
        let before = ground_resistance(&config.with_grid_size(side - 1.0, side - 1.0)).unwrap();
        assert!(at <= target);
        assert!(before > target);
    }

    #[test]
    fn test_mesh_calc_easy_target_returns_start() {
        let mut config = GridConfig::default();
        config.min_mesh_resistance_ohm = 10_000.0;
        assert_eq!(mesh_calc(&config).unwrap(), 1.0);
    }

    #[test]
    fn test_mesh_calc_ignores_proposed_geometry() {
        let config = GridConfig::default();
        let wide = config.with_grid_size(500.0, 20.0);
        assert_eq!(mesh_calc(&config).unwrap(), mesh_calc(&wide).unwrap());
    }

    #[test]
    fn test_mesh_calc_not_sizable() {
        // Floor for rho2 = 400 is about 0.8 ohm
        let mut config = GridConfig::default();
        config.min_mesh_resistance_ohm = 0.5;
        let err = mesh_calc(&config).unwrap_err();
        assert_eq!(err, CalcError::not_sizable(0.5, MAX_GRID_SIDE_M));
        assert!(err.is_design_limit());
    }

    #[test]
    fn test_mesh_calc_invalid_input() {
        let mut config = GridConfig::default();
        config.min_mesh_resistance_ohm = 0.0;
        assert!(matches!(mesh_calc(&config), Err(CalcError::InvalidInput { .. })));
    }
}
