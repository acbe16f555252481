//! # File I/O Module
//!
//! Loads and saves grid configurations as JSON:
//! - **Partial files**: fields missing from the file take the reference values
//! - **Validation on load**: a loaded configuration is checked before use
//! - **Atomic saves**: write to .tmp, sync, rename to prevent corruption
//!
//! ## Example
//!
//! ```rust,no_run
//! use grounding_core::config::GridConfig;
//! use grounding_core::file_io::{load_config, save_config};
//! use std::path::Path;
//!
//! let path = Path::new("substation.json");
//! save_config(&GridConfig::default(), path).unwrap();
//!
//! let config = load_config(path).unwrap();
//! assert_eq!(config.rods, 10);
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::config::GridConfig;
use crate::errors::{CalcError, CalcResult};

/// Save a configuration with atomic write semantics.
///
/// The save process:
/// 1. Serialize the configuration to JSON
/// 2. Write to a temporary file (.json.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename the temporary file over `path`
pub fn save_config(config: &GridConfig, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(config).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    debug!(path = %path.display(), bytes = json.len(), "configuration saved");
    Ok(())
}

/// Load and validate a configuration from a JSON file.
///
/// # Returns
///
/// * `Ok(GridConfig)` - Parsed and validated configuration
/// * `Err(CalcError::FileError)` - I/O error
/// * `Err(CalcError::SerializationError)` - Invalid JSON or unknown soil/conductor name
/// * `Err(CalcError::InvalidInput)` - Parsed values fail validation
pub fn load_config(path: &Path) -> CalcResult<GridConfig> {
    let mut file = File::open(path).map_err(|e| {
        CalcError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        CalcError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let config: GridConfig =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    config.validate()?;

    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}
