//! YAML document translation.
//!
//! Every registry document on disk is a YAML rendering of one of the records in this crate.
//! Parsing goes through `serde_path_to_error` so a schema mismatch names the failing field
//! (for example `hts.ldl_out_of_target`) instead of only the line number.

use crate::{ModelError, ModelResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse a record from YAML text.
///
/// # Arguments
///
/// * `yaml_text` - YAML text expected to represent a `T`.
/// * `what` - Human-readable document name used in error messages (e.g. `"Dashboard"`).
///
/// # Errors
///
/// Returns [`ModelError::Translation`] if the YAML does not match the schema of `T`,
/// including unknown keys on records that deny them.
pub fn parse_yaml<T: DeserializeOwned>(yaml_text: &str, what: &str) -> ModelResult<T> {
    let deserializer = serde_yaml::Deserializer::from_str(yaml_text);

    match serde_path_to_error::deserialize::<_, T>(deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            Err(ModelError::Translation(format!(
                "{what} schema mismatch at {path}: {source}"
            )))
        }
    }
}

/// Render a record as YAML text.
///
/// # Errors
///
/// Returns [`ModelError::Translation`] if serialisation fails.
pub fn render_yaml<T: Serialize>(value: &T, what: &str) -> ModelResult<String> {
    serde_yaml::to_string(value)
        .map_err(|e| ModelError::Translation(format!("Failed to serialise {what}: {e}")))
}
