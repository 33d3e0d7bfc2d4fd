//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services as an
//! `Arc<CoreConfig>`. Services never read environment variables themselves.

use crate::constants::{
    DEFAULT_CLINIC_ID, NOTES_DIR_NAME, PATIENTS_DIR_NAME, REFERENCES_FILENAME,
};
use crate::{RegistryError, RegistryResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
    clinic_id: i32,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if `clinic_id` is not positive.
    pub fn new(data_dir: PathBuf, clinic_id: i32) -> RegistryResult<Self> {
        if clinic_id <= 0 {
            return Err(RegistryError::InvalidInput(format!(
                "clinic_id must be positive, got {clinic_id}"
            )));
        }

        Ok(Self {
            data_dir,
            clinic_id,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn clinic_id(&self) -> i32 {
        self.clinic_id
    }

    pub fn references_path(&self) -> PathBuf {
        self.data_dir.join(REFERENCES_FILENAME)
    }

    pub fn patients_dir(&self) -> PathBuf {
        self.data_dir.join(PATIENTS_DIR_NAME)
    }

    pub fn patient_dir(&self, patient_id: i32) -> PathBuf {
        self.patients_dir().join(patient_id.to_string())
    }

    pub fn notes_dir(&self, patient_id: i32) -> PathBuf {
        self.patient_dir(patient_id).join(NOTES_DIR_NAME)
    }
}

/// Parse the clinic id from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_CLINIC_ID`].
pub fn clinic_id_from_env_value(value: Option<String>) -> RegistryResult<i32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(DEFAULT_CLINIC_ID),
        Some(v) => v
            .parse::<i32>()
            .map_err(|e| RegistryError::InvalidInput(format!("invalid clinic id {v:?}: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_positive_clinic_id() {
        let err = CoreConfig::new(PathBuf::from("data"), 0).expect_err("zero clinic id");
        match err {
            RegistryError::InvalidInput(msg) => assert!(msg.contains("clinic_id")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert!(CoreConfig::new(PathBuf::from("data"), -3).is_err());
    }

    #[test]
    fn paths_are_rooted_at_data_dir() {
        let cfg = CoreConfig::new(PathBuf::from("/srv/registry"), 1).expect("config");
        assert_eq!(cfg.data_dir(), Path::new("/srv/registry"));
        assert_eq!(
            cfg.references_path(),
            PathBuf::from("/srv/registry/references.yaml")
        );
        assert_eq!(
            cfg.patient_dir(17),
            PathBuf::from("/srv/registry/patients/17")
        );
        assert_eq!(
            cfg.notes_dir(17),
            PathBuf::from("/srv/registry/patients/17/notes")
        );
    }

    #[test]
    fn clinic_id_defaults_when_absent_or_blank() {
        assert_eq!(clinic_id_from_env_value(None).unwrap(), DEFAULT_CLINIC_ID);
        assert_eq!(
            clinic_id_from_env_value(Some("   ".into())).unwrap(),
            DEFAULT_CLINIC_ID
        );
    }

    #[test]
    fn clinic_id_parses_trimmed_value() {
        assert_eq!(clinic_id_from_env_value(Some(" 4 ".into())).unwrap(), 4);
    }

    #[test]
    fn clinic_id_rejects_garbage() {
        let err = clinic_id_from_env_value(Some("east".into())).expect_err("not a number");
        assert!(matches!(err, RegistryError::InvalidInput(_)));
    }
}
