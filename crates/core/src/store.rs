//! File-backed record storage.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//!   references.yaml                 # ReferenceContainer
//!   patients/
//!     <patient_id>/
//!       patient.yaml                # Patient
//!       dashboard.yaml              # Dashboard
//!       notes/
//!         1.yaml                    # ProgressNote, numbered from 1
//!         2.yaml
//! ```
//!
//! Every document is YAML produced by [`registry_model::render_yaml`].

use crate::config::CoreConfig;
use crate::constants::{DASHBOARD_FILENAME, PATIENT_FILENAME};
use crate::{RegistryError, RegistryResult};
use registry_model::{parse_yaml, render_yaml, Dashboard, Patient, ProgressNote};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Reads and writes patient records under the configured data directory.
#[derive(Clone, Debug)]
pub struct RecordStore {
    cfg: Arc<CoreConfig>,
}

impl RecordStore {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    // ========================================================================
    // Patients
    // ========================================================================

    /// Writes `patient.yaml`, creating the patient directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if the patient id is not positive.
    pub fn save_patient(&self, patient: &Patient) -> RegistryResult<()> {
        if patient.patient_id <= 0 {
            return Err(RegistryError::InvalidInput(format!(
                "patient_id must be positive, got {}",
                patient.patient_id
            )));
        }

        let dir = self.cfg.patient_dir(patient.patient_id);
        fs::create_dir_all(&dir).map_err(RegistryError::DirCreation)?;
        write_document(&dir.join(PATIENT_FILENAME), patient, "Patient")
    }

    /// # Errors
    ///
    /// Returns [`RegistryError::PatientNotFound`] if the patient has no `patient.yaml`.
    pub fn load_patient(&self, patient_id: i32) -> RegistryResult<Patient> {
        let path = self.cfg.patient_dir(patient_id).join(PATIENT_FILENAME);
        if !path.is_file() {
            return Err(RegistryError::PatientNotFound(patient_id));
        }
        read_document(&path, "Patient")
    }

    /// Lists every stored patient, ordered by id.
    ///
    /// Patient files that cannot be parsed are logged as warnings and skipped. A missing
    /// patients directory yields an empty list.
    pub fn list_patients(&self) -> Vec<Patient> {
        let mut patients = Vec::new();

        let entries = match fs::read_dir(self.cfg.patients_dir()) {
            Ok(it) => it,
            Err(_) => return patients,
        };

        for entry in entries.flatten() {
            let patient_path = entry.path().join(PATIENT_FILENAME);
            if !patient_path.is_file() {
                continue;
            }

            match read_document::<Patient>(&patient_path, "Patient") {
                Ok(patient) => patients.push(patient),
                Err(e) => {
                    tracing::warn!(
                        "failed to parse patient.yaml: {} - {}",
                        patient_path.display(),
                        e
                    );
                }
            }
        }

        patients.sort_by_key(|p| p.patient_id);
        patients
    }

    fn ensure_patient(&self, patient_id: i32) -> RegistryResult<()> {
        if self.cfg.patient_dir(patient_id).join(PATIENT_FILENAME).is_file() {
            Ok(())
        } else {
            Err(RegistryError::PatientNotFound(patient_id))
        }
    }

    // ========================================================================
    // Dashboards
    // ========================================================================

    pub fn save_dashboard(&self, patient_id: i32, dashboard: &Dashboard) -> RegistryResult<()> {
        self.ensure_patient(patient_id)?;
        let path = self.cfg.patient_dir(patient_id).join(DASHBOARD_FILENAME);
        write_document(&path, dashboard, "Dashboard")
    }

    /// Loads the patient's dashboard. A patient with no dashboard yet gets an empty one.
    pub fn load_dashboard(&self, patient_id: i32) -> RegistryResult<Dashboard> {
        self.ensure_patient(patient_id)?;
        let path = self.cfg.patient_dir(patient_id).join(DASHBOARD_FILENAME);
        if !path.is_file() {
            return Ok(Dashboard::default());
        }
        read_document(&path, "Dashboard")
    }

    // ========================================================================
    // Progress notes
    // ========================================================================

    /// Stores `note` as the patient's next progress note and returns its sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidInput`] if the highest existing note number is
    /// `u32::MAX`.
    pub fn append_progress_note(&self, patient_id: i32, note: &ProgressNote) -> RegistryResult<u32> {
        self.ensure_patient(patient_id)?;
        let dir = self.cfg.notes_dir(patient_id);
        fs::create_dir_all(&dir).map_err(RegistryError::DirCreation)?;

        let last = note_numbers(&dir)?.last().copied().unwrap_or(0);
        let next = last.checked_add(1).ok_or_else(|| {
            RegistryError::InvalidInput(format!(
                "progress note numbers exhausted for patient {patient_id}"
            ))
        })?;
        write_document(&dir.join(format!("{next}.yaml")), note, "ProgressNote")?;

        tracing::debug!(patient_id, sequence = next, "appended progress note");
        Ok(next)
    }

    /// The patient's progress notes, oldest first.
    pub fn list_progress_notes(&self, patient_id: i32) -> RegistryResult<Vec<ProgressNote>> {
        self.ensure_patient(patient_id)?;
        let dir = self.cfg.notes_dir(patient_id);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        note_numbers(&dir)?
            .into_iter()
            .map(|n| read_document(&dir.join(format!("{n}.yaml")), "ProgressNote"))
            .collect()
    }
}

/// Sequence numbers of the `<n>.yaml` files in `dir`, ascending.
///
/// Only canonical decimal names count, so `02.yaml` and `+2.yaml` are ignored along with any
/// other file.
fn note_numbers(dir: &Path) -> RegistryResult<Vec<u32>> {
    let mut numbers: Vec<u32> = fs::read_dir(dir)
        .map_err(RegistryError::FileRead)?
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                return None;
            }
            let stem = path.file_stem()?.to_str()?;
            let n = stem.parse::<u32>().ok()?;
            (n.to_string() == stem).then_some(n)
        })
        .collect();
    numbers.sort_unstable();
    Ok(numbers)
}

pub(crate) fn read_document<T: DeserializeOwned>(path: &Path, what: &str) -> RegistryResult<T> {
    let contents = fs::read_to_string(path).map_err(RegistryError::FileRead)?;
    Ok(parse_yaml(&contents, what)?)
}

pub(crate) fn write_document<T: Serialize>(
    path: &Path,
    value: &T,
    what: &str,
) -> RegistryResult<()> {
    let yaml = render_yaml(value, what)?;
    fs::write(path, yaml).map_err(RegistryError::FileWrite)
}
