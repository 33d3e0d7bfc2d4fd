//! Constants used throughout the registry core crate.
//!
//! Path and filename constants live here so the on-disk layout is defined in one place.

/// Default directory for registry data when no explicit directory is configured.
pub const DEFAULT_DATA_DIR: &str = "registry_data";

/// Clinic served by this registry when none is configured.
pub const DEFAULT_CLINIC_ID: i32 = 1;

/// Filename for the clinic reference document.
pub const REFERENCES_FILENAME: &str = "references.yaml";

/// Directory name for per-patient records.
pub const PATIENTS_DIR_NAME: &str = "patients";

/// Filename for patient demographics.
pub const PATIENT_FILENAME: &str = "patient.yaml";

/// Filename for the patient dashboard.
pub const DASHBOARD_FILENAME: &str = "dashboard.yaml";

/// Directory name for a patient's progress notes.
pub const NOTES_DIR_NAME: &str = "notes";

/// Note topics every clinic offers, whatever its reference document lists.
pub const DEFAULT_NOTE_TOPICS: &[&str] = &[
    "Patient",
    "A1C",
    "Glucose",
    "LDL",
    "HDL",
    "Triglycerides",
    "TSH",
    "T4",
    "UACR",
    "eGFR",
    "Creatinine",
    "BMI",
    "Waist",
    "Blood Pressure",
    "Class",
    "Eye Screening",
    "Foot Screening",
    "Psychological Screening",
    "Physical Activity",
    "Influenza Vaccine",
    "PCV-13 Vaccine",
    "PPSV-23 Vaccine",
    "Hepatitis B Vaccine",
    "TDAP Vaccine",
    "Zoster Vaccine",
    "Smoking",
    "Telephone Follow Up",
    "AST",
    "ALT",
    "PSA",
    "Compliance",
    "Hospitalization",
    "Treatment",
    "Discharge Instructions",
    "Other",
];
