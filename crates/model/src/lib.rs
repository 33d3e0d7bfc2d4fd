//! Diabetes registry entity records.
//!
//! This crate holds the data model of the registry: patient demographics, measurement
//! results, vaccination dates, progress notes, clinic and user records, and the reference
//! tables for healthy-target ranges.
//!
//! The records are plain carriers. They enforce no invariants; every field is public and
//! optional values are `Option`s. Construction with no arguments is `Default`, and most
//! records also offer a `new(...)` populating every field.
//!
//! Alongside the records the crate provides YAML wire helpers:
//! - [`parse_yaml`] / [`render_yaml`] for whole documents
//! - healthy-target reference rows ([`HealthyTargetRow`]) with the "no upper bound" sentinel
//! - healthy-target status rows ([`StatusRow`])

pub mod administration;
pub mod clinic;
pub mod dashboard;
pub mod data_entry;
pub mod patient;
pub mod progress_note;
pub mod references;
pub mod results;
pub mod stats;
pub mod targets;
pub mod user;
pub mod wire;

pub use administration::{
    EmailMessageConfiguration, EmailMessageConfigurationContainer, PasswordResetRequest,
    QualityReferenceConfiguration,
};
pub use clinic::{Clinic, ClinicRegistration};
pub use dashboard::{Dashboard, TreatmentHistory};
pub use data_entry::DataEntryContainer;
pub use patient::Patient;
pub use progress_note::ProgressNote;
pub use references::{
    EmailMessage, EyeExamDefinition, FootExamRiskDefinition, Medication,
    PsychologicalScreeningReference, QualityReference, ReferenceContainer,
    TelephoneFollowUpDefinition, Therapy,
};
pub use results::{
    A1cResult, BloodPressureResult, BooleanResult, CategoricalResult, ContinuousResult,
    DiscreteResult, LdlResult, PsychologicalScreeningResult, TshResult,
};
pub use stats::{CategoricalValue, DemographicData, Stats};
pub use targets::{
    HealthyTarget, HealthyTargetReference, HealthyTargetRow, HealthyTargetStatus, StatusRow,
    NO_UPPER_BOUND,
};
pub use user::{NoteAuthor, User};
pub use wire::{parse_yaml, render_yaml};

pub use registry_types::{Gender, Measurement};

/// Errors returned by the `registry-model` crate.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;
