//! # Registry Core
//!
//! Core operations for the diabetes registry.
//!
//! This crate contains pure data operations over the file-backed registry store:
//! - Patient, dashboard and progress-note storage under the configured data directory
//! - Loading and normalising the clinic reference document
//! - Evaluating dashboards against the clinic's healthy targets
//!
//! Configuration is resolved once at startup into a [`CoreConfig`] and shared via `Arc`.

pub mod config;
pub mod constants;
pub mod error;
pub mod references;
pub mod status;
pub mod store;

pub use config::{clinic_id_from_env_value, CoreConfig};
pub use error::{RegistryError, RegistryResult};
pub use references::ReferenceService;
pub use status::evaluate_dashboard;
pub use store::RecordStore;
