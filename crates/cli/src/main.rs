use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use registry_core::constants::DEFAULT_DATA_DIR;
use registry_core::{
    clinic_id_from_env_value, evaluate_dashboard, CoreConfig, RecordStore, ReferenceService,
};
use registry_model::Patient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "registry")]
#[command(about = "Diabetes registry CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Show the clinic from the reference document
    ShowClinic,
    /// Evaluate a patient's dashboard against the healthy targets
    Status {
        /// Patient ID
        patient_id: i32,
    },
    /// Add or replace a patient
    AddPatient {
        /// Patient ID
        patient_id: i32,
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<String>,
        /// Gender as recorded by the clinic
        #[arg(long)]
        gender: Option<String>,
    },
    /// Load the reference document and summarise it
    CheckReferences,
}

/// Resolves configuration from the environment once, at startup.
///
/// # Environment Variables
/// - `REGISTRY_DATA_DIR`: registry data directory (default: "registry_data")
/// - `REGISTRY_CLINIC_ID`: clinic served by this registry (default: 1)
fn load_config() -> anyhow::Result<Arc<CoreConfig>> {
    let data_dir = std::env::var("REGISTRY_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());
    let clinic_id = clinic_id_from_env_value(std::env::var("REGISTRY_CLINIC_ID").ok())?;
    Ok(Arc::new(CoreConfig::new(PathBuf::from(data_dir), clinic_id)?))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("registry=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let cfg = load_config()?;
    tracing::debug!(data_dir = %cfg.data_dir().display(), clinic_id = cfg.clinic_id(), "resolved configuration");

    let store = RecordStore::new(cfg.clone());
    let references = ReferenceService::new(cfg);

    match cli.command {
        Some(Commands::List) => {
            let patients = store.list_patients();
            if patients.is_empty() {
                println!("No patients found.");
            } else {
                for patient in patients {
                    println!(
                        "{}: {}, {}",
                        patient.patient_id,
                        patient.last_name.as_deref().unwrap_or(""),
                        patient.first_name.as_deref().unwrap_or("")
                    );
                }
            }
        }
        Some(Commands::ShowClinic) => {
            let reference = references.load().context("loading reference document")?;
            println!("{}", reference.clinic);
        }
        Some(Commands::Status { patient_id }) => {
            let patient = store.load_patient(patient_id)?;
            let dashboard = store.load_dashboard(patient_id)?;
            let reference = references.load().context("loading reference document")?;

            let status =
                evaluate_dashboard(&dashboard, &reference.healthy_targets, patient.gender_kind());
            let flagged = status.out_of_target();
            if flagged.is_empty() {
                println!("Patient {patient_id}: all measurements within target");
            } else {
                println!("Patient {patient_id}: out of target");
                for measurement in flagged {
                    println!("  {measurement}");
                }
            }
        }
        Some(Commands::AddPatient {
            patient_id,
            first_name,
            last_name,
            birth_date,
            gender,
        }) => {
            let birth_date = birth_date
                .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d"))
                .transpose()
                .context("birth date must be YYYY-MM-DD")?;
            let patient = Patient {
                patient_id,
                first_name: Some(first_name),
                last_name: Some(last_name),
                birth_date,
                gender,
                ..Patient::default()
            };
            store.save_patient(&patient)?;
            println!("Saved patient {patient_id}");
        }
        Some(Commands::CheckReferences) => {
            let reference = references.load().context("loading reference document")?;
            println!("clinic id: {}", reference.clinic.clinic_id);
            println!("note topics: {}", reference.note_topics.len());
            println!("languages: {}", reference.languages.len());
            println!("therapies: {}", reference.therapies.len());
            println!("medications: {}", reference.medications.len());
            println!(
                "healthy targets: {}",
                reference.healthy_targets.to_rows().len()
            );
        }
        None => {
            println!("Use 'registry --help' for commands");
        }
    }

    Ok(())
}
