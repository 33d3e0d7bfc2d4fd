//! Clinic reference data.
//!
//! The reference document lists the code tables, the clinic record, and the healthy-target
//! ranges. Loading normalises it for the configured clinic:
//! - the clinic id is forced to the configured one
//! - note topics always include [`DEFAULT_NOTE_TOPICS`]
//! - note topics, languages, reasons for inactivity and email subjects are de-duplicated and
//!   sorted by plain string order, so upper case sorts before lower case

use crate::config::CoreConfig;
use crate::constants::DEFAULT_NOTE_TOPICS;
use crate::store::{read_document, write_document};
use crate::{RegistryError, RegistryResult};
use registry_model::ReferenceContainer;
use std::fs;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ReferenceService {
    cfg: Arc<CoreConfig>,
}

impl ReferenceService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Loads and normalises `references.yaml`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ReferencesNotFound`] if the document does not exist, or
    /// [`RegistryError::Model`] if it does not match the schema.
    pub fn load(&self) -> RegistryResult<ReferenceContainer> {
        let path = self.cfg.references_path();
        if !path.is_file() {
            return Err(RegistryError::ReferencesNotFound);
        }

        let mut references: ReferenceContainer = read_document(&path, "References")?;
        normalise(&mut references, self.cfg.clinic_id());

        tracing::debug!(
            clinic_id = references.clinic.clinic_id,
            note_topics = references.note_topics.len(),
            "loaded reference data"
        );
        Ok(references)
    }

    /// Writes `references.yaml`, creating the data directory if needed.
    pub fn save(&self, references: &ReferenceContainer) -> RegistryResult<()> {
        fs::create_dir_all(self.cfg.data_dir()).map_err(RegistryError::DirCreation)?;
        write_document(&self.cfg.references_path(), references, "References")
    }
}

fn normalise(references: &mut ReferenceContainer, clinic_id: i32) {
    if references.clinic.clinic_id != clinic_id {
        tracing::warn!(
            "reference document names clinic {}, using configured clinic {}",
            references.clinic.clinic_id,
            clinic_id
        );
        references.clinic.clinic_id = clinic_id;
    }

    references.note_topics = merge_note_topics(&references.note_topics);
    dedup_and_sort(&mut references.languages);
    dedup_and_sort(&mut references.reasons_for_inactivity);
    dedup_and_sort(&mut references.email_message_subjects);
}

/// Union of `topics` and the default topics, each once, sorted.
fn merge_note_topics(topics: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = DEFAULT_NOTE_TOPICS
        .iter()
        .map(|t| t.to_string())
        .chain(topics.iter().cloned())
        .collect();
    dedup_and_sort(&mut merged);
    merged
}

fn dedup_and_sort(values: &mut Vec<String>) {
    values.sort();
    values.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::REFERENCES_FILENAME;
    use registry_model::{Clinic, HealthyTarget, Measurement};
    use std::path::Path;
    use tempfile::TempDir;

    fn test_service(data_dir: &Path, clinic_id: i32) -> ReferenceService {
        let cfg = CoreConfig::new(data_dir.to_path_buf(), clinic_id)
            .expect("CoreConfig::new should succeed");
        ReferenceService::new(Arc::new(cfg))
    }

    #[test]
    fn missing_document_is_reported() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp_dir.path(), 1);
        assert!(matches!(
            service.load(),
            Err(RegistryError::ReferencesNotFound)
        ));
    }

    #[test]
    fn save_then_load_normalises() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(&temp_dir.path().join("data"), 2);

        let mut references = ReferenceContainer {
            clinic: Clinic::new(7, Some("Eastside".into()), None, None, None),
            note_topics: vec!["Diet".into(), "A1C".into(), "diet".into()],
            languages: vec!["Spanish".into(), "English".into(), "Spanish".into()],
            reasons_for_inactivity: vec!["Moved".into(), "Deceased".into(), "Moved".into()],
            email_message_subjects: vec!["reminder".into(), "Welcome".into()],
            ..ReferenceContainer::default()
        };
        references
            .healthy_targets
            .set(Measurement::A1c, HealthyTarget::new(Some(7.0), None))
            .expect("a1c has a slot");
        service.save(&references).expect("save should succeed");
        assert!(temp_dir.path().join("data").join(REFERENCES_FILENAME).is_file());

        let loaded = service.load().expect("load should succeed");
        assert_eq!(loaded.clinic.clinic_id, 2);
        assert_eq!(loaded.clinic.clinic_name.as_deref(), Some("Eastside"));
        assert_eq!(loaded.languages, vec!["English", "Spanish"]);
        assert_eq!(loaded.reasons_for_inactivity, vec!["Deceased", "Moved"]);
        assert_eq!(loaded.email_message_subjects, vec!["Welcome", "reminder"]);
        assert_eq!(
            loaded.healthy_targets.get(Measurement::A1c),
            Some(&HealthyTarget::new(Some(7.0), None))
        );

        let topics = &loaded.note_topics;
        assert_eq!(topics.len(), DEFAULT_NOTE_TOPICS.len() + 2);
        assert_eq!(topics.iter().filter(|t| t.as_str() == "A1C").count(), 1);
        assert!(topics.contains(&"Diet".to_string()));
        assert!(topics.contains(&"diet".to_string()));
    }

    #[test]
    fn note_topics_sort_case_sensitively() {
        let merged = merge_note_topics(&["Zumba".into(), "Aspirin".into(), "diet".into()]);
        let mut sorted = merged.clone();
        sorted.sort();
        assert_eq!(merged, sorted);
        assert_eq!(merged.first().map(String::as_str), Some("A1C"));
        assert_eq!(merged.last().map(String::as_str), Some("eGFR"));

        let position = |topic: &str| merged.iter().position(|t| t == topic);
        assert!(position("Zumba") < position("diet"));
    }

    #[test]
    fn lists_lose_duplicates_and_sort() {
        let mut values = vec![
            "b".to_string(),
            "a".to_string(),
            "B".to_string(),
            "b".to_string(),
            "a".to_string(),
        ];
        dedup_and_sort(&mut values);
        assert_eq!(values, vec!["B", "a", "b"]);
    }

    #[test]
    fn invalid_document_surfaces_model_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp_dir.path(), 1);
        fs::write(
            temp_dir.path().join(REFERENCES_FILENAME),
            "healthy_targets:\n  - measurement: cholesterol\n    upper: 200\n",
        )
        .expect("write references");

        let err = service.load().expect_err("unknown measurement");
        assert!(matches!(err, RegistryError::Model(_)));
    }

    #[test]
    fn targets_without_reference_slot_are_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let service = test_service(temp_dir.path(), 1);
        fs::write(
            temp_dir.path().join(REFERENCES_FILENAME),
            "healthy_targets:\n  - measurement: glucosepc\n    upper: 180\n  - measurement: a1c\n    upper: 7\n",
        )
        .expect("write references");

        let loaded = service.load().expect("glucosepc row should not fail the document");
        assert_eq!(loaded.healthy_targets.get(Measurement::GlucosePc), None);
        assert_eq!(
            loaded.healthy_targets.get(Measurement::A1c),
            Some(&HealthyTarget::new(Some(7.0), None))
        );
    }
}
