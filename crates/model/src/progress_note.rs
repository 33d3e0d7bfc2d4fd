//! Progress notes written by nurses and dietitians at each visit.

use crate::{NoteAuthor, Patient};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A visit note: vitals, the measurements taken at the visit, and the SOAP narrative.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressNote {
    pub patient: Patient,
    pub date_created: Option<NaiveDate>,
    pub medical_insurance: bool,
    pub shoe_size: Option<String>,
    pub allergic_to_medications: bool,
    pub allergies: Option<String>,
    pub weight: Option<f64>,
    pub height_feet: Option<i32>,
    pub height_inches: Option<i32>,
    pub weight_reduction_goal: Option<f64>,
    pub pulse: Option<i32>,
    pub respirations: Option<i32>,
    pub temperature: Option<f64>,
    /// Whether a foot screening was performed at this visit.
    pub foot_screening: bool,
    /// Medications as free text.
    pub medications: Option<String>,
    pub a1c: Option<f64>,
    pub glucose: Option<f64>,
    pub waist: Option<f64>,
    pub blood_pressure_systole: Option<i32>,
    pub blood_pressure_diastole: Option<i32>,
    pub ace_or_arb: bool,
    pub bmi: Option<f64>,
    pub last_class_date: Option<NaiveDate>,
    pub eye_screening_category: Option<String>,
    pub foot_screening_category: Option<String>,
    pub psychological_screening: Option<i32>,
    pub physical_activity: Option<i32>,
    pub smoking: Option<bool>,
    pub compliance: Option<f64>,
    pub hospitalization_date: Option<NaiveDate>,
    pub nurse_or_dietitian_note: Option<String>,
    pub subjective: Option<String>,
    pub objective: Option<String>,
    pub assessment: Option<String>,
    pub plan: Option<String>,
    /// Everyone who has edited the note, oldest first.
    pub updated_by: Vec<NoteAuthor>,
}

impl ProgressNote {
    /// Height in inches, when both parts are recorded and the total fits in an `i32`.
    pub fn height_total_inches(&self) -> Option<i32> {
        self.height_feet?
            .checked_mul(12)?
            .checked_add(self.height_inches?)
    }

    /// The author of the most recent edit.
    pub fn last_updated_by(&self) -> Option<&NoteAuthor> {
        self.updated_by.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_yaml, render_yaml};
    use chrono::{TimeZone, Utc};

    #[test]
    fn default_note_is_empty() {
        let note = ProgressNote::default();
        assert_eq!(note.patient, Patient::default());
        assert!(!note.medical_insurance);
        assert!(note.weight.is_none());
        assert!(note.updated_by.is_empty());
        assert_eq!(note.height_total_inches(), None);
        assert!(note.last_updated_by().is_none());
    }

    #[test]
    fn fields_are_writable() {
        let mut note = ProgressNote::default();
        note.weight = Some(182.5);
        note.height_feet = Some(5);
        note.height_inches = Some(7);
        note.smoking = Some(false);
        note.plan = Some("Recheck A1C in 3 months".into());

        assert_eq!(note.weight, Some(182.5));
        assert_eq!(note.height_total_inches(), Some(67));
        assert_eq!(note.smoking, Some(false));
        assert_eq!(note.plan.as_deref(), Some("Recheck A1C in 3 months"));
    }

    #[test]
    fn oversized_height_has_no_total() {
        let mut note = ProgressNote {
            height_feet: Some(i32::MAX),
            height_inches: Some(0),
            ..ProgressNote::default()
        };
        assert_eq!(note.height_total_inches(), None);

        note.height_feet = Some(i32::MAX / 12);
        note.height_inches = Some(i32::MAX);
        assert_eq!(note.height_total_inches(), None);

        note.height_inches = Some(1);
        assert_eq!(note.height_total_inches(), Some((i32::MAX / 12) * 12 + 1));
    }

    #[test]
    fn authors_are_kept_in_order() {
        let mut note = ProgressNote::default();
        for (hour, name) in [(9, "Ana"), (14, "Ben")] {
            note.updated_by.push(NoteAuthor::new(
                Some(name.into()),
                None,
                Some("Nurse".into()),
                Some(Utc.with_ymd_and_hms(2016, 4, 1, hour, 0, 0).unwrap()),
            ));
        }
        assert_eq!(
            note.last_updated_by().and_then(|a| a.first_name.as_deref()),
            Some("Ben")
        );
    }

    #[test]
    fn parses_note_document() {
        let input = r#"patient:
  patient_id: 12
  first_name: Lee
date_created: 2016-04-01
medical_insurance: true
weight: 201.4
blood_pressure_systole: 138
blood_pressure_diastole: 84
eye_screening_category: "1"
subjective: Feels well
updated_by:
  - first_name: Ana
    time_stamp: 2016-04-01T09:00:00Z
"#;
        let note: ProgressNote = parse_yaml(input, "ProgressNote").expect("parse note");
        assert_eq!(note.patient.patient_id, 12);
        assert_eq!(note.date_created, NaiveDate::from_ymd_opt(2016, 4, 1));
        assert!(note.medical_insurance);
        assert_eq!(note.blood_pressure_systole, Some(138));
        assert_eq!(note.eye_screening_category.as_deref(), Some("1"));
        assert_eq!(note.updated_by.len(), 1);

        let yaml = render_yaml(&note, "ProgressNote").expect("render");
        let back: ProgressNote = parse_yaml(&yaml, "ProgressNote").expect("reparse");
        assert_eq!(back, note);
    }
}
