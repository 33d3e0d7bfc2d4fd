//! Patient demographics.

use chrono::NaiveDate;
use registry_types::Gender;
use serde::{Deserialize, Serialize};

/// A registry patient.
///
/// `gender`, `race` and `language` are free text as entered by clinic staff. Use
/// [`Patient::gender_kind`] where a sex-specific target has to be chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Patient {
    pub patient_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub gender: Option<String>,
    pub race: Option<String>,
    pub email_address: Option<String>,
    pub language: Option<String>,
    pub reason_for_inactivity: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub date_of_last_measurement: Option<NaiveDate>,
}

impl Patient {
    /// Creates a patient record.
    ///
    /// The address is not part of the constructor; it is set separately once known.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        patient_id: i32,
        first_name: Option<String>,
        last_name: Option<String>,
        birth_date: Option<NaiveDate>,
        contact_number: Option<String>,
        gender: Option<String>,
        race: Option<String>,
        email_address: Option<String>,
        language: Option<String>,
        reason_for_inactivity: Option<String>,
        start_date: Option<NaiveDate>,
        date_of_last_measurement: Option<NaiveDate>,
    ) -> Self {
        Self {
            patient_id,
            first_name,
            last_name,
            birth_date,
            address: None,
            contact_number,
            gender,
            race,
            email_address,
            language,
            reason_for_inactivity,
            start_date,
            date_of_last_measurement,
        }
    }

    /// The patient's gender, if the free-text label is recognised.
    pub fn gender_kind(&self) -> Option<Gender> {
        self.gender.as_deref().and_then(Gender::from_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_yaml, render_yaml};

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn default_is_empty() {
        let patient = Patient::default();
        assert_eq!(patient.patient_id, 0);
        assert!(patient.first_name.is_none());
        assert!(patient.birth_date.is_none());
        assert!(patient.date_of_last_measurement.is_none());
    }

    #[test]
    fn new_populates_everything_but_address() {
        let patient = Patient::new(
            42,
            Some("Maria".into()),
            Some("Lopez".into()),
            date(1961, 4, 2),
            Some("555-0101".into()),
            Some("Female".into()),
            Some("Hispanic".into()),
            Some("maria@example.com".into()),
            Some("Spanish".into()),
            None,
            date(2014, 9, 1),
            date(2016, 2, 10),
        );

        assert_eq!(patient.patient_id, 42);
        assert_eq!(patient.first_name.as_deref(), Some("Maria"));
        assert_eq!(patient.last_name.as_deref(), Some("Lopez"));
        assert_eq!(patient.birth_date, date(1961, 4, 2));
        assert_eq!(patient.address, None);
        assert_eq!(patient.contact_number.as_deref(), Some("555-0101"));
        assert_eq!(patient.language.as_deref(), Some("Spanish"));
        assert_eq!(patient.start_date, date(2014, 9, 1));
        assert_eq!(patient.date_of_last_measurement, date(2016, 2, 10));
    }

    #[test]
    fn fields_are_writable() {
        let mut patient = Patient::default();
        patient.address = Some("4 Elm Rd".into());
        patient.reason_for_inactivity = Some("Moved".into());
        assert_eq!(patient.address.as_deref(), Some("4 Elm Rd"));
        assert_eq!(patient.reason_for_inactivity.as_deref(), Some("Moved"));
    }

    #[test]
    fn gender_kind_reads_free_text() {
        let mut patient = Patient::default();
        assert_eq!(patient.gender_kind(), None);
        patient.gender = Some("male".into());
        assert_eq!(patient.gender_kind(), Some(Gender::Male));
        patient.gender = Some("Other".into());
        assert_eq!(patient.gender_kind(), None);
    }

    #[test]
    fn parses_partial_document() {
        let input = r#"patient_id: 7
first_name: Ada
birth_date: 1950-12-10
"#;
        let patient: Patient = parse_yaml(input, "Patient").expect("parse patient");
        assert_eq!(patient.patient_id, 7);
        assert_eq!(patient.first_name.as_deref(), Some("Ada"));
        assert_eq!(patient.birth_date, date(1950, 12, 10));
        assert!(patient.last_name.is_none());

        let yaml = render_yaml(&patient, "Patient").expect("render patient");
        assert!(yaml.contains("1950-12-10"));
    }
}
