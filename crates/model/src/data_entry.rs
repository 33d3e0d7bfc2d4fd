//! Data entry form contents.
//!
//! [`DataEntryContainer`] carries whatever a staff member typed into the data entry screen for
//! one patient. Every field is optional; blank inputs stay `None`.

use chrono::NaiveDate;
use registry_types::Measurement;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataEntryContainer {
    pub patient_id: Option<i32>,
    pub a1c: Option<f64>,
    pub glucose_ac: Option<f64>,
    pub glucose_pc: Option<f64>,
    pub ldl: Option<f64>,
    pub ldl_post_mi: Option<f64>,
    pub on_statin: Option<bool>,
    pub hdl: Option<f64>,
    pub triglycerides: Option<f64>,
    pub tsh: Option<f64>,
    pub on_thyroid_treatment: Option<bool>,
    pub t4: Option<f64>,
    pub uacr: Option<f64>,
    pub egfr: Option<f64>,
    pub creatinine: Option<f64>,
    pub bmi: Option<f64>,
    pub waist: Option<f64>,
    pub blood_pressure_systole: Option<i32>,
    pub blood_pressure_diastole: Option<i32>,
    pub class_date: Option<NaiveDate>,
    pub eye: Option<String>,
    pub foot: Option<String>,
    pub psychological_screening: Option<i32>,
    pub physical_activity: Option<i32>,
    pub influenza_vaccine_date: Option<NaiveDate>,
    pub pcv13_date: Option<NaiveDate>,
    pub ppsv23_date: Option<NaiveDate>,
    pub hepatitis_b_date: Option<NaiveDate>,
    pub tdap_date: Option<NaiveDate>,
    pub zoster_date: Option<NaiveDate>,
    pub smoking: Option<bool>,
    pub telephone_follow_up: Option<String>,
    pub ast: Option<f64>,
    pub alt: Option<f64>,
    pub psa: Option<f64>,
    pub compliance: Option<f64>,
    pub hospitalization_date: Option<NaiveDate>,
    pub note_topic: Option<String>,
    pub note: Option<String>,
    pub date_entered: Option<NaiveDate>,
    pub poc: Option<bool>,
    pub ace_or_arb: Option<bool>,
    pub user_name: Option<String>,
    pub clinic_id: Option<i32>,
}

impl DataEntryContainer {
    /// Measurements the form has a value for.
    ///
    /// Context flags and the note are not measurements and are not reported. HDL and waist are
    /// left out because their measurement key depends on the patient's gender.
    pub fn entered_measurements(&self) -> Vec<Measurement> {
        let entered = [
            (Measurement::A1c, self.a1c.is_some()),
            (Measurement::GlucoseAc, self.glucose_ac.is_some()),
            (Measurement::GlucosePc, self.glucose_pc.is_some()),
            (Measurement::Ldl, self.ldl.is_some()),
            (Measurement::LdlPostMi, self.ldl_post_mi.is_some()),
            (Measurement::Triglycerides, self.triglycerides.is_some()),
            (Measurement::Tsh, self.tsh.is_some()),
            (Measurement::T4, self.t4.is_some()),
            (Measurement::Uacr, self.uacr.is_some()),
            (Measurement::Egfr, self.egfr.is_some()),
            (Measurement::Creatinine, self.creatinine.is_some()),
            (Measurement::Bmi, self.bmi.is_some()),
            (Measurement::BloodPressureSystole, self.blood_pressure_systole.is_some()),
            (Measurement::BloodPressureDiastole, self.blood_pressure_diastole.is_some()),
            (Measurement::ClassAttendance, self.class_date.is_some()),
            (Measurement::EyeScreening, self.eye.is_some()),
            (Measurement::FootScreening, self.foot.is_some()),
            (Measurement::PsychologicalScreening, self.psychological_screening.is_some()),
            (Measurement::PhysicalActivity, self.physical_activity.is_some()),
            (Measurement::InfluenzaVaccine, self.influenza_vaccine_date.is_some()),
            (Measurement::Pcv13Vaccine, self.pcv13_date.is_some()),
            (Measurement::Ppsv23Vaccine, self.ppsv23_date.is_some()),
            (Measurement::HepatitisBVaccine, self.hepatitis_b_date.is_some()),
            (Measurement::TdapVaccine, self.tdap_date.is_some()),
            (Measurement::ZosterVaccine, self.zoster_date.is_some()),
            (Measurement::Smoking, self.smoking.is_some()),
            (Measurement::TelephoneFollowUp, self.telephone_follow_up.is_some()),
            (Measurement::Ast, self.ast.is_some()),
            (Measurement::Alt, self.alt.is_some()),
            (Measurement::Psa, self.psa.is_some()),
            (Measurement::Hospitalization, self.hospitalization_date.is_some()),
        ];
        entered
            .into_iter()
            .filter_map(|(m, present)| present.then_some(m))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_yaml;

    #[test]
    fn default_has_nothing_entered() {
        let entry = DataEntryContainer::default();
        assert!(entry.patient_id.is_none());
        assert!(entry.entered_measurements().is_empty());
    }

    #[test]
    fn entered_measurements_follow_filled_fields() {
        let entry = DataEntryContainer {
            patient_id: Some(3),
            a1c: Some(6.8),
            poc: Some(true),
            blood_pressure_systole: Some(128),
            tdap_date: NaiveDate::from_ymd_opt(2016, 6, 1),
            note: Some("Walk-in".into()),
            ..DataEntryContainer::default()
        };
        assert_eq!(
            entry.entered_measurements(),
            vec![
                Measurement::A1c,
                Measurement::BloodPressureSystole,
                Measurement::TdapVaccine
            ]
        );
    }

    #[test]
    fn parses_form_document() {
        let input = r#"patient_id: 9
glucose_ac: 110
on_statin: true
eye: "2"
date_entered: 2016-06-02
user_name: nurse1
clinic_id: 1
"#;
        let entry: DataEntryContainer = parse_yaml(input, "DataEntry").expect("parse");
        assert_eq!(entry.patient_id, Some(9));
        assert_eq!(entry.glucose_ac, Some(110.0));
        assert_eq!(entry.on_statin, Some(true));
        assert_eq!(entry.eye.as_deref(), Some("2"));
        assert_eq!(entry.user_name.as_deref(), Some("nurse1"));
        assert_eq!(entry.clinic_id, Some(1));
    }
}
