//! Healthy-target reference ranges and per-patient target status.
//!
//! Reference ranges travel as rows of `(measurement, lower, upper)`. Upstream tables have no
//! way to say "unbounded", so an upper bound at or above [`NO_UPPER_BOUND`] stands for "no
//! upper bound". Rows are translated into a [`HealthyTargetReference`] with one optional
//! slot per measurement that has a reference range.
//!
//! Status travels as rows of `(measurement, out_of_target)` and is collected into a
//! [`HealthyTargetStatus`] with one flag per measurement.

use crate::{ModelError, ModelResult};
use registry_types::Measurement;
use serde::{Deserialize, Serialize};

/// Upper bounds at or above this value mean the range has no upper bound.
pub const NO_UPPER_BOUND: f64 = 10000.0;

// ============================================================================
// Reference ranges
// ============================================================================

/// A healthy range for one measurement. Either bound may be absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthyTarget {
    pub upper_bound: Option<f64>,
    pub lower_bound: Option<f64>,
}

impl HealthyTarget {
    pub fn new(upper_bound: Option<f64>, lower_bound: Option<f64>) -> Self {
        Self {
            upper_bound,
            lower_bound,
        }
    }

    /// Returns `true` if `value` lies within both bounds (inclusive). Absent bounds do not
    /// constrain.
    pub fn contains(&self, value: f64) -> bool {
        let above_lower = self.lower_bound.map_or(true, |lower| value >= lower);
        let below_upper = self.upper_bound.map_or(true, |upper| value <= upper);
        above_lower && below_upper
    }

    pub fn is_out_of_target(&self, value: f64) -> bool {
        !self.contains(value)
    }
}

/// Healthy ranges for every measurement with a reference range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthyTargetReference {
    pub a1c: Option<HealthyTarget>,
    pub alt: Option<HealthyTarget>,
    pub ast: Option<HealthyTarget>,
    pub blood_pressure_diastole: Option<HealthyTarget>,
    pub blood_pressure_systole: Option<HealthyTarget>,
    pub bmi: Option<HealthyTarget>,
    pub creatinine: Option<HealthyTarget>,
    pub egfr: Option<HealthyTarget>,
    pub glucose_ac: Option<HealthyTarget>,
    pub hdl_female: Option<HealthyTarget>,
    pub hdl_male: Option<HealthyTarget>,
    pub ldl: Option<HealthyTarget>,
    pub physical_activity: Option<HealthyTarget>,
    pub psa: Option<HealthyTarget>,
    pub t4: Option<HealthyTarget>,
    pub triglycerides: Option<HealthyTarget>,
    pub tsh: Option<HealthyTarget>,
    pub uacr: Option<HealthyTarget>,
    pub waist_female: Option<HealthyTarget>,
    pub waist_male: Option<HealthyTarget>,
}

/// One reference range row as stored in reference documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthyTargetRow {
    pub measurement: Measurement,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

impl HealthyTargetReference {
    fn slot(&self, measurement: Measurement) -> Option<&Option<HealthyTarget>> {
        let slot = match measurement {
            Measurement::A1c => &self.a1c,
            Measurement::Alt => &self.alt,
            Measurement::Ast => &self.ast,
            Measurement::BloodPressureDiastole => &self.blood_pressure_diastole,
            Measurement::BloodPressureSystole => &self.blood_pressure_systole,
            Measurement::Bmi => &self.bmi,
            Measurement::Creatinine => &self.creatinine,
            Measurement::Egfr => &self.egfr,
            Measurement::GlucoseAc => &self.glucose_ac,
            Measurement::HdlFemale => &self.hdl_female,
            Measurement::HdlMale => &self.hdl_male,
            Measurement::Ldl => &self.ldl,
            Measurement::PhysicalActivity => &self.physical_activity,
            Measurement::Psa => &self.psa,
            Measurement::T4 => &self.t4,
            Measurement::Triglycerides => &self.triglycerides,
            Measurement::Tsh => &self.tsh,
            Measurement::Uacr => &self.uacr,
            Measurement::WaistFemale => &self.waist_female,
            Measurement::WaistMale => &self.waist_male,
            _ => return None,
        };
        Some(slot)
    }

    fn slot_mut(&mut self, measurement: Measurement) -> Option<&mut Option<HealthyTarget>> {
        let slot = match measurement {
            Measurement::A1c => &mut self.a1c,
            Measurement::Alt => &mut self.alt,
            Measurement::Ast => &mut self.ast,
            Measurement::BloodPressureDiastole => &mut self.blood_pressure_diastole,
            Measurement::BloodPressureSystole => &mut self.blood_pressure_systole,
            Measurement::Bmi => &mut self.bmi,
            Measurement::Creatinine => &mut self.creatinine,
            Measurement::Egfr => &mut self.egfr,
            Measurement::GlucoseAc => &mut self.glucose_ac,
            Measurement::HdlFemale => &mut self.hdl_female,
            Measurement::HdlMale => &mut self.hdl_male,
            Measurement::Ldl => &mut self.ldl,
            Measurement::PhysicalActivity => &mut self.physical_activity,
            Measurement::Psa => &mut self.psa,
            Measurement::T4 => &mut self.t4,
            Measurement::Triglycerides => &mut self.triglycerides,
            Measurement::Tsh => &mut self.tsh,
            Measurement::Uacr => &mut self.uacr,
            Measurement::WaistFemale => &mut self.waist_female,
            Measurement::WaistMale => &mut self.waist_male,
            _ => return None,
        };
        Some(slot)
    }

    /// Returns `true` if `measurement` has a reference range slot at all.
    pub fn has_slot(&self, measurement: Measurement) -> bool {
        self.slot(measurement).is_some()
    }

    /// The healthy range for `measurement`, if one is configured.
    pub fn get(&self, measurement: Measurement) -> Option<&HealthyTarget> {
        self.slot(measurement).and_then(Option::as_ref)
    }

    /// Replaces the healthy range for `measurement`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidInput`] if the measurement has no reference range slot
    /// (for example screenings and vaccines).
    pub fn set(&mut self, measurement: Measurement, target: HealthyTarget) -> ModelResult<()> {
        let slot = self.slot_mut(measurement).ok_or_else(|| {
            ModelError::InvalidInput(format!(
                "measurement '{measurement}' has no healthy target range"
            ))
        })?;
        *slot = Some(target);
        Ok(())
    }

    /// Builds a reference from rows.
    ///
    /// Later rows for the same measurement replace earlier ones. Rows naming a measurement
    /// without a reference range slot are logged and skipped.
    pub fn from_rows(rows: impl IntoIterator<Item = HealthyTargetRow>) -> Self {
        let mut reference = Self::default();
        for row in rows {
            let upper = row.upper.filter(|upper| *upper < NO_UPPER_BOUND);
            match reference.slot_mut(row.measurement) {
                Some(slot) => *slot = Some(HealthyTarget::new(upper, row.lower)),
                None => tracing::warn!(
                    "ignoring healthy target for '{}': no reference range slot",
                    row.measurement
                ),
            }
        }
        reference
    }

    /// Flattens the reference into rows, in measurement order. Unset slots are omitted.
    pub fn to_rows(&self) -> Vec<HealthyTargetRow> {
        Measurement::ALL
            .iter()
            .filter_map(|&measurement| {
                self.get(measurement).map(|target| HealthyTargetRow {
                    measurement,
                    lower: target.lower_bound,
                    upper: target.upper_bound,
                })
            })
            .collect()
    }
}

/// Serde adapter storing a [`HealthyTargetReference`] as a list of [`HealthyTargetRow`]s.
///
/// Use with `#[serde(with = "registry_model::targets::as_rows")]`.
pub mod as_rows {
    use super::{HealthyTargetReference, HealthyTargetRow};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(reference: &HealthyTargetReference, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        reference.to_rows().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HealthyTargetReference, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<HealthyTargetRow>::deserialize(deserializer)?;
        Ok(HealthyTargetReference::from_rows(rows))
    }
}

// ============================================================================
// Target status
// ============================================================================

/// Which of a patient's most recent measurements fall outside their healthy target.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HealthyTargetStatus {
    pub a1c_out_of_target: bool,
    pub glucose_ac_out_of_target: bool,
    pub glucose_pc_out_of_target: bool,
    /// The most recent glucose reading was taken fasting.
    pub last_glucose_fasting: bool,
    pub ldl_out_of_target: bool,
    pub ldl_post_mi_out_of_target: bool,
    pub hdl_male_out_of_target: bool,
    pub hdl_female_out_of_target: bool,
    pub triglycerides_out_of_target: bool,
    pub tsh_out_of_target: bool,
    pub t4_out_of_target: bool,
    pub uacr_out_of_target: bool,
    pub egfr_out_of_target: bool,
    pub creatinine_out_of_target: bool,
    pub bmi_out_of_target: bool,
    pub waist_male_out_of_target: bool,
    pub waist_female_out_of_target: bool,
    pub systolic_blood_pressure_out_of_target: bool,
    pub diastolic_blood_pressure_out_of_target: bool,
    pub class_attendance_out_of_target: bool,
    pub eye_screening_out_of_target: bool,
    pub foot_screening_out_of_target: bool,
    pub psychological_screening_out_of_target: bool,
    pub physical_activity_out_of_target: bool,
    pub influenza_vaccine_out_of_target: bool,
    pub pcv13_vaccine_out_of_target: bool,
    pub ppsv23_vaccine_out_of_target: bool,
    pub hepatitis_b_vaccine_out_of_target: bool,
    pub tdap_vaccine_out_of_target: bool,
    pub zoster_vaccine_out_of_target: bool,
    pub smoking_status_out_of_target: bool,
    pub telephone_follow_up_out_of_target: bool,
    pub ast_out_of_target: bool,
    pub alt_out_of_target: bool,
    pub psa_out_of_target: bool,
    pub hospitalization_out_of_target: bool,
}

/// One status row: whether a measurement is out of target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusRow {
    pub measurement: Measurement,
    pub out_of_target: bool,
}

impl HealthyTargetStatus {
    fn flag(&self, measurement: Measurement) -> bool {
        match measurement {
            Measurement::A1c => self.a1c_out_of_target,
            Measurement::GlucoseAc => self.glucose_ac_out_of_target,
            Measurement::GlucosePc => self.glucose_pc_out_of_target,
            Measurement::Ldl => self.ldl_out_of_target,
            Measurement::LdlPostMi => self.ldl_post_mi_out_of_target,
            Measurement::HdlMale => self.hdl_male_out_of_target,
            Measurement::HdlFemale => self.hdl_female_out_of_target,
            Measurement::Triglycerides => self.triglycerides_out_of_target,
            Measurement::Tsh => self.tsh_out_of_target,
            Measurement::T4 => self.t4_out_of_target,
            Measurement::Uacr => self.uacr_out_of_target,
            Measurement::Egfr => self.egfr_out_of_target,
            Measurement::Creatinine => self.creatinine_out_of_target,
            Measurement::Bmi => self.bmi_out_of_target,
            Measurement::WaistMale => self.waist_male_out_of_target,
            Measurement::WaistFemale => self.waist_female_out_of_target,
            Measurement::BloodPressureSystole => self.systolic_blood_pressure_out_of_target,
            Measurement::BloodPressureDiastole => self.diastolic_blood_pressure_out_of_target,
            Measurement::ClassAttendance => self.class_attendance_out_of_target,
            Measurement::EyeScreening => self.eye_screening_out_of_target,
            Measurement::FootScreening => self.foot_screening_out_of_target,
            Measurement::PsychologicalScreening => self.psychological_screening_out_of_target,
            Measurement::PhysicalActivity => self.physical_activity_out_of_target,
            Measurement::InfluenzaVaccine => self.influenza_vaccine_out_of_target,
            Measurement::Pcv13Vaccine => self.pcv13_vaccine_out_of_target,
            Measurement::Ppsv23Vaccine => self.ppsv23_vaccine_out_of_target,
            Measurement::HepatitisBVaccine => self.hepatitis_b_vaccine_out_of_target,
            Measurement::TdapVaccine => self.tdap_vaccine_out_of_target,
            Measurement::ZosterVaccine => self.zoster_vaccine_out_of_target,
            Measurement::Smoking => self.smoking_status_out_of_target,
            Measurement::TelephoneFollowUp => self.telephone_follow_up_out_of_target,
            Measurement::Ast => self.ast_out_of_target,
            Measurement::Alt => self.alt_out_of_target,
            Measurement::Psa => self.psa_out_of_target,
            Measurement::Hospitalization => self.hospitalization_out_of_target,
        }
    }

    fn flag_mut(&mut self, measurement: Measurement) -> &mut bool {
        match measurement {
            Measurement::A1c => &mut self.a1c_out_of_target,
            Measurement::GlucoseAc => &mut self.glucose_ac_out_of_target,
            Measurement::GlucosePc => &mut self.glucose_pc_out_of_target,
            Measurement::Ldl => &mut self.ldl_out_of_target,
            Measurement::LdlPostMi => &mut self.ldl_post_mi_out_of_target,
            Measurement::HdlMale => &mut self.hdl_male_out_of_target,
            Measurement::HdlFemale => &mut self.hdl_female_out_of_target,
            Measurement::Triglycerides => &mut self.triglycerides_out_of_target,
            Measurement::Tsh => &mut self.tsh_out_of_target,
            Measurement::T4 => &mut self.t4_out_of_target,
            Measurement::Uacr => &mut self.uacr_out_of_target,
            Measurement::Egfr => &mut self.egfr_out_of_target,
            Measurement::Creatinine => &mut self.creatinine_out_of_target,
            Measurement::Bmi => &mut self.bmi_out_of_target,
            Measurement::WaistMale => &mut self.waist_male_out_of_target,
            Measurement::WaistFemale => &mut self.waist_female_out_of_target,
            Measurement::BloodPressureSystole => &mut self.systolic_blood_pressure_out_of_target,
            Measurement::BloodPressureDiastole => {
                &mut self.diastolic_blood_pressure_out_of_target
            }
            Measurement::ClassAttendance => &mut self.class_attendance_out_of_target,
            Measurement::EyeScreening => &mut self.eye_screening_out_of_target,
            Measurement::FootScreening => &mut self.foot_screening_out_of_target,
            Measurement::PsychologicalScreening => &mut self.psychological_screening_out_of_target,
            Measurement::PhysicalActivity => &mut self.physical_activity_out_of_target,
            Measurement::InfluenzaVaccine => &mut self.influenza_vaccine_out_of_target,
            Measurement::Pcv13Vaccine => &mut self.pcv13_vaccine_out_of_target,
            Measurement::Ppsv23Vaccine => &mut self.ppsv23_vaccine_out_of_target,
            Measurement::HepatitisBVaccine => &mut self.hepatitis_b_vaccine_out_of_target,
            Measurement::TdapVaccine => &mut self.tdap_vaccine_out_of_target,
            Measurement::ZosterVaccine => &mut self.zoster_vaccine_out_of_target,
            Measurement::Smoking => &mut self.smoking_status_out_of_target,
            Measurement::TelephoneFollowUp => &mut self.telephone_follow_up_out_of_target,
            Measurement::Ast => &mut self.ast_out_of_target,
            Measurement::Alt => &mut self.alt_out_of_target,
            Measurement::Psa => &mut self.psa_out_of_target,
            Measurement::Hospitalization => &mut self.hospitalization_out_of_target,
        }
    }

    pub fn is_out_of_target(&self, measurement: Measurement) -> bool {
        self.flag(measurement)
    }

    pub fn set_out_of_target(&mut self, measurement: Measurement, out_of_target: bool) {
        *self.flag_mut(measurement) = out_of_target;
    }

    /// Every measurement currently flagged, in measurement order.
    pub fn out_of_target(&self) -> Vec<Measurement> {
        Measurement::ALL
            .iter()
            .copied()
            .filter(|&m| self.is_out_of_target(m))
            .collect()
    }

    /// Collects status rows. A later row for the same measurement wins.
    pub fn from_rows(rows: impl IntoIterator<Item = StatusRow>) -> Self {
        let mut status = Self::default();
        for row in rows {
            status.set_out_of_target(row.measurement, row.out_of_target);
        }
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_yaml;

    fn row(measurement: Measurement, lower: Option<f64>, upper: Option<f64>) -> HealthyTargetRow {
        HealthyTargetRow {
            measurement,
            lower,
            upper,
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let target = HealthyTarget::new(Some(7.0), Some(4.0));
        assert!(target.contains(4.0));
        assert!(target.contains(7.0));
        assert!(target.contains(5.5));
        assert!(!target.contains(3.9));
        assert!(target.is_out_of_target(7.1));
    }

    #[test]
    fn absent_bounds_do_not_constrain() {
        let lower_only = HealthyTarget::new(None, Some(40.0));
        assert!(lower_only.contains(1_000_000.0));
        assert!(lower_only.is_out_of_target(39.0));

        let unbounded = HealthyTarget::default();
        assert!(unbounded.contains(-5.0));
    }

    #[test]
    fn sentinel_upper_bound_means_unbounded() {
        let reference = HealthyTargetReference::from_rows(vec![
            row(Measurement::Egfr, Some(60.0), Some(10000.0)),
            row(Measurement::HdlMale, Some(40.0), Some(25000.0)),
            row(Measurement::A1c, Some(0.0), Some(7.0)),
        ]);

        assert_eq!(reference.egfr, Some(HealthyTarget::new(None, Some(60.0))));
        assert_eq!(reference.hdl_male, Some(HealthyTarget::new(None, Some(40.0))));
        assert_eq!(reference.a1c, Some(HealthyTarget::new(Some(7.0), Some(0.0))));
    }

    #[test]
    fn later_rows_replace_earlier_ones() {
        let reference = HealthyTargetReference::from_rows(vec![
            row(Measurement::Ldl, Some(0.0), Some(100.0)),
            row(Measurement::Ldl, Some(0.0), Some(70.0)),
        ]);
        assert_eq!(reference.get(Measurement::Ldl).and_then(|t| t.upper_bound), Some(70.0));
    }

    #[test]
    fn rows_without_ranges_are_skipped() {
        let reference = HealthyTargetReference::from_rows(vec![
            row(Measurement::GlucosePc, None, Some(180.0)),
            row(Measurement::Smoking, None, None),
            row(Measurement::A1c, None, Some(7.0)),
        ]);

        assert_eq!(reference.get(Measurement::GlucosePc), None);
        assert_eq!(reference.get(Measurement::A1c), Some(&HealthyTarget::new(Some(7.0), None)));
        assert_eq!(reference.to_rows().len(), 1);
    }

    #[test]
    fn set_rejects_measurements_without_ranges() {
        let mut reference = HealthyTargetReference::default();
        let err = reference
            .set(Measurement::Smoking, HealthyTarget::default())
            .expect_err("smoking has no range");
        match err {
            ModelError::InvalidInput(msg) => assert!(msg.contains("smoking")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn to_rows_skips_unset_slots() {
        let mut reference = HealthyTargetReference::default();
        reference
            .set(Measurement::WaistFemale, HealthyTarget::new(Some(35.0), None))
            .expect("waist has a slot");
        reference
            .set(Measurement::Tsh, HealthyTarget::new(Some(4.5), Some(0.4)))
            .expect("tsh has a slot");

        let rows = reference.to_rows();
        assert_eq!(
            rows,
            vec![
                row(Measurement::Tsh, Some(0.4), Some(4.5)),
                row(Measurement::WaistFemale, None, Some(35.0)),
            ]
        );
        assert_eq!(HealthyTargetReference::from_rows(rows), reference);
    }

    #[test]
    fn slots_cover_only_ranged_measurements() {
        let reference = HealthyTargetReference::default();
        assert!(reference.has_slot(Measurement::BloodPressureSystole));
        assert!(reference.has_slot(Measurement::PhysicalActivity));
        assert!(!reference.has_slot(Measurement::LdlPostMi));
        assert!(!reference.has_slot(Measurement::InfluenzaVaccine));
        assert_eq!(
            Measurement::ALL.iter().filter(|m| reference.has_slot(**m)).count(),
            20
        );
    }

    #[test]
    fn rows_deserialise_through_adapter() {
        #[derive(Deserialize)]
        struct Doc {
            #[serde(with = "as_rows")]
            targets: HealthyTargetReference,
        }

        let input = r#"targets:
  - measurement: bmi
    lower: 18.5
    upper: 25
  - measurement: psa
    upper: 4
"#;
        let doc: Doc = parse_yaml(input, "Doc").expect("parse rows");
        assert_eq!(doc.targets.bmi, Some(HealthyTarget::new(Some(25.0), Some(18.5))));
        assert_eq!(doc.targets.psa, Some(HealthyTarget::new(Some(4.0), None)));

        let bad = "targets:\n  - measurement: cholesterol\n";
        assert!(parse_yaml::<Doc>(bad, "Doc").is_err());
    }

    #[test]
    fn status_rows_set_flags() {
        let status = HealthyTargetStatus::from_rows(vec![
            StatusRow {
                measurement: Measurement::A1c,
                out_of_target: true,
            },
            StatusRow {
                measurement: Measurement::Pcv13Vaccine,
                out_of_target: true,
            },
            StatusRow {
                measurement: Measurement::Hospitalization,
                out_of_target: false,
            },
        ]);

        assert!(status.a1c_out_of_target);
        assert!(status.pcv13_vaccine_out_of_target);
        assert!(!status.hospitalization_out_of_target);
        assert_eq!(
            status.out_of_target(),
            vec![Measurement::A1c, Measurement::Pcv13Vaccine]
        );
    }

    #[test]
    fn every_measurement_has_its_own_flag() {
        for m in Measurement::ALL {
            let mut status = HealthyTargetStatus::default();
            status.set_out_of_target(m, true);
            assert_eq!(status.out_of_target(), vec![m], "flag for {m}");
        }
    }

    #[test]
    fn last_glucose_fasting_is_not_a_measurement_flag() {
        let status = HealthyTargetStatus {
            last_glucose_fasting: true,
            ..Default::default()
        };
        assert!(status.out_of_target().is_empty());
    }
}
