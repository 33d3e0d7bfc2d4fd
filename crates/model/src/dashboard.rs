//! The patient dashboard: the most recent value of every tracked measurement.

use crate::references::{Medication, Therapy};
use crate::results::{
    A1cResult, BloodPressureResult, BooleanResult, CategoricalResult, ContinuousResult,
    DiscreteResult, LdlResult, PsychologicalScreeningResult, TshResult,
};
use crate::targets::HealthyTargetStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Latest results for one patient, with the out-of-target flags computed for them.
///
/// Every slot is optional; a patient who has never had a measurement taken simply has `None`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Dashboard {
    pub a1c: Option<A1cResult>,
    pub glucose: Option<ContinuousResult>,
    pub ldl: Option<LdlResult>,
    pub hdl: Option<ContinuousResult>,
    pub triglycerides: Option<ContinuousResult>,
    pub tsh: Option<TshResult>,
    pub t4: Option<ContinuousResult>,
    pub uacr: Option<ContinuousResult>,
    pub egfr: Option<ContinuousResult>,
    pub creatinine: Option<ContinuousResult>,
    pub bmi: Option<ContinuousResult>,
    pub waist: Option<ContinuousResult>,
    pub blood_pressure: Option<BloodPressureResult>,
    pub last_class: Option<NaiveDate>,
    pub eye_screening: Option<CategoricalResult>,
    pub foot_screening: Option<CategoricalResult>,
    pub psychological_screening: Option<PsychologicalScreeningResult>,
    pub physical_activity: Option<DiscreteResult>,
    pub influenza_vaccine: Option<NaiveDate>,
    pub pcv13_vaccine: Option<NaiveDate>,
    pub ppsv23_vaccine: Option<NaiveDate>,
    pub hepatitis_b_vaccine: Option<NaiveDate>,
    pub tdap_vaccine: Option<NaiveDate>,
    pub zoster_vaccine: Option<NaiveDate>,
    pub smoking_status: Option<BooleanResult>,
    pub telephone_follow_up: Option<CategoricalResult>,
    pub ast: Option<ContinuousResult>,
    pub alt: Option<ContinuousResult>,
    pub psa: Option<ContinuousResult>,
    /// Last emergency room visit.
    pub er: Option<NaiveDate>,
    pub hts: HealthyTargetStatus,
    pub therapy: Option<Therapy>,
    pub medications: Vec<Medication>,
}

impl Dashboard {
    /// The most recent date recorded anywhere on the dashboard: result dates, screening and
    /// follow-up dates, vaccinations, the last class and the last ER visit.
    pub fn latest_measurement_date(&self) -> Option<NaiveDate> {
        [
            self.a1c.as_ref().and_then(|r| r.date),
            self.glucose.as_ref().and_then(|r| r.date),
            self.ldl.as_ref().and_then(|r| r.date),
            self.hdl.as_ref().and_then(|r| r.date),
            self.triglycerides.as_ref().and_then(|r| r.date),
            self.tsh.as_ref().and_then(|r| r.date),
            self.t4.as_ref().and_then(|r| r.date),
            self.uacr.as_ref().and_then(|r| r.date),
            self.egfr.as_ref().and_then(|r| r.date),
            self.creatinine.as_ref().and_then(|r| r.date),
            self.bmi.as_ref().and_then(|r| r.date),
            self.waist.as_ref().and_then(|r| r.date),
            self.blood_pressure.as_ref().and_then(|r| r.date),
            self.last_class,
            self.eye_screening.as_ref().and_then(|r| r.date_recorded),
            self.foot_screening.as_ref().and_then(|r| r.date_recorded),
            self.psychological_screening.as_ref().and_then(|r| r.date),
            self.physical_activity.as_ref().and_then(|r| r.date),
            self.influenza_vaccine,
            self.pcv13_vaccine,
            self.ppsv23_vaccine,
            self.hepatitis_b_vaccine,
            self.tdap_vaccine,
            self.zoster_vaccine,
            self.smoking_status.as_ref().and_then(|r| r.date),
            self.telephone_follow_up.as_ref().and_then(|r| r.date_recorded),
            self.ast.as_ref().and_then(|r| r.date),
            self.alt.as_ref().and_then(|r| r.date),
            self.psa.as_ref().and_then(|r| r.date),
            self.er,
        ]
        .into_iter()
        .flatten()
        .max()
    }
}

/// Therapies and medications a patient has been on over time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreatmentHistory {
    pub therapies: Vec<Therapy>,
    pub medications: Vec<Medication>,
}

impl TreatmentHistory {
    pub fn new(therapies: Vec<Therapy>, medications: Vec<Medication>) -> Self {
        Self {
            therapies,
            medications,
        }
    }
}
