//! Measurement results.
//!
//! A result is a dated value. The shape of the value differs by measurement kind:
//! - continuous (most labs): a decimal
//! - discrete (physical activity minutes): an integer
//! - categorical (eye/foot screening, telephone follow-up): a category code and its meaning
//! - boolean (smoking status)
//!
//! A few labs carry clinical context alongside the value (A1C point-of-care, LDL post-MI and
//! statin use, TSH thyroid treatment).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContinuousResult {
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
}

impl ContinuousResult {
    pub fn new(date: Option<NaiveDate>, value: Option<f64>) -> Self {
        Self { date, value }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscreteResult {
    pub date: Option<NaiveDate>,
    pub value: i32,
}

impl DiscreteResult {
    pub fn new(date: Option<NaiveDate>, value: i32) -> Self {
        Self { date, value }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoricalResult {
    pub category: Option<String>,
    pub definition: Option<String>,
    pub date_recorded: Option<NaiveDate>,
}

impl CategoricalResult {
    pub fn new(
        category: Option<String>,
        definition: Option<String>,
        date_recorded: Option<NaiveDate>,
    ) -> Self {
        Self {
            category,
            definition,
            date_recorded,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BooleanResult {
    pub date: Option<NaiveDate>,
    pub value: bool,
}

impl BooleanResult {
    pub fn new(date: Option<NaiveDate>, value: bool) -> Self {
        Self { date, value }
    }
}

/// Hemoglobin A1C result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct A1cResult {
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
    /// Measured at point of care rather than by a lab.
    pub poc: bool,
}

impl A1cResult {
    pub fn new(date: Option<NaiveDate>, value: Option<f64>, poc: bool) -> Self {
        Self { date, value, poc }
    }
}

/// LDL cholesterol result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LdlResult {
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
    /// Patient has had a myocardial infarction; a stricter target applies.
    pub post_mi: bool,
    pub on_statin: bool,
}

impl LdlResult {
    pub fn new(date: Option<NaiveDate>, value: Option<f64>, post_mi: bool, on_statin: bool) -> Self {
        Self {
            date,
            value,
            post_mi,
            on_statin,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TshResult {
    pub date: Option<NaiveDate>,
    pub value: Option<f64>,
    pub on_thyroid_treatment: bool,
}

impl TshResult {
    pub fn new(date: Option<NaiveDate>, value: Option<f64>, on_thyroid_treatment: bool) -> Self {
        Self {
            date,
            value,
            on_thyroid_treatment,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BloodPressureResult {
    pub date: Option<NaiveDate>,
    pub systolic_value: i32,
    pub diastolic_value: i32,
    /// On an ACE inhibitor or ARB.
    pub ace_or_arb: bool,
}

impl BloodPressureResult {
    pub fn new(
        date: Option<NaiveDate>,
        systolic_value: i32,
        diastolic_value: i32,
        ace_or_arb: bool,
    ) -> Self {
        Self {
            date,
            systolic_value,
            diastolic_value,
            ace_or_arb,
        }
    }
}

/// PHQ screening score with the severity band and actions it maps to.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PsychologicalScreeningResult {
    pub date: Option<NaiveDate>,
    pub score: i32,
    pub severity: Option<String>,
    pub proposed_actions: Option<String>,
}

impl PsychologicalScreeningResult {
    pub fn new(
        date: Option<NaiveDate>,
        score: i32,
        severity: Option<String>,
        proposed_actions: Option<String>,
    ) -> Self {
        Self {
            date,
            score,
            severity,
            proposed_actions,
        }
    }
}
