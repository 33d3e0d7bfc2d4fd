//! Clinic reference data.
//!
//! Lookup tables shown by the registry screens (therapies, medications, screening scales,
//! follow-up codes) and the [`ReferenceContainer`] that bundles them with the clinic and its
//! healthy targets.

use crate::targets::{self, HealthyTargetReference};
use crate::Clinic;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A quality-team role and what it is responsible for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QualityReference {
    pub role: Option<String>,
    pub responsibility: Option<String>,
}

impl QualityReference {
    pub fn new(role: Option<String>, responsibility: Option<String>) -> Self {
        Self {
            role,
            responsibility,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Therapy {
    pub prescription_class: Option<String>,
    pub therapy_type: Option<String>,
    pub date_reviewed: Option<NaiveDate>,
}

impl Therapy {
    pub fn new(
        prescription_class: Option<String>,
        therapy_type: Option<String>,
        date_reviewed: Option<NaiveDate>,
    ) -> Self {
        Self {
            prescription_class,
            therapy_type,
            date_reviewed,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Medication {
    pub medication_id: Option<String>,
    pub medication_name: Option<String>,
    pub medication_class: Option<String>,
    pub date_reviewed: Option<NaiveDate>,
}

impl Medication {
    pub fn new(
        medication_id: Option<String>,
        medication_name: Option<String>,
        medication_class: Option<String>,
        date_reviewed: Option<NaiveDate>,
    ) -> Self {
        Self {
            medication_id,
            medication_name,
            medication_class,
            date_reviewed,
        }
    }
}

/// One band of the PHQ screening scale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PsychologicalScreeningReference {
    pub score: i32,
    pub severity: Option<String>,
    pub proposed_actions: Option<String>,
}

impl PsychologicalScreeningReference {
    pub fn new(score: i32, severity: Option<String>, proposed_actions: Option<String>) -> Self {
        Self {
            score,
            severity,
            proposed_actions,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelephoneFollowUpDefinition {
    pub code: Option<String>,
    pub definition: Option<String>,
}

impl TelephoneFollowUpDefinition {
    pub fn new(code: Option<String>, definition: Option<String>) -> Self {
        Self { code, definition }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FootExamRiskDefinition {
    pub risk_category: Option<String>,
    pub definition: Option<String>,
}

impl FootExamRiskDefinition {
    pub fn new(risk_category: Option<String>, definition: Option<String>) -> Self {
        Self {
            risk_category,
            definition,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EyeExamDefinition {
    pub code: Option<String>,
    pub definition: Option<String>,
}

impl EyeExamDefinition {
    pub fn new(code: Option<String>, definition: Option<String>) -> Self {
        Self { code, definition }
    }
}

/// A message template sent to patients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailMessage {
    pub subject: Option<String>,
    pub language: Option<String>,
    pub message: Option<String>,
}

impl EmailMessage {
    pub fn new(subject: Option<String>, language: Option<String>, message: Option<String>) -> Self {
        Self {
            subject,
            language,
            message,
        }
    }
}

/// Everything a clinic's screens look up: code tables, the clinic itself, and the healthy
/// target ranges.
///
/// On disk the healthy targets are stored as a list of rows (see
/// [`crate::targets::as_rows`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceContainer {
    pub quality_references: Vec<QualityReference>,
    pub therapies: Vec<Therapy>,
    pub medications: Vec<Medication>,
    pub psychological_screening_references: Vec<PsychologicalScreeningReference>,
    pub telephone_follow_up_definitions: Vec<TelephoneFollowUpDefinition>,
    pub foot_exam_risk_definitions: Vec<FootExamRiskDefinition>,
    pub eye_exam_definitions: Vec<EyeExamDefinition>,
    pub clinic: Clinic,
    pub note_topics: Vec<String>,
    pub languages: Vec<String>,
    pub reasons_for_inactivity: Vec<String>,
    pub email_message_subjects: Vec<String>,
    #[serde(with = "targets::as_rows")]
    pub healthy_targets: HealthyTargetReference,
}

impl ReferenceContainer {
    /// The PHQ band for `score`: the highest band whose score does not exceed it.
    pub fn psychological_screening_for(
        &self,
        score: i32,
    ) -> Option<&PsychologicalScreeningReference> {
        self.psychological_screening_references
            .iter()
            .filter(|r| r.score <= score)
            .max_by_key(|r| r.score)
    }
}
