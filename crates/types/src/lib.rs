//! Shared vocabulary for the diabetes registry.
//!
//! These types are used across the model and core crates wherever a closed set of values
//! travels over the wire: measurement keys in healthy-target reference and status rows, and
//! the patient gender used to pick sex-specific targets.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing registry vocabulary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypesError {
    /// The input did not name a known measurement
    #[error("unknown measurement key: '{0}'")]
    UnknownMeasurement(String),
}

/// A measurement tracked against a healthy target.
///
/// The wire key is lowercase with no separators (for example `bloodpressuresystole`), which
/// is how reference and status rows name their measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measurement {
    A1c,
    GlucoseAc,
    GlucosePc,
    Ldl,
    LdlPostMi,
    HdlMale,
    HdlFemale,
    Triglycerides,
    Tsh,
    T4,
    Uacr,
    Egfr,
    Creatinine,
    Bmi,
    WaistMale,
    WaistFemale,
    BloodPressureSystole,
    BloodPressureDiastole,
    ClassAttendance,
    EyeScreening,
    FootScreening,
    PsychologicalScreening,
    PhysicalActivity,
    InfluenzaVaccine,
    Pcv13Vaccine,
    Ppsv23Vaccine,
    HepatitisBVaccine,
    TdapVaccine,
    ZosterVaccine,
    Smoking,
    TelephoneFollowUp,
    Ast,
    Alt,
    Psa,
    Hospitalization,
}

impl Measurement {
    /// Every measurement, in dashboard order.
    pub const ALL: [Measurement; 35] = [
        Measurement::A1c,
        Measurement::GlucoseAc,
        Measurement::GlucosePc,
        Measurement::Ldl,
        Measurement::LdlPostMi,
        Measurement::HdlMale,
        Measurement::HdlFemale,
        Measurement::Triglycerides,
        Measurement::Tsh,
        Measurement::T4,
        Measurement::Uacr,
        Measurement::Egfr,
        Measurement::Creatinine,
        Measurement::Bmi,
        Measurement::WaistMale,
        Measurement::WaistFemale,
        Measurement::BloodPressureSystole,
        Measurement::BloodPressureDiastole,
        Measurement::ClassAttendance,
        Measurement::EyeScreening,
        Measurement::FootScreening,
        Measurement::PsychologicalScreening,
        Measurement::PhysicalActivity,
        Measurement::InfluenzaVaccine,
        Measurement::Pcv13Vaccine,
        Measurement::Ppsv23Vaccine,
        Measurement::HepatitisBVaccine,
        Measurement::TdapVaccine,
        Measurement::ZosterVaccine,
        Measurement::Smoking,
        Measurement::TelephoneFollowUp,
        Measurement::Ast,
        Measurement::Alt,
        Measurement::Psa,
        Measurement::Hospitalization,
    ];

    /// Returns the wire key for this measurement.
    pub fn as_wire(self) -> &'static str {
        match self {
            Measurement::A1c => "a1c",
            Measurement::GlucoseAc => "glucoseac",
            Measurement::GlucosePc => "glucosepc",
            Measurement::Ldl => "ldl",
            Measurement::LdlPostMi => "ldlpostmi",
            Measurement::HdlMale => "hdlmale",
            Measurement::HdlFemale => "hdlfemale",
            Measurement::Triglycerides => "triglycerides",
            Measurement::Tsh => "tsh",
            Measurement::T4 => "t4",
            Measurement::Uacr => "uacr",
            Measurement::Egfr => "egfr",
            Measurement::Creatinine => "creatinine",
            Measurement::Bmi => "bmi",
            Measurement::WaistMale => "waistmale",
            Measurement::WaistFemale => "waistfemale",
            Measurement::BloodPressureSystole => "bloodpressuresystole",
            Measurement::BloodPressureDiastole => "bloodpressurediastole",
            Measurement::ClassAttendance => "class",
            Measurement::EyeScreening => "eye",
            Measurement::FootScreening => "foot",
            Measurement::PsychologicalScreening => "psychologicalscreening",
            Measurement::PhysicalActivity => "physicalactivity",
            Measurement::InfluenzaVaccine => "influenzavaccine",
            Measurement::Pcv13Vaccine => "pcv13",
            Measurement::Ppsv23Vaccine => "ppsv23",
            Measurement::HepatitisBVaccine => "hepatitisb",
            Measurement::TdapVaccine => "tdap",
            Measurement::ZosterVaccine => "zoster",
            Measurement::Smoking => "smoking",
            Measurement::TelephoneFollowUp => "telephonefollowup",
            Measurement::Ast => "ast",
            Measurement::Alt => "alt",
            Measurement::Psa => "psa",
            Measurement::Hospitalization => "hospitalization",
        }
    }
}

impl FromStr for Measurement {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measurement::ALL
            .iter()
            .copied()
            .find(|m| m.as_wire() == s)
            .ok_or_else(|| TypesError::UnknownMeasurement(s.to_string()))
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl serde::Serialize for Measurement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> serde::Deserialize<'de> for Measurement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Patient gender as used for sex-specific healthy targets (HDL, waist).
///
/// The patient record stores gender as free text; this type is only derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Interprets a free-text gender label.
    ///
    /// Accepts `male`/`m` and `female`/`f` in any case, ignoring surrounding whitespace.
    /// Returns `None` for anything else.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    /// HDL measurement key for this gender.
    pub fn hdl(self) -> Measurement {
        match self {
            Gender::Male => Measurement::HdlMale,
            Gender::Female => Measurement::HdlFemale,
        }
    }

    /// Waist measurement key for this gender.
    pub fn waist(self) -> Measurement {
        match self {
            Gender::Male => Measurement::WaistMale,
            Gender::Female => Measurement::WaistFemale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_parse_back() {
        for m in Measurement::ALL {
            assert_eq!(m.as_wire().parse::<Measurement>(), Ok(m));
        }
    }

    #[test]
    fn rejects_unknown_measurement() {
        let err = "cholesterol".parse::<Measurement>().expect_err("unknown key");
        assert_eq!(err, TypesError::UnknownMeasurement("cholesterol".into()));
    }

    #[test]
    fn wire_keys_are_case_sensitive() {
        assert!("A1C".parse::<Measurement>().is_err());
    }

    #[test]
    fn serialises_as_wire_key() {
        let json = serde_json::to_string(&Measurement::BloodPressureSystole).unwrap();
        assert_eq!(json, "\"bloodpressuresystole\"");

        let parsed: Measurement = serde_json::from_str("\"hepatitisb\"").unwrap();
        assert_eq!(parsed, Measurement::HepatitisBVaccine);

        assert!(serde_json::from_str::<Measurement>("\"nope\"").is_err());
    }

    #[test]
    fn gender_labels() {
        assert_eq!(Gender::from_label(" Male "), Some(Gender::Male));
        assert_eq!(Gender::from_label("f"), Some(Gender::Female));
        assert_eq!(Gender::from_label("FEMALE"), Some(Gender::Female));
        assert_eq!(Gender::from_label("unknown"), None);
        assert_eq!(Gender::from_label(""), None);
    }

    #[test]
    fn gender_selects_specific_measurements() {
        assert_eq!(Gender::Male.hdl(), Measurement::HdlMale);
        assert_eq!(Gender::Female.waist(), Measurement::WaistFemale);
    }
}
