//! Report statistics.

use serde::{Deserialize, Serialize};

/// One bar of a grouped report: a category label (or numeric bucket) and its value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoricalValue {
    pub category: Option<String>,
    pub value: Option<f64>,
    pub numerical_category: i32,
}

impl CategoricalValue {
    /// A value for a labelled category.
    pub fn new(category: Option<String>, value: Option<f64>) -> Self {
        Self {
            category,
            value,
            numerical_category: 0,
        }
    }

    /// A value for a numbered bucket (age band, score band).
    pub fn with_numerical_category(value: Option<f64>, numerical_category: i32) -> Self {
        Self {
            category: None,
            value,
            numerical_category,
        }
    }
}

/// Summary of a measurement across the registry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stats {
    pub average: Option<f64>,
    pub percentage: Option<f64>,
    pub groups: Vec<Vec<CategoricalValue>>,
}

impl Stats {
    pub fn new(
        average: Option<f64>,
        percentage: Option<f64>,
        groups: Vec<Vec<CategoricalValue>>,
    ) -> Self {
        Self {
            average,
            percentage,
            groups,
        }
    }
}

/// Registry population breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemographicData {
    pub total_patients: i32,
    pub percent_male: Option<f64>,
    pub percent_female: Option<f64>,
    pub percent_white: Option<f64>,
    pub percent_african_american: Option<f64>,
    pub percent_asian: Option<f64>,
    pub percent_indian: Option<f64>,
    pub percent_hispanic: Option<f64>,
    pub percent_middle_eastern: Option<f64>,
    pub percent_other: Option<f64>,
    pub ages: Vec<i32>,
}
