//! Clinic administration records: patient email configuration, the quality team, and
//! password reset requests.

use crate::{EmailMessage, QualityReference};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An email template and the call-list filter selecting who receives it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailMessageConfiguration {
    pub identifier: i32,
    pub email_message: EmailMessage,
    pub call_list_filter: Option<String>,
}

impl EmailMessageConfiguration {
    pub fn new(
        identifier: i32,
        email_message: EmailMessage,
        call_list_filter: Option<String>,
    ) -> Self {
        Self {
            identifier,
            email_message,
            call_list_filter,
        }
    }
}

/// All email configurations of a clinic, keyed by identifier, plus the filters available to
/// them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailMessageConfigurationContainer {
    pub configurations: BTreeMap<i32, EmailMessageConfiguration>,
    pub all_filters: Vec<String>,
}

impl EmailMessageConfigurationContainer {
    pub fn new(
        configurations: BTreeMap<i32, EmailMessageConfiguration>,
        all_filters: Vec<String>,
    ) -> Self {
        Self {
            configurations,
            all_filters,
        }
    }

    /// Inserts `configuration` under its own identifier, returning any configuration it
    /// replaced.
    pub fn insert(
        &mut self,
        configuration: EmailMessageConfiguration,
    ) -> Option<EmailMessageConfiguration> {
        self.configurations
            .insert(configuration.identifier, configuration)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QualityReferenceConfiguration {
    pub quality_reference: QualityReference,
    pub active: bool,
}

impl QualityReferenceConfiguration {
    pub fn new(quality_reference: QualityReference, active: bool) -> Self {
        Self {
            quality_reference,
            active,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordResetRequest {
    pub request_id: i32,
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub time_requested: Option<DateTime<Utc>>,
}

impl PasswordResetRequest {
    pub fn new(
        request_id: i32,
        user_name: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        time_requested: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            request_id,
            user_name,
            first_name,
            last_name,
            time_requested,
        }
    }
}
