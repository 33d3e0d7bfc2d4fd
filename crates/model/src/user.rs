//! Registry users and note authorship.

use crate::Clinic;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A staff account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct User {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub administrator: bool,
    pub active: bool,
    pub date_joined: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub email_address: Option<String>,
    /// Clinics the user may act for.
    pub clinics: Vec<Clinic>,
}

impl User {
    /// Creates a user with no clinic memberships.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_name: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        job_title: Option<String>,
        administrator: bool,
        active: bool,
        date_joined: Option<DateTime<Utc>>,
        last_login: Option<DateTime<Utc>>,
        email_address: Option<String>,
    ) -> Self {
        Self {
            user_name,
            first_name,
            last_name,
            job_title,
            administrator,
            active,
            date_joined,
            last_login,
            email_address,
            clinics: Vec::new(),
        }
    }
}

/// Who touched a progress note, and when.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoteAuthor {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub job_title: Option<String>,
    pub time_stamp: Option<DateTime<Utc>>,
}

impl NoteAuthor {
    pub fn new(
        first_name: Option<String>,
        last_name: Option<String>,
        job_title: Option<String>,
        time_stamp: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            job_title,
            time_stamp,
        }
    }
}
