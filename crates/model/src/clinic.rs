//! Clinic records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A clinic participating in the registry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Clinic {
    pub clinic_id: i32,
    pub clinic_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
}

impl Clinic {
    pub fn new(
        clinic_id: i32,
        clinic_name: Option<String>,
        address: Option<String>,
        phone_number: Option<String>,
        email_address: Option<String>,
    ) -> Self {
        Self {
            clinic_id,
            clinic_name,
            address,
            phone_number,
            email_address,
        }
    }
}

/// Contact summary used in outgoing messages.
///
/// The email line is only present when the clinic has an email address. Missing text fields
/// render as `null`.
impl fmt::Display for Clinic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_null(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("null")
        }

        write!(
            f,
            "clinic name: {}\naddress: {}\nphone number: {}",
            or_null(&self.clinic_name),
            or_null(&self.address),
            or_null(&self.phone_number)
        )?;
        if let Some(email) = &self.email_address {
            write!(f, "\nemail address: {email}")?;
        }
        Ok(())
    }
}

/// A pending clinic sign-up awaiting email confirmation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClinicRegistration {
    pub clinic: Clinic,
    pub hashed_key: Option<String>,
    pub salt: Option<String>,
    pub email_key: Option<String>,
}

impl ClinicRegistration {
    pub fn new(
        clinic: Clinic,
        hashed_key: Option<String>,
        salt: Option<String>,
        email_key: Option<String>,
    ) -> Self {
        Self {
            clinic,
            hashed_key,
            salt,
            email_key,
        }
    }
}
