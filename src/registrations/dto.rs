use serde::{Deserialize, Serialize};

use crate::registrations::repo::Registration;

/// Raw intake payload. Every field is optional at the serde level so a
/// missing field surfaces as a 400 validation error, not a decode rejection.
#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    #[serde(default)]
    pub nama: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub institusi: Option<String>,
    #[serde(default)]
    pub kebutuhan: Option<String>,
    #[serde(default, rename = "saranTopik")]
    pub saran_topik: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedRegistrationResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: Registration,
}
