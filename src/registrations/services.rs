use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::error::ApiError;
use crate::registrations::dto::CreateRegistrationRequest;
use crate::registrations::repo::NewRegistration;

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Indonesian mobile numbers: local `08...` or international `62`/`+62`,
/// checked after stripping whitespace and hyphens.
pub(crate) fn is_valid_whatsapp(raw: &str) -> bool {
    lazy_static! {
        static ref WHATSAPP_RE: Regex = Regex::new(r"^(08|\+?62)[0-9]{8,13}$").unwrap();
    }
    let stripped: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    WHATSAPP_RE.is_match(&stripped)
}

fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.trim().is_empty())
}

/// Fail-fast validation, first violation wins: presence, then email format,
/// then phone format. Values are stored as submitted; only `saran_topik` is
/// normalized (blank or absent becomes None).
pub(crate) fn validate(req: &CreateRegistrationRequest) -> Result<NewRegistration, ApiError> {
    let (Some(nama), Some(email), Some(whatsapp), Some(institusi), Some(kebutuhan)) = (
        required(&req.nama),
        required(&req.email),
        required(&req.whatsapp),
        required(&req.institusi),
        required(&req.kebutuhan),
    ) else {
        warn!("registration rejected: missing required fields");
        return Err(ApiError::Validation("missing required fields"));
    };

    if !is_valid_email(email) {
        warn!(email = %email, "registration rejected: bad email");
        return Err(ApiError::Validation("invalid email format"));
    }

    if !is_valid_whatsapp(whatsapp) {
        warn!("registration rejected: bad whatsapp number");
        return Err(ApiError::Validation("invalid phone format"));
    }

    let saran_topik = match req.saran_topik.as_deref() {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => None,
    };

    Ok(NewRegistration {
        nama: nama.to_string(),
        email: email.to_string(),
        whatsapp: whatsapp.to_string(),
        institusi: institusi.to_string(),
        kebutuhan: kebutuhan.to_string(),
        saran_topik,
    })
}
