use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;

use super::dto::{CreateRegistrationRequest, CreatedRegistrationResponse};
use super::repo::Registration;
use super::services;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/registrations", get(list_registrations))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/register", post(create_registration))
}

#[instrument(skip(state, payload))]
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<CreateRegistrationRequest>,
) -> Result<(StatusCode, Json<CreatedRegistrationResponse>), ApiError> {
    let new = services::validate(&payload)?;
    let registration = Registration::insert(&state.db, &new).await?;
    info!(id = registration.id, email = %registration.email, "registration created");
    Ok((
        StatusCode::CREATED,
        Json(CreatedRegistrationResponse {
            success: true,
            message: "Pendaftaran berhasil!",
            data: registration,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn list_registrations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Registration>>, ApiError> {
    let registrations = Registration::list_all(&state.db).await?;
    Ok(Json(registrations))
}

#[cfg(test)]
mod response_tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn created_response_has_success_flag_and_data() {
        let response = CreatedRegistrationResponse {
            success: true,
            message: "Pendaftaran berhasil!",
            data: Registration {
                id: 7,
                nama: "Budi".into(),
                email: "budi@mail.com".into(),
                whatsapp: "08123456789".into(),
                institusi: "UI".into(),
                kebutuhan: "belajar".into(),
                saran_topik: None,
                created_at: datetime!(2025-01-15 10:30:00 UTC),
            },
        };

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Pendaftaran berhasil!");
        assert_eq!(json["data"]["id"], 7);
        assert_eq!(json["data"]["saranTopik"], serde_json::Value::Null);
    }
}
