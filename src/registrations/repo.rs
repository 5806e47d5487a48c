use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// One workshop sign-up, as stored. Rows are append-only: no update or
/// delete path exists anywhere in the service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub id: i32,
    pub nama: String,
    pub email: String,
    pub whatsapp: String,
    pub institusi: String,
    pub kebutuhan: String,
    #[serde(rename = "saranTopik")]
    pub saran_topik: Option<String>,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A validated submission ready to insert.
#[derive(Debug)]
pub struct NewRegistration {
    pub nama: String,
    pub email: String,
    pub whatsapp: String,
    pub institusi: String,
    pub kebutuhan: String,
    pub saran_topik: Option<String>,
}

impl Registration {
    pub async fn insert(db: &PgPool, new: &NewRegistration) -> sqlx::Result<Registration> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (nama, email, whatsapp, institusi, kebutuhan, saran_topik)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, nama, email, whatsapp, institusi, kebutuhan, saran_topik, created_at
            "#,
        )
        .bind(&new.nama)
        .bind(&new.email)
        .bind(&new.whatsapp)
        .bind(&new.institusi)
        .bind(&new.kebutuhan)
        .bind(&new.saran_topik)
        .fetch_one(db)
        .await?;
        Ok(registration)
    }

    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Registration>> {
        let rows = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, nama, email, whatsapp, institusi, kebutuhan, saran_topik, created_at
            FROM registrations
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
