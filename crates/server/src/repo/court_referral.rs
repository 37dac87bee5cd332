use chrono::NaiveDate;
use shared_types::{AppError, CourtReferral};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const REFERRAL_COLUMNS: &str =
    "id, complaint_id, court_details, hearing_date, remarks, investigator_email, created_at";

/// Insert a new court referral.
pub async fn create(
    pool: &Pool<Postgres>,
    complaint_id: Uuid,
    court_details: &str,
    hearing_date: NaiveDate,
    remarks: Option<&str>,
    investigator_email: &str,
) -> Result<CourtReferral, AppError> {
    let row = sqlx::query_as::<_, CourtReferral>(&format!(
        "INSERT INTO court_referrals \
             (complaint_id, court_details, hearing_date, remarks, investigator_email) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING {REFERRAL_COLUMNS}"
    ))
    .bind(complaint_id)
    .bind(court_details)
    .bind(hearing_date)
    .bind(remarks)
    .bind(investigator_email)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// List referrals for a complaint, oldest first.
pub async fn list_by_complaint(
    pool: &Pool<Postgres>,
    complaint_id: Uuid,
) -> Result<Vec<CourtReferral>, AppError> {
    let rows = sqlx::query_as::<_, CourtReferral>(&format!(
        "SELECT {REFERRAL_COLUMNS} FROM court_referrals \
         WHERE complaint_id = $1 ORDER BY created_at ASC"
    ))
    .bind(complaint_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}
