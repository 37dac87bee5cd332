use shared_types::{AppError, Complaint};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const COMPLAINT_COLUMNS: &str = "id, complaint_no, title, filed_on, place, category, severity, \
     details, evidence_details, inference, evidence_files, status, created_at, updated_at";

/// List all complaints, newest filing first. Filtering happens client-side.
pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<Complaint>, AppError> {
    let rows = sqlx::query_as::<_, Complaint>(&format!(
        "SELECT {COMPLAINT_COLUMNS} FROM complaints ORDER BY complaint_no DESC"
    ))
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(rows)
}

/// Find a complaint by ID.
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Complaint>, AppError> {
    let row = sqlx::query_as::<_, Complaint>(&format!(
        "SELECT {COMPLAINT_COLUMNS} FROM complaints WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Update a complaint's status. Returns the updated row, or None if the
/// complaint does not exist.
pub async fn set_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
) -> Result<Option<Complaint>, AppError> {
    let row = sqlx::query_as::<_, Complaint>(&format!(
        "UPDATE complaints SET status = $2, updated_at = NOW() WHERE id = $1 \
         RETURNING {COMPLAINT_COLUMNS}"
    ))
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}
