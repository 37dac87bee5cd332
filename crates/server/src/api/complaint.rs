use dioxus::prelude::*;
use shared_types::{ComplaintResponse, PushToCourtResponse};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

// ── Complaint Server Functions ─────────────────────────

/// List all complaints. Requires authentication; search and category
/// filtering happen on the client.
#[server]
pub async fn list_complaints() -> Result<Vec<ComplaintResponse>, ServerFnError> {
    use crate::repo::complaint;

    super::auth::require_auth()?;

    let pool = get_db().await;
    let rows = complaint::list_all(pool)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(rows.into_iter().map(ComplaintResponse::from).collect())
}

/// Fetch a single complaint by ID.
#[server]
pub async fn get_complaint(id: String) -> Result<ComplaintResponse, ServerFnError> {
    use crate::repo::complaint;
    use shared_types::AppError;
    use uuid::Uuid;

    super::auth::require_auth()?;

    let uuid = Uuid::parse_str(&id)
        .map_err(|_| AppError::bad_request("Invalid complaint ID").into_server_fn_error())?;

    let pool = get_db().await;
    let row = complaint::find_by_id(pool, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?
        .ok_or_else(|| {
            AppError::not_found(format!("Complaint {id} not found")).into_server_fn_error()
        })?;

    Ok(ComplaintResponse::from(row))
}

/// Refer a complaint to court. Creates a court referral record and moves
/// the complaint to "In Court". Requires the investigator role.
///
/// Validation failures surface as server-fn errors with field errors;
/// domain failures come back as `{ success: false, error }` so the form
/// can show a single message.
#[cfg_attr(feature = "server", tracing::instrument(skip(court_details, remarks)))]
#[server]
pub async fn push_to_court(
    complaint_id: String,
    court_details: String,
    hearing_date: String,
    remarks: Option<String>,
    investigator_email: String,
) -> Result<PushToCourtResponse, ServerFnError> {
    use crate::repo::{complaint, court_referral};
    use chrono::NaiveDate;
    use shared_types::{AppError, PushToCourtRequest};
    use uuid::Uuid;

    super::auth::require_investigator()?;

    let uuid = Uuid::parse_str(&complaint_id)
        .map_err(|_| AppError::bad_request("Invalid complaint ID").into_server_fn_error())?;

    let req = PushToCourtRequest {
        complaint_id: uuid,
        court_details: court_details.trim().to_string(),
        hearing_date: hearing_date.clone(),
        remarks: remarks.clone().filter(|r| !r.trim().is_empty()),
        investigator_email: investigator_email.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let hearing = match NaiveDate::parse_from_str(&req.hearing_date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => {
            return Ok(PushToCourtResponse::failed(
                "Hearing date must be a valid date (YYYY-MM-DD)",
            ))
        }
    };

    let pool = get_db().await;

    let existing = complaint::find_by_id(pool, uuid)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    let existing = match existing {
        Some(c) => c,
        None => return Ok(PushToCourtResponse::failed("Complaint not found")),
    };

    if existing.status.as_deref() == Some("In Court") {
        return Ok(PushToCourtResponse::failed(
            "This complaint has already been pushed to court",
        ));
    }

    court_referral::create(
        pool,
        uuid,
        &req.court_details,
        hearing,
        req.remarks.as_deref(),
        &req.investigator_email,
    )
    .await
    .map_err(|e| e.into_server_fn_error())?;

    complaint::set_status(pool, uuid, "In Court")
        .await
        .map_err(|e| e.into_server_fn_error())?;

    tracing::info!(
        complaint_id = %uuid,
        hearing_date = %hearing,
        "complaint referred to court"
    );

    Ok(PushToCourtResponse::ok())
}
