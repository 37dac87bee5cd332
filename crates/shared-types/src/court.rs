use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A referral of a complaint to court, created by an investigator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct CourtReferral {
    pub id: Uuid,
    pub complaint_id: Uuid,
    /// Which court the case goes to, plus any filing particulars.
    pub court_details: String,
    pub hearing_date: NaiveDate,
    pub remarks: Option<String>,
    pub investigator_email: String,
    pub created_at: DateTime<Utc>,
}

/// API response shape for a court referral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CourtReferralResponse {
    pub id: String,
    pub complaint_id: String,
    pub court_details: String,
    pub hearing_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub investigator_email: String,
    pub created_at: String,
}

impl From<CourtReferral> for CourtReferralResponse {
    fn from(r: CourtReferral) -> Self {
        Self {
            id: r.id.to_string(),
            complaint_id: r.complaint_id.to_string(),
            court_details: r.court_details,
            hearing_date: r.hearing_date.to_string(),
            remarks: r.remarks,
            investigator_email: r.investigator_email,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

/// Request to push a complaint to court. Field names are camelCase on
/// the wire to match the public API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct PushToCourtRequest {
    pub complaint_id: Uuid,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Court details are required"))
    )]
    pub court_details: String,
    /// ISO 8601 date (YYYY-MM-DD).
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Hearing date is required"))
    )]
    pub hearing_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid investigator email is required"))
    )]
    pub investigator_email: String,
}

/// Presence check for the push-to-court form, run before anything is sent
/// to the server. Whitespace-only values count as missing.
pub fn push_request_complete(court_details: &str, hearing_date: &str) -> bool {
    !court_details.trim().is_empty() && !hearing_date.trim().is_empty()
}

/// Response for the push-to-court operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PushToCourtResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PushToCourtResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PushToCourtRequest {
        PushToCourtRequest {
            complaint_id: Uuid::nil(),
            court_details: "District Court, Sessions Division".into(),
            hearing_date: "2026-09-15".into(),
            remarks: Some("Priority hearing requested".into()),
            investigator_email: "rvarma@hashproof.example".into(),
        }
    }

    #[test]
    fn request_uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&request()).unwrap();
        assert!(json.contains("\"complaintId\""));
        assert!(json.contains("\"courtDetails\""));
        assert!(json.contains("\"hearingDate\""));
        assert!(json.contains("\"remarks\""));
        assert!(json.contains("\"investigatorEmail\""));
    }

    #[test]
    fn request_deserializes_without_remarks() {
        let json = r#"{
            "complaintId": "00000000-0000-0000-0000-000000000001",
            "courtDetails": "District Court",
            "hearingDate": "2026-09-15",
            "investigatorEmail": "rvarma@hashproof.example"
        }"#;
        let req: PushToCourtRequest = serde_json::from_str(json).unwrap();
        assert!(req.remarks.is_none());
        assert_eq!(req.hearing_date, "2026-09-15");
    }

    #[cfg(feature = "validation")]
    mod validation {
        use super::*;
        use validator::Validate;

        #[test]
        fn valid_request_passes() {
            assert!(request().validate().is_ok());
        }

        #[test]
        fn blank_court_details_rejected() {
            let mut req = request();
            req.court_details = String::new();
            let errs = req.validate().unwrap_err();
            assert!(errs.field_errors().contains_key("court_details"));
        }

        #[test]
        fn blank_hearing_date_rejected() {
            let mut req = request();
            req.hearing_date = String::new();
            let errs = req.validate().unwrap_err();
            assert!(errs.field_errors().contains_key("hearing_date"));
        }

        #[test]
        fn bad_email_rejected() {
            let mut req = request();
            req.investigator_email = "not-an-email".into();
            let errs = req.validate().unwrap_err();
            assert!(errs.field_errors().contains_key("investigator_email"));
        }
    }

    #[test]
    fn push_request_complete_requires_both_fields() {
        assert!(push_request_complete("District Court", "2026-09-15"));
        assert!(!push_request_complete("", "2026-09-15"));
        assert!(!push_request_complete("District Court", ""));
        assert!(!push_request_complete("", ""));
    }

    #[test]
    fn push_request_complete_rejects_whitespace_only() {
        assert!(!push_request_complete("   ", "2026-09-15"));
        assert!(!push_request_complete("District Court", "  \t"));
    }

    #[test]
    fn response_helpers() {
        let ok = PushToCourtResponse::ok();
        assert!(ok.success);
        assert!(ok.error.is_none());

        let failed = PushToCourtResponse::failed("Complaint not found");
        assert!(!failed.success);
        assert_eq!(failed.error.as_deref(), Some("Complaint not found"));
    }

    #[test]
    fn success_response_omits_error_field() {
        let json = serde_json::to_string(&PushToCourtResponse::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
