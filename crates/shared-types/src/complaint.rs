use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A citizen complaint under investigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
pub struct Complaint {
    pub id: Uuid,
    /// Human-facing sequence number shown as the complaint ID.
    pub complaint_no: i64,
    pub title: String,
    pub filed_on: NaiveDate,
    pub place: String,
    /// Case category stored as text (e.g. "Theft", "Fraud").
    pub category: String,
    /// Severity stored as text (e.g. "Low", "Medium", "High").
    pub severity: String,
    pub details: String,
    pub evidence_details: String,
    /// Investigator's working conclusion, if recorded.
    pub inference: Option<String>,
    /// Stored references (URLs or object keys) to uploaded evidence files.
    pub evidence_files: Option<Vec<String>>,
    /// Complaint status stored as text. Free text is tolerated on read;
    /// writes go through the known status set.
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Complaint validation constants ──────────────────────────────────

/// Case categories offered in the filter dropdown and intake form.
pub const CASE_CATEGORIES: &[&str] = &[
    "Theft", "Assault", "Fraud", "Harassment", "Vandalism", "Burglary", "Other",
];

/// Valid severity values.
pub const SEVERITY_LEVELS: &[&str] = &["Low", "Medium", "High"];

/// Statuses the application writes. A complaint row with no status is
/// treated as "Open".
pub const COMPLAINT_STATUSES: &[&str] = &["Open", "Under Review", "In Court", "Closed"];

/// Check whether a case category string is valid.
pub fn is_valid_case_category(s: &str) -> bool {
    CASE_CATEGORIES.contains(&s)
}

/// Check whether a severity string is valid.
pub fn is_valid_severity(s: &str) -> bool {
    SEVERITY_LEVELS.contains(&s)
}

/// Check whether a complaint status string is valid.
pub fn is_valid_complaint_status(s: &str) -> bool {
    COMPLAINT_STATUSES.contains(&s)
}

// ── Complaint API response ──────────────────────────────────────────

/// API response shape for a complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ComplaintResponse {
    pub id: String,
    pub complaint_no: i64,
    pub title: String,
    /// ISO 8601 date (YYYY-MM-DD).
    pub filed_on: String,
    pub place: String,
    pub category: String,
    pub severity: String,
    pub details: String,
    pub evidence_details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_files: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Complaint> for ComplaintResponse {
    fn from(c: Complaint) -> Self {
        Self {
            id: c.id.to_string(),
            complaint_no: c.complaint_no,
            title: c.title,
            filed_on: c.filed_on.to_string(),
            place: c.place,
            category: c.category,
            severity: c.severity,
            details: c.details,
            evidence_details: c.evidence_details,
            inference: c.inference,
            evidence_files: c.evidence_files,
            status: c.status,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}

impl ComplaintResponse {
    /// Effective status for display. Rows without a status are "Open".
    pub fn display_status(&self) -> &str {
        self.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("Open")
    }

    /// Whether this complaint has already been referred to court.
    pub fn is_in_court(&self) -> bool {
        self.display_status() == "In Court"
    }
}

// ── Client-side list filtering ──────────────────────────────────────

/// Check whether one complaint matches the dashboard filters.
///
/// The search term is a case-insensitive substring match over the title
/// and the complaint details; an empty term matches everything. The
/// category filter is an exact match; an empty selection matches
/// everything. Both conditions must hold.
pub fn complaint_matches(complaint: &ComplaintResponse, search: &str, category: &str) -> bool {
    let term = search.trim().to_lowercase();
    let search_ok = term.is_empty()
        || complaint.title.to_lowercase().contains(&term)
        || complaint.details.to_lowercase().contains(&term);
    let category_ok = category.is_empty() || complaint.category == category;
    search_ok && category_ok
}

/// Apply the dashboard filters to a complaint list, preserving order.
pub fn filter_complaints<'a>(
    complaints: &'a [ComplaintResponse],
    search: &str,
    category: &str,
) -> Vec<&'a ComplaintResponse> {
    complaints
        .iter()
        .filter(|c| complaint_matches(c, search, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(title: &str, details: &str, category: &str) -> ComplaintResponse {
        ComplaintResponse {
            id: "00000000-0000-0000-0000-000000000001".into(),
            complaint_no: 1,
            title: title.into(),
            filed_on: "2026-03-14".into(),
            place: "Market Street".into(),
            category: category.into(),
            severity: "Medium".into(),
            details: details.into(),
            evidence_details: "CCTV footage from the storefront".into(),
            inference: None,
            evidence_files: None,
            status: Some("Open".into()),
            created_at: "2026-03-14T10:00:00+00:00".into(),
            updated_at: "2026-03-14T10:00:00+00:00".into(),
        }
    }

    #[test]
    fn empty_search_and_category_match_everything() {
        let c = complaint("Stolen bicycle", "Bike taken from rack", "Theft");
        assert!(complaint_matches(&c, "", ""));
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let c = complaint("Stolen Bicycle", "Bike taken from rack", "Theft");
        assert!(complaint_matches(&c, "stolen", ""));
        assert!(complaint_matches(&c, "BICYCLE", ""));
    }

    #[test]
    fn search_matches_details_too() {
        let c = complaint("Stolen bicycle", "Taken from the RACK outside", "Theft");
        assert!(complaint_matches(&c, "rack", ""));
    }

    #[test]
    fn search_miss_excludes() {
        let c = complaint("Stolen bicycle", "Bike taken from rack", "Theft");
        assert!(!complaint_matches(&c, "arson", ""));
    }

    #[test]
    fn category_match_is_exact() {
        let c = complaint("Stolen bicycle", "Bike taken from rack", "Theft");
        assert!(complaint_matches(&c, "", "Theft"));
        assert!(!complaint_matches(&c, "", "Fraud"));
        // Case differs: no match.
        assert!(!complaint_matches(&c, "", "theft"));
    }

    #[test]
    fn both_conditions_must_hold() {
        let c = complaint("Stolen bicycle", "Bike taken from rack", "Theft");
        assert!(complaint_matches(&c, "bicycle", "Theft"));
        assert!(!complaint_matches(&c, "bicycle", "Fraud"));
        assert!(!complaint_matches(&c, "arson", "Theft"));
    }

    #[test]
    fn search_term_is_trimmed() {
        let c = complaint("Stolen bicycle", "Bike taken from rack", "Theft");
        assert!(complaint_matches(&c, "  bicycle  ", ""));
        assert!(complaint_matches(&c, "   ", ""));
    }

    #[test]
    fn filter_preserves_order() {
        let list = vec![
            complaint("Stolen bicycle", "Bike taken from rack", "Theft"),
            complaint("Forged invoice", "Vendor billing fraud", "Fraud"),
            complaint("Stolen wallet", "Pickpocketed on the bus", "Theft"),
        ];
        let out = filter_complaints(&list, "stolen", "");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].title, "Stolen bicycle");
        assert_eq!(out[1].title, "Stolen wallet");

        let out = filter_complaints(&list, "", "Fraud");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Forged invoice");
    }

    #[test]
    fn display_status_defaults_to_open() {
        let mut c = complaint("Stolen bicycle", "Bike taken from rack", "Theft");
        c.status = None;
        assert_eq!(c.display_status(), "Open");
        c.status = Some(String::new());
        assert_eq!(c.display_status(), "Open");
        c.status = Some("In Court".into());
        assert_eq!(c.display_status(), "In Court");
        assert!(c.is_in_court());
    }

    #[test]
    fn category_constants_are_valid() {
        for cat in CASE_CATEGORIES {
            assert!(is_valid_case_category(cat));
        }
        assert!(!is_valid_case_category("Arson"));
        assert!(is_valid_severity("High"));
        assert!(!is_valid_severity("Critical"));
        assert!(is_valid_complaint_status("In Court"));
        assert!(!is_valid_complaint_status("in court"));
    }

    #[test]
    fn response_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "complaint_no": 12,
            "title": "Stolen bicycle",
            "filed_on": "2026-03-14",
            "place": "Market Street",
            "category": "Theft",
            "severity": "Low",
            "details": "Bike taken from rack",
            "evidence_details": "CCTV footage",
            "created_at": "2026-03-14T10:00:00+00:00",
            "updated_at": "2026-03-14T10:00:00+00:00"
        }"#;
        let c: ComplaintResponse = serde_json::from_str(json).unwrap();
        assert!(c.inference.is_none());
        assert!(c.evidence_files.is_none());
        assert_eq!(c.display_status(), "Open");
    }
}
