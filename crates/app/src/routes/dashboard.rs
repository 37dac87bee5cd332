use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{filter_complaints, AppError, ComplaintResponse, CASE_CATEGORIES};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DetailItem, DetailList, Dialog,
    DialogClose, DialogContent, DialogFooter, DialogHeader, DialogTitle, Form, FormSelect, Input,
    PageHeader, PageTitle, SearchBar, Skeleton, Textarea,
};

use crate::auth::{use_is_investigator, use_user_email};
use crate::format_helpers::{format_date_human, format_datetime_human};

/// Investigator dashboard: the complaint list with live search, a category
/// filter, a detail view, and the push-to-court form.
///
/// The full list is fetched once; search and category filtering happen
/// client-side so typing never triggers a round trip.
#[component]
pub fn InvestigatorDashboard() -> Element {
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut selected = use_signal(|| Option::<ComplaintResponse>::None);
    let mut push_target = use_signal(|| Option::<ComplaintResponse>::None);

    let mut data = use_resource(move || async move { server::api::list_complaints().await });

    let is_investigator = use_is_investigator();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "container",
            PageHeader {
                PageTitle {
                    subtitle: "Review complaints and refer cases to court",
                    "Complaints"
                }
            }

            SearchBar {
                Input {
                    value: search(),
                    placeholder: "Search by title or details...",
                    label: "Search",
                    on_input: move |evt: FormEvent| search.set(evt.value().to_string()),
                }
                FormSelect {
                    value: category(),
                    label: "Category",
                    onchange: move |evt: FormEvent| category.set(evt.value().to_string()),
                    option { value: "", "All Categories" }
                    for cat in CASE_CATEGORIES {
                        option { value: *cat, "{cat}" }
                    }
                }
            }

            match &*data.read() {
                Some(Ok(complaints)) => {
                    let filtered: Vec<ComplaintResponse> = filter_complaints(
                        complaints,
                        &search.read(),
                        &category.read(),
                    )
                    .into_iter()
                    .cloned()
                    .collect();
                    rsx! {
                        ComplaintTable {
                            complaints: filtered,
                            can_push: is_investigator,
                            on_select: move |c: ComplaintResponse| selected.set(Some(c)),
                            on_push: move |c: ComplaintResponse| push_target.set(Some(c)),
                        }
                    }
                }
                Some(Err(e)) => {
                    let msg = AppError::friendly_message(&e.to_string());
                    rsx! {
                        div { class: "dashboard-error", "{msg}" }
                    }
                }
                None => rsx! {
                    div { class: "loading",
                        Skeleton { height: "2.5rem" }
                        Skeleton { height: "2.5rem" }
                        Skeleton { height: "2.5rem" }
                    }
                },
            }

            if let Some(complaint) = selected() {
                ComplaintDetailDialog {
                    complaint: complaint,
                    can_push: is_investigator,
                    on_close: move |_| selected.set(None),
                    on_push: move |c: ComplaintResponse| {
                        selected.set(None);
                        push_target.set(Some(c));
                    },
                }
            }

            if let Some(complaint) = push_target() {
                PushToCourtDialog {
                    complaint: complaint,
                    on_close: move |_| push_target.set(None),
                    on_pushed: move |_| {
                        push_target.set(None);
                        data.restart();
                    },
                }
            }
        }
    }
}

#[component]
fn ComplaintTable(
    complaints: Vec<ComplaintResponse>,
    can_push: bool,
    on_select: EventHandler<ComplaintResponse>,
    on_push: EventHandler<ComplaintResponse>,
) -> Element {
    if complaints.is_empty() {
        return rsx! {
            Card {
                CardContent {
                    p { class: "dashboard-empty", "No complaints match your search criteria." }
                }
            }
        };
    }

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Title" }
                DataTableColumn { "Filed" }
                DataTableColumn { "Category" }
                DataTableColumn { "Status" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                for complaint in complaints {
                    ComplaintRow {
                        complaint: complaint,
                        can_push: can_push,
                        on_select: on_select,
                        on_push: on_push,
                    }
                }
            }
        }
    }
}

#[component]
fn ComplaintRow(
    complaint: ComplaintResponse,
    can_push: bool,
    on_select: EventHandler<ComplaintResponse>,
    on_push: EventHandler<ComplaintResponse>,
) -> Element {
    let status = complaint.display_status().to_string();
    let status_variant = status_badge_variant(&status);
    let filed_display = format_date_human(&complaint.filed_on);
    let in_court = complaint.is_in_court();

    let row_complaint = complaint.clone();
    let view_complaint = complaint.clone();
    let push_complaint = complaint.clone();

    rsx! {
        DataTableRow {
            onclick: move |_| on_select.call(row_complaint.clone()),
            DataTableCell { "#{complaint.complaint_no}" }
            DataTableCell { "{complaint.title}" }
            DataTableCell { "{filed_display}" }
            DataTableCell { "{complaint.category}" }
            DataTableCell {
                Badge { variant: status_variant, "{status}" }
            }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_select.call(view_complaint.clone());
                        },
                        "View"
                    }
                    if can_push && !in_court {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                on_push.call(push_complaint.clone());
                            },
                            "Push to Court"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComplaintDetailDialog(
    complaint: ComplaintResponse,
    can_push: bool,
    on_close: EventHandler<()>,
    on_push: EventHandler<ComplaintResponse>,
) -> Element {
    let status = complaint.display_status().to_string();
    let status_variant = status_badge_variant(&status);
    let severity_variant = severity_badge_variant(&complaint.severity);
    let in_court = complaint.is_in_court();
    let push_complaint = complaint.clone();

    rsx! {
        Dialog {
            open: true,
            on_close: move |_| on_close.call(()),
            DialogClose { on_close: move |_| on_close.call(()) }
            DialogHeader {
                DialogTitle { "Complaint #{complaint.complaint_no}" }
            }
            DialogContent {
                DetailList {
                    DetailItem { label: "Title", value: complaint.title.clone() }
                    DetailItem { label: "Filed On", value: format_date_human(&complaint.filed_on) }
                    DetailItem { label: "Place", value: complaint.place.clone() }
                    DetailItem { label: "Category", value: complaint.category.clone() }
                    DetailItem { label: "Severity",
                        Badge { variant: severity_variant, "{complaint.severity}" }
                    }
                    DetailItem { label: "Status",
                        Badge { variant: status_variant, "{status}" }
                    }
                    DetailItem { label: "Details", value: complaint.details.clone() }
                    DetailItem { label: "Evidence", value: complaint.evidence_details.clone() }
                    if let Some(inference) = &complaint.inference {
                        DetailItem { label: "Inference", value: inference.clone() }
                    }
                    if let Some(files) = &complaint.evidence_files {
                        if !files.is_empty() {
                            DetailItem { label: "Evidence Files",
                                div { class: "evidence-grid",
                                    for file in files {
                                        img {
                                            class: "evidence-thumb",
                                            src: "{file}",
                                            alt: "Evidence file",
                                        }
                                    }
                                }
                            }
                        }
                    }
                    DetailItem { label: "Recorded", value: format_datetime_human(&complaint.created_at) }
                }
            }
            DialogFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
                if can_push && !in_court {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_push.call(push_complaint.clone()),
                        "Push to Court"
                    }
                }
            }
        }
    }
}

#[component]
fn PushToCourtDialog(
    complaint: ComplaintResponse,
    on_close: EventHandler<()>,
    on_pushed: EventHandler<()>,
) -> Element {
    let investigator_email = use_user_email().unwrap_or_default();

    let mut court_details = use_signal(String::new);
    let mut hearing_date = use_signal(String::new);
    let mut remarks = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let complaint_id = complaint.id.clone();
    let handle_submit = move |_evt: FormEvent| {
        let id = complaint_id.clone();
        let email = investigator_email.clone();
        async move {
            error_msg.set(None);
            field_errors.set(HashMap::new());

            // Presence check before any round-trip, matching the server's
            // required fields.
            if !shared_types::push_request_complete(&court_details.read(), &hearing_date.read()) {
                error_msg.set(Some("Please fill in all required fields".to_string()));
                return;
            }

            submitting.set(true);

            let remarks_value = {
                let r = remarks.read().trim().to_string();
                if r.is_empty() { None } else { Some(r) }
            };

            match server::api::push_to_court(
                id,
                court_details(),
                hearing_date(),
                remarks_value,
                email,
            )
            .await
            {
                Ok(resp) if resp.success => {
                    court_details.set(String::new());
                    hearing_date.set(String::new());
                    remarks.set(String::new());
                    on_pushed.call(());
                }
                Ok(resp) => {
                    error_msg.set(Some(resp.error.unwrap_or_else(|| {
                        "Could not push this complaint to court.".to_string()
                    })));
                }
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        Dialog {
            open: true,
            on_close: move |_| on_close.call(()),
            DialogClose { on_close: move |_| on_close.call(()) }
            DialogHeader {
                DialogTitle { "Push to Court" }
            }
            DialogContent {
                p { class: "push-dialog-intro",
                    "Refer complaint #{complaint.complaint_no} \u{201c}{complaint.title}\u{201d} to court."
                }

                if let Some(err) = error_msg() {
                    div { class: "dashboard-error", "{err}" }
                }

                Form {
                    onsubmit: handle_submit,
                    Textarea {
                        label: "Court Details",
                        placeholder: "Court name and bench assignment",
                        rows: 3,
                        value: court_details(),
                        on_input: move |evt: FormEvent| court_details.set(evt.value()),
                    }
                    if let Some(err) = field_errors().get("court_details") {
                        div { class: "field-error", "{err}" }
                    }
                    Input {
                        label: "Hearing Date",
                        input_type: "date",
                        value: hearing_date(),
                        on_input: move |evt: FormEvent| hearing_date.set(evt.value()),
                    }
                    if let Some(err) = field_errors().get("hearing_date") {
                        div { class: "field-error", "{err}" }
                    }
                    Textarea {
                        label: "Remarks (optional)",
                        placeholder: "Anything the court should know up front",
                        rows: 3,
                        value: remarks(),
                        on_input: move |evt: FormEvent| remarks.set(evt.value()),
                    }

                    div { class: "push-dialog-actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button push-submit",
                            "data-style": "primary",
                            disabled: submitting(),
                            if submitting() { "Submitting..." } else { "Push to Court" }
                        }
                    }
                }
            }
        }
    }
}

/// Map a complaint status to a badge variant.
fn status_badge_variant(status: &str) -> BadgeVariant {
    match status {
        "Open" => BadgeVariant::Positive,
        "In Court" => BadgeVariant::Info,
        "Under Review" => BadgeVariant::Warning,
        _ => BadgeVariant::Neutral,
    }
}

/// Map a severity level to a badge variant.
fn severity_badge_variant(severity: &str) -> BadgeVariant {
    match severity {
        "High" => BadgeVariant::Destructive,
        "Medium" => BadgeVariant::Warning,
        _ => BadgeVariant::Neutral,
    }
}
