use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label};
use std::collections::HashMap;

/// Login page with email/password, plus self-service registration when
/// the `registration` feature flag is on.
/// Accepts an optional `redirect` query param — after login, navigates there
/// instead of the dashboard.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let flags = use_context::<FeatureFlags>();
    let mut auth = use_auth();
    let mut registering = use_signal(|| false);
    let mut username = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    // Navigate to the redirect target or the dashboard
    let go_to_destination = move || {
        if let Some(ref path) = *redirect_target.read() {
            navigator().push(NavigationTarget::<Route>::External(path.clone()));
        } else {
            navigator().push(Route::InvestigatorDashboard {});
        }
    };

    // Redirect if already authenticated
    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        notice.set(None);
        field_errors.set(HashMap::new());

        if registering() {
            match server::api::register(username(), display_name(), email(), password()).await {
                Ok(user) => {
                    notice.set(Some(format!(
                        "Account created for {}. You can sign in now.",
                        user.email
                    )));
                    registering.set(false);
                    password.set(String::new());
                }
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = shared_types::AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
        } else {
            match server::api::login(email(), password()).await {
                Ok(user) => {
                    auth.set_user(user);
                    go_to_destination();
                }
                Err(e) => {
                    let err_str = e.to_string();
                    let fe = shared_types::AppError::parse_field_errors(&err_str);
                    if fe.is_empty() {
                        error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                    } else {
                        field_errors.set(fe);
                    }
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle {
                        if registering() { "Create Account" } else { "Sign In" }
                    }
                    CardDescription {
                        if registering() {
                            "Register a new HashProof account"
                        } else {
                            "Enter your credentials to access the investigator dashboard"
                        }
                    }
                }

                CardContent {
                    if let Some(msg) = notice() {
                        div { class: "auth-notice", "{msg}" }
                    }
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_submit,
                        if registering() {
                            div { class: "auth-field",
                                Label { html_for: "username", "Username" }
                                Input {
                                    id: "username",
                                    placeholder: "username",
                                    value: username(),
                                    on_input: move |e: FormEvent| username.set(e.value()),
                                }
                                if let Some(err) = field_errors().get("username") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "display_name", "Display Name" }
                                Input {
                                    id: "display_name",
                                    placeholder: "Your name",
                                    value: display_name(),
                                    on_input: move |e: FormEvent| display_name.set(e.value()),
                                }
                                if let Some(err) = field_errors().get("display_name") {
                                    div { class: "auth-field-error", "{err}" }
                                }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "user@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: if registering() { "At least 8 characters" } else { "Enter your password" },
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() {
                                if registering() { "Creating account..." } else { "Signing in..." }
                            } else {
                                if registering() { "Create Account" } else { "Sign In" }
                            }
                        }
                    }

                    if flags.registration {
                        button {
                            r#type: "button",
                            class: "auth-toggle",
                            onclick: move |_| {
                                registering.toggle();
                                error_msg.set(None);
                                notice.set(None);
                                field_errors.set(HashMap::new());
                            },
                            if registering() {
                                "Already have an account? Sign in"
                            } else {
                                "Need an account? Register"
                            }
                        }
                    }
                }
            }
        }
    }
}
