pub mod dashboard;
pub mod login;
pub mod not_found;

use crate::auth::use_auth;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRightFromBracket, FaScaleBalanced};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Navbar, NavbarBrand, NavbarItem, NavbarNav};

use dashboard::InvestigatorDashboard;
use login::Login;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    InvestigatorDashboard {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the auth check completes, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
/// During hydration the embedded data is available immediately.
/// A `SuspenseBoundary` in `App` catches the suspension and shows a spinner.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    // `?` propagates RenderError during suspension so Dioxus knows to
    // re-render this component when the server future resolves.
    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Clone the result out of the resource guard to avoid lifetime issues.
    let result = resource.read().as_ref().cloned();

    match result {
        // The dashboard is investigator-only; other roles go back to login.
        Some(Ok(Some(user))) if user.is_investigator() => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(_)) | Some(Err(_)) => {
            auth.clear_auth();
            navigator().push(Route::Login { redirect: None });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with the top navbar.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    let handle_logout = move |_| async move {
        if let Err(e) = server::api::logout().await {
            tracing::warn!("logout failed: {e}");
        }
        auth.clear_auth();
        navigator().push(Route::Login { redirect: None });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        Navbar {
            NavbarBrand {
                Icon::<FaScaleBalanced> { icon: FaScaleBalanced, width: 20, height: 20 }
                "HashProof"
            }
            NavbarNav {
                if !display_name.is_empty() {
                    NavbarItem { "{display_name}" }
                }
                NavbarItem {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_logout,
                        Icon::<FaRightFromBracket> { icon: FaRightFromBracket, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
