use dioxus::prelude::*;
use shared_types::FeatureFlags;

pub mod account;
pub mod complaint;

pub use account::*;
pub use complaint::*;

#[cfg(feature = "server")]
pub(crate) mod auth;

/// Fetch the server's feature flags. Used by the client to decide which
/// optional UI (e.g. self-registration) to render.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

#[cfg(test)]
mod tests {
    #[test]
    fn server_fns_are_reachable_at_the_module_root() {
        // Call sites use the flat `api::` paths; keep the re-exports intact.
        let _ = crate::api::login;
        let _ = crate::api::register;
        let _ = crate::api::logout;
        let _ = crate::api::get_current_user;
        let _ = crate::api::get_feature_flags;
        let _ = crate::api::list_complaints;
        let _ = crate::api::get_complaint;
        let _ = crate::api::push_to_court;
    }
}
