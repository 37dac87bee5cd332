use dioxus::prelude::*;
use shared_types::AuthUser;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to check whether the current user may push complaints to court.
pub fn use_is_investigator() -> bool {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding
        .as_ref()
        .map(|u| u.is_investigator())
        .unwrap_or(false)
}

/// The signed-in user's email, if any. Used to stamp court referrals.
pub fn use_user_email() -> Option<String> {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding.as_ref().map(|u| u.email.clone())
}
