use serde::{Deserialize, Serialize};

/// Role of a HashProof user, controlling which screens they may reach.
///
/// - `Citizen` — files complaints, tracks their own cases.
/// - `Examiner` — forensic review of submitted evidence.
/// - `Investigator` — works assigned complaints, refers cases to court.
/// - `Admin` — full access (superset of all roles).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum UserRole {
    #[default]
    Citizen,
    Examiner,
    Investigator,
    Admin,
}

impl UserRole {
    /// Parse from a JWT `role` claim. Unknown values default to Citizen.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "examiner" => UserRole::Examiner,
            "investigator" => UserRole::Investigator,
            "admin" => UserRole::Admin,
            _ => UserRole::Citizen,
        }
    }

    /// Lowercase string for database / JWT storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Citizen => "citizen",
            UserRole::Examiner => "examiner",
            UserRole::Investigator => "investigator",
            UserRole::Admin => "admin",
        }
    }

    /// Returns true if this role satisfies the `required` role.
    /// Admin satisfies everything; the other roles only satisfy
    /// themselves and Citizen.
    pub fn satisfies(&self, required: &UserRole) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::Investigator => {
                matches!(required, UserRole::Investigator | UserRole::Citizen)
            }
            UserRole::Examiner => matches!(required, UserRole::Examiner | UserRole::Citizen),
            UserRole::Citizen => matches!(required, UserRole::Citizen),
        }
    }
}

/// Authenticated user info (safe to send to the client).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
}

impl AuthUser {
    pub fn role(&self) -> UserRole {
        UserRole::from_str_or_default(&self.role)
    }

    pub fn is_investigator(&self) -> bool {
        self.role().satisfies(&UserRole::Investigator)
    }
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// Self-service registration request. Only honored when the server's
/// `registration` feature flag is on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 100, message = "Display name is required"))
    )]
    pub display_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str_or_default_known_values() {
        assert_eq!(
            UserRole::from_str_or_default("investigator"),
            UserRole::Investigator
        );
        assert_eq!(
            UserRole::from_str_or_default("Investigator"),
            UserRole::Investigator
        );
        assert_eq!(UserRole::from_str_or_default("examiner"), UserRole::Examiner);
        assert_eq!(UserRole::from_str_or_default("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("citizen"), UserRole::Citizen);
    }

    #[test]
    fn role_from_str_or_default_unknown_falls_to_citizen() {
        assert_eq!(UserRole::from_str_or_default(""), UserRole::Citizen);
        assert_eq!(UserRole::from_str_or_default("judge"), UserRole::Citizen);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in [
            UserRole::Citizen,
            UserRole::Examiner,
            UserRole::Investigator,
            UserRole::Admin,
        ] {
            assert_eq!(UserRole::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn admin_satisfies_all_roles() {
        for required in [
            UserRole::Citizen,
            UserRole::Examiner,
            UserRole::Investigator,
            UserRole::Admin,
        ] {
            assert!(UserRole::Admin.satisfies(&required));
        }
    }

    #[test]
    fn investigator_satisfies_investigator_but_not_examiner() {
        assert!(UserRole::Investigator.satisfies(&UserRole::Investigator));
        assert!(UserRole::Investigator.satisfies(&UserRole::Citizen));
        assert!(!UserRole::Investigator.satisfies(&UserRole::Examiner));
        assert!(!UserRole::Investigator.satisfies(&UserRole::Admin));
    }

    #[test]
    fn citizen_only_satisfies_citizen() {
        assert!(UserRole::Citizen.satisfies(&UserRole::Citizen));
        assert!(!UserRole::Citizen.satisfies(&UserRole::Investigator));
    }

    #[test]
    fn auth_user_is_investigator_checks_role_string() {
        let user = AuthUser {
            id: 1,
            username: "rvarma".into(),
            display_name: "R. Varma".into(),
            email: "rvarma@hashproof.example".into(),
            role: "investigator".into(),
        };
        assert!(user.is_investigator());

        let citizen = AuthUser {
            role: "citizen".into(),
            ..user
        };
        assert!(!citizen.is_investigator());
    }

    #[cfg(feature = "validation")]
    mod registration_validation {
        use super::*;
        use validator::Validate;

        fn request() -> RegisterRequest {
            RegisterRequest {
                username: "rvarma".into(),
                display_name: "R. Varma".into(),
                email: "rvarma@hashproof.example".into(),
                password: "correct-horse-battery".into(),
            }
        }

        #[test]
        fn valid_request_passes() {
            assert!(request().validate().is_ok());
        }

        #[test]
        fn short_username_rejected() {
            let mut req = request();
            req.username = "ab".into();
            let errs = req.validate().unwrap_err();
            assert!(errs.field_errors().contains_key("username"));
        }

        #[test]
        fn short_password_rejected() {
            let mut req = request();
            req.password = "short".into();
            let errs = req.validate().unwrap_err();
            assert!(errs.field_errors().contains_key("password"));
        }

        #[test]
        fn bad_email_rejected() {
            let mut req = request();
            req.email = "not-an-email".into();
            let errs = req.validate().unwrap_err();
            assert!(errs.field_errors().contains_key("email"));
        }
    }

    #[test]
    fn auth_user_serialization_roundtrip() {
        let user = AuthUser {
            id: 7,
            username: "demo".into(),
            display_name: "Demo User".into(),
            email: "demo@hashproof.example".into(),
            role: "admin".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        let parsed: AuthUser = serde_json::from_str(&json).unwrap();
        assert_eq!(user, parsed);
    }
}
