//! Credential management for Globalization Pipeline authentication.

use secrecy::{ExposeSecret, SecretString};

use crate::error::GpError;

/// Environment variable holding the account user ID.
pub const USER_ID_VAR: &str = "GP_USER_ID";
/// Environment variable holding the shared secret.
pub const PASSWORD_VAR: &str = "GP_PASSWORD";
/// Environment variable holding the optional credential label.
pub const IDENTITY_VAR: &str = "GP_IDENTITY";

/// Default credential label when none is configured.
const DEFAULT_IDENTITY: &str = "gaas";

/// API credentials for the GaaS-HMAC authentication scheme.
///
/// The `user_id` is sent in the `Authorization` header; the secret is the
/// HMAC key and never leaves the process. All three fields must be
/// non-empty.
#[derive(Clone)]
pub struct Credentials {
    /// Label identifying this credential set (not sent on the wire)
    pub identity: String,
    /// The account user ID (public identifier)
    pub user_id: String,
    /// The shared secret (private, used for signing)
    secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an identity label, user ID and secret.
    ///
    /// Returns [`GpError::Configuration`] if any field is empty.
    pub fn new(
        identity: impl Into<String>,
        user_id: impl Into<String>,
        secret: impl Into<String>,
    ) -> Result<Self, GpError> {
        let identity = identity.into();
        let user_id = user_id.into();
        let secret = secret.into();

        if identity.is_empty() {
            return Err(GpError::Configuration(
                "credential identity must not be empty".to_string(),
            ));
        }
        if user_id.is_empty() {
            return Err(GpError::Configuration(
                "credential user ID must not be empty".to_string(),
            ));
        }
        if secret.is_empty() {
            return Err(GpError::Configuration(
                "credential secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            identity,
            user_id,
            secret: SecretString::from(secret),
        })
    }

    /// Try to create credentials from environment variables.
    ///
    /// Reads `GP_USER_ID` and `GP_PASSWORD`, with the identity label taken
    /// from `GP_IDENTITY` when set. Returns `None` if the required
    /// variables are not set or are empty.
    pub fn try_from_env() -> Option<Self> {
        let user_id = std::env::var(USER_ID_VAR).ok()?;
        let secret = std::env::var(PASSWORD_VAR).ok()?;
        let identity =
            std::env::var(IDENTITY_VAR).unwrap_or_else(|_| DEFAULT_IDENTITY.to_string());

        Self::new(identity, user_id, secret).ok()
    }

    /// Get the shared secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identity", &self.identity)
            .field("user_id", &self.user_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("gaas", "my_user", "super_secret").unwrap();
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_user"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_credentials_accessors() {
        let creds = Credentials::new("gaas", "user", "secret").unwrap();
        assert_eq!(creds.identity, "gaas");
        assert_eq!(creds.user_id, "user");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_empty_fields_rejected() {
        assert!(matches!(
            Credentials::new("", "user", "secret"),
            Err(GpError::Configuration(_))
        ));
        assert!(matches!(
            Credentials::new("gaas", "", "secret"),
            Err(GpError::Configuration(_))
        ));
        assert!(matches!(
            Credentials::new("gaas", "user", ""),
            Err(GpError::Configuration(_))
        ));
    }
}
