/// Environment variable holding the OpenAI API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// An API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(****)")
    }
}

/// Outcome of the one-time credential lookup at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Present(ApiKey),
    Absent,
}

impl Credential {
    /// Resolve the credential from a raw environment value.
    ///
    /// Unset and blank values are both treated as absent.
    pub fn from_value(value: Option<String>) -> Self {
        match value {
            Some(key) if !key.trim().is_empty() => Credential::Present(ApiKey(key)),
            _ => Credential::Absent,
        }
    }
}

/// Message shown when the credential is missing.
pub fn missing_credential_message(var: &str) -> String {
    format!("Environment variable `{var}` is required.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert_eq!(
            Credential::from_value(Some("sk-test".to_string())),
            Credential::Present(ApiKey::new("sk-test"))
        );
    }

    #[test]
    fn test_unset_is_absent() {
        assert_eq!(Credential::from_value(None), Credential::Absent);
    }

    #[test]
    fn test_blank_is_absent() {
        assert_eq!(
            Credential::from_value(Some("  ".to_string())),
            Credential::Absent
        );
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("sk-very-secret");
        assert_eq!(format!("{key:?}"), "ApiKey(****)");
        assert_eq!(key.expose(), "sk-very-secret");
    }

    #[test]
    fn test_missing_credential_message() {
        assert_eq!(
            missing_credential_message(API_KEY_ENV),
            "Environment variable `OPENAI_API_KEY` is required."
        );
    }
}
