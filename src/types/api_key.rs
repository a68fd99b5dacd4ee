// src/types/api_key.rs
use super::ValidationError;
use std::fmt;

/// Token prefixes Notion has issued for integration credentials.
const KNOWN_PREFIXES: [&str; 2] = ["secret_", "ntn_"];

/// Real integration tokens are far longer; anything shorter is a paste
/// accident, not a credential.
const MIN_TOKEN_LENGTH: usize = 20;

/// Bearer token for Notion API authentication.
///
/// Supplied by the embedding application at construction time; the
/// library never reads it from the environment or storage itself.
/// Display output is redacted so the token cannot leak through logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "token is empty".to_string(),
            });
        }
        if !KNOWN_PREFIXES.iter().any(|p| token.starts_with(p)) {
            return Err(ValidationError::InvalidApiKey {
                reason: format!("token must start with one of {:?}", KNOWN_PREFIXES),
            });
        }
        if token.len() < MIN_TOKEN_LENGTH {
            return Err(ValidationError::InvalidApiKey {
                reason: format!("token is shorter than {} characters", MIN_TOKEN_LENGTH),
            });
        }

        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visible: String = self.0.chars().take(10).collect();
        write!(f, "{}...", visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_issued_prefixes() {
        assert!(ApiKey::new("secret_abcdefghijklmnopqrs").is_ok());
        assert!(ApiKey::new("ntn_abcdefghijklmnopqrs").is_ok());
    }

    #[test]
    fn rejects_empty_unprefixed_and_truncated_tokens() {
        assert!(ApiKey::new("").is_err());
        assert!(ApiKey::new("token_abcdefghijklmnopqrs").is_err());
        assert!(ApiKey::new("secret_short").is_err());
    }

    #[test]
    fn display_redacts_the_token() {
        let key = ApiKey::new("secret_abcdefghijklmnopqrs").unwrap();
        assert_eq!(key.to_string(), "secret_abc...");
    }
}
