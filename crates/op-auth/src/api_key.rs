//! API key credentials
//!
//! OpenProject accepts an API key either as a bearer token or as the password
//! of the `apikey` user in HTTP Basic authentication.

use base64::Engine;
use op_core::config::AuthScheme;
use op_core::{OpError, OpResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use validator::Validate;

/// Basic auth user name OpenProject reserves for API keys
const API_KEY_USER: &str = "apikey";

/// Endpoint and API key of the acting user
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Base URL of the OpenProject instance
    #[validate(url)]
    pub url: String,

    #[serde(skip_serializing)]
    #[validate(length(min = 1))]
    pub api_key: String,
}

impl Credentials {
    /// Validate and normalize credentials; a trailing slash is dropped from the URL
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> OpResult<Self> {
        let credentials = Self {
            url: url.into().trim().trim_end_matches('/').to_string(),
            api_key: api_key.into().trim().to_string(),
        };
        credentials
            .validate()
            .map_err(|e| OpError::InvalidCredentials(e.into()))?;
        Ok(credentials)
    }

    /// Value of the `Authorization` header for the given scheme
    pub fn authorization_header(&self, scheme: AuthScheme) -> String {
        match scheme {
            AuthScheme::Bearer => format!("Bearer {}", self.api_key),
            AuthScheme::Basic => {
                let pair = format!("{}:{}", API_KEY_USER, self.api_key);
                format!(
                    "Basic {}",
                    base64::engine::general_purpose::STANDARD.encode(pair)
                )
            }
        }
    }

    /// Short SHA-256 fingerprint of the key, safe to log
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.api_key.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..12].to_string()
    }

    /// API root, `{url}/api/v3`
    pub fn api_root(&self) -> String {
        format!("{}/api/v3", self.url)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("url", &self.url)
            .field("api_key", &format_args!("sha256:{}", self.fingerprint()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_url() {
        let credentials = Credentials::new("https://op.example.com/ ", " secret ").unwrap();
        assert_eq!(credentials.url, "https://op.example.com");
        assert_eq!(credentials.api_key, "secret");
        assert_eq!(credentials.api_root(), "https://op.example.com/api/v3");
    }

    #[test]
    fn test_rejects_invalid_url_and_blank_key() {
        match Credentials::new("not a url", "") {
            Err(OpError::InvalidCredentials(errors)) => {
                assert!(errors.errors.contains_key("url"));
                assert!(errors.errors.contains_key("api_key"));
            }
            other => panic!("expected invalid credentials, got {:?}", other),
        }
    }

    #[test]
    fn test_bearer_header() {
        let credentials = Credentials::new("https://op.example.com", "abc").unwrap();
        assert_eq!(
            credentials.authorization_header(AuthScheme::Bearer),
            "Bearer abc"
        );
    }

    #[test]
    fn test_basic_header_uses_apikey_user() {
        let credentials = Credentials::new("https://op.example.com", "abc").unwrap();
        // base64("apikey:abc")
        assert_eq!(
            credentials.authorization_header(AuthScheme::Basic),
            "Basic YXBpa2V5OmFiYw=="
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let credentials = Credentials::new("https://op.example.com", "top-secret").unwrap();
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains(&credentials.fingerprint()));
        assert_eq!(credentials.fingerprint().len(), 12);
    }
}
