use serde::{Deserialize, Serialize};

/// Identity provider connector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityServiceConfig {
    /// Base URL for the provider's backend API
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Backend API secret key (from env: IDENTITY_SECRET_KEY)
    #[serde(skip)]
    pub secret_key: String,
    /// Frontend publishable key. Required at startup alongside the secret
    /// key but consumed by the provider's browser SDK, never in a
    /// server-side call (from env: IDENTITY_PUBLISHABLE_KEY)
    #[serde(skip)]
    pub publishable_key: String,
}

impl Default for IdentityServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.identity.localhost".to_string(),
            timeout_secs: 10,
            secret_key: String::new(),
            publishable_key: String::new(),
        }
    }
}
