use serde::{Deserialize, Serialize};

/// Verified caller attributes for a single request. Derived from the bearer
/// credential by the authentication middleware, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    pub session_id: String,
    pub organization_id: Option<String>,
}
