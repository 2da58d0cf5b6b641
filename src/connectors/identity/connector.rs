use crate::connectors::errors::ConnectorError;
use crate::models;

/// Trait for the identity provider integration.
/// Allows mocking in tests and swapping implementations.
#[async_trait::async_trait]
pub trait IdentityConnector: Send + Sync {
    /// Exchange a bearer token for a verified identity.
    async fn verify_token(&self, token: &str) -> Result<models::Identity, ConnectorError>;

    /// Fetch a user by id, read-only.
    async fn get_user(&self, user_id: &str) -> Result<models::User, ConnectorError>;

    /// List the memberships of an organization.
    async fn list_memberships(
        &self,
        organization_id: &str,
    ) -> Result<Vec<models::Membership>, ConnectorError>;
}
