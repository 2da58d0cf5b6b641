use crate::connectors::errors::ConnectorError;
use crate::models;

use super::connector::IdentityConnector;

/// Mock identity provider for tests: one known user who is an admin
/// member of one organization.
pub struct MockIdentityConnector {
    pub user_id: String,
    pub organization_id: Option<String>,
    pub role: Option<String>,
    pub membership_role: String,
}

impl Default for MockIdentityConnector {
    fn default() -> Self {
        Self {
            user_id: "user_test".to_string(),
            organization_id: Some("org_test".to_string()),
            role: Some("admin".to_string()),
            membership_role: "org:admin".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl IdentityConnector for MockIdentityConnector {
    async fn verify_token(&self, _token: &str) -> Result<models::Identity, ConnectorError> {
        Ok(models::Identity {
            user_id: self.user_id.clone(),
            session_id: "sess_test".to_string(),
            organization_id: self.organization_id.clone(),
        })
    }

    async fn get_user(&self, user_id: &str) -> Result<models::User, ConnectorError> {
        Ok(models::User {
            id: user_id.to_string(),
            email: "test@example.com".to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            role: self.role.clone(),
        })
    }

    async fn list_memberships(
        &self,
        organization_id: &str,
    ) -> Result<Vec<models::Membership>, ConnectorError> {
        Ok(vec![models::Membership {
            user_id: self.user_id.clone(),
            organization: models::Organization {
                id: organization_id.to_string(),
                name: "Test Organization".to_string(),
            },
            role: self.membership_role.clone(),
        }])
    }
}
