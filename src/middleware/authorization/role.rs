use crate::middleware::authorization::{Denial, Policy, PolicyContext};

/// Allows the request when the user's role claim is in the accepted set.
pub struct RequireRole {
    accepted: Vec<String>,
}

impl RequireRole {
    pub fn new<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            accepted: accepted.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl Policy for RequireRole {
    async fn authorize(&self, ctx: &PolicyContext) -> Result<(), Denial> {
        let user = ctx
            .connector
            .get_user(&ctx.identity.user_id)
            .await
            .map_err(|err| {
                tracing::error!("user fetch failed: {:?}", err);
                Denial::Upstream("Failed to fetch user info".to_string())
            })?;

        match user.role {
            Some(ref role) if self.accepted.iter().any(|accepted| accepted == role) => Ok(()),
            _ => Err(Denial::Forbidden(
                "Access denied: role required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::identity::mock::MockIdentityConnector;
    use crate::models;
    use std::sync::Arc;

    fn context(connector: MockIdentityConnector) -> PolicyContext {
        PolicyContext {
            identity: Arc::new(models::Identity {
                user_id: connector.user_id.clone(),
                session_id: "sess_test".to_string(),
                organization_id: connector.organization_id.clone(),
            }),
            connector: Arc::new(connector),
        }
    }

    #[tokio::test]
    async fn accepts_user_with_matching_role() {
        let ctx = context(MockIdentityConnector::default());
        let policy = RequireRole::new(["admin"]);
        assert!(policy.authorize(&ctx).await.is_ok());
    }

    #[tokio::test]
    async fn denies_user_with_other_role() {
        let connector = MockIdentityConnector {
            role: Some("viewer".to_string()),
            ..Default::default()
        };
        let ctx = context(connector);
        let policy = RequireRole::new(["admin", "editor"]);
        match policy.authorize(&ctx).await {
            Err(Denial::Forbidden(_)) => {}
            other => panic!("expected Forbidden, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn denies_user_without_role_claim() {
        let connector = MockIdentityConnector {
            role: None,
            ..Default::default()
        };
        let ctx = context(connector);
        let policy = RequireRole::new(["admin"]);
        match policy.authorize(&ctx).await {
            Err(Denial::Forbidden(msg)) => assert_eq!(msg, "Access denied: role required"),
            other => panic!("expected Forbidden, got {:?}", other.err()),
        }
    }
}
