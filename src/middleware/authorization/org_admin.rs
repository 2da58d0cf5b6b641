use crate::middleware::authorization::{Denial, Policy, PolicyContext};

/// Allows the request when the identity carries an organization id and the
/// caller holds an admin-equivalent membership in that organization.
pub struct OrgAdmin;

#[async_trait::async_trait]
impl Policy for OrgAdmin {
    async fn authorize(&self, ctx: &PolicyContext) -> Result<(), Denial> {
        let organization_id = ctx
            .identity
            .organization_id
            .as_deref()
            .ok_or_else(|| Denial::Forbidden("User is not in an organization".to_string()))?;

        let memberships = ctx
            .connector
            .list_memberships(organization_id)
            .await
            .map_err(|err| {
                tracing::error!("membership lookup failed: {:?}", err);
                Denial::Upstream("Failed to verify organization admin role".to_string())
            })?;

        let membership = memberships
            .iter()
            .find(|membership| membership.user_id == ctx.identity.user_id)
            .ok_or_else(|| {
                Denial::Forbidden("User is not a member of the organization".to_string())
            })?;

        if membership.is_admin() {
            Ok(())
        } else {
            Err(Denial::Forbidden(
                "Organization admin role required".to_string(),
            ))
        }
    }
}
