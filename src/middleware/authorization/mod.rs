mod guard;
mod guard_middleware;
mod org_admin;
mod role;

pub use guard::*;
pub use guard_middleware::*;
pub use org_admin::OrgAdmin;
pub use role::RequireRole;

use crate::connectors::IdentityConnector;
use crate::models;
use std::sync::Arc;

/// Outcome of a failed policy check.
#[derive(Debug)]
pub enum Denial {
    /// Predicate failed, maps to 403
    Forbidden(String),
    /// Identity provider call failed, maps to 500
    Upstream(String),
}

/// Everything a policy may consult while deciding one request.
pub struct PolicyContext {
    pub identity: Arc<models::Identity>,
    pub connector: Arc<dyn IdentityConnector>,
}

/// A single authorization predicate. Policies run strictly after
/// authentication and are composed in explicit ordered chains by [`Guard`];
/// the first denial short-circuits the chain.
#[async_trait::async_trait]
pub trait Policy {
    async fn authorize(&self, ctx: &PolicyContext) -> Result<(), Denial>;
}
