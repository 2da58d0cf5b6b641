use crate::models;
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct OrganizationView {
    pub id: String,
    pub name: String,
    /// The caller's membership role in this organization
    pub role: String,
}

/// Projection combining the caller's user record with their organization
/// membership, returned by `GET /dashboard`.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub user: UserView,
    pub organization: OrganizationView,
}

impl From<(models::User, models::Membership)> for Dashboard {
    fn from((user, membership): (models::User, models::Membership)) -> Self {
        Self {
            user: UserView {
                id: user.id.clone(),
                email: user.email.clone(),
                name: user.full_name(),
            },
            organization: OrganizationView {
                id: membership.organization.id,
                name: membership.organization.name,
                role: membership.role,
            },
        }
    }
}
