use crate::models::Organization;
use serde::{Deserialize, Serialize};

/// Links a user to an organization with an associated role.
/// Owned by the identity provider, read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub user_id: String,
    pub organization: Organization,
    pub role: String,
}

impl Membership {
    /// The provider emits both `admin` and `org:admin` for organization
    /// administrators depending on API version; both grant admin access.
    pub fn is_admin(&self) -> bool {
        matches!(self.role.as_str(), "admin" | "org:admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn membership(role: &str) -> Membership {
        Membership {
            user_id: "user_1".to_string(),
            organization: Organization {
                id: "org_1".to_string(),
                name: "Acme".to_string(),
            },
            role: role.to_string(),
        }
    }

    #[test]
    fn admin_role_variants_are_equivalent() {
        assert!(membership("admin").is_admin());
        assert!(membership("org:admin").is_admin());
    }

    #[test]
    fn non_admin_roles_are_rejected() {
        assert!(!membership("basic_member").is_admin());
        assert!(!membership("org:member").is_admin());
        assert!(!membership("").is_admin());
        assert!(!membership("Admin").is_admin());
    }
}
