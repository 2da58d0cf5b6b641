use crate::models;
use serde::{Deserialize, Serialize};

/// Claims returned by the provider's token verification endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject, the user id
    pub sub: String,
    /// Session id
    pub sid: String,
    /// Active organization id, when the session carries one
    #[serde(default)]
    pub org_id: Option<String>,
}

impl From<TokenClaims> for models::Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            session_id: claims.sid,
            organization_id: claims.org_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PublicMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

/// User record as the provider serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub public_metadata: PublicMetadata,
}

impl From<UserResponse> for models::User {
    fn from(user: UserResponse) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: user.public_metadata.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUserData {
    pub user_id: String,
}

/// One entry of the provider's organization membership list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipResponse {
    pub organization: OrganizationResponse,
    pub public_user_data: PublicUserData,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipListResponse {
    pub data: Vec<MembershipResponse>,
    #[serde(default)]
    pub total_count: i64,
}

impl From<MembershipResponse> for models::Membership {
    fn from(membership: MembershipResponse) -> Self {
        Self {
            user_id: membership.public_user_data.user_id,
            organization: models::Organization {
                id: membership.organization.id,
                name: membership.organization.name,
            },
            role: membership.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_claims_without_org_deserialize() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"sub":"user_1","sid":"sess_1"}"#).unwrap();
        let identity: crate::models::Identity = claims.into();
        assert_eq!(identity.user_id, "user_1");
        assert_eq!(identity.session_id, "sess_1");
        assert!(identity.organization_id.is_none());
    }

    #[test]
    fn user_response_maps_metadata_role() {
        let user: UserResponse = serde_json::from_str(
            r#"{"id":"user_1","email":"a@b.c","first_name":"Ada","last_name":"Lovelace","public_metadata":{"role":"admin"}}"#,
        )
        .unwrap();
        let user: crate::models::User = user.into();
        assert_eq!(user.role.as_deref(), Some("admin"));
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn membership_list_deserializes() {
        let list: MembershipListResponse = serde_json::from_str(
            r#"{"data":[{"organization":{"id":"org_1","name":"Acme"},"public_user_data":{"user_id":"user_1"},"role":"org:admin"}],"total_count":1}"#,
        )
        .unwrap();
        let membership: crate::models::Membership = list.data[0].clone().into();
        assert_eq!(membership.organization.name, "Acme");
        assert!(membership.is_admin());
    }
}
