use crate::connectors::config::IdentityServiceConfig;
use crate::connectors::errors::ConnectorError;
use crate::models;
use tracing::Instrument;

use super::connector::IdentityConnector;
use super::types::{MembershipListResponse, TokenClaims, UserResponse};

/// HTTP client for the identity provider's backend API.
/// No retries: a failed call is surfaced to the middleware boundary as-is.
pub struct IdentityServiceClient {
    base_url: String,
    http_client: reqwest::Client,
    secret_key: String,
}

impl IdentityServiceClient {
    pub fn new(config: IdentityServiceConfig) -> Result<Self, ConnectorError> {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConnectorError::Internal(format!("HTTP client build failed: {}", err)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
            secret_key: config.secret_key,
        })
    }
}

#[async_trait::async_trait]
impl IdentityConnector for IdentityServiceClient {
    async fn verify_token(&self, token: &str) -> Result<models::Identity, ConnectorError> {
        let span = tracing::info_span!("identity_verify_token");

        let url = format!("{}/v1/tokens/verify", self.base_url);
        let payload = serde_json::json!({ "token": token });

        let resp = self
            .http_client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .json(&payload)
            .send()
            .instrument(span)
            .await?;

        if !resp.status().is_success() {
            return Err(ConnectorError::Unauthorized(
                "token verification rejected".to_string(),
            ));
        }

        let text = resp.text().await.map_err(ConnectorError::from)?;
        serde_json::from_str::<TokenClaims>(&text)
            .map(Into::into)
            .map_err(|_| ConnectorError::InvalidResponse(text))
    }

    async fn get_user(&self, user_id: &str) -> Result<models::User, ConnectorError> {
        let span = tracing::info_span!("identity_get_user", user_id = %user_id);

        let url = format!("{}/v1/users/{}", self.base_url, user_id);
        let resp = self
            .http_client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .send()
            .instrument(span)
            .await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ConnectorError::NotFound(format!(
                "User {} not found",
                user_id
            )));
        }
        let resp = resp.error_for_status().map_err(|err| {
            tracing::error!("get_user error: {:?}", err);
            ConnectorError::HttpError(format!("Failed to fetch user: {}", err))
        })?;

        let text = resp.text().await.map_err(ConnectorError::from)?;
        serde_json::from_str::<UserResponse>(&text)
            .map(Into::into)
            .map_err(|_| ConnectorError::InvalidResponse(text))
    }

    async fn list_memberships(
        &self,
        organization_id: &str,
    ) -> Result<Vec<models::Membership>, ConnectorError> {
        let span = tracing::info_span!("identity_list_memberships", organization_id = %organization_id);

        let url = format!(
            "{}/v1/organizations/{}/memberships",
            self.base_url, organization_id
        );
        let resp = self
            .http_client
            .get(&url)
            .bearer_auth(&self.secret_key)
            .send()
            .instrument(span)
            .await?
            .error_for_status()
            .map_err(|err| {
                tracing::error!("list_memberships error: {:?}", err);
                ConnectorError::HttpError(format!("Failed to list memberships: {}", err))
            })?;

        let text = resp.text().await.map_err(ConnectorError::from)?;
        serde_json::from_str::<MembershipListResponse>(&text)
            .map(|list| list.data.into_iter().map(Into::into).collect())
            .map_err(|_| ConnectorError::InvalidResponse(text))
    }
}
