use crate::connectors::IdentityConnector;
use crate::middleware::authentication::get_header;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use std::sync::Arc;

fn try_extract_token(authorization: String) -> Result<String, String> {
    let mut parts = authorization.splitn(2, ' ');
    match parts.next() {
        Some("Bearer") => {}
        _ => return Err("Missing token".to_string()),
    }
    match parts.next() {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err("Missing token".to_string()),
    }
}

#[tracing::instrument(name = "Authenticate with bearer token", skip_all)]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<(), String> {
    let authorization =
        get_header::<String>(req, "authorization")?.ok_or_else(|| "Missing token".to_string())?;
    let token = try_extract_token(authorization)?;

    let connector = req
        .app_data::<web::Data<Arc<dyn IdentityConnector>>>()
        .ok_or_else(|| {
            tracing::error!("identity connector is not configured");
            "Invalid or expired token".to_string()
        })?
        .get_ref()
        .clone();

    let identity = connector.verify_token(&token).await.map_err(|err| {
        tracing::error!("token verification error: {:?}", err);
        "Invalid or expired token".to_string()
    })?;

    tracing::debug!(user_id = %identity.user_id, "bearer credential verified");

    if req.extensions_mut().insert(Arc::new(identity)).is_some() {
        return Err("user already authenticated".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_from_bearer_scheme() {
        let token = try_extract_token("Bearer abc123".to_string()).unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn rejects_missing_scheme() {
        assert!(try_extract_token("abc123".to_string()).is_err());
        assert!(try_extract_token("Basic abc123".to_string()).is_err());
    }

    #[test]
    fn rejects_empty_token() {
        assert!(try_extract_token("Bearer".to_string()).is_err());
        assert!(try_extract_token("Bearer  ".to_string()).is_err());
    }
}
