use crate::connectors::IdentityConnector;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get dashboard.", skip_all)]
#[get("")]
pub async fn handler(
    identity: web::ReqData<Arc<models::Identity>>,
    connector: web::Data<Arc<dyn IdentityConnector>>,
) -> Result<impl Responder> {
    let identity = identity.into_inner();
    let organization_id = identity.organization_id.clone().ok_or_else(|| {
        JsonResponse::<views::Dashboard>::build().forbidden("User is not in an organization")
    })?;

    let user = connector
        .get_user(&identity.user_id)
        .await
        .map_err(|err| {
            tracing::error!("user fetch failed: {:?}", err);
            JsonResponse::<views::Dashboard>::build()
                .internal_server_error("Failed to fetch user info")
        })?;

    let membership = connector
        .list_memberships(&organization_id)
        .await
        .map_err(|err| {
            tracing::error!("membership lookup failed: {:?}", err);
            JsonResponse::<views::Dashboard>::build()
                .internal_server_error("Failed to verify organization admin role")
        })?
        .into_iter()
        .find(|membership| membership.user_id == identity.user_id)
        .ok_or_else(|| {
            JsonResponse::<views::Dashboard>::build()
                .forbidden("User is not a member of the organization")
        })?;

    Ok(JsonResponse::build()
        .set_item(views::Dashboard::from((user, membership)))
        .ok("OK"))
}
