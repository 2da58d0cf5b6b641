use crate::connectors::IdentityConnector;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Admin overview.", skip_all)]
#[get("/overview")]
pub async fn overview(
    identity: web::ReqData<Arc<models::Identity>>,
    connector: web::Data<Arc<dyn IdentityConnector>>,
) -> Result<impl Responder> {
    let user = connector
        .get_user(&identity.user_id)
        .await
        .map_err(|err| {
            tracing::error!("user fetch failed: {:?}", err);
            JsonResponse::<views::Profile>::build()
                .internal_server_error("Failed to fetch user info")
        })?;

    Ok(JsonResponse::build()
        .set_item(views::Profile::from(user))
        .ok("OK"))
}
