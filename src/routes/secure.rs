use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Get secure confirmation.", skip_all)]
#[get("")]
pub async fn handler(identity: web::ReqData<Arc<models::Identity>>) -> Result<impl Responder> {
    Ok(JsonResponse::<models::Identity>::build()
        .set_id(identity.user_id.clone())
        .ok("You are an organization admin. Access granted."))
}
