use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{get, Responder, Result};

#[get("/new-user")]
pub async fn handler() -> Result<impl Responder> {
    Ok(JsonResponse::<models::User>::build()
        .ok("Welcome to the new user page! Please sign up to access secure routes."))
}
