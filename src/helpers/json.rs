use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u16,
    pub(crate) id: Option<String>,
    pub(crate) item: Option<T>,
}

#[derive(Serialize)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<String>,
    item: Option<T>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    fn form(self, status: &str, code: StatusCode, msg: String) -> JsonResponse<T> {
        JsonResponse {
            status: status.to_string(),
            message: msg,
            code: code.as_u16(),
            id: self.id,
            item: self.item,
        }
    }

    pub fn ok(self, msg: impl ToString) -> HttpResponse {
        HttpResponse::Ok().json(self.form("OK", StatusCode::OK, msg.to_string()))
    }

    fn error(self, code: StatusCode, msg: impl ToString) -> Error {
        let msg = msg.to_string();
        let response = HttpResponse::build(code).json(self.form("Error", code, msg.clone()));
        InternalError::from_response(msg, response).into()
    }

    pub fn unauthorized(self, msg: impl ToString) -> Error {
        self.error(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn forbidden(self, msg: impl ToString) -> Error {
        self.error(StatusCode::FORBIDDEN, msg)
    }

    pub fn internal_server_error(self, msg: impl ToString) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn ok_response_carries_item_and_message() {
        let response = JsonResponse::build().set_item("ready").ok("OK");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "OK");
        assert_eq!(json["message"], "OK");
        assert_eq!(json["code"], 200);
        assert_eq!(json["item"], "ready");
    }

    #[actix_web::test]
    async fn error_terminal_maps_status_code() {
        let err = JsonResponse::<String>::build().forbidden("Access denied");
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
