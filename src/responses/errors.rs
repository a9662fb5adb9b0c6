use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into the JSON error shape the API speaks.
pub fn error_to_response(err: ServerError) -> Response {
    let (status, detail) = match err {
        ServerError::NotFound(msg) => (404, msg),
        ServerError::Validation(msg) => (422, msg),
        ServerError::Conflict(msg) => (409, msg),
        ServerError::DbError(msg) => (500, msg),
        ServerError::InternalError => (500, "Internal Server Error".to_string()),
    };

    json_error_response(status, &detail)
}

pub fn json_error_response(status: u16, detail: &str) -> Response {
    let body = serde_json::json!({ "detail": detail }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
