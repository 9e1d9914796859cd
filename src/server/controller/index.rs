use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static INDEX_TAG: &str = "index";

/// Health check.
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "API is running", body = MessageDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto::new("APIs running successfully")),
    )
}
