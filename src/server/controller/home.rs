use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HomeDto;

/// Tag for grouping the home endpoint in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// Welcome payload pointing at the API documentation.
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Welcome message and documentation path", body = HomeDto)
    ),
)]
pub async fn home() -> impl IntoResponse {
    (StatusCode::OK, Json(HomeDto::default()))
}
