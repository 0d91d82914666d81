use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::PostData;
use crate::domain::post::models::PostId;
use crate::inbound::http::extractors::ApiPath;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    state
        .post_service
        .get_post(PostId(post_id))
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
