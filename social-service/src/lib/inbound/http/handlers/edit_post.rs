use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_post::PostTextRequest;
use super::ApiError;
use super::ApiSuccess;
use super::PostInfoData;
use crate::domain::post::models::PostId;
use crate::inbound::http::extractors::ApiJson;
use crate::inbound::http::extractors::ApiPath;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn edit_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<i64>,
    ApiJson(body): ApiJson<PostTextRequest>,
) -> Result<ApiSuccess<PostInfoData>, ApiError> {
    state
        .post_service
        .edit_post(PostId(post_id), body.text, &user)
        .await
        .map_err(ApiError::from)
        .map(|ref post| {
            ApiSuccess::new(
                StatusCode::OK,
                PostInfoData::new(post, format!("Post {} edited", post.id)),
            )
        })
}
