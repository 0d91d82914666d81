use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::PostInfoData;
use crate::inbound::http::extractors::ApiJson;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiJson(body): ApiJson<PostTextRequest>,
) -> Result<ApiSuccess<PostInfoData>, ApiError> {
    state
        .post_service
        .create_post(body.text, &user)
        .await
        .map_err(ApiError::from)
        .map(|ref post| {
            ApiSuccess::new(
                StatusCode::CREATED,
                PostInfoData::new(post, format!("Created post {}", post.id)),
            )
        })
}

/// Body shared by create and edit. Any text is accepted, including empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostTextRequest {
    pub text: String,
}
