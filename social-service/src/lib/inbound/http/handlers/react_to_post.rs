use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::PostInfoData;
use crate::domain::post::models::PostId;
use crate::domain::post::models::ReactionKind;
use crate::inbound::http::extractors::ApiPath;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn like_post(
    state: State<AppState>,
    user: Extension<CurrentUser>,
    post_id: ApiPath<i64>,
) -> Result<ApiSuccess<PostInfoData>, ApiError> {
    react_to_post(state, user, post_id, ReactionKind::Like).await
}

pub async fn dislike_post(
    state: State<AppState>,
    user: Extension<CurrentUser>,
    post_id: ApiPath<i64>,
) -> Result<ApiSuccess<PostInfoData>, ApiError> {
    react_to_post(state, user, post_id, ReactionKind::Dislike).await
}

async fn react_to_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<i64>,
    kind: ReactionKind,
) -> Result<ApiSuccess<PostInfoData>, ApiError> {
    state
        .post_service
        .react_to_post(PostId(post_id), &user, kind)
        .await
        .map_err(ApiError::from)
        .map(|ref post| {
            let verb = match kind {
                ReactionKind::Like => "liked",
                ReactionKind::Dislike => "disliked",
            };
            ApiSuccess::new(
                StatusCode::OK,
                PostInfoData::new(post, format!("Post {} {verb}", post.id)),
            )
        })
}
