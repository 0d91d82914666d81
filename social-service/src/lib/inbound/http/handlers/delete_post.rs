use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::PostInfoData;
use crate::domain::post::models::PostId;
use crate::inbound::http::extractors::ApiPath;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_post(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<ApiSuccess<PostInfoData>, ApiError> {
    let id = PostId(post_id);

    state
        .post_service
        .delete_post(id, &user)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                PostInfoData {
                    id: id.0,
                    info: format!("Post {id} deleted"),
                },
            )
        })
}
