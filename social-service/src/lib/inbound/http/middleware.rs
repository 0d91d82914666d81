use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use http::header;
use http::HeaderMap;

use crate::domain::user::models::User;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Header older clients send the raw token in.
pub const TOKEN_HEADER: &str = "token";

/// Extension type carrying the user resolved from the bearer token
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the bearer token to a user and adds it to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(req.headers())
        .ok_or_else(|| ApiError::Unauthorized("Not authenticated".to_string()))?
        .to_string();

    let user = state
        .user_service
        .current_user(&token)
        .await
        .map_err(ApiError::from)?;

    tracing::debug!(user_id = %user.id, "Request authenticated");

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>` first, then the raw `token` header.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            let (scheme, token) = value.split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then_some(token.trim())
        });

    bearer
        .or_else(|| {
            headers
                .get(TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
        })
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    #[test]
    fn test_bearer_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));

        assert_eq!(extract_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("bearer abc"));

        assert_eq!(extract_token(&headers), Some("abc"));
    }

    #[test]
    fn test_raw_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, HeaderValue::from_static("abc"));

        assert_eq!(extract_token(&headers), Some("abc"));
    }

    #[test]
    fn test_authorization_wins_over_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer first"));
        headers.insert(TOKEN_HEADER, HeaderValue::from_static("second"));

        assert_eq!(extract_token(&headers), Some("first"));
    }

    #[test]
    fn test_missing_or_malformed() {
        assert_eq!(extract_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(extract_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(TOKEN_HEADER, HeaderValue::from_static("  "));
        assert_eq!(extract_token(&headers), None);
    }
}
