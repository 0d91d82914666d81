use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post::create_post;
use super::handlers::delete_post::delete_post;
use super::handlers::edit_post::edit_post;
use super::handlers::get_post::get_post;
use super::handlers::get_profile::get_profile;
use super::handlers::get_user::get_user;
use super::handlers::list_posts::list_my_posts;
use super::handlers::list_posts::list_posts;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::react_to_post::dislike_post;
use super::handlers::react_to_post::like_post;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    post_service: Arc<dyn PostServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        post_service,
    };

    let public_routes = Router::new()
        .route("/api/users/register", post(register))
        .route("/api/users/login", post(login))
        .route("/api/users", get(list_users))
        .route("/api/users/:user_id", get(get_user))
        .route("/api/posts", get(list_posts))
        .route("/api/posts/:post_id", get(get_post));

    let protected_routes = Router::new()
        .route("/api/users/me", get(get_profile))
        .route("/api/posts", post(create_post))
        .route("/api/posts/mine", get(list_my_posts))
        .route("/api/posts/:post_id", patch(edit_post).delete(delete_post))
        .route("/api/posts/:post_id/like", post(like_post))
        .route("/api/posts/:post_id/dislike", post(dislike_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
