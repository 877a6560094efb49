// src/presentation/http/routes.rs
use crate::presentation::http::{
    controllers::{articles, home, users},
    error::HttpError,
    middleware::rate_limit::{CredentialsRateLimit, credentials_rate_limit},
    session::session_middleware,
    state::HttpState,
};
use axum::{
    Extension, Router,
    http::StatusCode,
    middleware,
    routing::{MethodRouter, get, post},
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

/// The router with login and registration throttled.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Build the application router. `rate_limit` toggles throttling of the
/// login and registration submissions, keyed on the client IP.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let limiter = if rate_limit {
        credentials_rate_limit()
    } else {
        None
    };
    let public_dir = state.public_dir.clone();

    Router::new()
        .route("/", get(home::index))
        .route("/health", get(home::health))
        .route(
            "/articles/add",
            get(articles::add_form).post(articles::create),
        )
        .route(
            "/articles/edit/{id}",
            get(articles::edit_form).post(articles::update),
        )
        .route(
            "/articles/{id}",
            get(articles::show).delete(articles::delete),
        )
        .route(
            "/users/register",
            throttled(post(users::register), limiter.as_ref()).get(users::register_form),
        )
        .route(
            "/users/login",
            throttled(post(users::login), limiter.as_ref()).get(users::login_form),
        )
        .route("/users/logout", get(users::logout))
        .nest_service("/js", ServeDir::new(public_dir.join("js")))
        .nest_service("/css", ServeDir::new(public_dir.join("css")))
        .fallback(not_found)
        .layer(middleware::from_fn(session_middleware))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

// Only the methods already registered on `route` are wrapped.
fn throttled(route: MethodRouter, limiter: Option<&CredentialsRateLimit>) -> MethodRouter {
    match limiter {
        Some(layer) => route.layer(layer.clone()),
        None => route,
    }
}

async fn not_found() -> HttpError {
    HttpError::new(StatusCode::NOT_FOUND, "Not Found")
}
