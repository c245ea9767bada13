use crate::{
    AppState, create_user, delete_user, get_user, handle_middleware_error, health, list_users,
    middleware, update_user,
};

use std::time::Duration;

use axum::{
    Router,
    error_handling::HandleErrorLayer,
    middleware::from_fn,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let timeout = state.handler.timeout();

    let router = Router::new()
        // User endpoints
        .route("/users", get(list_users))
        .route("/user", post(create_user))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state);

    apply_middleware(router, timeout)
}

/// Wrap a router in the service-wide layers, innermost first: request
/// timeout, request logging, CORS, then the OPTIONS-to-204 rewrite.
pub fn apply_middleware(router: Router, timeout: Duration) -> Router {
    router
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(from_fn(middleware::log_requests))
        .layer(middleware::cors_layer())
        .layer(from_fn(middleware::preflight_no_content))
}
