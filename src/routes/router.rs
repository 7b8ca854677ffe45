use crate::cors::cors_layer;
use crate::middleware::{host_validation_middleware, request_id_middleware};
use axum::extract::Request;
use axum::middleware;
use axum::routing::{get, MethodRouter};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::fallback::AppendSlash;
use super::health;
use super::AppState;

/// Create application router
pub fn create_router(state: Arc<AppState>) -> axum::Router {
    // Single route table so the fallback knows which slashed paths exist
    let routes: Vec<(&'static str, MethodRouter<Arc<AppState>>)> =
        vec![("/health/", get(health::health_check))];

    let append_slash = AppendSlash::new(
        routes.iter().map(|(path, _)| *path),
        state.settings.append_slash,
    );

    let router = routes
        .into_iter()
        .fold(axum::Router::new(), |router, (path, method_router)| {
            router.route(path, method_router)
        });

    // Layers run bottom-up: request id, tracing, host check, then CORS
    router
        .fallback(move |req: Request| {
            let response = append_slash.respond(&req);
            async move { response }
        })
        .layer(cors_layer(&state.settings.cors_allowed_origins))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            host_validation_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
