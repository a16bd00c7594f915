pub mod health;

use std::any::Any;
use std::path::Path;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

/// Builds the full application router.
///
/// `GET /` serves the index page; any path not matched by an API route is
/// looked up under `static_dir`.
pub fn build_router(state: AppState, static_dir: &Path, index_file: &str) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/models", get(handlers::handle_list_models))
        .route_service("/", ServeFile::new(static_dir.join(index_file)))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state);

    with_layers(router)
}

/// Tracing, CORS and panic recovery shared by every route.
fn with_layers(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::custom(panic_response)),
    )
}

/// Converts a handler panic into a 500 carrying the panic message.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };
    AppError::Internal(anyhow::anyhow!(message)).into_response()
}
