//! Route configuration.

use std::time::Duration;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{health_routes, user_routes};
use crate::api::middleware::with_request_layers;
use crate::api::openapi::ApiDoc;
use crate::api::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let router = Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // User CRUD
        .nest("/users", user_routes())
        .with_state(state);

    with_request_layers(router, request_timeout)
}
