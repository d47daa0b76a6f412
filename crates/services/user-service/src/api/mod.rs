//! HTTP layer - handlers, routes and middleware.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
