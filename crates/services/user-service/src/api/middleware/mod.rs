//! Middleware for request ids, request logging and timeouts.

mod request_tracing;

pub use request_tracing::{with_request_layers, REQUEST_ID_HEADER};
