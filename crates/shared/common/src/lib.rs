//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling for the HTTP boundary
//! - Configuration structures loaded from the environment
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
pub use logging::init_tracing;
