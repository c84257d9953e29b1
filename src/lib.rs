//! Libris Library Rental System
//!
//! A Rust implementation of the Libris library rental server, providing a
//! REST JSON API for catalog search, user authentication and the rental
//! lifecycle, backed by an in-memory sample data set.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
