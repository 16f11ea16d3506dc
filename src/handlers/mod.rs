//! HTTP handlers

pub mod dashboard;
pub mod health;
pub mod reports;

use axum::http::Uri;

use crate::AppError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
