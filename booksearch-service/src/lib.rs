//! Book search backend.
//!
//! Proxies title/author searches to an external book catalog and hides the
//! description and page count of each result from anonymous callers. Also
//! issues the bearer tokens that unlock those fields.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use routes::{
    auth::{login, register},
    health::health_check,
    search::search_books,
};
use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/api/books/search", get(search_books))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
