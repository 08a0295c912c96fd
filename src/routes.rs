//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Home page: add form and link listing
//! - `POST /add`         - Create or replace a link
//! - `GET  /{*shortcut}` - Redirect to a stored destination (or home)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//!
//! Paths are not normalized: `/gh` and `/gh/` are different shortcuts.

use crate::state::AppState;
use crate::web;
use crate::web::middleware::tracing;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    web::routes::routes()
        .with_state(state)
        .layer(tracing::layer())
}
