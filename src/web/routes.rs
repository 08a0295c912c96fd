//! Go link route configuration.

use crate::state::AppState;
use crate::web::handlers::{add_handler, home_handler, method_not_allowed, redirect_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public go link routes.
///
/// # Endpoints
///
/// - `GET /` - Home page with the add form and all links
/// - `POST /add` - Create or replace a link (any other method gets 405)
/// - `GET /{*shortcut}` - Redirect to the stored destination, or home
///
/// Static segments win over the catch-all, so `/add` is never treated as a
/// shortcut.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/add", post(add_handler).fallback(method_not_allowed))
        .route("/{*shortcut}", get(redirect_handler))
}
