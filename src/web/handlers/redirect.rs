//! Handler for shortcut redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcut to its destination.
///
/// # Endpoint
///
/// `GET /{*shortcut}`
///
/// The path after the leading slash is the lookup key, verbatim. It may
/// contain further slashes; no case folding or trimming is applied.
///
/// # Responses
///
/// - Known shortcut: 302 Found to the stored destination
/// - Unknown shortcut: 302 Found to `/`, so the user lands on the add form
pub async fn redirect_handler(
    Path(shortcut): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve(&shortcut).await {
        Some(url) => {
            debug!("Redirecting {} -> {}", shortcut, url);
            found(&url)
        }
        None => {
            debug!("Unknown shortcut {}, redirecting home", shortcut);
            found("/")
        }
    }
}

/// Builds a `302 Found` response pointing at `location`.
fn found(location: &str) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(location).map_err(|e| {
        error!("Stored destination is not a valid Location header: {}", e);
        AppError::internal("Invalid redirect target")
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
