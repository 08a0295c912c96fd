//! Handler for the add-link form.

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Redirect,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Form fields posted by the home page.
///
/// Missing fields deserialize as empty strings and are rejected by
/// validation like blank ones.
#[derive(Debug, Deserialize)]
pub struct AddLinkForm {
    #[serde(default)]
    pub shortcut: String,
    #[serde(default)]
    pub url: String,
}

/// Creates or replaces a link from a submitted form.
///
/// # Endpoint
///
/// `POST /add` with `application/x-www-form-urlencoded` fields `shortcut`
/// and `url`.
///
/// # Errors
///
/// - 400 Bad Request if the body is not a form, or a field is missing or blank
/// - 500 Internal Server Error if the link could not be persisted
///
/// On success responds with 303 See Other to `/`.
pub async fn add_handler(
    State(state): State<AppState>,
    form: Result<Form<AddLinkForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let Form(form) = form.map_err(|_| AppError::bad_request("Invalid form data"))?;

    state
        .link_service
        .add_link(&form.shortcut, &form.url)
        .await?;

    Ok(Redirect::to("/"))
}

/// Answers any non-POST request to `/add`.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
