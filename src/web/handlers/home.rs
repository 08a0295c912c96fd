//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::domain::entities::Link;
use crate::state::AppState;

/// Template for the home page.
///
/// Renders `templates/home.html` with:
/// - Link creation form posting to `/add`
/// - Every stored link, ordered by shortcut
/// - An empty-state message when there are no links
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub links: Vec<Link>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Rendering failures are answered with 500 by [`WebTemplate`].
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    HomeTemplate {
        links: state.link_service.list_links().await,
    }
}
