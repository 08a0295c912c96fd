//! Link creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use tracing::{error, info};
use validator::Validate;

/// Schemes accepted as-is; anything else gets `http://` prepended.
const KNOWN_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Service for creating and resolving go links.
///
/// Trims and validates user input and normalizes destinations before handing
/// them to the repository.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a link, or replaces the destination of an existing shortcut.
    ///
    /// Both fields are trimmed; the URL gets `http://` prepended when it
    /// carries neither `http://` nor `https://`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either field is blank. The
    /// repository is not touched in that case.
    ///
    /// Returns [`AppError::Internal`] if the link could not be persisted.
    pub async fn add_link(&self, shortcut: &str, url: &str) -> Result<Link, AppError> {
        let new_link = NewLink::from_input(shortcut, url);
        new_link.validate()?;

        let link = Link::new(new_link.shortcut, normalize_destination(&new_link.url));

        self.link_repository
            .add(&link.shortcut, &link.url)
            .await
            .map_err(|e| {
                error!("Failed to save link {}: {}", link.shortcut, e);
                AppError::internal("Failed to save link")
            })?;

        info!("Saved link {} -> {}", link.shortcut, link.url);
        Ok(link)
    }

    /// Resolves a shortcut to its destination.
    pub async fn resolve(&self, shortcut: &str) -> Option<String> {
        self.link_repository.get(shortcut).await
    }

    /// Returns every link, ordered by shortcut.
    pub async fn list_links(&self) -> Vec<Link> {
        self.link_repository
            .get_all()
            .await
            .into_iter()
            .map(|(shortcut, url)| Link::new(shortcut, url))
            .collect()
    }
}

/// Ensures a destination carries an explicit scheme, defaulting to `http://`.
pub fn normalize_destination(url: &str) -> String {
    if KNOWN_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
