//! # Go Links
//!
//! A personal go-link service: short keywords that redirect to full URLs,
//! built with Axum and a single JSON data file.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Link`] entity and the repository trait
//! - **Application Layer** ([`application`]) - Input validation and URL normalization
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file persistence
//! - **Web Layer** ([`web`]) - Redirects, the add endpoint and the HTML home page
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_FILE="./data/links.json"
//! export LISTEN="127.0.0.1:3001"
//! cargo run
//! ```
//!
//! Then open `http://127.0.0.1:3001/`, add `gh` → `github.com` and visit
//! `http://127.0.0.1:3001/gh`.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::{AppError, StoreError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::{AppError, StoreError};
    pub use crate::infrastructure::persistence::JsonLinkRepository;
    pub use crate::state::AppState;
}
