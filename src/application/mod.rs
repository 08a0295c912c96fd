//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for the HTTP
//! handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Go link creation and lookup

pub mod services;
