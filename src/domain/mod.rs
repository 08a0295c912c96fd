//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the web layer. Storage details
//! live behind [`repositories::LinkRepository`].

pub mod entities;
pub mod repositories;
