//! Business logic services.
//!
//! - [`LinkService`] - Input validation, URL normalization, link lookup

pub mod link_service;

pub use link_service::{LinkService, normalize_destination};
