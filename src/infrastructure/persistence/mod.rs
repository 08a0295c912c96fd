//! Link storage implementations.
//!
//! - [`JsonLinkRepository`] - In-memory mapping persisted to a JSON file

pub mod json_link_repository;

pub use json_link_repository::JsonLinkRepository;
