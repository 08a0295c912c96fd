//! Core domain entities.
//!
//! - [`Link`] - A stored shortcut-to-URL mapping, also the persisted record
//! - [`NewLink`] - Validated input for creating or replacing a link

pub mod link;

pub use link::{Link, NewLink};
