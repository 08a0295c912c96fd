//! Repository trait for go link data access.

use std::collections::BTreeMap;

use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for the shortcut-to-URL mapping.
///
/// There is no delete operation: links are only ever inserted or replaced.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonLinkRepository`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link, replacing the destination of an existing shortcut,
    /// then persists the whole mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if persisting fails. The in-memory mapping has
    /// already been updated at that point.
    async fn add(&self, shortcut: &str, url: &str) -> Result<(), StoreError>;

    /// Looks up the destination for a shortcut.
    async fn get(&self, shortcut: &str) -> Option<String>;

    /// Returns a copy of every mapping, keyed and ordered by shortcut.
    async fn get_all(&self) -> BTreeMap<String, String>;
}
