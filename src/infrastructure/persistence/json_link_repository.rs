//! JSON file implementation of link repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// File-backed repository holding every link in memory.
///
/// The mapping is loaded once with [`Self::load`] and rewritten in full on
/// every [`LinkRepository::add`]. Writers hold the lock across the file
/// write, so concurrent adds never interleave on disk.
#[derive(Debug)]
pub struct JsonLinkRepository {
    path: PathBuf,
    links: RwLock<BTreeMap<String, String>>,
}

impl JsonLinkRepository {
    /// Creates an empty repository backed by `path`. Nothing is read until
    /// [`Self::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            links: RwLock::new(BTreeMap::new()),
        }
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the data file into memory.
    ///
    /// Creates the parent directory if needed. A missing file leaves the
    /// mapping empty and is not an error. When a shortcut appears more than
    /// once, the last record wins.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created or the
    /// file cannot be read, and [`StoreError::Parse`] if the file is not a
    /// JSON array of link records. The in-memory mapping is untouched on error.
    pub async fn load(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).await?;
        }

        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        // `null` is what an empty list used to be written as.
        let records: Option<Vec<Link>> = serde_json::from_slice(&data)?;
        let loaded: BTreeMap<String, String> = records
            .unwrap_or_default()
            .into_iter()
            .map(|link| (link.shortcut, link.url))
            .collect();

        info!("Loaded {} links from {}", loaded.len(), self.path.display());
        *self.links.write().await = loaded;

        Ok(())
    }

    /// Writes the current mapping to the data file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be written.
    pub async fn save(&self) -> Result<(), StoreError> {
        let links = self.links.read().await;
        self.write_file(&links).await
    }

    async fn write_file(&self, links: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let records: Vec<Link> = links
            .iter()
            .map(|(shortcut, url)| Link::new(shortcut.clone(), url.clone()))
            .collect();

        let data = serde_json::to_vec_pretty(&records)?;
        fs::write(&self.path, data).await?;

        debug!("Saved {} links to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for JsonLinkRepository {
    async fn add(&self, shortcut: &str, url: &str) -> Result<(), StoreError> {
        let mut links = self.links.write().await;
        links.insert(shortcut.to_string(), url.to_string());
        self.write_file(&links).await
    }

    async fn get(&self, shortcut: &str) -> Option<String> {
        self.links.read().await.get(shortcut).cloned()
    }

    async fn get_all(&self) -> BTreeMap<String, String> {
        self.links.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_missing_file_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/data/links.json");
        let repo = JsonLinkRepository::new(&path);

        repo.load().await.unwrap();

        assert!(path.parent().unwrap().is_dir());
        assert!(!path.exists());
        assert!(repo.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_file_leaves_mapping_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, "{ not json").unwrap();

        let repo = JsonLinkRepository::new(&path);
        let result = repo.load().await;

        assert!(matches!(result, Err(StoreError::Parse(_))));
        assert!(repo.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_wrong_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, r#"{"shortcut": "gh", "url": "https://github.com"}"#).unwrap();

        let repo = JsonLinkRepository::new(&path);

        assert!(matches!(repo.load().await, Err(StoreError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_null_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(&path, "null").unwrap();

        let repo = JsonLinkRepository::new(&path);
        repo.load().await.unwrap();

        assert!(repo.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_later_duplicate_wins() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        std::fs::write(
            &path,
            r#"[
  {"shortcut": "gh", "url": "http://old.example"},
  {"shortcut": "mail", "url": "https://mail.example"},
  {"shortcut": "gh", "url": "https://github.com"}
]"#,
        )
        .unwrap();

        let repo = JsonLinkRepository::new(&path);
        repo.load().await.unwrap();

        let all = repo.get_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all["gh"], "https://github.com");
    }

    #[tokio::test]
    async fn test_add_persists_pretty_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        let repo = JsonLinkRepository::new(&path);

        repo.add("gh", "https://github.com").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[\n  {\n    \"shortcut\": \"gh\",\n    \"url\": \"https://github.com\"\n  }\n]"
        );
    }

    #[tokio::test]
    async fn test_add_overwrites_existing_shortcut() {
        let dir = tempdir().unwrap();
        let repo = JsonLinkRepository::new(dir.path().join("links.json"));

        repo.add("gh", "https://github.com").await.unwrap();
        repo.add("gh", "https://gitlab.com").await.unwrap();

        assert_eq!(repo.get("gh").await.as_deref(), Some("https://gitlab.com"));
        assert_eq!(repo.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_add_keeps_memory_change_when_write_fails() {
        let dir = tempdir().unwrap();
        // The data path is a directory, so every write fails.
        let repo = JsonLinkRepository::new(dir.path());

        let result = repo.add("gh", "https://github.com").await;

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert_eq!(repo.get("gh").await.as_deref(), Some("https://github.com"));
    }

    #[tokio::test]
    async fn test_get_all_is_a_copy() {
        let dir = tempdir().unwrap();
        let repo = JsonLinkRepository::new(dir.path().join("links.json"));
        repo.add("gh", "https://github.com").await.unwrap();

        let mut copy = repo.get_all().await;
        copy.insert("evil".to_string(), "https://evil.example".to_string());
        copy.clear();

        assert_eq!(repo.get_all().await.len(), 1);
        assert!(repo.get("evil").await.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");

        let repo = JsonLinkRepository::new(&path);
        repo.add("gh", "https://github.com").await.unwrap();
        repo.add("docs", "https://docs.rs").await.unwrap();
        repo.save().await.unwrap();

        let reloaded = JsonLinkRepository::new(&path);
        reloaded.load().await.unwrap();

        assert_eq!(reloaded.get_all().await, repo.get_all().await);
    }

    #[tokio::test]
    async fn test_concurrent_adds_all_persist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("links.json");
        let repo = std::sync::Arc::new(JsonLinkRepository::new(&path));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.add(&format!("s{i}"), &format!("https://example.com/{i}"))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let reloaded = JsonLinkRepository::new(&path);
        reloaded.load().await.unwrap();
        assert_eq!(reloaded.get_all().await.len(), 16);
    }
}
