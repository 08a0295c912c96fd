#![allow(dead_code)]

use axum_test::TestServer;
use golinks::infrastructure::persistence::JsonLinkRepository;
use golinks::routes::app_router;
use golinks::state::AppState;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn data_file(dir: &Path) -> PathBuf {
    dir.join("data").join("links.json")
}

/// Builds a loaded repository backed by `path`.
pub async fn create_test_repository(path: &Path) -> Arc<JsonLinkRepository> {
    let repo = Arc::new(JsonLinkRepository::new(path));
    repo.load().await.unwrap();
    repo
}

pub fn create_test_server(repo: Arc<JsonLinkRepository>) -> TestServer {
    let state = AppState::new(repo);
    TestServer::new(app_router(state)).unwrap()
}

pub fn write_links_file(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}
