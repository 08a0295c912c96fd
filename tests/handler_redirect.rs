mod common;

use axum::http::StatusCode;
use golinks::domain::repositories::LinkRepository;
use tempfile::tempdir;

#[tokio::test]
async fn test_redirect_success() {
    let dir = tempdir().unwrap();
    let repo = common::create_test_repository(&common::data_file(dir.path())).await;
    repo.add("gh", "https://github.com/rust-lang").await.unwrap();

    let server = common::create_test_server(repo);

    let response = server.get("/gh").await;

    response.assert_status(StatusCode::FOUND);
    let location = response.header("location");
    assert_eq!(location, "https://github.com/rust-lang");
}

#[tokio::test]
async fn test_redirect_unknown_shortcut_goes_home() {
    let dir = tempdir().unwrap();
    let repo = common::create_test_repository(&common::data_file(dir.path())).await;
    let server = common::create_test_server(repo);

    let response = server.get("/doesnotexist").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_redirect_nested_shortcut() {
    let dir = tempdir().unwrap();
    let repo = common::create_test_repository(&common::data_file(dir.path())).await;
    repo.add("docs/rust", "https://doc.rust-lang.org").await.unwrap();

    let server = common::create_test_server(repo);

    let response = server.get("/docs/rust").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://doc.rust-lang.org");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let dir = tempdir().unwrap();
    let repo = common::create_test_repository(&common::data_file(dir.path())).await;
    repo.add("gh", "https://github.com").await.unwrap();

    let server = common::create_test_server(repo);

    let response = server.get("/GH").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_redirect_uses_links_loaded_from_file() {
    let dir = tempdir().unwrap();
    let path = common::data_file(dir.path());
    common::write_links_file(
        &path,
        r#"[{"shortcut": "mail", "url": "https://mail.example.com"}]"#,
    );

    let repo = common::create_test_repository(&path).await;
    let server = common::create_test_server(repo);

    let response = server.get("/mail").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://mail.example.com");
}
