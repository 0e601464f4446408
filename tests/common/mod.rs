use std::path::PathBuf;

use axum::routing::get;
use axum::Router;
use tempfile::TempDir;

use bitacora::api;
use bitacora::config::AppConfig;
use bitacora::models::document::SearchDocument;
use bitacora::state::AppState;

/// Holds the scratch directory backing a test corpus and provides the Axum
/// router for integration tests. The directory is cleaned up on drop.
pub struct TestEnv {
    _dir: TempDir,
    pub index_path: PathBuf,
    pub router: Router,
}

impl TestEnv {
    /// Stage a corpus file with the given documents and build a router
    /// whose search handler reads it.
    pub fn with_corpus(docs: &[SearchDocument]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let index_path = dir.path().join("search-index.json");
        let json = serde_json::to_string_pretty(docs).expect("Failed to serialize corpus");
        std::fs::write(&index_path, json).expect("Failed to write corpus file");
        Self::from_index_path(dir, index_path)
    }

    /// Build an environment whose corpus file does not exist, for testing
    /// request-level failure.
    pub fn without_corpus() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let index_path = dir.path().join("missing-index.json");
        Self::from_index_path(dir, index_path)
    }

    /// Build an environment whose corpus file is not valid JSON.
    pub fn with_corrupt_corpus() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let index_path = dir.path().join("search-index.json");
        std::fs::write(&index_path, "{not json").expect("Failed to write corpus file");
        Self::from_index_path(dir, index_path)
    }

    fn from_index_path(dir: TempDir, index_path: PathBuf) -> Self {
        let config = AppConfig {
            addr: "127.0.0.1:0".to_string(),
            content_dir: dir.path().join("content"),
            index_path: index_path.clone(),
            public_dir: dir.path().to_path_buf(),
        };

        let router = Router::new()
            .route("/api/search", get(api::search::search_handler))
            .with_state(AppState { config });

        Self {
            _dir: dir,
            index_path,
            router,
        }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder().build(self.router.clone())
    }
}

/// Helper: a corpus document with the commonly-varied fields.
pub fn doc(id: &str, title: &str, tags: &[&str], content: &str) -> SearchDocument {
    SearchDocument {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        categories: vec![],
        path: format!("/blog/{id}"),
        hero_image: String::new(),
    }
}
