use std::path::PathBuf;

/// Runtime configuration, read from environment variables with defaults
/// suitable for local development.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: String,
    /// Root of the markdown/MDX content tree.
    pub content_dir: PathBuf,
    /// Where the corpus JSON is written by the builder and read by the server.
    pub index_path: PathBuf,
    /// Static directory served as the router fallback.
    pub public_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let addr =
            std::env::var("BITACORA_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
        let content_dir = std::env::var("BITACORA_CONTENT_DIR")
            .unwrap_or_else(|_| "content/blog".to_string());
        let index_path = std::env::var("BITACORA_INDEX_PATH")
            .unwrap_or_else(|_| "public/search-index.json".to_string());
        let public_dir =
            std::env::var("BITACORA_PUBLIC_DIR").unwrap_or_else(|_| "public".to_string());

        Self {
            addr,
            content_dir: PathBuf::from(content_dir),
            index_path: PathBuf::from(index_path),
            public_dir: PathBuf::from(public_dir),
        }
    }
}
