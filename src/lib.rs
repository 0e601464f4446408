pub mod config;
pub mod error;
pub mod models {
    pub mod document;
}
pub mod ingest {
    pub mod builder;
    pub mod frontmatter;
}
pub mod search {
    pub mod engine;
    pub mod index;
    pub mod tokenizer;
}
pub mod api {
    pub mod errors;
    pub mod search;
}
pub mod state;
