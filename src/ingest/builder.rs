use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, Options, Parser};
use walkdir::WalkDir;

use crate::error::AppError;
use crate::ingest::frontmatter::{parse_metadata, split_front_matter, Metadata};
use crate::models::document::SearchDocument;

/// URL prefix under which blog entries are routed.
const PATH_PREFIX: &str = "/blog/";

/// Transform a content tree of `.md`/`.mdx` files into the flat corpus.
///
/// Files are processed in sorted path order so two runs over unchanged
/// content produce byte-identical output. Any read or parse failure aborts
/// the whole batch; there is no partial recovery.
pub fn build_corpus(content_root: &Path) -> Result<Vec<SearchDocument>, AppError> {
    let files = collect_markdown_files(content_root)?;
    tracing::info!("Found {} markdown files in {}", files.len(), content_root.display());

    let mut docs = Vec::with_capacity(files.len());
    let mut seen_ids: HashSet<String> = HashSet::new();

    for file in &files {
        let raw = fs::read_to_string(file)
            .map_err(|e| AppError::Content(format!("{}: {e}", file.display())))?;

        let (yaml, body) = split_front_matter(&raw);
        let meta = match yaml {
            Some(yaml) => parse_metadata(yaml)
                .map_err(|e| AppError::Content(format!("{}: {e}", file.display())))?,
            None => Metadata::default(),
        };

        let id = slug_for(content_root, file)?;
        if !seen_ids.insert(id.clone()) {
            return Err(AppError::Content(format!(
                "duplicate document id '{id}' ({})",
                file.display()
            )));
        }

        docs.push(SearchDocument {
            path: format!("{PATH_PREFIX}{id}"),
            id,
            title: meta.title,
            description: meta.description,
            content: flatten_markdown(body),
            tags: meta.tags,
            categories: meta.categories,
            hero_image: meta.hero_image,
        });
    }

    tracing::info!("Parsed {} documents", docs.len());
    Ok(docs)
}

/// Write the corpus as a single pretty-printed JSON array, replacing any
/// previous file. Parent directories are created as needed.
pub fn write_corpus(docs: &[SearchDocument], output: &Path) -> Result<(), AppError> {
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| AppError::Content(format!("{}: {e}", parent.display())))?;
    }

    let json = serde_json::to_string_pretty(docs)
        .map_err(|e| AppError::Internal(format!("corpus serialization failed: {e}")))?;
    fs::write(output, json)
        .map_err(|e| AppError::Content(format!("{}: {e}", output.display())))?;

    tracing::info!("Corpus written to {} ({} documents)", output.display(), docs.len());
    Ok(())
}

fn collect_markdown_files(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| AppError::Content(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.path().extension().and_then(|e| e.to_str()) {
            Some("md") | Some("mdx") => files.push(entry.into_path()),
            _ => {}
        }
    }
    files.sort();
    Ok(files)
}

/// Derive the document id from the file's location: the path relative to the
/// content root, `/`-separated, extension stripped, lower-cased.
fn slug_for(root: &Path, file: &Path) -> Result<String, AppError> {
    let rel = file
        .strip_prefix(root)
        .map_err(|_| AppError::Content(format!("{} is outside the content root", file.display())))?
        .with_extension("");

    let slug = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    Ok(slug.to_lowercase())
}

/// Flatten a markdown body to plain searchable text: markup is dropped,
/// text and code events are kept, and whitespace is collapsed.
fn flatten_markdown(body: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(body, options);
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Text(t) | Event::Code(t) => {
                if !text.is_empty() && !text.ends_with(' ') {
                    text.push(' ');
                }
                text.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak => {
                text.push(' ');
            }
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
