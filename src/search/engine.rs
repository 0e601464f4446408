use std::collections::HashSet;

use futures::future::join_all;

use crate::models::document::SearchDocument;
use crate::search::index::{ContentIndex, Field, FieldIndex, STRUCTURED_FIELDS};
use crate::search::tokenizer::normalize_query;

/// Cap applied to each of the five lookups before merging.
pub const RESULT_LIMIT: usize = 20;

/// Answer a free-text query against a corpus snapshot.
///
/// Both indexes are built from scratch on every call: statelessness is the
/// contract, not an accident. The four structured-field lookups and the
/// content lookup run concurrently; their id lists are merged in the fixed
/// order title, description, tags, categories, content, deduplicated with
/// first appearance winning, and resolved back to full documents. No
/// relevance score is computed — ordering is dedup insertion order.
pub async fn search(query: &str, docs: &[SearchDocument]) -> Vec<SearchDocument> {
    let query = normalize_query(query);
    if query.is_empty() {
        // No query means no results, not "all documents".
        return Vec::new();
    }

    let field_index = FieldIndex::build(docs);
    let content_index = ContentIndex::build(docs);

    let field_lookups = STRUCTURED_FIELDS
        .iter()
        .map(|&field| field_lookup(&field_index, field, &query));
    let (field_ids, content_ids) = futures::join!(
        join_all(field_lookups),
        content_lookup(&content_index, &query),
    );

    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<String> = Vec::new();
    for id in field_ids.into_iter().flatten().chain(content_ids) {
        if seen.insert(id.clone()) {
            merged.push(id);
        }
    }

    // Ids without a matching document cannot occur while the corpus honors
    // the uniqueness invariant; they are dropped rather than panicking.
    merged
        .iter()
        .filter_map(|id| docs.iter().find(|doc| &doc.id == id))
        .cloned()
        .collect()
}

async fn field_lookup(index: &FieldIndex, field: Field, query: &str) -> Vec<String> {
    index.lookup(field, query, RESULT_LIMIT)
}

async fn content_lookup(index: &ContentIndex, query: &str) -> Vec<String> {
    index.lookup(query, RESULT_LIMIT)
}
