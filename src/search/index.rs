use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::document::SearchDocument;
use crate::search::tokenizer::tokenize;

/// The structured fields searchable independently of the body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Tags,
    Categories,
}

/// Lookup fan-out order. This is also the merge order of the engine, so it
/// determines which match "wins" first-appearance dedup.
pub const STRUCTURED_FIELDS: [Field; 4] = [
    Field::Title,
    Field::Description,
    Field::Tags,
    Field::Categories,
];

/// Token → posting list of document ids, in corpus order. A `BTreeMap`
/// keyed by token gives prefix lookups via range scans, which is what makes
/// partial-word queries match (forward tokenization).
type Postings = BTreeMap<String, Vec<String>>;

/// Structured multi-field index over title, description, tags and
/// categories. Built per call from a corpus snapshot; holds no other state.
pub struct FieldIndex {
    fields: HashMap<Field, Postings>,
}

impl FieldIndex {
    pub fn build(docs: &[SearchDocument]) -> Self {
        let mut fields: HashMap<Field, Postings> = HashMap::new();

        for doc in docs {
            for field in STRUCTURED_FIELDS {
                let postings = fields.entry(field).or_default();
                match field {
                    Field::Title => add_postings(postings, &doc.id, &doc.title),
                    Field::Description => add_postings(postings, &doc.id, &doc.description),
                    Field::Tags => {
                        for tag in &doc.tags {
                            add_postings(postings, &doc.id, tag);
                        }
                    }
                    Field::Categories => {
                        for category in &doc.categories {
                            add_postings(postings, &doc.id, category);
                        }
                    }
                }
            }
        }

        Self { fields }
    }

    /// Ids of documents whose `field` matches every query term by prefix,
    /// capped at `limit`.
    pub fn lookup(&self, field: Field, query: &str, limit: usize) -> Vec<String> {
        match self.fields.get(&field) {
            Some(postings) => lookup_postings(postings, query, limit),
            None => Vec::new(),
        }
    }
}

/// Full-text index over the flattened body content, independent of the
/// structured index and keyed by the same document ids.
pub struct ContentIndex {
    postings: Postings,
}

impl ContentIndex {
    pub fn build(docs: &[SearchDocument]) -> Self {
        let mut postings = Postings::new();
        for doc in docs {
            add_postings(&mut postings, &doc.id, &doc.content);
        }
        Self { postings }
    }

    pub fn lookup(&self, query: &str, limit: usize) -> Vec<String> {
        lookup_postings(&self.postings, query, limit)
    }
}

fn add_postings(postings: &mut Postings, id: &str, text: &str) {
    for token in tokenize(text) {
        let ids = postings.entry(token).or_default();
        // Docs are inserted one at a time, so a tail check deduplicates.
        if ids.last().map(String::as_str) != Some(id) {
            ids.push(id.to_string());
        }
    }
}

/// Shared lookup: every query term must match some indexed token by prefix;
/// per-term candidate lists are intersected and the result capped.
fn lookup_postings(postings: &Postings, query: &str, limit: usize) -> Vec<String> {
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut matched: Option<Vec<String>> = None;
    for term in &terms {
        let ids_for_term = ids_with_prefix(postings, term);
        matched = Some(match matched {
            None => ids_for_term,
            Some(previous) => previous
                .into_iter()
                .filter(|id| ids_for_term.contains(id))
                .collect(),
        });
        if matched.as_ref().is_some_and(Vec::is_empty) {
            break;
        }
    }

    let mut ids = matched.unwrap_or_default();
    ids.truncate(limit);
    ids
}

fn ids_with_prefix(postings: &Postings, term: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut ids = Vec::new();
    for (_, posting) in postings
        .range(term.to_string()..)
        .take_while(|(token, _)| token.starts_with(term))
    {
        for id in posting {
            if seen.insert(id) {
                ids.push(id.clone());
            }
        }
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, title: &str, tags: &[&str], content: &str) -> SearchDocument {
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

    fn sample_corpus() -> Vec<SearchDocument> {
        vec![
            doc(
                "en/fp",
                "Functional Programming",
                &["functional"],
                "Closures and higher order functions.",
            ),
            doc(
                "en/oop",
                "OOP Basics",
                &["oop"],
                "Objects everywhere, but uses functional techniques too.",
            ),
            doc("es/intro", "Introducción", &[], "Bienvenida al blog."),
        ]
    }

    #[test]
    fn title_lookup_matches_by_prefix() {
        let index = FieldIndex::build(&sample_corpus());
        let ids = index.lookup(Field::Title, "functio", 20);
        assert_eq!(ids, vec!["en/fp"]);
    }

    #[test]
    fn exact_tag_lookup_matches() {
        let index = FieldIndex::build(&sample_corpus());
        let ids = index.lookup(Field::Tags, "functional", 20);
        assert_eq!(ids, vec!["en/fp"]);
    }

    #[test]
    fn content_lookup_is_independent_of_fields() {
        let docs = sample_corpus();
        let content = ContentIndex::build(&docs);
        let ids = content.lookup("functional", 20);
        // "functions" in en/fp's body is not a prefix match for "functional"
        assert!(ids.contains(&"en/oop".to_string()));
        assert!(!ids.contains(&"en/fp".to_string()));
        assert!(!ids.contains(&"es/intro".to_string()));
    }

    #[test]
    fn multi_term_queries_intersect() {
        let docs = sample_corpus();
        let content = ContentIndex::build(&docs);
        assert_eq!(
            content.lookup("functional techniques", 20),
            vec!["en/oop".to_string()]
        );
        assert!(content.lookup("functional bienvenida", 20).is_empty());
    }

    #[test]
    fn unknown_terms_match_nothing() {
        let index = FieldIndex::build(&sample_corpus());
        assert!(index.lookup(Field::Title, "zzzz", 20).is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let index = FieldIndex::build(&sample_corpus());
        assert!(index.lookup(Field::Title, "", 20).is_empty());
        assert!(index.lookup(Field::Title, "   ", 20).is_empty());
    }

    #[test]
    fn limit_caps_results() {
        let docs: Vec<SearchDocument> = (0..30)
            .map(|i| doc(&format!("en/post-{i:02}"), "Shared Title", &[], ""))
            .collect();
        let index = FieldIndex::build(&docs);
        assert_eq!(index.lookup(Field::Title, "shared", 20).len(), 20);
    }

    #[test]
    fn repeated_words_in_one_doc_appear_once() {
        let docs = vec![doc("en/a", "rust rust rust", &[], "")];
        let index = FieldIndex::build(&docs);
        assert_eq!(index.lookup(Field::Title, "rust", 20), vec!["en/a"]);
    }

    #[test]
    fn accented_queries_match_accented_tokens() {
        let index = FieldIndex::build(&sample_corpus());
        assert_eq!(index.lookup(Field::Title, "introducción", 20), vec!["es/intro"]);
    }
}
