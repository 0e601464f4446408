use serde::{Deserialize, Serialize};

/// One searchable record per content entry.
///
/// All optional metadata is defaulted at ingestion time (empty string or
/// empty vec, never a missing field), so consumers of the corpus file are
/// total functions over this shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchDocument {
    /// Unique slug path, lower-cased and language-prefixed
    /// (e.g. `en/functional-programming`).
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Markdown body flattened to plain text, whitespace collapsed.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Canonical URL path for linking, lower-cased.
    #[serde(default)]
    pub path: String,
    #[serde(rename = "heroImage", default)]
    pub hero_image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{"id": "en/post"}"#;
        let doc: SearchDocument = serde_json::from_str(json).unwrap();

        assert_eq!(doc.id, "en/post");
        assert_eq!(doc.title, "");
        assert!(doc.tags.is_empty());
        assert!(doc.categories.is_empty());
        assert_eq!(doc.hero_image, "");
    }

    #[test]
    fn serializes_hero_image_with_wire_name() {
        let doc = SearchDocument {
            id: "es/hola".to_string(),
            title: "Hola".to_string(),
            description: String::new(),
            content: String::new(),
            tags: vec![],
            categories: vec![],
            path: "/blog/es/hola".to_string(),
            hero_image: "/images/hola.webp".to_string(),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["heroImage"], "/images/hola.webp");
        assert!(json.get("hero_image").is_none());
    }
}
