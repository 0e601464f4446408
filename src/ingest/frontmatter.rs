use serde_yaml::Value;

use crate::error::AppError;

/// Metadata extracted from a document's front-matter block.
///
/// Missing or mistyped fields coerce to empty defaults so the rest of the
/// pipeline never has to reason about absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
    pub hero_image: String,
}

/// Split a raw markdown file into its front-matter YAML (if any) and body.
///
/// Front-matter is a leading `---` fence closed by a `---` line. A file
/// without a well-formed block is treated as pure body.
pub fn split_front_matter(raw: &str) -> (Option<&str>, &str) {
    let Some(after_open) = raw.strip_prefix("---") else {
        return (None, raw);
    };
    let Some(after_open) = after_open
        .strip_prefix("\r\n")
        .or_else(|| after_open.strip_prefix('\n'))
    else {
        return (None, raw);
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let yaml = &after_open[..offset];
            let body = &after_open[offset + line.len()..];
            return (Some(yaml), body);
        }
        offset += line.len();
    }

    // Unterminated fence: no metadata, whole file is body.
    (None, raw)
}

/// Parse a front-matter YAML block into [`Metadata`].
///
/// Unparseable YAML is a hard error (the batch aborts); a parseable block
/// with missing or wrongly-typed fields coerces field-by-field to defaults.
pub fn parse_metadata(yaml: &str) -> Result<Metadata, AppError> {
    let value: Value = serde_yaml::from_str(yaml)
        .map_err(|e| AppError::Content(format!("invalid front-matter: {e}")))?;

    let Value::Mapping(map) = value else {
        return Ok(Metadata::default());
    };

    Ok(Metadata {
        title: string_field(&map, "title"),
        description: string_field(&map, "description"),
        tags: string_seq_field(&map, "tags"),
        categories: string_seq_field(&map, "categories"),
        hero_image: string_field(&map, "heroImage"),
    })
}

fn string_field(map: &serde_yaml::Mapping, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn string_seq_field(map: &serde_yaml::Mapping, key: &str) -> Vec<String> {
    match map.get(key) {
        Some(Value::Sequence(seq)) => seq
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        // Scalar or mapping where a list was expected: coerce to empty.
        _ => Vec::new(),
    }
}
