use serde::{Deserialize, Deserializer, Serialize};

//
// ──────────────────────────────────────────────────────────
// Tag list codec
// ──────────────────────────────────────────────────────────
// Admin forms edit technology tags as one comma-joined string; the store keeps
// them as an ordered list. The codec is the single place that round-trip lives.
//

/// `"Rust, Postgres, , actix "` → `["Rust", "Postgres", "actix"]`
pub fn decode(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// `["Rust", "Postgres"]` → `"Rust, Postgres"`
pub fn encode(tags: &[String]) -> String {
    tags.join(", ")
}

//
// ──────────────────────────────────────────────────────────
// TagList
// ──────────────────────────────────────────────────────────
//

/// Ordered technology tags. Deserializes from either a JSON array or the
/// comma-joined form string; always serializes as an array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagList(pub Vec<String>);

impl TagList {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagListRepr {
    Joined(String),
    Items(Vec<String>),
}

impl<'de> Deserialize<'de> for TagList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = match TagListRepr::deserialize(deserializer)? {
            TagListRepr::Joined(raw) => decode(&raw),
            TagListRepr::Items(items) => items
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        };
        Ok(TagList(tags))
    }
}
