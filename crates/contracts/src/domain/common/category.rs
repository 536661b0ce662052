use serde::{Deserialize, Serialize};

/// Category tag of a collection together with its display label.
///
/// The set of categories is fixed per collection; records carry only the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
}

impl Category {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Category key as it travels over the wire (application payloads etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryKey(pub String);

impl From<&Category> for CategoryKey {
    fn from(c: &Category) -> Self {
        Self(c.key.to_string())
    }
}
