//! Wire types specific to the upstream catalog API.

use serde::Deserialize;

/// One entry of the upstream category listing.
///
/// Older API versions return plain slugs, newer ones return
/// `{slug, name, url}` objects; both appear in the wild.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCategory {
    Slug(String),
    Entry {
        #[serde(default)]
        slug: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl RawCategory {
    /// Normalize to a plain string, preferring the slug over the name.
    #[must_use]
    pub fn into_name(self) -> Option<String> {
        match self {
            Self::Slug(slug) => Some(slug),
            Self::Entry { slug, name } => slug.or(name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_string_entry() {
        let raw: RawCategory = serde_json::from_str("\"beauty\"").unwrap();
        assert_eq!(raw.into_name().as_deref(), Some("beauty"));
    }

    #[test]
    fn test_object_entry_prefers_slug() {
        let raw: RawCategory = serde_json::from_value(serde_json::json!({
            "slug": "mens-watches",
            "name": "Mens Watches",
            "url": "https://dummyjson.com/products/category/mens-watches"
        }))
        .unwrap();
        assert_eq!(raw.into_name().as_deref(), Some("mens-watches"));
    }

    #[test]
    fn test_object_entry_falls_back_to_name() {
        let raw: RawCategory =
            serde_json::from_value(serde_json::json!({ "name": "Groceries" })).unwrap();
        assert_eq!(raw.into_name().as_deref(), Some("Groceries"));
    }

    #[test]
    fn test_entry_with_neither_field_normalizes_to_nothing() {
        let raw: RawCategory = serde_json::from_value(serde_json::json!({ "url": "x" })).unwrap();
        assert_eq!(raw.into_name(), None);
    }
}
