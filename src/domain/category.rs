/// Content type declared for the category reference document.
pub const CATEGORIES_MIME_TYPE: &str = "application/json";

/// Resource URI the tool server publishes the document under.
pub const CATEGORIES_URI: &str = "expense://categories";

/// File name used when no explicit location is configured.
pub const CATEGORIES_FILE_NAME: &str = "categories.json";

/// Starter document written by `init` when no file exists yet.
/// The ledger never validates expenses against it.
pub const DEFAULT_CATEGORIES: &str = r#"{
  "categories": [
    {
      "name": "food",
      "subcategories": ["groceries", "dining_out", "coffee", "delivery"]
    },
    {
      "name": "transport",
      "subcategories": ["fuel", "public_transport", "taxi", "parking", "maintenance"]
    },
    {
      "name": "housing",
      "subcategories": ["rent", "utilities", "internet", "repairs"]
    },
    {
      "name": "health",
      "subcategories": ["pharmacy", "doctor", "insurance", "fitness"]
    },
    {
      "name": "entertainment",
      "subcategories": ["movies", "games", "subscriptions", "events"]
    },
    {
      "name": "shopping",
      "subcategories": ["clothing", "electronics", "household", "gifts"]
    },
    {
      "name": "education",
      "subcategories": ["courses", "books", "supplies"]
    },
    {
      "name": "travel",
      "subcategories": ["flights", "lodging", "activities"]
    },
    {
      "name": "other",
      "subcategories": []
    }
  ]
}
"#;

/// The category reference document as read from disk, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDocument {
    pub content: String,
}

impl CategoryDocument {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    pub fn mime_type(&self) -> &'static str {
        CATEGORIES_MIME_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_is_json() {
        let value: serde_json::Value = serde_json::from_str(DEFAULT_CATEGORIES).unwrap();
        let categories = value["categories"].as_array().unwrap();
        assert!(categories.iter().any(|c| c["name"] == "food"));
    }

    #[test]
    fn test_document_is_passed_through() {
        let doc = CategoryDocument::new("not json at all".to_string());
        assert_eq!(doc.content, "not json at all");
        assert_eq!(doc.mime_type(), "application/json");
    }
}
