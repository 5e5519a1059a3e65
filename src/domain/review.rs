// ============================================================
// Layer 3 — Review Domain Type
// ============================================================
// A single labelled review read from the corpus.
//
// Each review file in aclImdb holds one review on one line.
// The loader keeps only that first line as `text` and tags it
// with the name of the directory it came from ("pos", "neg").
//
// Example:
//   aclImdb/train/pos/0_9.txt  →  Review { text: "Bromwell High is ...", sentiment: "pos" }
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A sentiment tag. This is the name of the label subdirectory,
/// stored verbatim (no schema validation).
pub type Sentiment = String;

/// One (text, sentiment) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Review {
    /// First line of the review file, line terminator removed
    pub text: String,

    /// Label subdirectory the file was found in
    pub sentiment: Sentiment,
}

impl Review {
    pub fn new(text: impl Into<String>, sentiment: impl Into<Sentiment>) -> Self {
        Self {
            text:      text.into(),
            sentiment: sentiment.into(),
        }
    }

    /// Look up a field by its column name.
    pub fn field(&self, column: &str) -> Option<&str> {
        match column {
            "text"      => Some(&self.text),
            "sentiment" => Some(&self.sentiment),
            _           => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let r = Review::new("great movie", "pos");
        assert_eq!(r.field("text"), Some("great movie"));
        assert_eq!(r.field("sentiment"), Some("pos"));
        assert_eq!(r.field("rating"), None);
    }

    #[test]
    fn test_serialises_with_column_names() {
        let r    = Review::new("bad movie", "neg");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"text":"bad movie","sentiment":"neg"}"#);
    }
}
