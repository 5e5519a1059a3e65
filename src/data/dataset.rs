// ============================================================
// Layer 4 — Review Dataset
// ============================================================
// The in-memory container for one split of the corpus.
//
// It is an ordered list of Reviews and nothing more: no
// uniqueness constraint, no mutation after loading apart from
// the explicit Extend/concat helpers.
//
// Access patterns supported:
//   - by index        → get(i)
//   - by range        → slice(a..b)
//   - by column name  → column("text") / column("sentiment")
//   - through Burn    → impl Dataset<Review> for the DataLoader
//
// Reference: Burn Book §4 (Datasets)

use std::collections::BTreeMap;
use std::ops::Range;

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::domain::review::Review;

/// Column names every ReviewDataset exposes
pub const COLUMNS: [&str; 2] = ["text", "sentiment"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewDataset {
    records: Vec<Review>,
}

impl ReviewDataset {
    pub fn new(records: Vec<Review>) -> Self { Self { records } }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Borrow the review at `index`.
    pub fn get(&self, index: usize) -> Option<&Review> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Review> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Review] {
        &self.records
    }

    /// Copy a contiguous range into a new dataset.
    /// The range is clamped to the dataset length.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end   = range.end.min(self.records.len());
        let start = range.start.min(end);
        Self::new(self.records[start..end].to_vec())
    }

    pub fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    /// All values of one column, in record order.
    /// Returns None for an unknown column name.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        if !COLUMNS.contains(&name) {
            return None;
        }
        self.records.iter().map(|r| r.field(name)).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn sentiments(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.sentiment.as_str()).collect()
    }

    /// Number of records per sentiment tag
    pub fn sentiment_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for r in &self.records {
            *counts.entry(r.sentiment.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Append all records of `other` after this dataset's records.
    pub fn concat(mut self, other: ReviewDataset) -> Self {
        self.records.extend(other.records);
        self
    }
}

impl Dataset<Review> for ReviewDataset {
    fn get(&self, index: usize) -> Option<Review> {
        self.records.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

impl From<Vec<Review>> for ReviewDataset {
    fn from(records: Vec<Review>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Review> for ReviewDataset {
    fn from_iter<I: IntoIterator<Item = Review>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Review> for ReviewDataset {
    fn extend<I: IntoIterator<Item = Review>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for ReviewDataset {
    type Item = Review;
    type IntoIter = std::vec::IntoIter<Review>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ReviewDataset {
    type Item = &'a Review;
    type IntoIter = std::slice::Iter<'a, Review>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReviewDataset {
        ReviewDataset::new(vec![
            Review::new("a", "pos"),
            Review::new("b", "pos"),
            Review::new("c", "neg"),
        ])
    }

    #[test]
    fn test_index_and_len() {
        let ds = sample();
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.get(2), Some(&Review::new("c", "neg")));
        assert_eq!(ds.get(3), None);
    }

    #[test]
    fn test_burn_dataset_returns_owned_clone() {
        let ds = sample();
        let item = <ReviewDataset as Dataset<Review>>::get(&ds, 0).unwrap();
        assert_eq!(item, Review::new("a", "pos"));
        assert_eq!(<ReviewDataset as Dataset<Review>>::len(&ds), 3);
    }

    #[test]
    fn test_slice_is_clamped() {
        let ds = sample();
        assert_eq!(ds.slice(0..2).texts(), vec!["a", "b"]);
        assert_eq!(ds.slice(1..10).len(), 2);
        assert!(ds.slice(5..9).is_empty());
    }

    #[test]
    fn test_column_access() {
        let ds = sample();
        assert_eq!(ds.column("text"), Some(vec!["a", "b", "c"]));
        assert_eq!(ds.column("sentiment"), Some(vec!["pos", "pos", "neg"]));
        assert_eq!(ds.column("label"), None);
    }

    #[test]
    fn test_sentiment_counts() {
        let counts = sample().sentiment_counts();
        assert_eq!(counts.get("pos"), Some(&2));
        assert_eq!(counts.get("neg"), Some(&1));
    }

    #[test]
    fn test_concat_keeps_order_and_duplicates() {
        let ds = sample().concat(sample());
        assert_eq!(ds.len(), 6);
        assert_eq!(ds.get(3), Some(&Review::new("a", "pos")));
    }

    #[test]
    fn test_empty_dataset() {
        let ds = ReviewDataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.column("text"), Some(Vec::new()));
    }
}
