// ============================================================
// Layer 2 — Load Result
// ============================================================
// The result of one load call: an optional dataset per split.
//
// A field is Some exactly when that split was requested, so
// callers always get the same statically typed shape whether
// they asked for train, test, or both.

use anyhow::{bail, Result};

use crate::data::dataset::ReviewDataset;

pub const TRAIN: &str = "train";
pub const TEST: &str = "test";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImdbSplits {
    pub train: Option<ReviewDataset>,
    pub test:  Option<ReviewDataset>,
}

impl ImdbSplits {
    pub fn train(&self) -> Option<&ReviewDataset> {
        self.train.as_ref()
    }

    pub fn test(&self) -> Option<&ReviewDataset> {
        self.test.as_ref()
    }

    pub fn into_parts(self) -> (Option<ReviewDataset>, Option<ReviewDataset>) {
        (self.train, self.test)
    }

    /// Number of splits present (0, 1 or 2)
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present splits as (name, dataset), train before test.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ReviewDataset)> {
        [(TRAIN, self.train.as_ref()), (TEST, self.test.as_ref())]
            .into_iter()
            .filter_map(|(name, ds)| ds.map(|ds| (name, ds)))
    }

    /// The only split, when exactly one was requested.
    pub fn into_single(self) -> Result<ReviewDataset> {
        match (self.train, self.test) {
            (Some(ds), None) | (None, Some(ds)) => Ok(ds),
            (Some(_), Some(_)) => bail!("Both train and test splits are present"),
            (None, None)       => bail!("No split is present"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::Review;

    fn one(text: &str) -> ReviewDataset {
        ReviewDataset::new(vec![Review::new(text, "pos")])
    }

    #[test]
    fn test_iter_orders_train_first() {
        let splits = ImdbSplits { train: Some(one("tr")), test: Some(one("te")) };
        let names: Vec<_> = splits.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["train", "test"]);
        assert_eq!(splits.len(), 2);
    }

    #[test]
    fn test_into_single() {
        let only_test = ImdbSplits { train: None, test: Some(one("te")) };
        assert_eq!(only_test.into_single().unwrap(), one("te"));

        let both = ImdbSplits { train: Some(one("tr")), test: Some(one("te")) };
        assert!(both.into_single().is_err());
        assert!(ImdbSplits::default().into_single().is_err());
    }
}
