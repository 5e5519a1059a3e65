// ============================================================
// Layer 2 — LoadUseCase
// ============================================================
// Orchestrates one load of the IMDB corpus:
//
//   Step 1: Validate the request        (this layer)
//   Step 2: Ensure the data is on disk  (Layer 6 - infra, via ArchiveFetcher)
//   Step 3: Load each requested split   (Layer 4 - data)
//   Step 4: Wrap splits in ImdbSplits   (this layer)
//
// Splits are always processed train first, then test.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::application::splits::{ImdbSplits, TEST, TRAIN};
use crate::data::{
    dataset::ReviewDataset,
    loader::{FileOrder, SplitLoader},
};
use crate::domain::review::Sentiment;
use crate::domain::traits::{ArchiveFetcher, ReviewSource};
use crate::infra::fetcher::HttpArchiveFetcher;

/// Canonical location of the Large Movie Review Dataset v1.0
pub const IMDB_URL: &str = "http://ai.stanford.edu/~amaas/data/sentiment/aclImdb_v1.tar.gz";

// ─── Load Configuration ──────────────────────────────────────────────────────
// Every knob of a load call. Serialisable so a run can be
// described in a JSON file and replayed with `load --config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImdbConfig {
    /// Where the archive is downloaded and extracted
    pub directory:       PathBuf,
    pub train:           bool,
    pub test:            bool,
    pub train_directory: String,
    pub test_directory:  String,
    /// Name of the extracted corpus directory
    pub name:            String,
    /// Relative to `directory`; its presence means "already extracted"
    pub check_file:      String,
    pub url:             String,
    /// Sentiment subdirectories to read, in output order
    pub sentiments:      Vec<Sentiment>,
    pub file_order:      FileOrder,
}

impl Default for ImdbConfig {
    fn default() -> Self {
        Self {
            directory:       PathBuf::from("data/"),
            train:           false,
            test:            false,
            train_directory: TRAIN.to_string(),
            test_directory:  TEST.to_string(),
            name:            "aclImdb".to_string(),
            check_file:      "aclImdb/README".to_string(),
            url:             IMDB_URL.to_string(),
            sentiments:      vec!["pos".to_string(), "neg".to_string()],
            file_order:      FileOrder::Sorted,
        }
    }
}

impl ImdbConfig {
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = dir.into();
        self
    }

    pub fn train(mut self, yes: bool) -> Self {
        self.train = yes;
        self
    }

    pub fn test(mut self, yes: bool) -> Self {
        self.test = yes;
        self
    }

    pub fn sentiments<S: Into<Sentiment>>(mut self, sentiments: impl IntoIterator<Item = S>) -> Self {
        self.sentiments = sentiments.into_iter().map(Into::into).collect();
        self
    }

    pub fn file_order(mut self, order: FileOrder) -> Self {
        self.file_order = order;
        self
    }

    /// `<directory>/<name>/<split>`
    pub fn split_path(&self, split_directory: &str) -> PathBuf {
        self.directory.join(&self.name).join(split_directory)
    }

    /// Requested split directories, train first.
    pub fn requested_splits(&self) -> Vec<(&'static str, &str)> {
        [
            (self.train, TRAIN, self.train_directory.as_str()),
            (self.test,  TEST,  self.test_directory.as_str()),
        ]
        .into_iter()
        .filter(|(requested, _, _)| *requested)
        .map(|(_, split, dir)| (split, dir))
        .collect()
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        if !self.train && !self.test {
            return Err(LoadError::NoSplitRequested);
        }
        if self.sentiments.is_empty() {
            return Err(LoadError::NoSentiments);
        }
        Ok(())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Invalid config JSON in '{}'", path.display()))
    }

    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved load config to '{}'", path.display());
        Ok(())
    }
}

/// Requests that are rejected before touching the disk or network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Neither the train nor the test split was requested")]
    NoSplitRequested,

    #[error("The sentiment list is empty")]
    NoSentiments,
}

// ─── Load ─────────────────────────────────────────────────────────────────────

/// Ensure the corpus exists, then load the requested splits.
///
/// Errors from `fetcher` are returned unchanged; a file that
/// cannot be opened or decoded fails the whole call.
pub fn load_imdb(config: &ImdbConfig, fetcher: &dyn ArchiveFetcher) -> Result<ImdbSplits> {
    config.validate()?;

    fetcher.ensure_dataset(&config.url, &config.directory, &config.check_file)?;

    let mut splits = ImdbSplits::default();
    for (split, split_directory) in config.requested_splits() {
        let loader = SplitLoader::new(config.split_path(split_directory), config.sentiments.clone())
            .with_order(config.file_order);

        let dataset = ReviewDataset::new(loader.load_all()?);
        tracing::info!("Loaded {} split: {} reviews", split, dataset.len());

        match split {
            TRAIN => splits.train = Some(dataset),
            _     => splits.test  = Some(dataset),
        }
    }

    Ok(splits)
}

/// `load_imdb` with the stock HTTP fetcher and its progress bar.
pub fn load_imdb_default_fetcher(config: &ImdbConfig) -> Result<ImdbSplits> {
    load_imdb(config, &HttpArchiveFetcher::new())
}

// ─── LoadUseCase ──────────────────────────────────────────────────────────────
// Owns the config and the fetcher; the CLI builds one of these
// per invocation.
pub struct LoadUseCase {
    config:  ImdbConfig,
    fetcher: Box<dyn ArchiveFetcher>,
}

impl LoadUseCase {
    pub fn with_fetcher(config: ImdbConfig, fetcher: Box<dyn ArchiveFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &ImdbConfig {
        &self.config
    }

    /// Only make sure the corpus is downloaded and extracted.
    pub fn fetch(&self) -> Result<()> {
        let cfg = &self.config;
        self.fetcher.ensure_dataset(&cfg.url, &cfg.directory, &cfg.check_file)
    }

    pub fn execute(&self) -> Result<ImdbSplits> {
        tracing::info!(
            "Loading IMDB from '{}' (train={}, test={})",
            self.config.directory.display(),
            self.config.train,
            self.config.test
        );
        load_imdb(&self.config, self.fetcher.as_ref())
    }
}
