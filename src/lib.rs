//! Loader for the IMDB Large Movie Review sentiment corpus (aclImdb v1.0).
//!
//! ```no_run
//! use imdb_loader::{load_imdb, HttpArchiveFetcher, ImdbConfig};
//!
//! let config = ImdbConfig::default().train(true);
//! let splits = load_imdb(&config, &HttpArchiveFetcher::new())?;
//! let train  = splits.train().expect("train was requested");
//! println!("{} reviews, first: {:?}", train.len(), train.get(0));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use application::load_use_case::{
    load_imdb, load_imdb_default_fetcher, ImdbConfig, LoadError, LoadUseCase, IMDB_URL,
};
pub use application::splits::ImdbSplits;
pub use data::dataset::ReviewDataset;
pub use data::loader::FileOrder;
pub use domain::review::{Review, Sentiment};
pub use domain::traits::{ArchiveFetcher, ReviewSource};
pub use infra::error::FetchError;
pub use infra::fetcher::HttpArchiveFetcher;
