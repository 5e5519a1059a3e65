// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Two subcommands: `fetch` and `load`.
//
// Defaults mirror ImdbConfig::default(), so running
//   imdb-loader load --train
// reads data/aclImdb/train/{pos,neg}/*.txt, downloading the
// archive first if data/aclImdb/README is missing.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::load_use_case::{ImdbConfig, IMDB_URL};
use crate::data::loader::FileOrder;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and extract the corpus without loading it
    Fetch(FetchArgs),

    /// Load one or both splits and print a summary
    Load(LoadArgs),
}

/// Where the corpus lives and where it comes from.
/// Shared by both subcommands.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory the archive is downloaded and extracted into
    #[arg(long, default_value = "data/")]
    pub directory: PathBuf,

    /// URL of the corpus .tar.gz
    #[arg(long, default_value = IMDB_URL)]
    pub url: String,

    /// File (relative to --directory) whose presence means the
    /// archive is already extracted
    #[arg(long, default_value = "aclImdb/README")]
    pub check_file: String,

    /// Hide the download progress bar
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Load the training split
    #[arg(long)]
    pub train: bool,

    /// Load the test split
    #[arg(long)]
    pub test: bool,

    #[arg(long, default_value = "train")]
    pub train_dir: String,

    #[arg(long, default_value = "test")]
    pub test_dir: String,

    /// Name of the extracted corpus directory
    #[arg(long, default_value = "aclImdb")]
    pub name: String,

    /// Sentiment subdirectory to read; repeat to read several,
    /// in the given order
    #[arg(long = "sentiment", default_values_t = vec!["pos".to_string(), "neg".to_string()])]
    pub sentiments: Vec<String>,

    /// Keep directory listing order instead of sorting by file name
    #[arg(long)]
    pub unsorted: bool,

    /// Print the first N reviews of each split as JSON lines
    #[arg(long, default_value_t = 0)]
    pub show: usize,

    /// Read the whole load configuration from a JSON file;
    /// the other load flags are then ignored
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Convert CLI LoadArgs into the application-layer ImdbConfig.
/// The application layer never sees clap types.
impl From<&LoadArgs> for ImdbConfig {
    fn from(a: &LoadArgs) -> Self {
        ImdbConfig {
            directory:       a.source.directory.clone(),
            train:           a.train,
            test:            a.test,
            train_directory: a.train_dir.clone(),
            test_directory:  a.test_dir.clone(),
            name:            a.name.clone(),
            check_file:      a.source.check_file.clone(),
            url:             a.source.url.clone(),
            sentiments:      a.sentiments.clone(),
            file_order:      if a.unsorted { FileOrder::Filesystem } else { FileOrder::Sorted },
        }
    }
}

/// `fetch` only needs the source fields; the rest stay default.
impl From<&FetchArgs> for ImdbConfig {
    fn from(a: &FetchArgs) -> Self {
        ImdbConfig {
            directory:  a.source.directory.clone(),
            check_file: a.source.check_file.clone(),
            url:        a.source.url.clone(),
            ..ImdbConfig::default()
        }
    }
}
