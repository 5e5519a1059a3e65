// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and prints results. All loading
// logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `fetch` — download + extract the corpus if needed
//   2. `load`  — load train and/or test, print per-sentiment counts
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, FetchArgs, LoadArgs};

use crate::application::load_use_case::{ImdbConfig, LoadUseCase};
use crate::application::splits::ImdbSplits;
use crate::infra::fetcher::HttpArchiveFetcher;

#[derive(Parser, Debug)]
#[command(
    name = "imdb-loader",
    version,
    about = "Download and load the IMDB Large Movie Review sentiment corpus."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching subcommand handler.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Fetch(args) => run_fetch(args),
            Commands::Load(args)  => run_load(args),
        }
    }
}

fn run_fetch(args: FetchArgs) -> Result<()> {
    let fetcher  = HttpArchiveFetcher::new().show_progress(!args.source.quiet);
    let use_case = LoadUseCase::with_fetcher(ImdbConfig::from(&args), Box::new(fetcher));
    use_case.fetch()?;

    println!("Dataset available in {}", use_case.config().directory.display());
    Ok(())
}

fn run_load(args: LoadArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Reading load config from '{}'", path.display());
            ImdbConfig::from_json_file(path)?
        }
        None => ImdbConfig::from(&args),
    };

    let fetcher  = HttpArchiveFetcher::new().show_progress(!args.source.quiet);
    let use_case = LoadUseCase::with_fetcher(config, Box::new(fetcher));
    let splits   = use_case.execute()?;

    print_summary(&splits);
    if args.show > 0 {
        print_records(&splits, args.show)?;
    }
    Ok(())
}

fn print_summary(splits: &ImdbSplits) {
    for (name, ds) in splits.iter() {
        let counts = ds
            .sentiment_counts()
            .iter()
            .map(|(s, n)| format!("{s}={n}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{name}: {} reviews ({counts})", ds.len());
    }
}

/// One JSON object per line: {"split": .., "text": .., "sentiment": ..}
fn print_records(splits: &ImdbSplits, limit: usize) -> Result<()> {
    for (name, ds) in splits.iter() {
        for review in ds.iter().take(limit) {
            let line = serde_json::json!({
                "split":     name,
                "text":      review.text,
                "sentiment": review.sentiment,
            });
            println!("{}", serde_json::to_string(&line)?);
        }
    }
    Ok(())
}
