// ============================================================
// Layer 6 — HTTP Archive Fetcher
// ============================================================
// Makes sure the corpus is present on disk before loading.
//
// Steps (each is skipped when its result already exists):
//   1. <directory>/<check_file> exists?  → nothing to do
//   2. download <url> to <directory>/<archive name>
//        streamed through a ".part" file and renamed on success,
//        so an interrupted download is never mistaken for a
//        finished one
//   3. extract the archive into <directory>
//   4. <directory>/<check_file> must exist now, else fail
//
// No retry, no timeout: a failure is reported once and the
// caller decides what to do.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::traits::ArchiveFetcher;
use crate::infra::archive;
use crate::infra::error::{FetchError, FetchResult};

const USER_AGENT: &str = concat!("imdb-loader/", env!("CARGO_PKG_VERSION"));

/// Downloads and unpacks a tar.gz corpus over HTTP(S).
pub struct HttpArchiveFetcher {
    show_progress: bool,
}

impl HttpArchiveFetcher {
    pub fn new() -> Self {
        Self { show_progress: true }
    }

    /// Toggle the download progress bar (on by default).
    pub fn show_progress(mut self, yes: bool) -> Self {
        self.show_progress = yes;
        self
    }

    fn fetch(&self, url: &str, directory: &Path, check_file: &str) -> FetchResult<()> {
        let check_path = directory.join(check_file);
        if check_path.exists() {
            tracing::debug!("'{}' present — skipping download", check_path.display());
            return Ok(());
        }

        fs::create_dir_all(directory).map_err(|source| FetchError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        let archive_path = directory.join(archive_file_name(url)?);
        if archive_path.exists() {
            tracing::info!("Reusing downloaded archive '{}'", archive_path.display());
        } else {
            self.download(url, &archive_path)?;
        }

        archive::extract(&archive_path, directory)?;

        if !check_path.exists() {
            return Err(FetchError::CheckFileMissing { check_file: check_path });
        }
        tracing::info!("Dataset ready in '{}'", directory.display());
        Ok(())
    }

    /// Stream `url` into `dest`.
    fn download(&self, url: &str, dest: &Path) -> FetchResult<()> {
        let http_err = |e: reqwest::Error| FetchError::Http {
            url:     url.to_string(),
            message: e.to_string(),
        };

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()
            .map_err(http_err)?;

        tracing::info!("Downloading '{}'", url);
        let response = client.get(url).send().map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url:    url.to_string(),
                status: status.as_u16(),
            });
        }

        let progress = self.progress_bar(response.content_length());
        let partial  = partial_path(dest);
        let io_err   = |path: &Path| {
            let path = path.to_path_buf();
            move |source: io::Error| FetchError::Io { path, source }
        };

        let file       = File::create(&partial).map_err(io_err(&partial))?;
        let mut writer = BufWriter::new(file);
        io::copy(&mut progress.wrap_read(response), &mut writer).map_err(io_err(&partial))?;
        writer.flush().map_err(io_err(&partial))?;
        drop(writer);

        fs::rename(&partial, dest).map_err(io_err(dest))?;
        progress.finish_and_clear();

        tracing::info!("Saved archive to '{}'", dest.display());
        Ok(())
    }

    fn progress_bar(&self, total: Option<u64>) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        match total {
            Some(len) => {
                let bar = ProgressBar::new(len);
                if let Ok(style) = ProgressStyle::with_template(
                    "{spinner} [{elapsed_precise}] [{bar:40}] {bytes}/{total_bytes} ({eta})",
                ) {
                    bar.set_style(style.progress_chars("=> "));
                }
                bar
            }
            None => ProgressBar::new_spinner(),
        }
    }
}

impl Default for HttpArchiveFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveFetcher for HttpArchiveFetcher {
    fn ensure_dataset(&self, url: &str, directory: &Path, check_file: &str) -> Result<()> {
        Ok(self.fetch(url, directory, check_file)?)
    }
}

/// Last path segment of the URL, ignoring any query or fragment.
pub fn archive_file_name(url: &str) -> FetchResult<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() && path.contains('/') => {
            Ok(name.to_string())
        }
        _ => Err(FetchError::InvalidUrl { url: url.to_string() }),
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}
