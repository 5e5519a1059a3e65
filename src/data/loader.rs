// ============================================================
// Layer 4 — Split Loader
// ============================================================
// Reads one split (train or test) of the extracted corpus.
//
// On-disk layout:
//   <directory>/aclImdb/
//     train/
//       pos/  0_9.txt  1_7.txt ...
//       neg/  0_3.txt  1_1.txt ...
//     test/
//       pos/ ...
//       neg/ ...
//
// For every sentiment (in the order given), every `*.txt` file
// directly inside the sentiment directory becomes one Review:
//   text      = first line of the file, terminator stripped
//   sentiment = the sentiment directory name
//
// The matching follows shell-glob `*.txt`: no recursion, and
// names starting with '.' are skipped. A sentiment directory
// that does not exist contributes nothing.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::domain::review::{Review, Sentiment};
use crate::domain::traits::ReviewSource;

/// File extension matched inside each sentiment directory
const REVIEW_EXTENSION: &str = "txt";

/// How files inside one sentiment directory are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileOrder {
    /// Byte-wise by file name; identical on every platform
    #[default]
    Sorted,
    /// Whatever `read_dir` yields
    Filesystem,
}

/// Loads every review of one split directory.
/// Implements the ReviewSource trait from Layer 3.
pub struct SplitLoader {
    /// e.g. data/aclImdb/train
    split_dir:  PathBuf,
    sentiments: Vec<Sentiment>,
    order:      FileOrder,
}

impl SplitLoader {
    pub fn new(split_dir: impl Into<PathBuf>, sentiments: Vec<Sentiment>) -> Self {
        Self {
            split_dir: split_dir.into(),
            sentiments,
            order: FileOrder::default(),
        }
    }

    pub fn with_order(mut self, order: FileOrder) -> Self {
        self.order = order;
        self
    }

    /// Reviews of a single sentiment directory.
    fn load_sentiment(&self, sentiment: &str) -> Result<Vec<Review>> {
        let dir   = self.split_dir.join(sentiment);
        let files = list_review_files(&dir, self.order)?;

        let mut reviews = Vec::with_capacity(files.len());
        for path in files {
            let text = read_first_line(&path)?;
            tracing::debug!("Read {} ({} chars)", path.display(), text.len());
            reviews.push(Review::new(text, sentiment));
        }

        tracing::info!(
            "{}: {} '{}' reviews",
            self.split_dir.display(),
            reviews.len(),
            sentiment
        );
        Ok(reviews)
    }
}

impl ReviewSource for SplitLoader {
    fn load_all(&self) -> Result<Vec<Review>> {
        let mut all = Vec::new();
        for sentiment in &self.sentiments {
            all.extend(self.load_sentiment(sentiment)?);
        }
        Ok(all)
    }
}

/// List the `*.txt` files directly inside `dir`.
///
/// A missing directory (or a path that is not a directory) yields
/// an empty list, matching glob semantics. Any other error while
/// inspecting or listing `dir` is returned.
pub fn list_review_files(dir: &Path, order: FileOrder) -> Result<Vec<PathBuf>> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            tracing::warn!(
                "'{}' is not a directory — contributing no reviews",
                dir.display()
            );
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                "Directory '{}' does not exist — contributing no reviews",
                dir.display()
            );
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Cannot access directory '{}'", dir.display()));
        }
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
    {
        let entry = entry
            .with_context(|| format!("Cannot list entry in '{}'", dir.display()))?;
        let path  = entry.path();

        if is_review_file(&path) {
            files.push(path);
        }
    }

    if order == FileOrder::Sorted {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(files)
}

fn is_review_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .map_or(true, |n| n.starts_with('.'));

    !hidden
        && path.is_file()
        && path.extension().and_then(|e| e.to_str()) == Some(REVIEW_EXTENSION)
}

/// Read the first line of a UTF-8 text file.
///
/// The whole file must be valid UTF-8, not just its first line.
/// A line ends at "\n", "\r\n" or a lone "\r"; the terminator is
/// removed. An empty file gives an empty string.
pub fn read_first_line(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;
    let text = String::from_utf8(bytes)
        .with_context(|| format!("Cannot decode '{}' as UTF-8 text", path.display()))?;

    Ok(first_line(&text).to_string())
}

/// Everything before the first line terminator.
fn first_line(text: &str) -> &str {
    match text.find(['\n', '\r']) {
        Some(end) => &text[..end],
        None      => text,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &[u8]) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_first_line_only() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "r.txt", b"line one\nline two\n");
        assert_eq!(read_first_line(&tmp.path().join("r.txt")).unwrap(), "line one");
    }

    #[test]
    fn test_crlf_and_missing_newline() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "crlf.txt", b"windows\r\nnext");
        write(tmp.path(), "bare.txt", b"no newline");
        write(tmp.path(), "empty.txt", b"");
        assert_eq!(read_first_line(&tmp.path().join("crlf.txt")).unwrap(), "windows");
        assert_eq!(read_first_line(&tmp.path().join("bare.txt")).unwrap(), "no newline");
        assert_eq!(read_first_line(&tmp.path().join("empty.txt")).unwrap(), "");
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "cr.txt", b"first\rsecond");
        assert_eq!(read_first_line(&tmp.path().join("cr.txt")).unwrap(), "first");
    }

    #[test]
    fn test_invalid_utf8_after_first_line_is_an_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "tail.txt", b"ok\n\xff\xfe\n");
        let err = read_first_line(&tmp.path().join("tail.txt")).unwrap_err();
        assert!(err.to_string().contains("tail.txt"));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "bad.txt", &[0xff, 0xfe, b'\n']);
        let err = read_first_line(&tmp.path().join("bad.txt")).unwrap_err();
        assert!(err.to_string().contains("bad.txt"));
    }

    #[test]
    fn test_lists_only_visible_txt_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "b.txt", b"b");
        write(tmp.path(), "a.txt", b"a");
        write(tmp.path(), "notes.md", b"x");
        write(tmp.path(), ".hidden.txt", b"x");
        write(&tmp.path().join("nested"), "deep.txt", b"x");

        let files = list_review_files(tmp.path(), FileOrder::Sorted).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_filesystem_order_has_same_members() {
        let tmp = TempDir::new().unwrap();
        for i in 0..5 {
            write(tmp.path(), &format!("{i}.txt"), b"x");
        }
        let mut files = list_review_files(tmp.path(), FileOrder::Filesystem).unwrap();
        files.sort();
        assert_eq!(files, list_review_files(tmp.path(), FileOrder::Sorted).unwrap());
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let files = list_review_files(&tmp.path().join("nope"), FileOrder::Sorted).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_file_in_place_of_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "pos", b"not a directory");
        let files = list_review_files(&tmp.path().join("pos"), FileOrder::Sorted).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_inaccessible_directory_is_an_error() {
        // NUL is rejected by the OS with InvalidInput, not NotFound
        let err = list_review_files(Path::new("data/bad\0dir/pos"), FileOrder::Sorted).unwrap_err();
        assert!(err.to_string().contains("Cannot access directory"));
    }

    #[test]
    fn test_split_loader_tags_by_directory() {
        let tmp = TempDir::new().unwrap();
        write(&tmp.path().join("pos"), "0.txt", b"a\n");
        write(&tmp.path().join("pos"), "1.txt", b"b\n");
        write(&tmp.path().join("neg"), "0.txt", b"c\n");

        let loader  = SplitLoader::new(tmp.path(), vec!["neg".into(), "pos".into()]);
        let reviews = loader.load_all().unwrap();
        assert_eq!(
            reviews,
            vec![
                Review::new("c", "neg"),
                Review::new("a", "pos"),
                Review::new("b", "pos"),
            ]
        );
    }
}
