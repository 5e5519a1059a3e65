// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The loader only talks to the outside world through these
// two traits:
//   - ArchiveFetcher → makes sure the corpus exists on disk
//   - ReviewSource   → turns one split directory into reviews
//
// The application layer depends on the traits, never on the
// HTTP client or the directory walker directly. That is what
// lets the tests swap in a counting fetcher and run offline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use anyhow::Result;
use crate::domain::review::Review;

// ─── ArchiveFetcher ───────────────────────────────────────────────────────────
/// Guarantees that `directory` holds the extracted corpus.
///
/// Implementations:
///   - HttpArchiveFetcher → downloads and unpacks a .tar.gz
///   - test fakes         → count calls, never touch the network
pub trait ArchiveFetcher {
    /// Download and extract `url` into `directory` unless
    /// `directory/check_file` already exists.
    ///
    /// Must fail if `check_file` is still missing afterwards.
    fn ensure_dataset(&self, url: &str, directory: &Path, check_file: &str) -> Result<()>;
}

// ─── ReviewSource ─────────────────────────────────────────────────────────────
/// Any component that can produce the reviews of one split.
pub trait ReviewSource {
    /// Load every review of this source, in a deterministic
    /// label-major order.
    fn load_all(&self) -> Result<Vec<Review>>;
}
