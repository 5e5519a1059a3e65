// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// The outside-world concerns the loader delegates to:
//
//   fetcher.rs — HttpArchiveFetcher
//                Downloads the corpus archive with reqwest
//                (with an indicatif progress bar) unless the
//                presence-check file already exists.
//
//   archive.rs — Archive extraction
//                Unpacks .tar.gz / .tar with flate2 + tar.
//
//   error.rs   — FetchError
//                Typed acquisition failures (thiserror).
//
// Reference: Rust Book §9 (Error Handling)

/// Download-and-extract implementation of ArchiveFetcher
pub mod fetcher;

/// tar / tar.gz extraction
pub mod archive;

/// Acquisition error types
pub mod error;
