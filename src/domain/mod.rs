// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing the corpus:
// what a review IS, and what the loader needs from the
// outside world (an archive fetcher) to do its job.
//
// Rules for this layer:
//   - NO network or archive code here
//   - NO burn types here
//   - Only plain structs, aliases and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One labelled movie review
pub mod review;

// Abstractions the data and infra layers implement
pub mod traits;
