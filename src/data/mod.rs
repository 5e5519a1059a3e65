// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between "the corpus is extracted on disk" and
// "the caller holds an in-memory split":
//
//   aclImdb/<split>/<sentiment>/*.txt
//       │
//       ▼
//   SplitLoader      → lists files, reads the first line of each
//       │
//       ▼
//   ReviewDataset    → ordered container, implements Burn's Dataset
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Walks one split directory and reads reviews
pub mod loader;

/// The per-split record container
pub mod dataset;
