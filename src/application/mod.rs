// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers to load the corpus:
// validate the request, have infra make the data available,
// have the data layer read each split.
//
// Rules for this layer:
//   - No HTTP or archive code here (that's Layer 6)
//   - No directory walking here (that's Layer 4)
//   - No printing here (that's Layer 1)
//
// Reference: Clean Architecture pattern

// The load workflow and its configuration
pub mod load_use_case;

// The typed result of a load
pub mod splits;
