// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits that define what the system
// works with: one row of performance metrics, and the two
// seams (where samples come from, who turns metrics into a
// suggestion).
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One row of PerformanceData.csv
pub mod sample;

// Core abstractions (traits) that other layers implement
pub mod traits;
