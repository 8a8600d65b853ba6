//! Error types.
//!
//! Errors are split by how far they reach:
//! - **Branch errors** (`LookupError`, `SpfError`, `FileReadError`): logged by
//!   the pipeline, only the affected target, include, or source is skipped
//! - **Run errors** (`RunError`): the run cannot produce any output
//! - **Initialization errors** (`InitializationError`): setup failed before the run

mod types;

// Re-export public API
pub use types::{FileReadError, InitializationError, LookupError, RunError, SpfError};
