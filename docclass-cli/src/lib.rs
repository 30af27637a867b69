// All core functionality is in docclass-core
// This CLI acts as a thin wrapper around the core library

// CLI-specific modules
pub mod output;
pub mod upload;

// Re-export core types for convenience
pub use docclass_core::*;

// Re-export CLI utilities
pub use output::{FileReport, OutputFormat};
pub use upload::open_upload;
