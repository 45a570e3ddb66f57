// Reporting problems found while expanding a template

mod format;

// Re-export all public symbols
pub use format::*;
