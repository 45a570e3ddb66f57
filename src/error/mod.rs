// In-band error annotations

mod annotation;

// Re-export all public symbols
pub use annotation::*;
