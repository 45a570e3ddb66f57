//! Resolving directives against arguments and rendering them as text

mod audit;
mod formatter;
pub mod numbers;
mod padding;
mod verbs;

pub use audit::audit;
pub use formatter::*;
pub use padding::pad;
pub use verbs::dispatch;
