// Types representing templates, directives, and the values formatted by them

mod arguments;
mod directive;
mod options;
mod value;

// Re-export all public symbols
pub use arguments::*;
pub use directive::*;
pub use options::*;
pub use value::*;
