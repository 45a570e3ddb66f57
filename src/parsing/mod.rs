//! scanner and directive parser for format templates

mod parser;
mod scanner;

pub use parser::*;
pub use scanner::*;
