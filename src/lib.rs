//! Runtime printf-style string interpolation.
//!
//! A template such as `"%-8s %5.2f"` is expanded against a list of values.
//! Directives that cannot be rendered are replaced in the output by an
//! annotation of the form `%!verb(message: extra)` and expansion carries on;
//! [`sprintf()`] always returns a string.
//!
//! ```
//! use sprintf::sprintf;
//!
//! assert_eq!(sprintf!("%05d|%-4s|%x", 42, "ab", 255), "00042|ab  |ff");
//! assert_eq!(sprintf!("%d", "abc"), "%!d(Wrong Type: abc)");
//! ```

pub mod error;
pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;

pub use formatting::{expand, sprintf, sprintf_with, Expansion, Problem};
pub use language::{Options, Value};

/// Expand a template against any values convertible with `Value::from`.
#[macro_export]
macro_rules! sprintf {
    ($template:expr) => {
        $crate::sprintf($template, &[])
    };
    ($template:expr, $($value:expr),+ $(,)?) => {
        $crate::sprintf($template, &[$($crate::Value::from($value)),+])
    };
}
