//! Reporting arguments supplied but never consumed

use tracing::debug;

use crate::error::{Annotation, Message};
use crate::language::{Arguments, Value};
use crate::parsing::Cursor;

/// Annotation listing every argument after the cursor, if there are any.
/// Templates using explicit indices routinely skip arguments, so they are
/// not audited.
pub fn audit(arguments: &Arguments, cursor: &Cursor) -> Option<Annotation> {
    if cursor.explicit {
        debug!("Explicit indices used; skipping audit");
        return None;
    }

    let unused = arguments.after(cursor.position);
    if unused.is_empty() {
        return None;
    }

    debug!("{} unused argument{}", unused.len(), if unused.len() == 1 { "" } else { "s" });

    let listing: Vec<String> = unused
        .iter()
        .map(|value| format!("{}={}", value.kind(), describe(value)))
        .collect();

    Some(Annotation::new(Message::Unformated(listing.join(", "))))
}

fn describe(value: &Value) -> String {
    if value.is_composite() {
        match value.to_json() {
            Ok(json) => json,
            Err(_) => Annotation::new(Message::Unserializable).to_string(),
        }
    } else {
        value.to_string()
    }
}
