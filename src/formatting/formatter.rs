//! Expanding a template against its arguments

use std::borrow::Cow;
use std::ops::Range;

use tracing::debug;

use crate::error::{Annotation, Message};
use crate::formatting::{audit, dispatch, pad};
use crate::language::{Arguments, Options, Value, Verb};
use crate::parsing::{has_index, parse_directive, Cursor, Scanner, Span, Token};

/// A directive (or the audit) that could not be rendered normally.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Byte offset into the template; the template length for the audit.
    pub offset: usize,
    /// Where the annotation landed in the output text.
    pub range: Range<usize>,
    pub annotation: Annotation,
}

/// The result of expanding a template. `text` carries every annotation in
/// place; `problems` lists them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    pub text: String,
    pub problems: Vec<Problem>,
}

impl Expansion {
    fn append(&mut self, text: &str) {
        self.text
            .push_str(text);
    }

    fn record(&mut self, offset: usize, annotation: Annotation) {
        let start = self
            .text
            .len();
        self.append(&annotation.to_string());
        let end = self
            .text
            .len();

        self.problems
            .push(Problem {
                offset,
                range: start..end,
                annotation,
            });
    }

    pub fn is_clean(&self) -> bool {
        self.problems
            .is_empty()
    }
}

/// Format `values` into `template` with default options.
pub fn sprintf(template: &str, values: &[Value]) -> String {
    sprintf_with(&Options::default(), template, values)
}

pub fn sprintf_with(options: &Options, template: &str, values: &[Value]) -> String {
    expand(options, template, values).text
}

/// Scan the template once, replacing each directive with its rendering or
/// with an annotation describing why it could not be rendered, then audit
/// for arguments left over.
pub fn expand(options: &Options, template: &str, values: &[Value]) -> Expansion {
    let arguments = Arguments::new(values);
    let mut expansion = Expansion::default();

    let cursor = Scanner::new(template).fold(Cursor::default(), |cursor, (offset, span)| {
        let (result, cursor) = expand_span(options, &arguments, span, cursor);
        match result {
            Ok(text) => expansion.append(&text),
            Err(annotation) => {
                debug!(offset, %annotation, "Directive not rendered");
                expansion.record(offset, annotation);
            }
        }
        cursor
    });

    if options.audit {
        if let Some(annotation) = audit(&arguments, &cursor) {
            expansion.append(" ");
            expansion.record(template.len(), annotation);
        }
    }

    expansion
}

fn expand_span<'i>(
    options: &Options,
    arguments: &Arguments,
    span: Span<'i>,
    cursor: Cursor,
) -> (Result<Cow<'i, str>, Annotation>, Cursor) {
    match span {
        Span::Literal(text) => (Ok(Cow::Borrowed(text)), cursor),
        Span::Problem { region, annotation } => {
            let mut cursor = cursor;
            cursor.explicit |= has_index(region);
            (Err(annotation), cursor)
        }
        Span::Directive(token) => {
            let mut cursor = cursor;
            cursor.explicit |= has_index(token.region);
            let result = expand_directive(options, arguments, &token, &mut cursor);
            (result.map(Cow::Owned), cursor)
        }
    }
}

fn expand_directive(
    options: &Options,
    arguments: &Arguments,
    token: &Token,
    cursor: &mut Cursor,
) -> Result<String, Annotation> {
    if token.verb == Verb::Percent {
        return Ok("%".to_string());
    }

    let directive = parse_directive(token, arguments, cursor, options)?;
    let value = resolve(arguments, directive.position)?;
    let text = dispatch(&directive, value, options)?;

    Ok(pad(&text, directive.width, directive.flags))
}

/// Fetch the argument at a position. Absent values never reach a verb.
fn resolve<'a>(arguments: &Arguments<'a>, position: usize) -> Result<&'a Value, Annotation> {
    match arguments.get(position) {
        None => Err(Annotation::new(Message::BadIndex)),
        Some(Value::Undefined) => Err(Annotation::new(Message::Undefined)),
        Some(Value::Null) => Err(Annotation::new(Message::Null)),
        Some(value) => Ok(value),
    }
}
