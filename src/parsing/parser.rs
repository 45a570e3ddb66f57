//! Decomposing a directive token into flags, width, precision, and the
//! argument it formats

use crate::error::{Annotation, Message};
use crate::language::{Arguments, Directive, Flags, Options, Verb};
use crate::parsing::{has_index, Token};

/// Widths beyond this are rejected rather than allocated.
pub const MAXIMUM_WIDTH: usize = 1 << 16;

/// Progress through the argument list over one formatting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// One-based position of the argument most recently selected; 0 before
    /// any have been.
    pub position: usize,
    /// Whether any directive so far used a bracketed index.
    pub explicit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Width,
    Precision,
}

impl Field {
    fn problem(self, verb: Verb) -> Annotation {
        let message = match self {
            Field::Width => Message::BadWidth,
            Field::Precision => Message::BadPrecision,
        };
        Annotation::new(message).verb(verb)
    }
}

/// Work out what a directive asks for, moving the cursor to the argument it
/// will format. `%%` never reaches here since it consumes nothing.
pub fn parse_directive(
    token: &Token,
    arguments: &Arguments,
    cursor: &mut Cursor,
    options: &Options,
) -> Result<Directive, Annotation> {
    let verb = token.verb;
    let region = token.region;

    // leading '0's are the zero flag, so only 1-9 begin a width
    let split = region
        .find(|c: char| matches!(c, '1'..='9' | '.' | '[' | ']' | '*'))
        .unwrap_or(region.len());

    let mut flags = Flags::default();
    for c in region[..split].chars() {
        flags.set(c);
    }

    let mut spec = region[split..].to_string();
    if has_index(&spec) {
        cursor.explicit = true;
    }

    resolve_indirect(&mut spec, verb, arguments, cursor)?;
    select_argument(&mut spec, verb, arguments, cursor)?;

    if !spec
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.')
        || spec
            .matches('.')
            .count()
            > 1
    {
        return Err(Field::Width
            .problem(verb)
            .extra(spec));
    }

    let (width, precision) = match spec.split_once('.') {
        Some((width, precision)) => (width, Some(precision)),
        None => (spec.as_str(), None),
    };

    let width = if width.is_empty() {
        1
    } else {
        width
            .parse::<usize>()
            .ok()
            .filter(|&width| width <= MAXIMUM_WIDTH)
            .ok_or_else(|| {
                Field::Width
                    .problem(verb)
                    .extra(width)
            })?
    };

    let precision = match precision {
        None => options.default_precision,
        Some("") => 0,
        Some(precision) => precision
            .parse::<usize>()
            .map_err(|_| {
                Field::Precision
                    .problem(verb)
                    .extra(precision)
            })?,
    };

    Ok(Directive {
        verb,
        flags,
        width,
        precision,
        position: cursor.position,
    })
}

/// Replace each `[n]*` with the integer held by argument `n`, moving the
/// cursor to `n` so an implicit value is the argument after it. An index
/// that is not a positive integer is a `Bad Width`; one past the end, or an
/// argument that is not a positive integer, is a `Bad Precision`.
fn resolve_indirect(
    spec: &mut String,
    verb: Verb,
    arguments: &Arguments,
    cursor: &mut Cursor,
) -> Result<(), Annotation> {
    while let Some(star) = spec.find('*') {
        let close = star
            .checked_sub(1)
            .filter(|&i| spec.as_bytes()[i] == b']');
        let open = close.and_then(|close| spec[..close].rfind('['));

        let (open, close) = match (open, close) {
            (Some(open), Some(close)) => (open, close),
            _ => return Err(Annotation::new(Message::MissingIndex).verb(verb)),
        };

        let position = parse_position(&spec[open + 1..close])
            .ok_or_else(|| Field::Width.problem(verb))?;
        let value = arguments
            .get(position)
            .ok_or_else(|| Field::Precision.problem(verb))?;

        cursor.position = position;

        let amount = value
            .to_number()
            .filter(|n| *n >= 1.0 && n.fract() == 0.0)
            .ok_or_else(|| {
                Field::Precision
                    .problem(verb)
                    .extra(value.clone())
            })?;

        spec.replace_range(open..=star, &format!("{}", amount));
    }
    Ok(())
}

/// Take the bracketed index naming the value to format, or advance to the
/// next argument when there is none.
fn select_argument(
    spec: &mut String,
    verb: Verb,
    arguments: &Arguments,
    cursor: &mut Cursor,
) -> Result<(), Annotation> {
    let brackets = spec
        .matches(|c: char| c == '[' || c == ']')
        .count();

    if brackets == 2 {
        let (open, close) = match (spec.find('['), spec.find(']')) {
            (Some(open), Some(close)) if open < close => (open, close),
            _ => return Err(Annotation::new(Message::MissingIndex).verb(verb)),
        };

        let index = &spec[open + 1..close];
        let position = parse_position(index)
            .filter(|&position| arguments.contains(position))
            .ok_or_else(|| {
                Annotation::new(Message::BadIndex)
                    .verb(verb)
                    .extra(index)
            })?;

        cursor.position = position;
        spec.replace_range(open..=close, "");
    } else {
        cursor.position += 1;
        if !arguments.contains(cursor.position) {
            return Err(Annotation::new(Message::BadIndex).verb(verb));
        }
    }
    Ok(())
}

fn parse_position(text: &str) -> Option<usize> {
    if text.is_empty()
        || !text
            .chars()
            .all(|c| c.is_ascii_digit())
    {
        return None;
    }
    text.parse::<usize>()
        .ok()
        .filter(|&position| position >= 1)
}
