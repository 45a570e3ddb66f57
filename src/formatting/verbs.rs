//! Converting a resolved value to text according to the directive's verb

use crate::error::{Annotation, Message};
use crate::formatting::numbers;
use crate::language::{Directive, Flags, Options, Value, Verb};

/// Values at or above this are rendered by `%g` in scientific notation.
const GENERAL_THRESHOLD: f64 = 1_000_000.0;

pub fn dispatch(directive: &Directive, value: &Value, options: &Options) -> Result<String, Annotation> {
    let verb = directive.verb;
    let flags = directive.flags;
    let precision = directive.precision;

    let text = match verb {
        Verb::Binary => {
            let n = numeric(verb, value)?;
            signed(flags, n, numbers::radix(n, 2))
        }
        Verb::Octal => {
            let n = numeric(verb, value)?;
            signed(flags, n, numbers::radix(n, 8))
        }
        Verb::Decimal => {
            let n = numeric(verb, value)?;
            signed(flags, n, numbers::shortest(n.trunc()))
        }
        Verb::Hex | Verb::UpperHex => {
            let n = numeric(verb, value)?;
            let text = signed(flags, n, numbers::radix(n, 16));
            if verb == Verb::UpperHex {
                text.to_uppercase()
            } else {
                text
            }
        }
        Verb::Unicode => {
            let n = numeric(verb, value)?;
            signed(flags, n, numbers::unicode(n))
        }
        Verb::Scientific | Verb::UpperScientific => {
            let n = numeric(verb, value)?;
            let text = numbers::exponential(n, precision).ok_or_else(|| bad_precision(verb, precision))?;
            marker(verb == Verb::UpperScientific, signed(flags, n, text))
        }
        Verb::Fixed | Verb::UpperFixed => {
            let n = numeric(verb, value)?;
            signed(flags, n, fixed(verb, n, precision, options)?)
        }
        Verb::General | Verb::UpperGeneral => {
            let n = numeric(verb, value)?;
            let text = if n >= GENERAL_THRESHOLD {
                numbers::exponential(n, precision).ok_or_else(|| bad_precision(verb, precision))?
            } else if n.fract() == 0.0 {
                numbers::shortest(n)
            } else {
                numbers::precision(n, precision).ok_or_else(|| bad_precision(verb, precision))?
            };
            marker(verb == Verb::UpperGeneral, signed(flags, n, text))
        }
        Verb::Type => match value.class_name() {
            Some(class) => format!("class {}", class),
            None => value
                .kind()
                .to_string(),
        },
        Verb::Character => character(verb, value)?,
        Verb::Quoted => quoted(verb, value)?,
        Verb::Text => value.to_string(),
        Verb::Truth => value
            .is_truthy()
            .to_string(),
        Verb::Value => default_form(directive, value, options)?,
        Verb::Pointer => String::new(),
        Verb::Percent => "%".to_string(),
    };

    if flags.space {
        Ok(format!(" {}", text))
    } else {
        Ok(text)
    }
}

fn numeric(verb: Verb, value: &Value) -> Result<f64, Annotation> {
    value
        .to_number()
        .ok_or_else(|| {
            Annotation::new(Message::WrongType)
                .verb(verb)
                .extra(value.clone())
        })
}

fn bad_precision(verb: Verb, precision: usize) -> Annotation {
    Annotation::new(Message::BadPrecision)
        .verb(verb)
        .extra(precision)
}

fn signed(flags: Flags, n: f64, text: String) -> String {
    if flags.plus && n >= 0.0 {
        format!("+{}", text)
    } else {
        text
    }
}

fn marker(upper: bool, text: String) -> String {
    if upper {
        text.to_uppercase()
    } else {
        text
    }
}

fn fixed(verb: Verb, n: f64, precision: usize, options: &Options) -> Result<String, Annotation> {
    precision
        .checked_add(options.precision_bias)
        .and_then(|significant| numbers::precision(n, significant))
        .ok_or_else(|| bad_precision(verb, precision))
}

fn code_point(n: f64) -> Option<char> {
    if n.is_finite() && n >= 0.0 && n <= u32::MAX as f64 {
        char::from_u32(n.trunc() as u32)
    } else {
        None
    }
}

fn wrong_type(verb: Verb, value: &Value) -> Annotation {
    Annotation::new(Message::WrongType)
        .verb(verb)
        .extra(value.clone())
}

fn character(verb: Verb, value: &Value) -> Result<String, Annotation> {
    match value {
        Value::Number(n) => code_point(*n)
            .map(String::from)
            .ok_or_else(|| wrong_type(verb, value)),
        Value::Text(text) => text
            .chars()
            .next()
            .map(String::from)
            .ok_or_else(|| {
                Annotation::new(Message::EmptyCharacter)
                    .verb(verb)
                    .extra(value.clone())
            }),
        _ => Err(wrong_type(verb, value)),
    }
}

fn quoted(verb: Verb, value: &Value) -> Result<String, Annotation> {
    match value {
        Value::Number(n) => code_point(
            n.abs()
                .floor(),
        )
        .map(|c| format!("'{}'", c))
        .ok_or_else(|| wrong_type(verb, value)),
        Value::Text(text) => Ok(format!("\"{}\"", text)),
        _ => Err(wrong_type(verb, value)),
    }
}

/// `%v`: JSON for composites under `#`, integers as integers, other numbers
/// in fixed notation, everything else as canonical text.
fn default_form(directive: &Directive, value: &Value, options: &Options) -> Result<String, Annotation> {
    let verb = directive.verb;

    if directive
        .flags
        .sharp
        && value.is_composite()
    {
        return value
            .to_json()
            .map_err(|_| Annotation::new(Message::Unserializable).verb(verb));
    }

    let number = value
        .to_number()
        .filter(|_| value.is_numeric());

    match number {
        Some(n) if n.fract() == 0.0 => Ok(signed(directive.flags, n, numbers::shortest(n))),
        Some(n) => Ok(signed(
            directive.flags,
            n,
            fixed(verb, n, directive.precision, options)?,
        )),
        None => Ok(value.to_string()),
    }
}
