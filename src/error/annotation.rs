use std::fmt;

use crate::language::Value;

/// What went wrong with a directive.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    NoVariable,
    WrongFormat,
    MissingIndex,
    BadIndex,
    BadWidth,
    BadPrecision,
    Undefined,
    Null,
    WrongType,
    EmptyCharacter,
    Unserializable,
    /// Listing of arguments left over after expansion, already rendered.
    Unformated(String),
}

impl Message {
    pub fn text(&self) -> String {
        match self {
            Message::NoVariable => "No Variable".to_string(),
            Message::WrongFormat => "Wrong Format".to_string(),
            Message::MissingIndex => "Missing Index".to_string(),
            Message::BadIndex => "Bad Index".to_string(),
            Message::BadWidth => "Bad Width".to_string(),
            Message::BadPrecision => "Bad Precision".to_string(),
            Message::Undefined => "undefined".to_string(),
            Message::Null => "null".to_string(),
            Message::WrongType => "Wrong Type".to_string(),
            Message::EmptyCharacter => "Empty Character".to_string(),
            Message::Unserializable => "Unserializable".to_string(),
            Message::Unformated(listing) => format!("Unformated Arguments: {}", listing),
        }
    }
}

/// A failure rendered in place of the directive that caused it, in the form
/// `%!verb(message: extra)`. Both the verb and the extra are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub message: Message,
    pub verb: Option<char>,
    pub extra: Option<Value>,
}

impl Annotation {
    pub fn new(message: Message) -> Annotation {
        Annotation {
            message,
            verb: None,
            extra: None,
        }
    }

    pub fn verb(mut self, verb: impl Into<char>) -> Annotation {
        self.verb = Some(verb.into());
        self
    }

    pub fn extra(mut self, extra: impl Into<Value>) -> Annotation {
        self.extra = Some(extra.into());
        self
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%!")?;
        if let Some(verb) = self.verb {
            write!(f, "{}", verb)?;
        }
        write!(f, "({}", self.message.text())?;

        // falsy extras (empty text, zero, false) are left off
        if let Some(extra) = self
            .extra
            .as_ref()
            .filter(|extra| extra.is_truthy())
        {
            match extra.class_name() {
                Some(class) => write!(f, ": {}", class)?,
                None => write!(f, ": {}", extra)?,
            }
        }

        write!(f, ")")
    }
}

impl std::error::Error for Annotation {}
