//! Splitting a template into literal text and directive tokens

use tracing::trace;

use crate::error::{Annotation, Message};
use crate::language::Verb;

/// A directive as it appears in the template: `%`, then the region holding
/// flags, width, precision, and indices, then the verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'i> {
    pub raw: &'i str,
    pub region: &'i str,
    pub verb: Verb,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Span<'i> {
    Literal(&'i str),
    Directive(Token<'i>),
    /// A directive that could not be recognized, with the region it had.
    Problem {
        region: &'i str,
        annotation: Annotation,
    },
}

/// Whether a directive region carries a bracketed index.
pub fn has_index(region: &str) -> bool {
    region.contains(|c: char| c == '[' || c == ']')
}

/// Characters allowed between the `%` and the verb.
pub fn is_region(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '*' | '[' | ']' | '+' | '-' | '#' | ' ')
}

/// Iterates over the spans of a template, each paired with its byte offset.
#[derive(Debug)]
pub struct Scanner<'i> {
    source: &'i str,
    offset: usize,
}

impl<'i> Scanner<'i> {
    pub fn new(template: &'i str) -> Scanner<'i> {
        Scanner {
            source: template,
            offset: 0,
        }
    }

    fn advance(&mut self, width: usize) {
        // advance the scanner position
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn take_literal(&mut self) -> Span<'i> {
        let i = self
            .source
            .find('%')
            .unwrap_or(self.source.len());

        let text = &self.source[..i];
        self.advance(i);
        Span::Literal(text)
    }

    /// Width of an annotation left in the text by an earlier expansion. It
    /// runs from the `%!` through an optional verb character to the balanced
    /// closing parenthesis. `None` if there is no such parenthesis.
    fn annotation_width(&self) -> Option<usize> {
        let rest = &self.source[2..];

        let mut chars = rest.chars();
        let open = match (chars.next(), chars.next()) {
            (Some(c), Some('(')) => c.len_utf8(),
            (Some('('), _) => 0,
            _ => return None,
        };

        let mut depth = 0usize;
        for (i, c) in rest[open..].char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(2 + open + i + 1);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// Copied through untouched.
    fn take_annotation(&mut self, width: usize) -> Span<'i> {
        let text = &self.source[..width];
        self.advance(width);
        Span::Literal(text)
    }

    /// A `%` with no verb. Only the `%` is consumed; whatever followed it is
    /// literal.
    fn take_unterminated(&mut self) -> Span<'i> {
        self.advance(1);
        Span::Problem {
            region: "",
            annotation: Annotation::new(Message::NoVariable),
        }
    }

    fn take_directive(&mut self) -> Span<'i> {
        let body = &self.source[1..];
        let length = body
            .find(|c: char| !is_region(c))
            .unwrap_or(body.len());

        match body[length..]
            .chars()
            .next()
        {
            None => self.take_unterminated(),
            Some(c) => {
                let width = 1 + length + c.len_utf8();
                let raw = &self.source[..width];
                let region = &body[..length];
                self.advance(width);

                match Verb::from_char(c) {
                    Some(verb) => Span::Directive(Token { raw, region, verb }),
                    None => Span::Problem {
                        region,
                        annotation: Annotation::new(Message::WrongFormat).verb(c),
                    },
                }
            }
        }
    }
}

impl<'i> Iterator for Scanner<'i> {
    type Item = (usize, Span<'i>);

    fn next(&mut self) -> Option<Self::Item> {
        if self
            .source
            .is_empty()
        {
            return None;
        }

        let offset = self.offset;
        let span = if self
            .source
            .starts_with("%!")
        {
            match self.annotation_width() {
                Some(width) => self.take_annotation(width),
                None => self.take_unterminated(),
            }
        } else if self
            .source
            .starts_with('%')
        {
            self.take_directive()
        } else {
            self.take_literal()
        };

        trace!(offset, ?span);
        Some((offset, span))
    }
}
