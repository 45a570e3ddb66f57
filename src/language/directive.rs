//! Verbs, flags, and the parsed form of a `%` directive

/// Flag characters recognized at the start of a directive.
pub const FLAGS: [char; 5] = ['+', '-', '#', ' ', '0'];

/// Every verb character, paired with its meaning.
pub const VERBS: [(char, Verb); 20] = [
    ('v', Verb::Value),
    ('T', Verb::Type),
    ('%', Verb::Percent),
    ('t', Verb::Truth),
    ('b', Verb::Binary),
    ('c', Verb::Character),
    ('d', Verb::Decimal),
    ('o', Verb::Octal),
    ('q', Verb::Quoted),
    ('x', Verb::Hex),
    ('X', Verb::UpperHex),
    ('U', Verb::Unicode),
    ('e', Verb::Scientific),
    ('E', Verb::UpperScientific),
    ('f', Verb::Fixed),
    ('F', Verb::UpperFixed),
    ('g', Verb::General),
    ('G', Verb::UpperGeneral),
    ('s', Verb::Text),
    ('p', Verb::Pointer),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Value,
    Type,
    Percent,
    Truth,
    Binary,
    Character,
    Decimal,
    Octal,
    Quoted,
    Hex,
    UpperHex,
    Unicode,
    Scientific,
    UpperScientific,
    Fixed,
    UpperFixed,
    General,
    UpperGeneral,
    Text,
    Pointer,
}

impl Verb {
    pub fn from_char(c: char) -> Option<Verb> {
        VERBS
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|(_, verb)| *verb)
    }

    pub fn as_char(self) -> char {
        VERBS
            .iter()
            .find(|(_, verb)| *verb == self)
            .map(|(symbol, _)| *symbol)
            .unwrap_or('?')
    }
}

impl From<Verb> for char {
    fn from(verb: Verb) -> char {
        verb.as_char()
    }
}

/// Modifiers altering sign, justification, fill, and alternate form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub plus: bool,
    pub minus: bool,
    pub sharp: bool,
    pub space: bool,
    pub zero: bool,
}

impl Flags {
    /// Set the flag named by the given character. Characters that are not
    /// flags are ignored.
    pub fn set(&mut self, c: char) {
        match c {
            '+' => self.plus = true,
            '-' => self.minus = true,
            '#' => self.sharp = true,
            ' ' => self.space = true,
            '0' => self.zero = true,
            _ => {}
        }
    }
}

/// A directive after its flags, width, precision, and argument index have
/// been worked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub verb: Verb,
    pub flags: Flags,
    pub width: usize,
    pub precision: usize,
    /// One-based position of the argument to format.
    pub position: usize,
}
