use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One position in a draw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Symbol {
    Red = 0,
    Black = 1,
    Wildcard = 2,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::Red, Symbol::Black, Symbol::Wildcard];

    /// Case-insensitive; anything other than R, B or X yields `None`.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'R' | 'r' => Some(Symbol::Red),
            'B' | 'b' => Some(Symbol::Black),
            'X' | 'x' => Some(Symbol::Wildcard),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Symbol::Red => 'R',
            Symbol::Black => 'B',
            Symbol::Wildcard => 'X',
        }
    }

    pub const fn is_wildcard(self) -> bool {
        matches!(self, Symbol::Wildcard)
    }

    /// Two positions agree when they match or either one is a wildcard.
    pub const fn compatible_with(self, other: Symbol) -> bool {
        self.is_wildcard() || other.is_wildcard() || self as u8 == other as u8
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; 4];
        f.write_str(self.as_char().encode_utf8(&mut buf))
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ch = char::deserialize(deserializer)?;
        Symbol::from_char(ch)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid symbol '{ch}'")))
    }
}
