//! Token categories.
//!
//! The scanner reduces source text to a ten-symbol alphabet. The numeric
//! codes are part of the scanner contract: re-tokenizing into a different
//! alphabet means changing the grammar table, not this enum.

use std::fmt;

/// A token category.
///
/// # Layout
///
/// | Code | Tag | Grammar legend |
/// |------|-----|----------------|
/// | 0 | `Ident` | `ID` |
/// | 1 | `Inherit` | `INHERIT` |
/// | 2 | `Def` | `DEF` |
/// | 3 | `Main` | `MAIN_KW` |
/// | 4 | `LParen` | `LP` |
/// | 5 | `RParen` | `RP` |
/// | 6 | `LBrace` | `LB` |
/// | 7 | `RBrace` | `RB` |
/// | 8 | `Indent` | `INDENT` |
/// | 9 | `Prefix` | `PREFIX`-marker |
/// | 10 | `Eof` | `$` |
///
/// `Eof` never appears inside a [`TokenStream`](crate::TokenStream); it is
/// what reads past the end yield.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    Ident = 0,
    Inherit = 1,
    Def = 2,
    Main = 3,
    LParen = 4,
    RParen = 5,
    LBrace = 6,
    RBrace = 7,
    Indent = 8,
    Prefix = 9,
    Eof = 10,
}

impl Tag {
    /// Number of tags including `Eof`.
    pub const COUNT: usize = 11;

    /// All tags in code order.
    pub const ALL: [Tag; Tag::COUNT] = [
        Tag::Ident,
        Tag::Inherit,
        Tag::Def,
        Tag::Main,
        Tag::LParen,
        Tag::RParen,
        Tag::LBrace,
        Tag::RBrace,
        Tag::Indent,
        Tag::Prefix,
        Tag::Eof,
    ];

    /// Decode a scanner code. Only `0..=9` are valid; `Eof` has no code.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Tag> {
        match code {
            0 => Some(Tag::Ident),
            1 => Some(Tag::Inherit),
            2 => Some(Tag::Def),
            3 => Some(Tag::Main),
            4 => Some(Tag::LParen),
            5 => Some(Tag::RParen),
            6 => Some(Tag::LBrace),
            7 => Some(Tag::RBrace),
            8 => Some(Tag::Indent),
            9 => Some(Tag::Prefix),
            _ => None,
        }
    }

    /// The discriminant, which doubles as the scanner code.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            Tag::Ident => "identifier",
            Tag::Inherit => "inheritance marker",
            Tag::Def => "`def`",
            Tag::Main => "`main`",
            Tag::LParen => "`(`",
            Tag::RParen => "`)`",
            Tag::LBrace => "`{`",
            Tag::RBrace => "`}`",
            Tag::Indent => "indentation",
            Tag::Prefix => "access modifier",
            Tag::Eof => "end of input",
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Tag::from_code(code).ok_or(code)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
