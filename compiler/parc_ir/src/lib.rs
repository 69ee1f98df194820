//! Shared vocabulary for the parc paradigm recognizer.
//!
//! - [`Tag`]: one token category as emitted by the scanner, plus the
//!   end-of-stream marker [`Tag::Eof`]
//! - [`TagSet`]: bitset of tags, used for "expected one of" diagnostics
//! - [`TokenStream`]: the immutable input of one recognition run
//! - [`Paradigm`]: the classification a successful derivation produces

mod paradigm;
mod tag;
mod tag_set;
mod token_stream;

pub use paradigm::{Family, Paradigm, Syntax};
pub use tag::Tag;
pub use tag_set::TagSet;
pub use token_stream::{InvalidTokenCode, TokenStream};
