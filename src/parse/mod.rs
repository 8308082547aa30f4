//! Facilities for parsing plain-text disassembly listings.

mod lex;
mod listing;
mod types;

pub use lex::{Token, TokenLexer, TokenValue};
pub use listing::parse_listing;
pub use types::{ParseError, ParseResult};

//===========================================================================//
