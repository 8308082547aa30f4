use super::ParseError;
use logos::{self, Logos};

//===========================================================================//

#[derive(Clone, Copy, Debug, Eq, Logos, PartialEq)]
#[logos(skip r"[ \t\r]+")] // whitespace
#[logos(skip r";[^\n]*")] // comments
enum TokenKind {
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("-")]
    Minus,
    #[token("+")]
    Plus,
    #[regex(r"-?[_A-Za-z0-9.$]+([+-][_A-Za-z0-9.$]*)?")]
    Word,
}

impl TokenKind {
    fn into_value(self, slice: &str) -> TokenValue {
        match self {
            TokenKind::Colon => TokenValue::Colon,
            TokenKind::Comma => TokenValue::Comma,
            TokenKind::Minus => TokenValue::Minus,
            TokenKind::Plus => TokenValue::Plus,
            TokenKind::Word => TokenValue::Word(slice.to_string()),
        }
    }
}

//===========================================================================//

/// The contents of a single lexical token.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TokenValue {
    /// A "`:`" symbol.
    Colon,
    /// A "`,`" symbol.
    Comma,
    /// A free-standing "`-`" symbol.
    Minus,
    /// A free-standing "`+`" symbol.
    Plus,
    /// An address, mnemonic, or operand.  Operands may carry an embedded
    /// `-` prefix or `+` suffix (e.g. `-X` or `Y+`).
    Word(String),
}

impl TokenValue {
    /// Returns the human-readable name for this kind of token.
    pub fn name(&self) -> &str {
        match &self {
            TokenValue::Colon => "colon",
            TokenValue::Comma => "comma",
            TokenValue::Minus => "minus sign",
            TokenValue::Plus => "plus sign",
            TokenValue::Word(_) => "word",
        }
    }

    /// Returns the source text for a punctuation token, or `None` for a
    /// word.
    pub fn punctuation(&self) -> Option<&'static str> {
        match &self {
            TokenValue::Colon => Some(":"),
            TokenValue::Comma => Some(","),
            TokenValue::Minus => Some("-"),
            TokenValue::Plus => Some("+"),
            TokenValue::Word(_) => None,
        }
    }
}

//===========================================================================//

/// A single lexical token, including location information.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Token {
    /// The column (starting from 1) of the start of the token.
    pub column: usize,
    /// The contents of the token.
    pub value: TokenValue,
}

//===========================================================================//

/// A lexer for tokenizing a single line of a listing file.
pub struct TokenLexer<'a> {
    line: usize,
    lexer: logos::Lexer<'a, TokenKind>,
}

impl<'a> TokenLexer<'a> {
    /// Constructs a new lexer for the given line of input.  `line` is the
    /// line number (starting from 1), used for error locations.
    pub fn new(line: usize, input: &'a str) -> TokenLexer<'a> {
        TokenLexer { line, lexer: TokenKind::lexer(input) }
    }
}

impl Iterator for TokenLexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Result<Token, ParseError>> {
        let kind = self.lexer.next()?;
        let column = self.lexer.span().start + 1;
        match kind {
            Ok(kind) => {
                let value = kind.into_value(self.lexer.slice());
                Some(Ok(Token { column, value }))
            }
            Err(()) => {
                let message = format!(
                    "invalid character: {}",
                    self.lexer.slice().escape_default()
                );
                Some(Err(ParseError::new(self.line, column, message)))
            }
        }
    }
}

//===========================================================================//


//===========================================================================//
