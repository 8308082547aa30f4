use thiserror::Error;

//===========================================================================//

/// A specialized `Result` type for parsing operations.
pub type ParseResult<V> = Result<V, Vec<ParseError>>;

//===========================================================================//

/// An error encountered while parsing a listing file.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    /// The line number (starting from 1) where the error occurred.
    pub line: usize,
    /// The column number (starting from 1) where the error occurred.
    pub column: usize,
    /// The error message to report to the user.
    pub message: String,
}

impl ParseError {
    /// Constructs a parse error at the given location.
    pub fn new(line: usize, column: usize, message: String) -> ParseError {
        ParseError { line, column, message }
    }
}

//===========================================================================//


//===========================================================================//
