use super::{ParseError, ParseResult, Token, TokenLexer, TokenValue};
use crate::addr::Addr;
use crate::listing::{DecodedInstruction, Instruction, Program};

//===========================================================================//

/// Parses a plain-text disassembly listing.
///
/// Each non-blank line holds one instruction: a hex address, a colon, the
/// mnemonic, and then the operands.  Comments start with a semicolon.  A
/// `,`, `+`, or `-` that stands apart from the neighboring operand (e.g. the
/// `+` in `ld r24, X +`) is recorded as separator text following the
/// previous operand, whereas one that is attached (e.g. `st X+, r24`) is
/// part of the operand's text.
///
/// All errors in the listing are reported, not just the first.
pub fn parse_listing(source: &str) -> ParseResult<Program> {
    let mut program = Program::new();
    let mut errors = Vec::<ParseError>::new();
    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        match parse_line(line, text) {
            Ok(Some(instr)) => {
                let addr = instr.addr();
                if program.get(addr).is_some() {
                    let message =
                        format!("duplicate instruction at address {addr}");
                    errors.push(ParseError::new(line, 1, message));
                } else {
                    program.insert(instr);
                }
            }
            Ok(None) => {}
            Err(error) => errors.push(error),
        }
    }
    if errors.is_empty() { Ok(program) } else { Err(errors) }
}

fn parse_line(
    line: usize,
    text: &str,
) -> Result<Option<DecodedInstruction>, ParseError> {
    let tokens = TokenLexer::new(line, text)
        .collect::<Result<Vec<Token>, ParseError>>()?;
    let end_column = text.trim_end().len() + 1;
    let mut tokens = tokens.into_iter();
    let addr = match tokens.next() {
        None => return Ok(None),
        Some(Token { column, value: TokenValue::Word(word) }) => {
            word.parse::<Addr>().map_err(|error| {
                ParseError::new(line, column, error.to_string())
            })?
        }
        Some(token) => return Err(unexpected(line, &token, "an address")),
    };
    match tokens.next() {
        Some(Token { value: TokenValue::Colon, .. }) => {}
        Some(token) => return Err(unexpected(line, &token, "a colon")),
        None => return Err(missing(line, end_column, "a colon")),
    }
    let mut instr = match tokens.next() {
        Some(Token { value: TokenValue::Word(mnemonic), .. }) => {
            DecodedInstruction::new(addr, &mnemonic)
        }
        Some(token) => return Err(unexpected(line, &token, "a mnemonic")),
        None => return Err(missing(line, end_column, "a mnemonic")),
    };
    for token in tokens {
        match &token.value {
            TokenValue::Word(operand) => instr.push_operand(operand),
            TokenValue::Colon => {
                return Err(unexpected(line, &token, "an operand"));
            }
            value => {
                let separator = value.punctuation().unwrap_or_default();
                if !instr.push_separator(separator) {
                    let message = format!(
                        "{} before first operand",
                        token.value.name()
                    );
                    return Err(ParseError::new(line, token.column, message));
                }
            }
        }
    }
    Ok(Some(instr))
}

fn unexpected(line: usize, token: &Token, expected: &str) -> ParseError {
    let message =
        format!("expected {}, found {}", expected, token.value.name());
    ParseError::new(line, token.column, message)
}

fn missing(line: usize, column: usize, expected: &str) -> ParseError {
    let message = format!("expected {expected}, found end of line");
    ParseError::new(line, column, message)
}

//===========================================================================//


//===========================================================================//
