//! Error types for every stage of the translator.
use std::error;
use std::fmt;

/// Raised by the lexer on the first character it cannot classify.
/// Lexing is all-or-nothing, so no tokens survive one of these.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LexError {
    IllegalCharacter { character: char, line: usize, column: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LexError::IllegalCharacter { character, line, column } => write!(
                f,
                "illegal character '{}' on line {}, column {}",
                character, line, column
            ),
        }
    }
}

impl error::Error for LexError {}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    /// A pattern's fixed look-ahead ran past the last token.
    UnexpectedEndOfInput {
        construct: &'static str,
        position: usize,
        offset: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnexpectedEndOfInput { construct, position, offset } => write!(
                f,
                "unexpected end of input while parsing {} at token {} (needed token {})",
                construct,
                position,
                position + offset
            ),
        }
    }
}

impl error::Error for ParseError {}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EncodeError {
    /// A register or label name has no entry in its lookup table.
    UnknownSymbol { kind: SymbolKind, name: String },
    /// An immediate operand is not an integer that fits in 4 bits.
    ToBinary { value: String },
    /// An instruction is missing one of the operands its mnemonic needs.
    MissingOperand { mnemonic: String, index: usize },
    /// The produced word is not 16 binary digits. This is always an
    /// internal defect in the tables or the encoder, never bad input.
    Encoding { bits: String },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SymbolKind {
    Register,
    Label,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SymbolKind::Register => write!(f, "register"),
            SymbolKind::Label => write!(f, "label"),
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncodeError::UnknownSymbol { kind, name } => write!(f, "unknown {} `{}`", kind, name),
            EncodeError::ToBinary { value } => {
                write!(f, "immediate `{}` does not fit in 4 bits (0-15)", value)
            }
            EncodeError::MissingOperand { mnemonic, index } => {
                write!(f, "{} is missing operand {}", mnemonic, index + 1)
            }
            EncodeError::Encoding { bits } => {
                write!(f, "instruction length error: '{}' is not 16 bits", bits)
            }
        }
    }
}

impl error::Error for EncodeError {}

/// Any failure the pipeline can surface to the driver.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    Parse(ParseError),
    Encode(EncodeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "parser error: {}", e),
            Error::Encode(e) => write!(f, "encoder error: {}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Encode(e) => Some(e),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        Error::Encode(e)
    }
}
