//! This lexer tokenizes the tiny source language.
//!
//! Every position of the input is claimed by exactly one of the pattern
//! classes below, tried in order. Whitespace and newlines are consumed
//! but never produce a token; anything unclassifiable aborts the lex.
use regex::Regex;
use std::fmt;

use super::error::LexError;

// Order matters: the regex engine takes the first alternative that matches,
// so multi-character operators must come before the single characters.
const TOKEN_PATTERN: &str = concat!(
    r"(?P<NUMBER>[0-9]+)",
    r"|(?P<IDENTIFIER>[A-Za-z_][A-Za-z0-9_]*)",
    r"|(?P<OPERATOR>==|<=|>=|!=|:=|\+=|[-+*/%=<>():])",
    r"|(?P<NEWLINE>\r?\n)",
    r"|(?P<SKIP>[ \t]+)",
    r"|(?P<MISMATCH>.)",
);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Number,
    Identifier,
    Operator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "NUMBER"),
            TokenKind::Identifier => write!(f, "IDENTIFIER"),
            TokenKind::Operator => write!(f, "OPERATOR"),
        }
    }
}

/// A classified lexeme.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Number(String),
    Identifier(String),
    Operator(String),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Operator(_) => TokenKind::Operator,
        }
    }

    pub fn lexeme(&self) -> &str {
        match self {
            Token::Number(s) | Token::Identifier(s) | Token::Operator(s) => s,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "('{}', '{}')", self.kind(), self.lexeme())
    }
}

pub struct Lexer {
    pattern: Regex,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer {
            pattern: Regex::new(TOKEN_PATTERN).expect("Invalid regex"),
        }
    }

    /// Tokenizes the whole input, failing on the first illegal character.
    pub fn run(&self, src: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        for caps in self.pattern.captures_iter(src) {
            if let Some(m) = caps.name("NUMBER") {
                tokens.push(Token::Number(m.as_str().to_owned()));
            } else if let Some(m) = caps.name("IDENTIFIER") {
                tokens.push(Token::Identifier(m.as_str().to_owned()));
            } else if let Some(m) = caps.name("OPERATOR") {
                tokens.push(Token::Operator(m.as_str().to_owned()));
            } else if let Some(m) = caps.name("MISMATCH") {
                let (line, column) = position(src, m.start());
                return Err(LexError::IllegalCharacter {
                    character: m.as_str().chars().next().unwrap_or_default(),
                    line,
                    column,
                });
            }
            // NEWLINE and SKIP fall through.
        }

        Ok(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizes `src`, surfacing an illegal character as an error.
pub fn try_tokenize(src: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new().run(src)
}

/// Tokenizes `src`. On an illegal character the diagnostic is logged
/// and the result is empty; partial token streams are never returned.
pub fn tokenize(src: &str) -> Vec<Token> {
    match try_tokenize(src) {
        Ok(tokens) => tokens,
        Err(e) => {
            error!("Error: {}", e);
            Vec::new()
        }
    }
}

/// 1-based line and column of a byte offset.
fn position(src: &str, offset: usize) -> (usize, usize) {
    let before = &src[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (line, before[line_start..].chars().count() + 1)
}
