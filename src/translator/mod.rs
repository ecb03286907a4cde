//! The translator module takes source text in the tiny language and
//! produces 16-bit machine words from it.
//!
//! It does this in four linear stages: a regex tokenizer, a
//! pattern-matching AST builder, a fixed assembly emitter, and a
//! table-driven encoder.

pub mod assembly;
pub mod ast;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod listing;
pub mod parser;
pub mod tables;

use self::assembly::Instruction;
use self::ast::Node;
use self::encoder::Word;
use self::error::{Error, LexError};
use self::lexer::Token;
use self::tables::Tables;

/// Every intermediate artifact of one run, in pipeline order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Translation {
    /// Set when lexing failed; `tokens` is then empty.
    pub lex_error: Option<LexError>,
    pub tokens: Vec<Token>,
    pub ast: Vec<Node>,
    pub assembly: Vec<Instruction>,
    pub machine_code: Vec<Word>,
}

/// Runs all four stages over `src`.
///
/// A lexer failure is not fatal: it is logged and the later stages run
/// on an empty token stream. Parser and encoder failures abort.
pub fn translate(src: &str, tables: &Tables) -> Result<Translation, Error> {
    let (tokens, lex_error) = match lexer::try_tokenize(src) {
        Ok(tokens) => (tokens, None),
        Err(e) => {
            error!("Error: {}", e);
            (Vec::new(), Some(e))
        }
    };
    info!("lexed {} token(s)", tokens.len());

    let ast = parser::parse(tokens.clone())?;
    info!("built {} AST node(s)", ast.len());

    let assembly = assembly::generate_assembly(&ast);
    info!("emitted {} assembly instruction(s)", assembly.len());

    let machine_code = encoder::generate_machine_code(&assembly, tables)?;
    info!("encoded {} machine word(s)", machine_code.len());

    Ok(Translation { lex_error, tokens, ast, assembly, machine_code })
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::error::ParseError;

    const PROGRAM: &str = "main\ni = 0\nwhile i < 2:\n    print(i)\n    i += 1\n";

    #[test]
    fn test_translate_program() {
        let tables = Tables::new();
        let t = translate(PROGRAM, &tables).unwrap();
        assert_eq!(t.lex_error, None);
        assert_eq!(t.tokens.len(), 16);
        assert_eq!(t.ast.len(), 5);
        assert_eq!(t.assembly.len(), 9);
        assert_eq!(t.machine_code.len(), 9);
        assert_eq!(t.machine_code[1].as_str(), "0001000100000000");
    }

    #[test]
    fn test_translate_after_lex_failure() {
        let tables = Tables::new();
        let t = translate("i =@ 5", &tables).unwrap();
        assert!(matches!(t.lex_error, Some(LexError::IllegalCharacter { character: '@', .. })));
        assert!(t.tokens.is_empty());
        assert!(t.ast.is_empty());
        // The emitter does not depend on the AST, so code is still produced.
        assert_eq!(t.machine_code.len(), 9);
    }

    #[test]
    fn test_translate_parse_failure() {
        let tables = Tables::new();
        assert_eq!(
            translate("main\ni =", &tables),
            Err(Error::Parse(ParseError::UnexpectedEndOfInput {
                construct: "assignment",
                position: 1,
                offset: 2,
            }))
        );
    }

    #[test]
    fn test_translate_encode_failure() {
        // Tables missing the loop counter register cannot encode the loop.
        let tables = Tables::from_parts(&[("LABEL", 0), ("MOV", 1)], &[("main", 1)], &[]);
        assert!(matches!(translate("", &tables), Err(Error::Encode(_))));
    }
}
