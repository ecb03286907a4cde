//! The Parser module takes the token stream from the lexer and
//! converts it into a flat list of AST nodes.
//!
//! This is not a recursive descent parser. At each cursor position a
//! fixed, ordered list of lexeme patterns is tested and the first one
//! that matches emits a node and advances the cursor by a fixed amount.
//! Tokens that match no pattern are skipped.
use super::ast::{Condition, Node};
use super::error::ParseError;
use super::lexer::Token;

pub struct Parser {
    tokens: Vec<Token>,
    cursor: usize,
    ast: Vec<Node>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, cursor: 0, ast: Vec::new() }
    }

    /// Run the parser, consuming itself and returning the list of nodes.
    pub fn run(mut self) -> Result<Vec<Node>, ParseError> {
        while self.cursor < self.tokens.len() {
            let advance = self.statement()?;
            self.cursor += advance;
        }
        Ok(self.ast)
    }

    /// Tests each pattern at the cursor in order. Returns how many
    /// tokens to advance by.
    fn statement(&mut self) -> Result<usize, ParseError> {
        let head = self.lexeme("statement", 0)?.to_owned();
        match head.as_str() {
            "main" => {
                self.ast.push(Node::FuncDef { name: "main".to_owned() });
                Ok(1)
            }
            "i" if self.lexeme("assignment", 1)? == "=" => {
                let value = self.lexeme("assignment", 2)?.to_owned();
                self.ast.push(Node::Assignment { variable: "i".to_owned(), value });
                Ok(3)
            }
            "while" => {
                let condition = self.condition("while loop", 3)?;
                self.ast.push(Node::WhileLoop { condition });
                Ok(5)
            }
            "if" => {
                let condition = self.condition("if statement", 5)?;
                self.ast.push(Node::IfStatement { condition });
                Ok(7)
            }
            "print" => {
                let value = self.lexeme("print", 2)?.to_owned();
                self.ast.push(Node::Print { value });
                Ok(4)
            }
            "i" if self.lexeme("increment", 1)? == "+=" => {
                let value = self.lexeme("increment", 2)?.to_owned();
                self.ast.push(Node::Increment { variable: "i".to_owned(), value });
                Ok(3)
            }
            _ => Ok(1),
        }
    }

    /// Collects the `len` lexemes after the cursor into a condition.
    fn condition(&self, construct: &'static str, len: usize) -> Result<Condition, ParseError> {
        let lexemes = (1..=len)
            .map(|offset| self.lexeme(construct, offset))
            .collect::<Result<Vec<&str>, ParseError>>()?;
        Ok(Condition::from_lexemes(&lexemes))
    }

    /// Bounds-checked look-ahead relative to the cursor.
    fn lexeme(&self, construct: &'static str, offset: usize) -> Result<&str, ParseError> {
        self.tokens
            .get(self.cursor + offset)
            .map(Token::lexeme)
            .ok_or(ParseError::UnexpectedEndOfInput {
                construct,
                position: self.cursor,
                offset,
            })
    }
}

/// Builds the AST for a token stream. An empty stream yields an empty AST.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Node>, ParseError> {
    Parser::new(tokens).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::ast::{CmpOp, Expr};
    use super::super::lexer::tokenize;

    fn parse_src(src: &str) -> Result<Vec<Node>, ParseError> {
        parse(tokenize(src))
    }

    #[test]
    fn test_assignment() {
        assert_eq!(
            parse_src("i = 0"),
            Ok(vec![Node::Assignment { variable: "i".to_owned(), value: "0".to_owned() }])
        );
    }

    #[test]
    fn test_while_loop() {
        let ast = parse_src("while i < 2 :").unwrap();
        assert_eq!(ast.len(), 1);
        match &ast[0] {
            Node::WhileLoop { condition } => {
                assert_eq!(condition.text, "i < 2");
                assert_eq!(condition.comparison.as_ref().map(|c| c.op), Some(CmpOp::Lt));
            }
            other => panic!("expected a while loop, got {:?}", other),
        }
    }

    #[test]
    fn test_if_statement() {
        let ast = parse_src("if i % 2 == 0:").unwrap();
        assert_eq!(
            ast,
            vec![Node::IfStatement { condition: Condition::from_lexemes(&["i", "%", "2", "==", "0"]) }]
        );
        if let Node::IfStatement { condition } = &ast[0] {
            let cmp = condition.comparison.as_ref().unwrap();
            assert_eq!(
                cmp.left,
                Expr::Binary { left: "i".to_owned(), op: "%".to_owned(), right: "2".to_owned() }
            );
        }
    }

    #[test]
    fn test_full_program() {
        let src = "main\ni = 0\nwhile i < 2:\n    print(i)\n    i += 1\n";
        assert_eq!(
            parse_src(src),
            Ok(vec![
                Node::FuncDef { name: "main".to_owned() },
                Node::Assignment { variable: "i".to_owned(), value: "0".to_owned() },
                Node::WhileLoop { condition: Condition::from_lexemes(&["i", "<", "2"]) },
                Node::Print { value: "i".to_owned() },
                Node::Increment { variable: "i".to_owned(), value: "1".to_owned() },
            ])
        );
    }

    #[test]
    fn test_unrecognized_tokens_are_skipped() {
        assert_eq!(parse_src("x y 5 + ( )"), Ok(vec![]));
        assert_eq!(
            parse_src("foo main bar"),
            Ok(vec![Node::FuncDef { name: "main".to_owned() }])
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(vec![]), Ok(vec![]));
        // A failed lex hands the parser nothing, which is not an error.
        assert_eq!(parse_src("i = @"), Ok(vec![]));
    }

    #[test]
    fn test_unexpected_end_of_input() {
        assert_eq!(
            parse_src("i ="),
            Err(ParseError::UnexpectedEndOfInput { construct: "assignment", position: 0, offset: 2 })
        );
        assert_eq!(
            parse_src("main while i <"),
            Err(ParseError::UnexpectedEndOfInput { construct: "while loop", position: 1, offset: 3 })
        );
        assert_eq!(
            parse_src("if i == 0:"),
            Err(ParseError::UnexpectedEndOfInput { construct: "if statement", position: 0, offset: 5 })
        );
        assert_eq!(
            parse_src("print("),
            Err(ParseError::UnexpectedEndOfInput { construct: "print", position: 0, offset: 2 })
        );
        assert_eq!(
            parse_src("main i"),
            Err(ParseError::UnexpectedEndOfInput { construct: "assignment", position: 1, offset: 1 })
        );
    }

    #[test]
    fn test_advance_past_end_terminates() {
        // The while rule advances over the trailing colon even when it is absent.
        assert_eq!(
            parse_src("while i < 2"),
            Ok(vec![Node::WhileLoop { condition: Condition::from_lexemes(&["i", "<", "2"]) }])
        );
    }
}
