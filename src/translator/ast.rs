//! The AST is a flat, ordered list of nodes. There is no nesting: a
//! `while` or `if` node only records its condition, and the statements
//! that follow it in the source follow it in the list.
//!
//! Recognized statement shapes:
//!
//! ```text
//! main                ; function definition
//! i = 0               ; assignment
//! while i < 2:        ; loop header
//! if i % 2 == 0:      ; conditional header
//! print(i)            ; print
//! i += 1              ; increment
//! ```

use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    FuncDef { name: String },
    Assignment { variable: String, value: String },
    WhileLoop { condition: Condition },
    IfStatement { condition: Condition },
    Print { value: String },
    Increment { variable: String, value: String },
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Node::*;
        match self {
            FuncDef { name } => write!(f, "ASTNode(FUNC_DEF, {{'name': '{}'}})", name),
            Assignment { variable, value } => write!(
                f,
                "ASTNode(ASSIGNMENT, {{'variable': '{}', 'value': '{}'}})",
                variable, value
            ),
            WhileLoop { condition } => {
                write!(f, "ASTNode(WHILE_LOOP, {{'condition': '{}'}})", condition)
            }
            IfStatement { condition } => {
                write!(f, "ASTNode(IF_STATEMENT, {{'condition': '{}'}})", condition)
            }
            Print { value } => write!(f, "ASTNode(PRINT, {{'value': '{}'}})", value),
            Increment { variable, value } => write!(
                f,
                "ASTNode(INCREMENT, {{'variable': '{}', 'value': '{}'}})",
                variable, value
            ),
        }
    }
}

/// A loop or branch condition.
///
/// `text` is the condition exactly as it was reassembled from its
/// lexemes, joined by single spaces. When the lexemes have the shape
/// `term CMP term` (each term optionally `a OP b`), `comparison` holds
/// the structured form as well.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Condition {
    pub text: String,
    pub comparison: Option<Comparison>,
}

impl Condition {
    pub fn from_lexemes(lexemes: &[&str]) -> Self {
        Condition {
            text: lexemes.join(" "),
            comparison: Comparison::from_lexemes(lexemes),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Comparison {
    pub left: Expr,
    pub op: CmpOp,
    pub right: Expr,
}

impl Comparison {
    fn from_lexemes(lexemes: &[&str]) -> Option<Self> {
        let split = lexemes.iter().position(|l| CmpOp::from_lexeme(l).is_some())?;
        let op = CmpOp::from_lexeme(lexemes[split])?;
        let left = Expr::from_lexemes(&lexemes[..split])?;
        let right = Expr::from_lexemes(&lexemes[split + 1..])?;
        Some(Comparison { left, op, right })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CmpOp {
    pub fn from_lexeme(s: &str) -> Option<Self> {
        match s {
            "==" => Some(CmpOp::Eq),
            "!=" => Some(CmpOp::Ne),
            "<" => Some(CmpOp::Lt),
            "<=" => Some(CmpOp::Le),
            ">" => Some(CmpOp::Gt),
            ">=" => Some(CmpOp::Ge),
            _ => None,
        }
    }
}

/// One side of a comparison: a bare operand, or one arithmetic step.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
    Term(String),
    Binary { left: String, op: String, right: String },
}

impl Expr {
    fn from_lexemes(lexemes: &[&str]) -> Option<Self> {
        match lexemes {
            [term] if !is_operator(term) => Some(Expr::Term((*term).to_owned())),
            [left, op, right] if is_arithmetic(op) && !is_operator(left) && !is_operator(right) => {
                Some(Expr::Binary {
                    left: (*left).to_owned(),
                    op: (*op).to_owned(),
                    right: (*right).to_owned(),
                })
            }
            _ => None,
        }
    }
}

fn is_arithmetic(s: &str) -> bool {
    matches!(s, "+" | "-" | "*" | "/" | "%")
}

fn is_operator(s: &str) -> bool {
    !s.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_simple_comparison() {
        let c = Condition::from_lexemes(&["i", "<", "2"]);
        assert_eq!(c.text, "i < 2");
        assert_eq!(
            c.comparison,
            Some(Comparison {
                left: Expr::Term("i".to_owned()),
                op: CmpOp::Lt,
                right: Expr::Term("2".to_owned()),
            })
        );
    }

    #[test]
    fn test_condition_arithmetic_left() {
        let c = Condition::from_lexemes(&["i", "%", "2", "==", "0"]);
        assert_eq!(c.text, "i % 2 == 0");
        assert_eq!(
            c.comparison,
            Some(Comparison {
                left: Expr::Binary { left: "i".to_owned(), op: "%".to_owned(), right: "2".to_owned() },
                op: CmpOp::Eq,
                right: Expr::Term("0".to_owned()),
            })
        );
    }

    #[test]
    fn test_condition_unstructured() {
        // Still recorded as text even when no comparison can be recovered.
        let c = Condition::from_lexemes(&["i", "+", "2"]);
        assert_eq!(c.text, "i + 2");
        assert_eq!(c.comparison, None);

        let c = Condition::from_lexemes(&["(", "i", "<"]);
        assert_eq!(c.comparison, None);
    }

    #[test]
    fn test_node_display() {
        let n = Node::Assignment { variable: "i".to_owned(), value: "0".to_owned() };
        assert_eq!(n.to_string(), "ASTNode(ASSIGNMENT, {'variable': 'i', 'value': '0'})");

        let n = Node::WhileLoop { condition: Condition::from_lexemes(&["i", "<", "2"]) };
        assert_eq!(n.to_string(), "ASTNode(WHILE_LOOP, {'condition': 'i < 2'})");
    }
}
