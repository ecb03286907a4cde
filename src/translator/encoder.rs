//! The encoder turns assembly instructions into 16-bit machine words.
//!
//! Every word is laid out as four 4-bit fields, most significant first:
//!
//! ```text
//! | opcode | reg  | 0000 | imm/addr |
//! ```
//!
//! Instructions without a register (LABEL and the jumps) zero both the
//! reg and filler fields; PRINT has no immediate and zeroes the last two.
use std::fmt;

use super::assembly::Instruction;
use super::error::{EncodeError, SymbolKind};
use super::tables::Tables;

pub const WORD_BITS: usize = 16;

/// A single encoded instruction, held as its sixteen binary digits.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Word(String);

impl Word {
    /// Checks that `bits` is exactly sixteen `0`/`1` characters.
    pub fn new(bits: String) -> Result<Self, EncodeError> {
        if bits.len() != WORD_BITS || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(EncodeError::Encoding { bits });
        }
        Ok(Word(bits))
    }

    /// A word with every bit cleared.
    pub fn zero() -> Self {
        Word("0".repeat(WORD_BITS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_u16(&self) -> u16 {
        self.0.bytes().fold(0, |acc, b| (acc << 1) | u16::from(b - b'0'))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub struct Encoder<'t> {
    tables: &'t Tables,
}

impl<'t> Encoder<'t> {
    pub fn new(tables: &'t Tables) -> Self {
        Encoder { tables }
    }

    /// Encodes every instruction in order. Instructions whose mnemonic
    /// has no opcode produce no word.
    pub fn run(&self, assembly: &[Instruction]) -> Result<Vec<Word>, EncodeError> {
        let mut words = Vec::with_capacity(assembly.len());
        for ins in assembly {
            if let Some(word) = self.encode(ins)? {
                words.push(word);
            }
        }
        Ok(words)
    }

    /// Encodes a single instruction. Returns `Ok(None)` when the mnemonic
    /// is not in the opcode table.
    pub fn encode(&self, ins: &Instruction) -> Result<Option<Word>, EncodeError> {
        let opcode = match self.tables.opcode(&ins.mnemonic) {
            Some(op) => field(op),
            None => {
                warn!("skipping instruction with unknown mnemonic `{}`", ins.mnemonic);
                return Ok(None);
            }
        };

        let bits = match ins.mnemonic.as_str() {
            "LABEL" | "JGE" | "JNE" | "JMP" => {
                let addr = self.label(ins, 0)?;
                format!("{}00000000{}", opcode, addr)
            }
            "MOV" | "CMP" | "ADD" => {
                let reg = self.register(ins, 0)?;
                let imm = to_binary(operand(ins, 1)?)?;
                format!("{}{}0000{}", opcode, reg, imm)
            }
            "PRINT" => {
                let reg = self.register(ins, 0)?;
                format!("{}{}00000000", opcode, reg)
            }
            // The table knows an opcode this encoder has no layout for.
            _ => opcode,
        };

        Word::new(bits).map(Some)
    }

    fn register(&self, ins: &Instruction, index: usize) -> Result<String, EncodeError> {
        let name = operand(ins, index)?;
        self.tables.register(name).map(field).ok_or_else(|| EncodeError::UnknownSymbol {
            kind: SymbolKind::Register,
            name: name.to_owned(),
        })
    }

    fn label(&self, ins: &Instruction, index: usize) -> Result<String, EncodeError> {
        let name = operand(ins, index)?;
        self.tables.label(name).map(field).ok_or_else(|| EncodeError::UnknownSymbol {
            kind: SymbolKind::Label,
            name: name.to_owned(),
        })
    }
}

/// Encodes an assembly listing against the given tables.
pub fn generate_machine_code(assembly: &[Instruction], tables: &Tables) -> Result<Vec<Word>, EncodeError> {
    Encoder::new(tables).run(assembly)
}

/// Converts an immediate operand to a 4-bit unsigned binary field.
pub fn to_binary(value: &str) -> Result<String, EncodeError> {
    match value.parse::<u8>() {
        Ok(v) if v <= 0x0F => Ok(field(v)),
        _ => Err(EncodeError::ToBinary { value: value.to_owned() }),
    }
}

// Table entries are not range checked here: an oversized entry widens the
// field and is caught by the word length check.
fn field(value: u8) -> String {
    format!("{:04b}", value)
}

fn operand(ins: &Instruction, index: usize) -> Result<&str, EncodeError> {
    ins.operand(index).ok_or_else(|| EncodeError::MissingOperand {
        mnemonic: ins.mnemonic.clone(),
        index,
    })
}
