//! Fixed lookup tables for this version of the language.
//!
//! The tables are built once by the driver and lent to the encoder.
use std::collections::HashMap;

const OPCODES: [(&str, u8); 8] = [
    ("LABEL", 0b0000),
    ("MOV",   0b0001),
    ("CMP",   0b0010),
    ("JGE",   0b0011),
    ("JNE",   0b0100),
    ("PRINT", 0b0101),
    ("ADD",   0b0110),
    ("JMP",   0b0111),
];

const LABELS: [(&str, u8); 4] = [
    ("main",        0b0001),
    ("WHILE_START", 0b0010),
    ("WHILE_END",   0b0101),
    ("SKIP_IF",     0b0110),
];

const REGISTERS: [(&str, u8); 1] = [
    ("i", 0b0001),
];

#[derive(Clone, Debug)]
pub struct Tables {
    opcodes: HashMap<String, u8>,
    labels: HashMap<String, u8>,
    registers: HashMap<String, u8>,
}

impl Tables {
    pub fn new() -> Self {
        Tables::from_parts(&OPCODES, &LABELS, &REGISTERS)
    }

    pub fn from_parts(opcodes: &[(&str, u8)], labels: &[(&str, u8)], registers: &[(&str, u8)]) -> Self {
        fn to_map(entries: &[(&str, u8)]) -> HashMap<String, u8> {
            entries.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
        }

        Tables {
            opcodes: to_map(opcodes),
            labels: to_map(labels),
            registers: to_map(registers),
        }
    }

    pub fn opcode(&self, mnemonic: &str) -> Option<u8> {
        self.opcodes.get(mnemonic).copied()
    }

    pub fn label(&self, name: &str) -> Option<u8> {
        self.labels.get(name).copied()
    }

    pub fn register(&self, name: &str) -> Option<u8> {
        self.registers.get(name).copied()
    }
}

impl Default for Tables {
    fn default() -> Self {
        Self::new()
    }
}
