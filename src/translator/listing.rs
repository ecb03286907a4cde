//! Text layouts for the driver's output.
use term_grid::{Cell, Direction, Filling, Grid, GridOptions};

use super::assembly::Instruction;
use super::encoder::{Encoder, Word};
use super::error::EncodeError;
use super::tables::Tables;

fn grid() -> Grid {
    Grid::new(GridOptions {
        filling: Filling::Spaces(1),
        direction: Direction::LeftToRight,
    })
}

/// Lays the machine code out `columns` words per row. Only the first
/// column of a row holds a real word; the rest are zero placeholders.
pub fn machine_code_columns(words: &[Word], columns: usize) -> String {
    let columns = columns.max(1);
    let mut grid = grid();

    for word in words {
        grid.add(Cell::from(word.to_string()));
        for _ in 1..columns {
            grid.add(Cell::from(Word::zero().to_string()));
        }
    }

    grid.fit_into_columns(columns).to_string()
}

/// An address, instruction and encoding per line. Instructions the
/// encoder skips are shown without a word.
pub fn debug_listing(assembly: &[Instruction], tables: &Tables) -> Result<String, EncodeError> {
    let encoder = Encoder::new(tables);
    let mut grid = grid();

    for (idx, ins) in assembly.iter().enumerate() {
        let word = match encoder.encode(ins)? {
            Some(word) => format!("0x{:04X}", word.to_u16()),
            None => "------".to_owned(),
        };
        grid.add(Cell::from(format!("0x{:04X}:", idx)));
        grid.add(Cell::from(ins.to_string()));
        grid.add(Cell::from("=>".to_owned()));
        grid.add(Cell::from(word));
    }

    Ok(grid.fit_into_columns(4).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::assembly::generate_assembly;

    fn rows(s: &str) -> Vec<String> {
        s.lines().map(|l| l.trim_end().to_owned()).collect()
    }

    fn word(bits: &str) -> Word {
        Word::new(bits.to_owned()).unwrap()
    }

    #[test]
    fn test_columns_pad_with_zero_words() {
        let words = vec![word("0000000000000001"), word("0001000100000000")];
        assert_eq!(
            rows(&machine_code_columns(&words, 4)),
            vec![
                "0000000000000001 0000000000000000 0000000000000000 0000000000000000",
                "0001000100000000 0000000000000000 0000000000000000 0000000000000000",
            ]
        );
    }

    #[test]
    fn test_single_column() {
        let words = vec![word("0101000100000000"), word("0111000000000010")];
        assert_eq!(
            rows(&machine_code_columns(&words, 1)),
            vec!["0101000100000000", "0111000000000010"]
        );
        // Zero columns is treated as one.
        assert_eq!(machine_code_columns(&words, 0), machine_code_columns(&words, 1));
    }

    #[test]
    fn test_debug_listing() {
        let tables = Tables::new();
        let mut asm = generate_assembly(&[]);
        asm.insert(1, Instruction::new("NOP", &[]));
        let listing = rows(&debug_listing(&asm, &tables).unwrap());
        assert_eq!(listing.len(), 10);
        assert!(listing[0].starts_with("0x0000:"));
        assert!(listing[0].ends_with("=> 0x0001"));
        assert!(listing[1].contains("NOP"));
        assert!(listing[1].ends_with("------"));
        assert!(listing[2].ends_with("=> 0x1100"));
    }
}
