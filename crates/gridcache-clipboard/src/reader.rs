//! Clipboard text to grid

use std::io::Read;

use crate::error::{ClipboardError, ClipboardResult};
use crate::options::GridTextOptions;
use gridcache_core::{Cell, Grid, Ref};

/// Convert delimited text to a grid anchored at `anchor`, with default options
///
/// Every token becomes a literal value cell, empty tokens included. Nothing
/// is interpreted as a formula. Text that would reach past row or column
/// `u32::MAX` is rejected as a whole rather than truncated.
pub fn string_to_grid(anchor: Ref, text: &str) -> ClipboardResult<Grid> {
    GridTextReader::parse(anchor, text, &GridTextOptions::default())
}

/// Clipboard text reader
pub struct GridTextReader;

impl GridTextReader {
    /// Parse delimited text into a grid whose top-left cell is `anchor`
    pub fn parse(anchor: Ref, text: &str, options: &GridTextOptions) -> ClipboardResult<Grid> {
        let mut grid = Grid::new();

        for (row, line) in text.split(options.row_delimiter).enumerate() {
            for (col, token) in line.split(options.column_delimiter).enumerate() {
                let r = offset(anchor.r, row)
                    .zip(offset(anchor.c, col))
                    .map(|(r, c)| Ref::new(r, c))
                    .ok_or(ClipboardError::OutOfBounds { row, column: col })?;
                grid.insert(r.to_sref(), Cell::value(token));
            }
        }

        tracing::debug!(anchor = %anchor, cells = grid.len(), "parsed clipboard text");
        Ok(grid)
    }

    /// Read delimited text from a reader into a grid anchored at `anchor`
    pub fn read<R: Read>(
        anchor: Ref,
        mut reader: R,
        options: &GridTextOptions,
    ) -> ClipboardResult<Grid> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = String::from_utf8(bytes)?;
        Self::parse(anchor, &text, options)
    }
}

fn offset(base: u32, by: usize) -> Option<u32> {
    u32::try_from(by).ok().and_then(|by| base.checked_add(by))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn value_at<'a>(grid: &'a Grid, sref: &str) -> Option<&'a str> {
        grid.get(sref).and_then(|c| c.v.as_deref())
    }

    #[test]
    fn test_places_tokens_from_anchor() {
        let grid = string_to_grid(Ref::new(3, 2), "a\tb\nc\td").unwrap();

        assert_eq!(grid.len(), 4);
        assert_eq!(value_at(&grid, "B3"), Some("a"));
        assert_eq!(value_at(&grid, "C3"), Some("b"));
        assert_eq!(value_at(&grid, "B4"), Some("c"));
        assert_eq!(value_at(&grid, "C4"), Some("d"));
    }

    #[test]
    fn test_keeps_empty_tokens() {
        let grid = string_to_grid(Ref::new(1, 1), "\tx\n").unwrap();

        assert_eq!(grid.len(), 3);
        assert_eq!(value_at(&grid, "A1"), Some(""));
        assert_eq!(value_at(&grid, "B1"), Some("x"));
        assert_eq!(value_at(&grid, "A2"), Some(""));
    }

    #[test]
    fn test_empty_text_is_one_empty_cell() {
        let grid = string_to_grid(Ref::new(5, 5), "").unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(value_at(&grid, "E5"), Some(""));
    }

    #[test]
    fn test_formula_text_stays_literal() {
        let grid = string_to_grid(Ref::new(1, 1), "=SUM(A1:A2)").unwrap();
        let cell = &grid["A1"];

        assert_eq!(cell.v.as_deref(), Some("=SUM(A1:A2)"));
        assert!(!cell.is_formula());
    }

    #[test]
    fn test_ragged_rows() {
        let grid = string_to_grid(Ref::new(1, 1), "1\t2\t3\n4").unwrap();
        assert_eq!(grid.len(), 4);
        assert_eq!(value_at(&grid, "C1"), Some("3"));
        assert_eq!(value_at(&grid, "B2"), None);
    }

    #[test]
    fn test_rejects_text_past_last_row() {
        let anchor = Ref::new(u32::MAX, 1);
        assert_eq!(string_to_grid(anchor, "x\ty").unwrap().len(), 2);

        let err = string_to_grid(anchor, "x\ny");
        assert!(matches!(
            err,
            Err(crate::ClipboardError::OutOfBounds { row: 1, column: 0 })
        ));
    }

    #[test]
    fn test_rejects_text_past_last_column() {
        let anchor = Ref::new(1, u32::MAX);
        assert_eq!(string_to_grid(anchor, "x\ny").unwrap().len(), 2);

        let err = string_to_grid(anchor, "x\ty");
        assert!(matches!(
            err,
            Err(crate::ClipboardError::OutOfBounds { row: 0, column: 1 })
        ));
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x61, 0xff];
        let err = GridTextReader::read(Ref::new(1, 1), bytes, &GridTextOptions::default());
        assert!(matches!(err, Err(crate::ClipboardError::InvalidUtf8(_))));
    }
}
