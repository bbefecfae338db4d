//! Grid to clipboard text

use std::io::Write;

use crate::error::ClipboardResult;
use crate::options::GridTextOptions;
use gridcache_core::{range_of, Grid, Ref};

/// Convert a grid to tab/newline delimited text with default options
///
/// The text covers the grid's bounding box; cells inside it that the grid
/// does not hold come out empty. An empty grid gives an empty string.
pub fn grid_to_string(grid: &Grid) -> ClipboardResult<String> {
    GridTextWriter::render(grid, &GridTextOptions::default())
}

/// Clipboard text writer
pub struct GridTextWriter;

impl GridTextWriter {
    /// Render a grid as delimited text
    ///
    /// Each cell contributes its display value, falling back to its raw
    /// formula source.
    pub fn render(grid: &Grid, options: &GridTextOptions) -> ClipboardResult<String> {
        let Some(bounds) = range_of(grid)? else {
            return Ok(String::new());
        };

        let rows = bounds.row_count() as usize;
        let cols = bounds.col_count() as usize;
        let mut table = vec![vec![""; cols]; rows];

        for (sref, cell) in grid {
            let Ref { r, c } = Ref::parse(sref)?;
            table[(r - bounds.from.r) as usize][(c - bounds.from.c) as usize] =
                cell.display_text();
        }

        let column_delimiter = options.column_delimiter.to_string();
        let row_delimiter = options.row_delimiter.to_string();

        let text = table
            .iter()
            .map(|row| row.join(column_delimiter.as_str()))
            .collect::<Vec<_>>()
            .join(row_delimiter.as_str());

        tracing::debug!(range = %bounds, cells = grid.len(), "serialized grid");
        Ok(text)
    }

    /// Write a grid as delimited text to a writer
    pub fn write<W: Write>(
        grid: &Grid,
        mut writer: W,
        options: &GridTextOptions,
    ) -> ClipboardResult<()> {
        let text = Self::render(grid, options)?;
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcache_core::Cell;
    use pretty_assertions::assert_eq;

    fn grid(cells: &[(&str, Cell)]) -> Grid {
        cells.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(grid_to_string(&Grid::new()).unwrap(), "");
    }

    #[test]
    fn test_single_cell() {
        let g = grid(&[("C7", Cell::value("only"))]);
        assert_eq!(grid_to_string(&g).unwrap(), "only");
    }

    #[test]
    fn test_fills_gaps_in_bounding_box() {
        let g = grid(&[
            ("B2", Cell::value("a")),
            ("D2", Cell::value("b")),
            ("C4", Cell::value("c")),
        ]);

        assert_eq!(grid_to_string(&g).unwrap(), "a\t\tb\n\t\t\n\tc\t");
    }

    #[test]
    fn test_formula_falls_back_to_source() {
        let g = grid(&[
            ("A1", Cell::formula("SUM(B1:B2)").with_value("3")),
            ("B1", Cell::formula("1+1")),
            ("C1", Cell::default()),
        ]);

        assert_eq!(grid_to_string(&g).unwrap(), "3\t1+1\t");
    }

    #[test]
    fn test_custom_delimiters() {
        let g = grid(&[
            ("A1", Cell::value("1")),
            ("B1", Cell::value("2")),
            ("A2", Cell::value("3")),
        ]);
        let options = GridTextOptions {
            column_delimiter: ',',
            row_delimiter: ';',
        };

        assert_eq!(GridTextWriter::render(&g, &options).unwrap(), "1,2;3,");
    }

    #[test]
    fn test_write_to_writer() {
        let g = grid(&[("A1", Cell::value("x")), ("A2", Cell::value("y"))]);
        let mut out = Vec::new();
        GridTextWriter::write(&g, &mut out, &GridTextOptions::default()).unwrap();
        assert_eq!(out, b"x\ny");
    }

    #[test]
    fn test_invalid_key() {
        let g = grid(&[("nope", Cell::value("x"))]);
        assert!(grid_to_string(&g).is_err());
    }
}
