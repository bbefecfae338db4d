//! Clipboard text options

/// Delimiters used when converting grids to and from text
///
/// No escaping is performed, so values containing either delimiter do not
/// survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTextOptions {
    /// Separator between cells of a row (default: tab)
    pub column_delimiter: char,
    /// Separator between rows (default: newline)
    pub row_delimiter: char,
}

impl Default for GridTextOptions {
    fn default() -> Self {
        Self {
            column_delimiter: '\t',
            row_delimiter: '\n',
        }
    }
}
