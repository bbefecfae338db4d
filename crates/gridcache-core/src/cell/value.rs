//! Cell contents and sparse grids

use ahash::AHashMap;

/// A sparse mapping from A1-style reference text to cell contents
///
/// Keys are expected to be valid references (see [`crate::Ref::parse`]).
/// Iteration order carries no meaning.
pub type Grid = AHashMap<String, Cell>;

/// The contents of a single cell
///
/// A formula cell usually carries both its source text (`f`) and the last
/// value computed for it (`v`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Display value
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub v: Option<String>,
    /// Formula source text
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub f: Option<String>,
}

impl Cell {
    /// Create a literal value cell
    pub fn value<S: Into<String>>(v: S) -> Self {
        Self {
            v: Some(v.into()),
            f: None,
        }
    }

    /// Create a formula cell with no computed value yet
    pub fn formula<S: Into<String>>(f: S) -> Self {
        Self {
            v: None,
            f: Some(f.into()),
        }
    }

    /// Attach a computed display value
    pub fn with_value<S: Into<String>>(mut self, v: S) -> Self {
        self.v = Some(v.into());
        self
    }

    /// Check if the cell carries formula source
    pub fn is_formula(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the cell has neither a value nor a formula
    pub fn is_empty(&self) -> bool {
        self.v.is_none() && self.f.is_none()
    }

    /// Text shown for this cell when exported as plain text
    ///
    /// The value wins when non-empty, otherwise the raw formula source,
    /// otherwise the empty string.
    pub fn display_text(&self) -> &str {
        match (self.v.as_deref(), self.f.as_deref()) {
            (Some(v), _) if !v.is_empty() => v,
            (_, Some(f)) => f,
            _ => "",
        }
    }
}
