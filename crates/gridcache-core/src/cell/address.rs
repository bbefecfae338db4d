//! Cell reference and range types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell reference (e.g., "A1")
///
/// Rows and columns are 1-based: `A1` is `{ r: 1, c: 1 }`. Column letters are
/// bijective base-26 (A=1 ... Z=26, AA=27 ...). No upper bound is imposed
/// beyond the width of the integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ref {
    /// Row number (1-based)
    pub r: u32,
    /// Column number (1-based, A=1)
    pub c: u32,
}

impl Ref {
    /// Create a new cell reference
    pub const fn new(r: u32, c: u32) -> Self {
        Self { r, c }
    }

    /// Parse a cell reference from A1-style notation
    ///
    /// The text must be one or more uppercase letters followed by a row
    /// number without leading zeros, and nothing else.
    ///
    /// # Examples
    /// ```
    /// use gridcache_core::Ref;
    ///
    /// let r = Ref::parse("AB1").unwrap();
    /// assert_eq!(r, Ref::new(1, 28));
    ///
    /// assert!(Ref::parse("1A").is_err());
    /// assert!(Ref::parse("a1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();

        let mut pos = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_uppercase() {
            pos += 1;
        }

        if pos == 0 {
            return Err(Error::InvalidReference(s.to_string()));
        }

        let row_str = &s[pos..];
        if row_str.is_empty()
            || !row_str.bytes().all(|b| b.is_ascii_digit())
            || row_str.starts_with('0')
        {
            return Err(Error::InvalidReference(s.to_string()));
        }

        let c = letters_to_column(&s[..pos])?;
        let r: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidReference(s.to_string()))?;

        Ok(Self { r, c })
    }

    /// Format as an A1-style string
    pub fn to_sref(&self) -> String {
        let mut result = column_to_letters(self.c);
        result.push_str(&self.r.to_string());
        result
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_letters(self.c), self.r)
    }
}

impl FromStr for Ref {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Convert a 1-based column number to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Column 0 has no letters and yields an empty string.
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = col;

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to a 1-based column number (A = 1, Z = 26, AA = 27, etc.)
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidReference(letters.to_string()));
    }

    let mut col: u32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_uppercase() {
            return Err(Error::InvalidReference(letters.to_string()));
        }
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add((b - b'A') as u32 + 1))
            .ok_or_else(|| Error::InvalidReference(letters.to_string()))?;
    }

    Ok(col)
}

/// An inclusive rectangular range of cells (e.g., "A1:B10")
///
/// Algebra functions expect `from` to be the top-left corner and `to` the
/// bottom-right. [`Range::new`] does not reorder its input; use
/// [`crate::range::to_range`] to build a normalized range from two
/// arbitrary corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Top-left corner
    pub from: Ref,
    /// Bottom-right corner
    pub to: Ref,
}

impl Range {
    /// Create a new range from its two corners
    pub const fn new(from: Ref, to: Ref) -> Self {
        Self { from, to }
    }

    /// Create a single-cell range
    pub const fn single(r: Ref) -> Self {
        Self { from: r, to: r }
    }

    /// Parse a range from `A1:B10` notation
    ///
    /// Exactly one `:` separator is required; a bare reference is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), None) => Ok(Self {
                from: Ref::parse(from)?,
                to: Ref::parse(to)?,
            }),
            _ => Err(Error::InvalidReference(s.to_string())),
        }
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.to.r - self.from.r + 1
    }

    /// Number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.to.c - self.from.c + 1
    }

    /// Total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Format as `A1:B10`, always including both corners
    pub fn to_srng(&self) -> String {
        format!("{}:{}", self.from, self.to)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
