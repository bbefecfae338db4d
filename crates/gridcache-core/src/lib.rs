//! # gridcache-core
//!
//! Coordinates, range algebra and a partial-knowledge cell cache for
//! spreadsheet views over a sparse, unbounded grid.
//!
//! This crate provides:
//! - [`Ref`] and [`Range`] - 1-based cell addressing with A1-style text codecs
//! - [`range`] - containment, intersection, border strips and enumeration
//! - [`to_srefs`] - expansion of mixed references and ranges
//! - [`GridCache`] - cache of fetched rectangles with whole-entry eviction
//! - [`CellStore`] and [`load_range`] - the fetch-on-miss seam to the
//!   authoritative store
//!
//! ## Example
//!
//! ```rust
//! use gridcache_core::{Cell, Grid, GridCache, Range, Ref};
//!
//! let mut cache = GridCache::new();
//! let mut grid = Grid::new();
//! grid.insert("A1".to_string(), Cell::value("Hello"));
//! cache.set_grid(Range::parse("A1:C3").unwrap(), grid);
//!
//! assert!(cache.has(&Ref::parse("A1").unwrap()));
//! assert!(cache.has_range(&Range::parse("B2:C3").unwrap()));
//!
//! // Uncached writes are dropped
//! cache.set(Ref::new(10, 10), Cell::value("lost"));
//! assert!(!cache.has(&Ref::new(10, 10)));
//! ```

pub mod cache;
pub mod cell;
pub mod error;
pub mod range;
pub mod refs;
pub mod store;

// Re-exports for convenience
pub use cache::GridCache;
pub use cell::{column_to_letters, letters_to_column, Cell, Grid, Range, Ref};
pub use error::{Error, Result};
pub use range::{
    expand_range, in_range, is_collapsed_range, is_intersect, is_range_in_range, merge_ranges,
    range_of, to_border_ranges, to_range, to_refs, RefIter,
};
pub use refs::{is_srng, to_srefs, SrefIter};
pub use store::{load_range, CellStore, MemoryStore};

/// Parse an A1-style cell reference
pub fn parse_ref(sref: &str) -> Result<Ref> {
    Ref::parse(sref)
}

/// Format a cell reference as A1-style text
pub fn to_sref(r: &Ref) -> String {
    r.to_sref()
}

/// Parse an `A1:B2` range
pub fn parse_range(srng: &str) -> Result<Range> {
    Range::parse(srng)
}

/// Format a range as `A1:B2` text
pub fn to_srng(range: &Range) -> String {
    range.to_srng()
}
