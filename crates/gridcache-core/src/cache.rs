//! Cache of independently fetched rectangular grids
//!
//! A [`GridCache`] holds an ordered list of entries, each a range plus the
//! cells known for it. Point lookups go to the first entry whose range covers
//! the reference. Entries are never merged: a rectangle is only considered
//! cached when a single entry covers all of it.
//!
//! Eviction is whole-entry. Invalidating a single cell drops every entry that
//! touches it, so a later read of any part of those rectangles misses and has
//! to be fetched again. Callers should size fetch ranges with that in mind.

use crate::cell::{Cell, Grid, Range, Ref};
use crate::error::{Error, Result};
use crate::range::{in_range, is_intersect, is_range_in_range, to_refs};

/// A cached rectangle and the cells fetched for it
#[derive(Debug, Clone)]
struct CacheEntry {
    range: Range,
    grid: Grid,
}

/// Partial-knowledge cache of cell data for a single document view
///
/// The cache is owned by one session. It only gains coverage through
/// [`GridCache::set_grid`]; point writes land in an existing entry or are
/// dropped.
#[derive(Debug, Default)]
pub struct GridCache {
    entries: Vec<CacheEntry>,
}

impl GridCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, r: &Ref) -> Option<&CacheEntry> {
        self.entries.iter().find(|e| in_range(r, &e.range))
    }

    fn entry_mut(&mut self, r: &Ref) -> Option<&mut CacheEntry> {
        self.entries.iter_mut().find(|e| in_range(r, &e.range))
    }

    /// Write a cell into the entry covering `r`
    ///
    /// Without a covering entry the write is silently dropped.
    pub fn set(&mut self, r: Ref, cell: Cell) {
        match self.entry_mut(&r) {
            Some(entry) => {
                entry.grid.insert(r.to_sref(), cell);
            }
            None => tracing::trace!(sref = %r, "dropping write to uncached cell"),
        }
    }

    /// Like [`GridCache::set`], but fails instead of dropping the write
    pub fn try_set(&mut self, r: Ref, cell: Cell) -> Result<()> {
        let entry = self
            .entry_mut(&r)
            .ok_or_else(|| Error::UncoveredWrite(r.to_sref()))?;
        entry.grid.insert(r.to_sref(), cell);
        Ok(())
    }

    /// Get the cached cell at `r`, if any
    pub fn get(&self, r: &Ref) -> Option<&Cell> {
        self.entry(r)?.grid.get(&r.to_sref())
    }

    /// Whether the covering entry holds a cell at `r`
    pub fn has(&self, r: &Ref) -> bool {
        self.entry(r)
            .is_some_and(|e| e.grid.contains_key(&r.to_sref()))
    }

    /// Whether any entry covers `r`, holding a cell there or not
    pub fn covers(&self, r: &Ref) -> bool {
        self.entry(r).is_some()
    }

    /// Remove the cell at `r` from its covering entry
    ///
    /// Returns whether a cell was removed.
    pub fn delete(&mut self, r: &Ref) -> bool {
        self.entry_mut(r)
            .is_some_and(|e| e.grid.remove(&r.to_sref()).is_some())
    }

    /// Add a freshly fetched rectangle
    ///
    /// Overlapping entries are not checked for. Lookups use the first match,
    /// so evict stale coverage before adding newer data for the same area.
    pub fn set_grid(&mut self, range: Range, grid: Grid) {
        tracing::debug!(
            prev = self.entries.len(),
            load = %range,
            cells = grid.len(),
            "caching grid"
        );
        self.entries.push(CacheEntry { range, grid });
    }

    /// Whether a single entry covers all of `range`
    pub fn has_range(&self, range: &Range) -> bool {
        self.entries
            .iter()
            .any(|e| is_range_in_range(range, &e.range))
    }

    /// Drop every entry that shares a cell with `range`
    pub fn evict(&mut self, range: &Range) {
        let before = self.entries.len();
        self.entries.retain(|e| !is_intersect(range, &e.range));
        tracing::debug!(
            range = %range,
            evicted = before - self.entries.len(),
            "evicted cached grids"
        );
    }

    /// Collect the cached cells inside `range`
    ///
    /// Cells the cache does not know about are left out; check
    /// [`GridCache::has_range`] when completeness matters. This never waits
    /// on anything.
    pub async fn get_grid(&self, range: &Range) -> Grid {
        let mut grid = Grid::new();
        for r in to_refs(range) {
            if let Some(cell) = self.get(&r) {
                grid.insert(r.to_sref(), cell.clone());
            }
        }
        grid
    }

    /// Cached rectangles in lookup order
    pub fn ranges(&self) -> impl Iterator<Item = &Range> + '_ {
        self.entries.iter().map(|e| &e.range)
    }

    /// Number of cached rectangles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
