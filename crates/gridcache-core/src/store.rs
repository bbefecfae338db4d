//! Seam to the authoritative cell store
//!
//! The real store (a collaborative document, a database) lives outside this
//! crate. [`CellStore`] is the one capability the cache layer needs from it,
//! and [`load_range`] is the fetch-on-miss flow a view runs when it scrolls.

use std::future::Future;

use crate::cache::GridCache;
use crate::cell::{Cell, Grid, Range, Ref};
use crate::error::Result;
use crate::range::in_range;

/// Source of truth for cell data
pub trait CellStore {
    /// Fetch every known cell inside `range`
    fn fetch_range(&self, range: &Range) -> impl Future<Output = Result<Grid>>;
}

/// Serve `range` from the cache, fetching it from `store` on a miss
///
/// A miss fetches the whole range, evicts any cached entry that overlaps
/// it and then caches the result, so the newest fetch is the one lookups
/// see. Callers are responsible for coalescing concurrent loads of
/// overlapping ranges and for dropping results nobody is waiting on.
pub async fn load_range<S: CellStore>(
    cache: &mut GridCache,
    store: &S,
    range: &Range,
) -> Result<Grid> {
    if cache.has_range(range) {
        tracing::debug!(range = %range, "cache hit");
        return Ok(cache.get_grid(range).await);
    }

    tracing::debug!(range = %range, "cache miss, fetching");
    let grid = store.fetch_range(range).await?;
    cache.evict(range);
    cache.set_grid(*range, grid.clone());
    Ok(grid)
}

/// A [`CellStore`] backed by a single in-memory grid
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    grid: Grid,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `grid`
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid }
    }

    /// Write a cell
    pub fn set(&mut self, r: Ref, cell: Cell) {
        self.grid.insert(r.to_sref(), cell);
    }

    /// Read a cell
    pub fn get(&self, r: &Ref) -> Option<&Cell> {
        self.grid.get(&r.to_sref())
    }

    /// Remove a cell, returning whether it existed
    pub fn delete(&mut self, r: &Ref) -> bool {
        self.grid.remove(&r.to_sref()).is_some()
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Check if the store holds no cells
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }
}

impl CellStore for MemoryStore {
    async fn fetch_range(&self, range: &Range) -> Result<Grid> {
        let mut fetched = Grid::new();
        for (sref, cell) in &self.grid {
            if in_range(&Ref::parse(sref)?, range) {
                fetched.insert(sref.clone(), cell.clone());
            }
        }
        Ok(fetched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell as Counter;

    fn rng(s: &str) -> Range {
        Range::parse(s).unwrap()
    }

    fn at(s: &str) -> Ref {
        Ref::parse(s).unwrap()
    }

    /// Counts fetches so tests can tell hits from misses
    struct CountingStore {
        inner: MemoryStore,
        fetches: Counter<usize>,
    }

    impl CellStore for CountingStore {
        async fn fetch_range(&self, range: &Range) -> Result<Grid> {
            self.fetches.set(self.fetches.get() + 1);
            self.inner.fetch_range(range).await
        }
    }

    fn sample_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set(at("A1"), Cell::value("1"));
        store.set(at("B2"), Cell::value("2"));
        store.set(at("E5"), Cell::formula("B2*2").with_value("4"));
        store
    }

    #[tokio::test]
    async fn test_memory_store_fetch_range() {
        let store = sample_store();

        let got = store.fetch_range(&rng("A1:C3")).await.unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got.get("B2"), Some(&Cell::value("2")));

        assert!(store.fetch_range(&rng("F6:G7")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_range_fetches_once() {
        let store = CountingStore {
            inner: sample_store(),
            fetches: Counter::new(0),
        };
        let mut cache = GridCache::new();

        let first = load_range(&mut cache, &store, &rng("A1:E5")).await.unwrap();
        assert_eq!(first.len(), 3);
        assert_eq!(store.fetches.get(), 1);

        // Sub-range of a cached rectangle is a hit
        let second = load_range(&mut cache, &store, &rng("A1:B2")).await.unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(store.fetches.get(), 1);

        // Reaching past it is a miss and replaces the overlapping entry
        load_range(&mut cache, &store, &rng("D4:F6")).await.unwrap();
        assert_eq!(store.fetches.get(), 2);
        assert_eq!(cache.len(), 1);
        assert!(!cache.has(&at("A1")));
        assert_eq!(cache.get(&at("E5")).and_then(|c| c.v.as_deref()), Some("4"));
    }

    #[tokio::test]
    async fn test_load_range_after_invalidation_refetches() {
        let mut store = sample_store();
        let mut cache = GridCache::new();
        load_range(&mut cache, &store, &rng("A1:C3")).await.unwrap();

        // A remote edit lands in the store and invalidates the cache
        store.set(at("A1"), Cell::value("changed"));
        cache.evict(&rng("A1:A1"));

        let got = load_range(&mut cache, &store, &rng("A1:C3")).await.unwrap();
        assert_eq!(got.get("A1"), Some(&Cell::value("changed")));
        assert_eq!(cache.get(&at("A1")), Some(&Cell::value("changed")));
    }

    #[test]
    fn test_memory_store_edits() {
        let mut store = sample_store();
        assert_eq!(store.len(), 3);
        assert!(store.delete(&at("A1")));
        assert!(!store.delete(&at("A1")));
        assert_eq!(store.get(&at("A1")), None);
        assert!(!store.is_empty());
    }
}
