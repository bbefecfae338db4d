//! Range algebra: containment, intersection, border strips and enumeration
//!
//! Every function here expects normalized ranges (`from` is the top-left
//! corner, `to` the bottom-right). Nothing is reordered on the caller's
//! behalf; see [`to_range`] for that.

use crate::cell::{Grid, Range, Ref};
use crate::error::Result;

/// Whether `r` lies inside the inclusive rectangle `range`
pub fn in_range(r: &Ref, range: &Range) -> bool {
    range.from.r <= r.r && r.r <= range.to.r && range.from.c <= r.c && r.c <= range.to.c
}

/// Whether both corners of `inner` lie inside `outer`
pub fn is_range_in_range(inner: &Range, outer: &Range) -> bool {
    in_range(&inner.from, outer) && in_range(&inner.to, outer)
}

/// Whether two ranges share at least one cell
pub fn is_intersect(a: &Range, b: &Range) -> bool {
    a.from.r <= b.to.r && a.to.r >= b.from.r && a.from.c <= b.to.c && a.to.c >= b.from.c
}

/// Whether the range is a single cell
pub fn is_collapsed_range(range: &Range) -> bool {
    range.from == range.to
}

/// Build a normalized range from two arbitrary corners
pub fn to_range(a: Ref, b: Ref) -> Range {
    Range::new(
        Ref::new(a.r.min(b.r), a.c.min(b.c)),
        Ref::new(a.r.max(b.r), a.c.max(b.c)),
    )
}

/// Smallest range covering both inputs
pub fn merge_ranges(a: &Range, b: &Range) -> Range {
    Range::new(
        Ref::new(a.from.r.min(b.from.r), a.from.c.min(b.from.c)),
        Ref::new(a.to.r.max(b.to.r), a.to.c.max(b.to.c)),
    )
}

/// Grow a range on every side by `rate` times its extent
///
/// The extent is `to - from` per axis, and the change is rounded down. A
/// negative `rate` shrinks the range instead; shrinking past the middle
/// yields a range whose corners are out of order. Corners are clamped to
/// rows and columns `1..=u32::MAX`.
pub fn expand_range(range: &Range, rate: f64) -> Range {
    let row_delta = ((range.to.r - range.from.r) as f64 * rate).floor() as i64;
    let col_delta = ((range.to.c - range.from.c) as f64 * rate).floor() as i64;

    let clamp = |v: i64| v.clamp(1, u32::MAX as i64) as u32;

    Range::new(
        Ref::new(
            clamp(range.from.r as i64 - row_delta),
            clamp(range.from.c as i64 - col_delta),
        ),
        Ref::new(
            clamp(range.to.r as i64 + row_delta),
            clamp(range.to.c as i64 + col_delta),
        ),
    )
}

/// Bounding box of every key in `grid`, or `None` for an empty grid
pub fn range_of(grid: &Grid) -> Result<Option<Range>> {
    let mut bounds: Option<Range> = None;

    for sref in grid.keys() {
        let r = Ref::parse(sref)?;
        bounds = Some(match bounds {
            Some(b) => merge_ranges(&b, &Range::single(r)),
            None => Range::single(r),
        });
    }

    Ok(bounds)
}

/// Iterate every cell of `range` in row-major order
///
/// Each call returns a fresh iterator; restarting means calling again.
pub fn to_refs(range: &Range) -> RefIter {
    RefIter::new(*range)
}

/// The one-cell-thick strips adjacent to `range`, clipped by `dimension`
///
/// Strips come out in the order top, bottom, left, right. Each spans the
/// row or column extent of `range` itself. A strip whose shifted row or
/// column falls outside `dimension` is omitted entirely.
pub fn to_border_ranges(range: &Range, dimension: &Range) -> Vec<Range> {
    let mut borders = Vec::with_capacity(4);

    if range.from.r > dimension.from.r {
        let r = range.from.r - 1;
        borders.push(Range::new(
            Ref::new(r, range.from.c),
            Ref::new(r, range.to.c),
        ));
    }

    if range.to.r < dimension.to.r {
        let r = range.to.r + 1;
        borders.push(Range::new(
            Ref::new(r, range.from.c),
            Ref::new(r, range.to.c),
        ));
    }

    if range.from.c > dimension.from.c {
        let c = range.from.c - 1;
        borders.push(Range::new(
            Ref::new(range.from.r, c),
            Ref::new(range.to.r, c),
        ));
    }

    if range.to.c < dimension.to.c {
        let c = range.to.c + 1;
        borders.push(Range::new(
            Ref::new(range.from.r, c),
            Ref::new(range.to.r, c),
        ));
    }

    borders
}

impl Range {
    /// Check if a cell is within this range
    pub fn contains(&self, r: &Ref) -> bool {
        in_range(r, self)
    }

    /// Check if another range lies entirely within this one
    pub fn contains_range(&self, inner: &Range) -> bool {
        is_range_in_range(inner, self)
    }

    /// Check if this range overlaps with another
    pub fn intersects(&self, other: &Range) -> bool {
        is_intersect(self, other)
    }

    /// Iterate over all cell references in the range (row by row)
    pub fn refs(&self) -> RefIter {
        to_refs(self)
    }

    /// Border strips of this range within `dimension`
    pub fn border_ranges(&self, dimension: &Range) -> Vec<Range> {
        to_border_ranges(self, dimension)
    }
}

/// Iterator over cells in a range, row-major
#[derive(Debug, Clone)]
pub struct RefIter {
    range: Range,
    next: Option<Ref>,
}

impl RefIter {
    fn new(range: Range) -> Self {
        let next = (range.from.r <= range.to.r && range.from.c <= range.to.c).then_some(range.from);
        Self { range, next }
    }

    fn remaining(&self) -> u64 {
        match self.next {
            None => 0,
            Some(cur) => {
                let full_rows = (self.range.to.r - cur.r) as u64;
                let in_row = (self.range.to.c - cur.c) as u64 + 1;
                full_rows * self.range.col_count() as u64 + in_row
            }
        }
    }
}

impl Iterator for RefIter {
    type Item = Ref;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        // Move to next cell
        self.next = if current.c < self.range.to.c {
            Some(Ref::new(current.r, current.c + 1))
        } else if current.r < self.range.to.r {
            Some(Ref::new(current.r + 1, self.range.from.c))
        } else {
            None
        };

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
