//! Expansion of mixed reference/range text into individual references

use crate::cell::{Range, Ref};
use crate::error::Result;
use crate::range::{to_refs, RefIter};

/// Whether the text names a range (`A1:B2`) rather than a single cell
pub fn is_srng(reference: &str) -> bool {
    reference.contains(':')
}

/// Expand references and ranges into individual A1-style references
///
/// Entries are visited in iteration order. A single reference is yielded
/// as given once it validates; a range is expanded row-major. An invalid
/// entry yields one `Err` in its place and enumeration moves on, so
/// `collect::<Result<Vec<_>>>()` stops at the first bad entry.
///
/// # Examples
/// ```
/// use gridcache_core::to_srefs;
///
/// let srefs: Vec<String> = to_srefs(["A1:B2", "D4"])
///     .collect::<gridcache_core::Result<_>>()
///     .unwrap();
/// assert_eq!(srefs, ["A1", "B1", "A2", "B2", "D4"]);
/// ```
pub fn to_srefs<I>(references: I) -> SrefIter<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    SrefIter {
        references: references.into_iter(),
        expanding: None,
    }
}

/// Iterator returned by [`to_srefs`]
#[derive(Debug, Clone)]
pub struct SrefIter<I> {
    references: I,
    expanding: Option<RefIter>,
}

impl<I> Iterator for SrefIter<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(refs) = self.expanding.as_mut() {
                if let Some(r) = refs.next() {
                    return Some(Ok(r.to_sref()));
                }
                self.expanding = None;
            }

            let reference = self.references.next()?;
            let reference = reference.as_ref();

            if !is_srng(reference) {
                return Some(Ref::parse(reference).map(|_| reference.to_string()));
            }

            match Range::parse(reference) {
                Ok(range) => self.expanding = Some(to_refs(&range)),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
