//! Contiguous group partitioning over a flat group-id column.
//!
//! Groups are maximal runs of equal ids in input order. Nothing is re-ordered:
//! if the same id appears in two separate runs it forms two groups, so callers
//! wanting one group per id must pre-sort the column.

use std::iter::FusedIterator;
use std::ops::Range;

/// Iterator over `[begin, end)` ranges of consecutive equal group ids.
#[derive(Debug, Clone)]
pub struct GroupRanges<'a, G> {
    group_ids: &'a [G],
    begin: usize,
}

/// Splits `group_ids` into contiguous runs.
///
/// Ranges are non-overlapping, appear in input order, and together cover
/// `0..group_ids.len()` exactly once. An empty column yields no ranges.
pub fn group_ranges<G: PartialEq>(group_ids: &[G]) -> GroupRanges<'_, G> {
    GroupRanges {
        group_ids,
        begin: 0,
    }
}

impl<G: PartialEq> Iterator for GroupRanges<'_, G> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let begin = self.begin;
        let first = self.group_ids.get(begin)?;
        let end = self.group_ids[begin + 1..]
            .iter()
            .position(|id| id != first)
            .map_or(self.group_ids.len(), |offset| begin + 1 + offset);
        self.begin = end;
        Some(begin..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.group_ids.len() - self.begin;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<G: PartialEq> FusedIterator for GroupRanges<'_, G> {}
