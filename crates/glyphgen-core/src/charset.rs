use std::collections::BTreeSet;

use crate::ranges::RangeSpec;

/// An immutable, deduplicated set of Basic Multilingual Plane characters.
///
/// Sets are materialized eagerly: the domain is bounded by the plane, so even
/// a plane-wide range stays small enough to enumerate. Points are kept in
/// code point order for cheap membership tests and indexed access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    points: Vec<char>,
}

impl CharSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a list of ranges into the union of their code points.
    ///
    /// Code points above the plane are clipped away, and surrogate values
    /// are dropped: neither can appear in output, and neither is an error.
    pub fn from_specs(specs: &[RangeSpec]) -> Self {
        let mut points = BTreeSet::new();
        for spec in specs {
            if let Some(range) = spec.resolve() {
                points.extend(range.filter_map(char::from_u32));
            }
        }
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut points: BTreeSet<char> = self.points.iter().copied().collect();
        points.extend(other.points.iter().copied());
        Self {
            points: points.into_iter().collect(),
        }
    }

    pub fn difference(&self, other: &Self) -> Self {
        Self {
            points: self
                .points
                .iter()
                .copied()
                .filter(|point| !other.contains(*point))
                .collect(),
        }
    }

    pub fn contains(&self, point: char) -> bool {
        self.points.binary_search(&point).is_ok()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Character at `index` in code point order.
    ///
    /// Panics if `index >= len()`; sampling callers bound it by [`len`].
    ///
    /// [`len`]: CharSet::len
    pub fn get(&self, index: usize) -> char {
        self.points[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.points.iter().copied()
    }
}
