use std::ops::RangeInclusive;

use serde::Deserialize;

/// Highest code point in the Basic Multilingual Plane.
pub const BMP_MAX: u32 = 0xFFFF;

/// One range endpoint as supplied by the caller: a character or a raw code
/// point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PointSpec {
    Char(char),
    Code(u32),
}

impl PointSpec {
    /// Code point value of the endpoint.
    pub fn value(self) -> u32 {
        match self {
            PointSpec::Char(c) => c as u32,
            PointSpec::Code(code) => code,
        }
    }
}

impl From<char> for PointSpec {
    fn from(value: char) -> Self {
        PointSpec::Char(value)
    }
}

impl From<u32> for PointSpec {
    fn from(value: u32) -> Self {
        PointSpec::Code(value)
    }
}

/// One user-supplied character range: a single endpoint, or an inclusive
/// interval between two endpoints given in either order.
///
/// Accepted source forms are a bare endpoint, a one-element array, and a
/// two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRangeSpec")]
pub enum RangeSpec {
    Single(PointSpec),
    Interval(PointSpec, PointSpec),
}

impl RangeSpec {
    pub fn single(point: impl Into<PointSpec>) -> Self {
        RangeSpec::Single(point.into())
    }

    pub fn interval(a: impl Into<PointSpec>, b: impl Into<PointSpec>) -> Self {
        RangeSpec::Interval(a.into(), b.into())
    }

    /// Inclusive code point interval covered by this range, clipped to the
    /// Basic Multilingual Plane.
    ///
    /// A range lying entirely above the plane resolves to nothing; one
    /// straddling the boundary is clipped at [`BMP_MAX`]. Neither is an
    /// error.
    pub fn resolve(self) -> Option<RangeInclusive<u32>> {
        let (lo, hi) = match self {
            RangeSpec::Single(point) => (point.value(), point.value()),
            RangeSpec::Interval(a, b) => {
                let (a, b) = (a.value(), b.value());
                (a.min(b), a.max(b))
            }
        };
        if lo > BMP_MAX {
            return None;
        }
        Some(lo..=hi.min(BMP_MAX))
    }
}

/// Source form of a range before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawRangeSpec {
    Point(PointSpec),
    Bounds(Vec<PointSpec>),
}

impl TryFrom<RawRangeSpec> for RangeSpec {
    type Error = String;

    fn try_from(raw: RawRangeSpec) -> Result<Self, Self::Error> {
        match raw {
            RawRangeSpec::Point(point) => Ok(RangeSpec::Single(point)),
            RawRangeSpec::Bounds(bounds) => match bounds.as_slice() {
                [point] => Ok(RangeSpec::Single(*point)),
                [a, b] => Ok(RangeSpec::Interval(*a, *b)),
                other => Err(format!(
                    "range must have one or two endpoints, got {}",
                    other.len()
                )),
            },
        }
    }
}
