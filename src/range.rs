//! One-dimensional ranges and the overlap classifier everything else is built on.
//!
//! A range is anything with a start and an end that can be projected onto
//! `f64`: plain floats, integer altitudes, or time instants. The classifier
//! answers "where does the second range (R2) sit relative to the first (R1)?".

use std::fmt;

use chrono::{DateTime, Utc};

/// How a second range or region (R2) relates to a first one (R1).
///
/// `DisjointBefore`/`DisjointAfter` and the two straddle variants only make
/// sense for ordered (1-D) domains. `Disjoint` and `Straddles` are used for
/// 2-D regions, which have no ordering.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlapOutcome {
    /// R2 lies entirely before R1.
    DisjointBefore,
    /// R2 lies entirely after R1.
    DisjointAfter,
    /// R2 starts before R1 and ends inside it.
    StraddlesStart,
    /// R2 starts inside R1 and ends after it.
    StraddlesEnd,
    /// R2 lies within R1.
    IsContained,
    /// R1 lies within R2.
    Contains,
    /// Unordered regions with no overlap.
    Disjoint,
    /// Unordered regions that partially overlap.
    Straddles,
}

impl OverlapOutcome {
    /// True for any of the disjoint variants.
    pub fn is_disjoint(self) -> bool {
        matches!(
            self,
            Self::DisjointBefore | Self::DisjointAfter | Self::Disjoint
        )
    }

    /// True when one side fully contains the other, in either direction.
    pub fn is_contained(self) -> bool {
        matches!(self, Self::IsContained | Self::Contains)
    }
}

impl fmt::Display for OverlapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DisjointBefore => "DisjointBefore",
            Self::DisjointAfter => "DisjointAfter",
            Self::StraddlesStart => "StraddlesStart",
            Self::StraddlesEnd => "StraddlesEnd",
            Self::IsContained => "IsContained",
            Self::Contains => "Contains",
            Self::Disjoint => "Disjoint",
            Self::Straddles => "Straddles",
        };
        f.write_str(name)
    }
}

/// Anything shaped like `{start, end}` over an ordered scalar domain.
pub trait Span {
    /// Start of the range, projected to `f64`.
    fn start(&self) -> f64;
    /// End of the range, projected to `f64`.
    fn end(&self) -> f64;
}

/// Classifies how `r2` relates to `r1`.
///
/// The order of the checks matters: ranges that merely touch at a boundary
/// fall through to the containment branches, never the straddle ones. When
/// the two ranges are identical the answer is `IsContained`.
pub fn range_overlap<R1, R2>(r1: &R1, r2: &R2) -> OverlapOutcome
where
    R1: Span + ?Sized,
    R2: Span + ?Sized,
{
    if r1.start() > r2.end() {
        OverlapOutcome::DisjointBefore
    } else if r1.end() < r2.start() {
        OverlapOutcome::DisjointAfter
    } else if r2.end() > r1.end() && r2.start() > r1.start() {
        OverlapOutcome::StraddlesEnd
    } else if r2.end() < r1.end() && r2.start() < r1.start() {
        OverlapOutcome::StraddlesStart
    } else if r2.start() >= r1.start() {
        OverlapOutcome::IsContained
    } else {
        OverlapOutcome::Contains
    }
}

/// A range of floats (degrees, feet, line parameters...).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float64Range {
    /// Start value.
    pub start: f64,
    /// End value.
    pub end: f64,
}

impl Float64Range {
    /// Creates a range; no ordering is enforced.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

impl Span for Float64Range {
    fn start(&self) -> f64 {
        self.start
    }
    fn end(&self) -> f64 {
        self.end
    }
}

/// A range of integers, e.g. altitude floor/ceiling in feet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Int64Range {
    /// Start value.
    pub start: i64,
    /// End value.
    pub end: i64,
}

impl Int64Range {
    /// Creates a range; no ordering is enforced.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

impl Span for Int64Range {
    fn start(&self) -> f64 {
        self.start as f64
    }
    fn end(&self) -> f64 {
        self.end as f64
    }
}

/// A span of time between two instants.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    /// First instant.
    pub start: DateTime<Utc>,
    /// Last instant.
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range; no ordering is enforced.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// Seconds since the epoch, with the sub-second part as a fraction.
pub fn instant_to_f64(t: DateTime<Utc>) -> f64 {
    t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) / 1_000_000_000.0
}

impl Span for TimeRange {
    fn start(&self) -> f64 {
        instant_to_f64(self.start)
    }
    fn end(&self) -> f64 {
        instant_to_f64(self.end)
    }
}
