//! Regions of airspace that a track can be tested against.
//!
//! [`Region`] is a closed set of shapes. Boxes, circles and polygons enclose
//! an area; a [`Window`] is a line that a track must pass through. A
//! [`Restriction`] adds an altitude band and an exclusion flag to a region.

use std::fmt;

use crate::circle::LatlongCircle;
use crate::latlong::Latlong;
use crate::latlong_box::LatlongBox;
use crate::line::LatlongLine;
use crate::polygon::Polygon;
use crate::range::OverlapOutcome;

/// A bounded line across the land, with an altitude band in feet
/// (0 means no limit on that side).
#[derive(Debug, Clone, Copy)]
pub struct Window {
    /// The gate itself.
    pub line: LatlongLine,
    /// Lowest altitude in feet; 0 for none.
    pub min_altitude: i64,
    /// Highest altitude in feet; 0 for none.
    pub max_altitude: i64,
}

impl Window {
    /// A window with no altitude limits.
    pub fn new(from: Latlong, to: Latlong) -> Self {
        Self {
            line: from.line_to(to),
            min_altitude: 0,
            max_altitude: 0,
        }
    }

    /// Returns a copy with an altitude band attached.
    #[must_use]
    pub fn with_altitudes(mut self, min_altitude: i64, max_altitude: i64) -> Self {
        self.min_altitude = min_altitude;
        self.max_altitude = max_altitude;
        self
    }

    /// True if the track segment crosses the window.
    pub fn intersects_line(&self, line: &LatlongLine) -> bool {
        self.line.intersects(line).is_some()
    }

    /// True if the altitude is inside the band.
    pub fn intersects_altitude(&self, alt: i64) -> bool {
        if self.min_altitude > 0 && alt < self.min_altitude {
            return false;
        }
        if self.max_altitude > 0 && alt > self.max_altitude {
            return false;
        }
        true
    }

    /// A window has no inside, so a crossing is the only overlap it can
    /// report, and it reports it as `StraddlesStart`.
    pub fn overlaps_line(&self, line: &LatlongLine) -> OverlapOutcome {
        if self.intersects_line(line) {
            OverlapOutcome::StraddlesStart
        } else {
            OverlapOutcome::Disjoint
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Window: {}-{} {:.1}KM, [{},{}]ft",
            self.line.from(),
            self.line.to(),
            self.line.length_km(),
            self.min_altitude,
            self.max_altitude
        )
    }
}

/// The shapes a track can be tested against.
#[derive(Debug, Clone)]
pub enum Region {
    /// An axis-aligned box.
    Box(LatlongBox),
    /// A circle.
    Circle(LatlongCircle),
    /// A planar polygon.
    Polygon(Polygon),
    /// A gate the track passes through.
    Window(Window),
}

impl Region {
    /// False for windows, which have no inside.
    pub fn can_contain(&self) -> bool {
        !matches!(self, Self::Window(_))
    }

    /// True if `pos` is inside the region; always false for windows.
    pub fn contains(&self, pos: Latlong) -> bool {
        match self {
            Self::Box(b) => b.contains(pos),
            Self::Circle(c) => c.contains(pos),
            Self::Polygon(p) => p.contains(pos),
            Self::Window(_) => false,
        }
    }

    /// Classifies the bounded line against the region.
    pub fn overlaps_line(&self, line: &LatlongLine) -> OverlapOutcome {
        match self {
            Self::Box(b) => b.overlaps_line(line),
            Self::Circle(c) => c.overlaps_line(line),
            Self::Polygon(p) => p.overlaps_line(line),
            Self::Window(w) => w.overlaps_line(line),
        }
    }

    /// True unless the line misses the region entirely.
    pub fn intersects_line(&self, line: &LatlongLine) -> bool {
        !self.overlaps_line(line).is_disjoint()
    }

    /// 2-D bounding box; `None` only for a polygon with no points.
    pub fn bounding_box(&self) -> Option<LatlongBox> {
        match self {
            Self::Box(b) => Some(*b),
            Self::Circle(c) => Some(c.bounding_box()),
            Self::Polygon(p) => p.bounding_box(),
            Self::Window(w) => Some(w.line.bounding_box()),
        }
    }

    /// The straight lines to draw for this region.
    pub fn to_lines(&self) -> Vec<LatlongLine> {
        match self {
            Self::Box(b) => b.edges().to_vec(),
            Self::Circle(_) => Vec::new(),
            Self::Polygon(p) => p.to_lines(),
            Self::Window(w) => vec![w.line],
        }
    }

    /// The circles to draw for this region.
    pub fn to_circles(&self) -> Vec<LatlongCircle> {
        match self {
            Self::Circle(c) => vec![*c],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box(b) => write!(f, "Box {b}"),
            Self::Circle(c) => write!(f, "Circle {c}"),
            Self::Polygon(p) => write!(f, "{p}"),
            Self::Window(w) => write!(f, "{w}"),
        }
    }
}

impl From<LatlongBox> for Region {
    fn from(b: LatlongBox) -> Self {
        Self::Box(b)
    }
}

impl From<LatlongCircle> for Region {
    fn from(c: LatlongCircle) -> Self {
        Self::Circle(c)
    }
}

impl From<Polygon> for Region {
    fn from(p: Polygon) -> Self {
        Self::Polygon(p)
    }
}

impl From<Window> for Region {
    fn from(w: Window) -> Self {
        Self::Window(w)
    }
}

/// A region a track must (or must not) pass through, within an altitude band.
#[derive(Debug, Clone)]
pub struct Restriction {
    /// Where the restriction applies.
    pub region: Region,
    /// Lowest altitude in feet; 0 for none.
    pub altitude_min: i64,
    /// Highest altitude in feet; 0 for none.
    pub altitude_max: i64,
    /// True when tracks must avoid the region rather than pass through it.
    pub exclusion: bool,
}

impl Restriction {
    /// An inclusive restriction with no altitude limits.
    pub fn new(region: impl Into<Region>) -> Self {
        Self {
            region: region.into(),
            altitude_min: 0,
            altitude_max: 0,
            exclusion: false,
        }
    }

    /// Returns a copy with an altitude band attached.
    #[must_use]
    pub fn with_altitudes(mut self, altitude_min: i64, altitude_max: i64) -> Self {
        self.altitude_min = altitude_min;
        self.altitude_max = altitude_max;
        self
    }

    /// Returns a copy that excludes rather than includes.
    #[must_use]
    pub fn excluding(mut self) -> Self {
        self.exclusion = true;
        self
    }

    /// True when tracks must avoid the region.
    pub fn is_exclusion(&self) -> bool {
        self.exclusion
    }

    /// True when the region carries nothing to test against.
    pub fn is_nil(&self) -> bool {
        match &self.region {
            Region::Box(b) => b.sw.exactly_equal(b.ne),
            Region::Circle(c) => c.radius_km == 0.0 || c.center.is_nil(),
            Region::Polygon(p) => p.len() < 3,
            Region::Window(w) => w.line.is_degenerate(),
        }
    }

    /// See [`Region::contains`].
    pub fn contains(&self, pos: Latlong) -> bool {
        self.region.contains(pos)
    }

    /// See [`Region::overlaps_line`].
    pub fn overlaps_line(&self, line: &LatlongLine) -> OverlapOutcome {
        self.region.overlaps_line(line)
    }

    /// Classifies an altitude (as R2) against the band: `DisjointBefore`
    /// when below the floor, `DisjointAfter` when above the ceiling,
    /// otherwise `IsContained`. Unset limits are ignored.
    pub fn overlaps_altitude(&self, alt: i64) -> OverlapOutcome {
        if self.altitude_min > 0 && alt < self.altitude_min {
            OverlapOutcome::DisjointBefore
        } else if self.altitude_max > 0 && alt > self.altitude_max {
            OverlapOutcome::DisjointAfter
        } else {
            OverlapOutcome::IsContained
        }
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.region)?;
        if self.altitude_min > 0 || self.altitude_max > 0 {
            write!(f, " [{},", self.altitude_min)?;
            if self.altitude_max > 0 {
                write!(f, "{}", self.altitude_max)?;
            } else {
                f.write_str("-")?;
            }
            f.write_str("]ft")?;
        }
        if self.exclusion {
            f.write_str("(EXCLUDES)")?;
        }
        Ok(())
    }
}
