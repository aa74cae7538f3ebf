//! Axis-aligned latitude/longitude boxes and their overlap classification.

use std::fmt;

use crate::error::GeoError;
use crate::latlong::Latlong;
use crate::line::LatlongLine;
use crate::range::{Float64Range, OverlapOutcome, range_overlap};

/// Kilometres per degree of latitude, measured near SFO.
pub const KM_PER_LATITUDE_DEGREE: f64 = 111.2;
/// Kilometres per degree of longitude, measured near SFO (37.6N).
pub const KM_PER_LONGITUDE_DEGREE: f64 = 88.08;

/// A box given by its south-west and north-east corners, with an optional
/// altitude band in feet (0 means "no constraint" for either side).
///
/// Every constructor keeps `sw.lat <= ne.lat` and `sw.long <= ne.long`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatlongBox {
    /// South-west corner.
    pub sw: Latlong,
    /// North-east corner.
    pub ne: Latlong,
    /// Lowest altitude in feet; 0 for none.
    pub floor: i64,
    /// Highest altitude in feet; 0 for none.
    pub ceil: i64,
}

impl LatlongBox {
    /// Builds a box from any two opposite corners.
    pub fn new(a: Latlong, b: Latlong) -> Self {
        a.box_to(b)
    }

    /// See [`Latlong::centered_box`].
    pub fn centered(center: Latlong, width_km: f64, height_km: f64) -> Self {
        center.centered_box(width_km, height_km)
    }

    /// The smallest box holding every point.
    ///
    /// # Errors
    /// [`GeoError::EmptyPointSet`] if `points` is empty.
    pub fn from_points(points: &[Latlong]) -> Result<Self, GeoError> {
        let (first, rest) = points.split_first().ok_or(GeoError::EmptyPointSet)?;
        let mut bbox = first.box_to(*first);
        for p in rest {
            bbox.enclose(*p);
        }
        Ok(bbox)
    }

    /// Returns a copy with an altitude band attached.
    #[must_use]
    pub fn with_altitudes(mut self, floor: i64, ceil: i64) -> Self {
        self.floor = floor;
        self.ceil = ceil;
        self
    }

    /// South-east corner.
    pub fn se(&self) -> Latlong {
        Latlong::new(self.sw.lat, self.ne.long)
    }

    /// North-west corner.
    pub fn nw(&self) -> Latlong {
        Latlong::new(self.ne.lat, self.sw.long)
    }

    /// Southern edge, west to east.
    pub fn bottom_side(&self) -> LatlongLine {
        self.sw.line_to(self.se())
    }

    /// Western edge, south to north.
    pub fn left_side(&self) -> LatlongLine {
        self.sw.line_to(self.nw())
    }

    /// Northern edge, west to east.
    pub fn top_side(&self) -> LatlongLine {
        self.nw().line_to(self.ne)
    }

    /// Eastern edge, south to north.
    pub fn right_side(&self) -> LatlongLine {
        self.se().line_to(self.ne)
    }

    /// All four edges: bottom, left, right, top.
    pub fn edges(&self) -> [LatlongLine; 4] {
        [
            self.bottom_side(),
            self.left_side(),
            self.right_side(),
            self.top_side(),
        ]
    }

    /// Width in degrees of longitude.
    pub fn long_width(&self) -> f64 {
        self.ne.long - self.sw.long
    }

    /// Height in degrees of latitude.
    pub fn lat_height(&self) -> f64 {
        self.ne.lat - self.sw.lat
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Latlong {
        Latlong::new(
            (self.sw.lat + self.ne.lat) / 2.0,
            (self.sw.long + self.ne.long) / 2.0,
        )
    }

    /// True when both corners are finite.
    pub fn is_finite(&self) -> bool {
        self.sw.is_finite() && self.ne.is_finite()
    }

    /// Inclusive containment; points on an edge are inside.
    pub fn contains(&self, pos: Latlong) -> bool {
        !(pos.long < self.sw.long
            || pos.lat < self.sw.lat
            || pos.long > self.ne.long
            || pos.lat > self.ne.lat)
    }

    /// Grows the box, if needed, so that it covers `pos`.
    pub fn enclose(&mut self, pos: Latlong) {
        if pos.long < self.sw.long {
            self.sw.long = pos.long;
        }
        if pos.lat < self.sw.lat {
            self.sw.lat = pos.lat;
        }
        if pos.long > self.ne.long {
            self.ne.long = pos.long;
        }
        if pos.lat > self.ne.lat {
            self.ne.lat = pos.lat;
        }
    }

    /// Latitude extent as a range.
    pub fn lat_range(&self) -> Float64Range {
        Float64Range::new(self.sw.lat, self.ne.lat)
    }

    /// Longitude extent as a range.
    pub fn long_range(&self) -> Float64Range {
        Float64Range::new(self.sw.long, self.ne.long)
    }

    /// Classifies how `other` relates to this box.
    ///
    /// The returned fraction is always 1.0 for overlapping boxes and 0.0 for
    /// disjoint ones; it is not a real measure of the overlap area.
    pub fn overlaps_with(&self, other: &Self) -> (OverlapOutcome, f64) {
        let lat = range_overlap(&self.lat_range(), &other.lat_range());
        let long = range_overlap(&self.long_range(), &other.long_range());

        if lat.is_disjoint() || long.is_disjoint() {
            return (OverlapOutcome::Disjoint, 0.0);
        }
        if lat == long && lat.is_contained() {
            return (lat, 1.0);
        }
        (OverlapOutcome::Straddles, 1.0)
    }

    /// True unless the boxes are disjoint.
    pub fn intersects_box(&self, other: &Self) -> bool {
        !self.overlaps_with(other).0.is_disjoint()
    }

    /// Classifies how a bounded line relates to this box.
    ///
    /// With the line as R2: both ends inside is `IsContained`; only the
    /// start inside is `StraddlesEnd`; only the end inside is
    /// `StraddlesStart`; neither end inside but crossing an edge is
    /// `Contains`; anything else is `Disjoint`.
    pub fn overlaps_line(&self, line: &LatlongLine) -> OverlapOutcome {
        if !self.intersects_box(&line.bounding_box()) {
            return OverlapOutcome::Disjoint;
        }

        match (self.contains(line.from()), self.contains(line.to())) {
            (true, true) => OverlapOutcome::IsContained,
            (true, false) => OverlapOutcome::StraddlesEnd,
            (false, true) => OverlapOutcome::StraddlesStart,
            (false, false) => {
                if self.edges().iter().any(|edge| edge.intersects(line).is_some()) {
                    OverlapOutcome::Contains
                } else {
                    OverlapOutcome::Disjoint
                }
            }
        }
    }

    /// True unless the line misses the box entirely.
    pub fn intersects_line(&self, line: &LatlongLine) -> bool {
        !self.overlaps_line(line).is_disjoint()
    }

    /// Checks an altitude against the floor/ceiling, ignoring unset limits.
    pub fn intersects_altitude(&self, alt: i64) -> bool {
        if self.floor > 0 && alt < self.floor {
            return false;
        }
        if self.ceil > 0 && alt > self.ceil {
            return false;
        }
        true
    }
}

impl fmt::Display for LatlongBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.sw, self.ne)?;
        if self.floor > 0 || self.ceil > 0 {
            write!(f, "[{},{}]", self.floor, self.ceil)?;
        }
        Ok(())
    }
}

impl Latlong {
    /// The box with this point and `to` as opposite corners.
    pub fn box_to(self, to: Self) -> LatlongBox {
        LatlongBox {
            sw: Self::new(self.lat.min(to.lat), self.long.min(to.long)),
            ne: Self::new(self.lat.max(to.lat), self.long.max(to.long)),
            floor: 0,
            ceil: 0,
        }
    }

    /// A box centred here, `width_km` wide and `height_km` tall.
    ///
    /// Uses fixed km-per-degree figures, so it is only accurate near 37N.
    pub fn centered_box(self, width_km: f64, height_km: f64) -> LatlongBox {
        let lat_offset = (height_km / KM_PER_LATITUDE_DEGREE) / 2.0;
        let long_offset = (width_km / KM_PER_LONGITUDE_DEGREE) / 2.0;
        LatlongBox {
            sw: Self::new(self.lat - lat_offset, self.long - long_offset),
            ne: Self::new(self.lat + lat_offset, self.long + long_offset),
            floor: 0,
            ceil: 0,
        }
    }
}
