//! Circles on the Earth's surface.

use std::fmt;

use crate::latlong::Latlong;
use crate::latlong_box::{KM_PER_LATITUDE_DEGREE, KM_PER_LONGITUDE_DEGREE, LatlongBox};
use crate::line::LatlongLine;
use crate::range::OverlapOutcome;

/// A centre point and a radius in kilometres.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LatlongCircle {
    /// Centre of the circle.
    pub center: Latlong,
    /// Radius, in kilometres.
    pub radius_km: f64,
}

impl LatlongCircle {
    /// Creates a circle.
    pub fn new(center: Latlong, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Strictly inside the radius (great-circle distance).
    pub fn contains(&self, pos: Latlong) -> bool {
        self.center.dist_km(pos) < self.radius_km
    }

    /// An approximate bounding box, using the same km-per-degree figures as
    /// [`Latlong::centered_box`].
    pub fn bounding_box(&self) -> LatlongBox {
        let lat_offset = self.radius_km / KM_PER_LATITUDE_DEGREE;
        let long_offset = self.radius_km / KM_PER_LONGITUDE_DEGREE;
        LatlongBox::new(
            Latlong::new(self.center.lat - lat_offset, self.center.long - long_offset),
            Latlong::new(self.center.lat + lat_offset, self.center.long + long_offset),
        )
    }

    /// Classifies a bounded line against the circle, with the same outcome
    /// convention as [`LatlongBox::overlaps_line`].
    pub fn overlaps_line(&self, line: &LatlongLine) -> OverlapOutcome {
        match (self.contains(line.from()), self.contains(line.to())) {
            (true, true) => OverlapOutcome::IsContained,
            (true, false) => OverlapOutcome::StraddlesEnd,
            (false, true) => OverlapOutcome::StraddlesStart,
            (false, false) => {
                // both ends outside; the segment's nearest point decides
                let Ok(foot) = line.closest_to(self.center) else {
                    return OverlapOutcome::Disjoint;
                };
                if line.bounding_box().contains(foot) && self.contains(foot) {
                    OverlapOutcome::Contains
                } else {
                    OverlapOutcome::Disjoint
                }
            }
        }
    }
}

impl fmt::Display for LatlongCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, rad={:.1}", self.center, self.radius_km)
    }
}

impl Latlong {
    /// A circle of `radius_km` around this point.
    pub fn circle(self, radius_km: f64) -> LatlongCircle {
        LatlongCircle::new(self, radius_km)
    }
}
