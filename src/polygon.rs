//! Planar polygons with ray-cast containment.
//!
//! The boundary is the ordered point list, implicitly closed from the last
//! point back to the first. Nothing checks that the boundary is simple.
//!
//! Containment casts a ray from the test point to a point outside the
//! bounding box and counts edge crossings. A ray that runs along an edge is
//! not handled and can give the wrong parity.

use std::fmt;

use crate::error::GeoError;
use crate::latlong::Latlong;
use crate::latlong_box::LatlongBox;
use crate::line::LatlongLine;
use crate::range::OverlapOutcome;

// Step used to walk the ray's far end out of the bounding box.
const RAY_STEP_LAT: f64 = 10.0;
const RAY_STEP_LONG: f64 = 11.7;

/// An ordered ring of points.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    points: Vec<Latlong>,
}

impl Polygon {
    /// Creates an empty polygon; add points with [`Polygon::add_point`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a polygon from its boundary points, in order.
    ///
    /// # Errors
    /// [`GeoError::EmptyPointSet`] if there are no points, or
    /// [`GeoError::NonFiniteCoordinate`] if any point is NaN or infinite.
    pub fn from_points(points: impl IntoIterator<Item = Latlong>) -> Result<Self, GeoError> {
        let points: Vec<Latlong> = points.into_iter().collect();
        if points.is_empty() {
            return Err(GeoError::EmptyPointSet);
        }
        if let Some(value) = points.iter().find(|p| !p.is_finite()) {
            return Err(GeoError::NonFiniteCoordinate { value: *value });
        }
        Ok(Self { points })
    }

    /// Appends a boundary point. Order matters.
    pub fn add_point(&mut self, pos: Latlong) {
        self.points.push(pos);
    }

    /// The boundary points, in order.
    pub fn points(&self) -> &[Latlong] {
        &self.points
    }

    /// Number of boundary points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no points have been added.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean of the boundary points; `None` for an empty polygon.
    pub fn centroid(&self) -> Option<Latlong> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (lats, longs) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(lats, longs), p| (lats + p.lat, longs + p.long));
        Some(Latlong::new(lats / n, longs / n))
    }

    /// Mean great-circle distance from the centroid to each point, in km.
    pub fn approx_radius_km(&self) -> Option<f64> {
        let c = self.centroid()?;
        let total: f64 = self.points.iter().map(|p| c.dist_km(*p)).sum();
        Some(total / self.points.len() as f64)
    }

    /// Bounding box of the points; `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<LatlongBox> {
        LatlongBox::from_points(&self.points).ok()
    }

    /// The boundary edges, including the closing edge back to the start.
    pub fn to_lines(&self) -> Vec<LatlongLine> {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].line_to(self.points[(i + 1) % n]))
            .collect()
    }

    /// Every point where the bounded line crosses the boundary.
    ///
    /// A line through a vertex hits both edges that meet there; such
    /// repeats are collapsed, so each crossing point appears once.
    pub fn intersects_line(&self, line: &LatlongLine) -> Vec<Latlong> {
        let mut found: Vec<Latlong> = Vec::new();
        for edge in self.to_lines() {
            let Some(p) = edge.intersects(line) else {
                continue;
            };
            if !found.contains(&p) {
                found.push(p);
            }
        }
        found
    }

    /// Ray-cast point-in-polygon test.
    pub fn contains(&self, pos: Latlong) -> bool {
        let Some(bound) = self.bounding_box() else {
            return false;
        };
        if !bound.is_finite() || !bound.contains(pos) {
            return false;
        }

        let mut ray_end = Latlong::new(0.0, 0.0);
        while bound.contains(ray_end) {
            ray_end.lat += RAY_STEP_LAT;
            ray_end.long += RAY_STEP_LONG;
        }

        let crossings = self.intersects_line(&pos.line_to(ray_end)).len();
        crossings % 2 == 1
    }

    /// Classifies a bounded line against the polygon, with the same outcome
    /// convention as [`LatlongBox::overlaps_line`].
    pub fn overlaps_line(&self, line: &LatlongLine) -> OverlapOutcome {
        let Some(bound) = self.bounding_box() else {
            return OverlapOutcome::Disjoint;
        };
        if !bound.intersects_box(&line.bounding_box()) {
            return OverlapOutcome::Disjoint;
        }

        match (self.contains(line.from()), self.contains(line.to())) {
            (true, true) => OverlapOutcome::IsContained,
            (true, false) => OverlapOutcome::StraddlesEnd,
            (false, true) => OverlapOutcome::StraddlesStart,
            (false, false) if !self.intersects_line(line).is_empty() => OverlapOutcome::Contains,
            (false, false) => OverlapOutcome::Disjoint,
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.centroid(), self.approx_radius_km()) {
            (Some(c), Some(r)) => write!(
                f,
                "Poly n={}, center={}, avg radius={:.2}KM",
                self.points.len(),
                c,
                r
            ),
            _ => write!(f, "Poly n=0"),
        }
    }
}
