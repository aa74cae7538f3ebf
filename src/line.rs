//! Lines between two anchor points, in planar `(x = long, y = lat)` space.
//!
//! Each line keeps its anchors plus the slope `m` and intercept `b` of
//! `y = m.x + b`, computed once at construction. Vertical lines have an
//! infinite slope and no usable intercept, so every slope-based operation
//! branches on verticality first. Zero-length lines have no slope at all;
//! operations that need one reject them with [`GeoError::DegenerateLine`]
//! or report no result.

use std::fmt;

use crate::error::GeoError;
use crate::latlong::Latlong;
use crate::latlong_box::LatlongBox;

/// How far a point may sit from a line, in kilometres, and still lie on it.
pub const LINE_SNAP_KM: f64 = 0.3;

/// Which side of a directed line a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// To the left when travelling from `from` to `to`.
    Left,
    /// Exactly on the (infinite) line.
    On,
    /// To the right when travelling from `from` to `to`.
    Right,
}

/// A line defined by two anchor points.
///
/// Treated as infinite by the equation-based operations and as the bounded
/// segment `from -> to` by [`LatlongLine::intersects`] and [`Latlong::lies_on`].
#[derive(Debug, Clone, Copy)]
pub struct LatlongLine {
    from: Latlong,
    to: Latlong,
    m: f64,
    b: f64,
}

fn calc_m(p1: Latlong, p2: Latlong) -> f64 {
    (p2.y() - p1.y()) / (p2.x() - p1.x())
}

// b is the value of y where x == 0; meaningless for a vertical line.
fn calc_b(m: f64, p: Latlong) -> f64 {
    if m.is_infinite() {
        return f64::NAN;
    }
    p.y() - m * p.x()
}

impl LatlongLine {
    /// Builds the line through two points. A zero-length line is allowed
    /// here but rejected by the operations that need a slope.
    pub fn new(from: Latlong, to: Latlong) -> Self {
        let m = calc_m(from, to);
        Self {
            from,
            to,
            m,
            b: calc_b(m, to),
        }
    }

    /// Builds the line, rejecting a zero-length one up front.
    ///
    /// # Errors
    /// [`GeoError::DegenerateLine`] if `from` and `to` coincide.
    pub fn try_new(from: Latlong, to: Latlong) -> Result<Self, GeoError> {
        let line = Self::new(from, to);
        if line.is_degenerate() {
            Err(GeoError::DegenerateLine { at: from })
        } else {
            Ok(line)
        }
    }

    /// First anchor point.
    pub fn from(&self) -> Latlong {
        self.from
    }

    /// Second anchor point.
    pub fn to(&self) -> Latlong {
        self.to
    }

    /// Slope; infinite for vertical lines, NaN for degenerate ones.
    pub fn slope(&self) -> f64 {
        self.m
    }

    /// The y-intercept, or `None` for vertical and degenerate lines.
    pub fn intercept(&self) -> Option<f64> {
        if self.is_vertical() || self.is_degenerate() {
            None
        } else {
            Some(self.b)
        }
    }

    /// True when both anchors share a longitude (and are distinct).
    pub fn is_vertical(&self) -> bool {
        self.m.is_infinite()
    }

    /// True for a zero-length line.
    pub fn is_degenerate(&self) -> bool {
        self.from.exactly_equal(self.to) || self.m.is_nan()
    }

    /// Applies the line equation; `None` when there is no single answer.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        self.intercept().map(|b| self.m * x + b)
    }

    /// Great-circle length of the segment, in kilometres.
    pub fn length_km(&self) -> f64 {
        self.from.dist_km(self.to)
    }

    /// The smallest box holding both anchors.
    pub fn bounding_box(&self) -> LatlongBox {
        self.from.box_to(self.to)
    }

    fn ensure_slope(&self) -> Result<(), GeoError> {
        if self.is_degenerate() {
            Err(GeoError::DegenerateLine { at: self.from })
        } else {
            Ok(())
        }
    }

    /// Intersection of the two lines, both treated as infinite.
    ///
    /// Returns `None` for parallel lines (including two vertical ones) and
    /// when either line is degenerate.
    pub fn intersect_infinite(&self, other: &Self) -> Option<Latlong> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }
        if self.m == other.m || (self.is_vertical() && other.is_vertical()) {
            return None;
        }

        let point = if self.is_vertical() {
            // x is fixed by our anchor; read y off the other line
            let x = self.from.x();
            Latlong::new(other.m * x + other.b, x)
        } else if other.is_vertical() {
            let x = other.from.x();
            Latlong::new(self.m * x + self.b, x)
        } else if self.m == 0.0 {
            // keep y exact so axis-aligned edges pass the bounds check
            let y = self.b;
            Latlong::new(y, (y - other.b) / other.m)
        } else if other.m == 0.0 {
            let y = other.b;
            Latlong::new(y, (y - self.b) / self.m)
        } else {
            let (a, c) = (self.m, self.b);
            let (b, d) = (other.m, other.b);
            let x = (d - c) / (a - b);
            let y = (a * d - b * c) / (a - b);
            Latlong::new(y, x)
        };

        point.is_finite().then_some(point)
    }

    /// Intersection of the two bounded segments, if any.
    ///
    /// The infinite-line intersection must sit inside both segments'
    /// bounding boxes; touching at an endpoint counts.
    pub fn intersects(&self, other: &Self) -> Option<Latlong> {
        let p = self.intersect_infinite(other)?;
        (self.bounding_box().contains(p) && other.bounding_box().contains(p)).then_some(p)
    }

    /// The foot of the perpendicular from `pos` onto the infinite line.
    ///
    /// # Errors
    /// [`GeoError::DegenerateLine`] if this line has zero length.
    pub fn closest_to(&self, pos: Latlong) -> Result<Latlong, GeoError> {
        self.ensure_slope()?;

        if self.is_vertical() {
            return Ok(Latlong::new(pos.y(), self.from.x()));
        }
        if self.m == 0.0 {
            return Ok(Latlong::new(self.b, pos.x()));
        }

        // the perpendicular through pos has the negative inverse slope
        let perp_m = -1.0 / self.m;
        let (a, c) = (self.m, self.b);
        let (b, d) = (perp_m, calc_b(perp_m, pos));
        let x = (d - c) / (a - b);
        let y = (a * d - b * c) / (a - b);
        Ok(Latlong::new(y, x))
    }

    /// The perpendicular running from `pos` to its foot on this line.
    ///
    /// # Errors
    /// [`GeoError::DegenerateLine`] if this line has zero length.
    pub fn perpendicular_from(&self, pos: Latlong) -> Result<Self, GeoError> {
        Ok(Self::new(pos, self.closest_to(pos)?))
    }

    /// Great-circle distance from `pos` to the nearest point of the infinite line.
    ///
    /// # Errors
    /// [`GeoError::DegenerateLine`] if this line has zero length.
    pub fn closest_distance_km(&self, pos: Latlong) -> Result<f64, GeoError> {
        Ok(pos.dist_km(self.closest_to(pos)?))
    }

    /// Which side of the directed line `from -> to` the point is on.
    pub fn which_side(&self, pos: Latlong) -> Side {
        let (x1, y1) = (self.from.lat, self.from.long);
        let (x2, y2) = (self.to.lat, self.to.long);
        let d = (pos.lat - x1) * (y2 - y1) - (pos.long - y1) * (x2 - x1);

        if d > 0.0 {
            Side::Left
        } else if d < 0.0 {
            Side::Right
        } else {
            Side::On
        }
    }

    /// Where the projection of `pos` falls along the line: 0 at `from`,
    /// 1 at `to`, outside `[0,1]` beyond the anchors.
    ///
    /// Measured along whichever axis the line follows more closely, so
    /// near-vertical lines do not divide by a tiny x span.
    ///
    /// # Errors
    /// [`GeoError::DegenerateLine`] if this line has zero length.
    pub fn fraction_along(&self, pos: Latlong) -> Result<f64, GeoError> {
        let foot = self.closest_to(pos)?;
        if self.m.abs() < 1.0 {
            Ok((foot.x() - self.from.x()) / (self.to.x() - self.from.x()))
        } else {
            Ok((foot.y() - self.from.y()) / (self.to.y() - self.from.y()))
        }
    }
}

impl fmt::Display for LatlongLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[y={:.2}.x + {:.2}] ({:.1},{:.1})->({:.1},{:.1})",
            self.m,
            self.b,
            self.from.x(),
            self.from.y(),
            self.to.x(),
            self.to.y()
        )
    }
}

impl Latlong {
    /// The line from this point to `to`.
    pub fn line_to(self, to: Self) -> LatlongLine {
        LatlongLine::new(self, to)
    }

    /// True if this point is within the line's bounding box and no further
    /// than [`LINE_SNAP_KM`] from it.
    pub fn lies_on(self, line: &LatlongLine) -> bool {
        if !line.bounding_box().contains(self) {
            return false;
        }
        match line.closest_distance_km(self) {
            Ok(dist) => dist <= LINE_SNAP_KM,
            // a zero-length line's box is a single point, already checked
            Err(_) => true,
        }
    }
}
