//! # trackgeo - airspace geometry and track comparison
//!
//! Points, lines, boxes, circles and polygons on the Earth's surface, and a
//! comparator that decides whether two observed flight tracks are the same
//! flight.
//!
//! Distances and bearings treat the Earth as a sphere. Everything to do with
//! lines, containment and intersection treats latitude/longitude as a flat
//! `(x = long, y = lat)` plane, which is only good over small areas.
//!
//! ## Quick Start
//!
//! ```rust
//! use trackgeo::prelude::*;
//!
//! let bbox = LatlongBox::new(Latlong::new(0.0, 0.0), Latlong::new(10.0, 10.0));
//!
//! // starts outside the box, ends inside it
//! let line = Latlong::new(20.0, 2.0).line_to(Latlong::new(2.0, 2.0));
//! assert_eq!(bbox.overlaps_line(&line), OverlapOutcome::StraddlesStart);
//!
//! // SJC to SFO
//! let sjc = Latlong::new(37.3639472, -121.9289375);
//! let sfo = Latlong::new(37.6188172, -122.3754281);
//! assert!((sjc.dist_km(sfo) - 48.528).abs() < 0.01);
//! ```
//!
//! ## Comparing tracks
//!
//! Each track is cut into a time-ordered run of [`LatlongTimeBox`]es.
//! [`compare_box_slices`] walks both runs once and reports whether every
//! pair of boxes that overlaps in time also overlaps in space. See
//! [`compare`] for how the walk works.
//!
//! Nothing here installs a `tracing` subscriber; the comparator logs its
//! walk at `trace` level and its verdict at `debug` level.

pub mod circle;
pub mod compare;
pub mod config;
pub mod error;
pub mod heading;
pub mod latlong;
pub mod latlong_box;
pub mod line;
pub mod polygon;
pub mod prelude;
pub mod range;
pub mod region;
pub mod timebox;

pub use circle::LatlongCircle;
pub use compare::{SliceComparison, Verdict, compare_box_slices, compare_box_slices_with};
pub use config::CompareConfig;
pub use error::GeoError;
pub use latlong::{Latlong, NamedLatlong};
pub use latlong_box::LatlongBox;
pub use line::{LatlongLine, Side};
pub use polygon::Polygon;
pub use range::{OverlapOutcome, range_overlap};
pub use region::{Region, Restriction, Window};
pub use timebox::LatlongTimeBox;

#[cfg(test)]
mod geometry_tests;
