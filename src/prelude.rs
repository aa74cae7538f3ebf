//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use trackgeo::prelude::*;
//! ```

pub use crate::circle::LatlongCircle;
pub use crate::compare::{SliceComparison, Verdict, compare_box_slices, compare_box_slices_with};
pub use crate::config::CompareConfig;
pub use crate::error::GeoError;
pub use crate::latlong::{Latlong, NamedLatlong};
pub use crate::latlong_box::LatlongBox;
pub use crate::line::{LatlongLine, Side};
pub use crate::polygon::Polygon;
pub use crate::range::{OverlapOutcome, Span, range_overlap};
pub use crate::region::{Region, Restriction, Window};
pub use crate::timebox::LatlongTimeBox;
