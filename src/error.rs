//! Error type shared by the fallible geometry operations.

use crate::latlong::Latlong;

/// Errors raised when an operation is handed input it cannot work with.
///
/// Expected numerical edge cases (parallel lines, vertical lines, empty
/// comparator input) are not errors; they show up in the return types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// A zero-length line was used where a slope is needed.
    #[error("degenerate line: both anchor points are {at}")]
    DegenerateLine {
        /// The point both ends of the line sit on.
        at: Latlong,
    },

    /// A box or polygon was built from an empty point set.
    #[error("cannot build a shape from an empty point set")]
    EmptyPointSet,

    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate: {value:?}")]
    NonFiniteCoordinate {
        /// The offending point.
        value: Latlong,
    },
}
