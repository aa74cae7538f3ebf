//! Compass heading arithmetic, wrapping at 360.

/// Interpolates between two headings, taking the shorter turn across the
/// north boundary (6 -> 354 turns by 12, not 348). The result is in `[0, 360)`.
pub fn interpolate_heading(from: f64, to: f64, ratio: f64) -> f64 {
    (from + heading_delta(from, to) * ratio).rem_euclid(360.0)
}

/// Signed change from one heading to another, in `[-180, 180)`.
/// Positive is clockwise.
pub fn heading_delta(from: f64, to: f64) -> f64 {
    let mut delta = to - from;
    if delta < -180.0 {
        delta += 360.0;
    }
    if delta >= 180.0 {
        delta -= 360.0;
    }
    delta
}
