//! Space-time boxes: a [`LatlongBox`] plus the time window it covers.
//!
//! A track is cut into a chronological run of these boxes upstream; the
//! comparator in [`crate::compare`] then walks two such runs side by side.
//! Boxes interpolated across a gap in the data carry extra metadata so that
//! the comparator can decline to score the ones that are too rough.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::CompareConfig;
use crate::heading::heading_delta;
use crate::latlong::Latlong;
use crate::latlong_box::LatlongBox;
use crate::range::TimeRange;

/// A box in space with a start and end instant.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LatlongTimeBox {
    /// The spatial extent.
    pub bbox: LatlongBox,
    /// When the box opens.
    pub start: DateTime<Utc>,
    /// When the box closes.
    pub end: DateTime<Utc>,
    /// How far the heading turned, in degrees, across the box.
    pub heading_delta: f64,
    /// Index of the first trackpoint that went into the box.
    pub i: usize,
    /// Index of the last trackpoint that went into the box.
    pub j: usize,
    /// Free-form note on what produced the box.
    pub source: String,
    /// True when the box was interpolated across a data gap.
    pub interpolated: bool,
    /// How many boxes the interpolation run that produced this one holds.
    pub run_length: u32,
    /// How far, in degrees, the box centre sits off the current heading.
    pub centroid_heading_delta: f64,
    /// Extra text shown when this box turns up in comparator diagnostics.
    pub debug: String,
}

impl LatlongTimeBox {
    /// A plain (non-interpolated) box.
    pub fn new(bbox: LatlongBox, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            bbox,
            start,
            end,
            heading_delta: 0.0,
            i: 0,
            j: 0,
            source: String::new(),
            interpolated: false,
            run_length: 0,
            centroid_heading_delta: 0.0,
            debug: String::new(),
        }
    }

    /// A zero-sized box at a single point and instant, ready to be grown
    /// with [`LatlongTimeBox::enclose`].
    pub fn at(pos: Latlong, t: DateTime<Utc>) -> Self {
        Self::new(pos.box_to(pos), t, t)
    }

    /// Records which trackpoints produced the box.
    #[must_use]
    pub fn with_indices(mut self, i: usize, j: usize) -> Self {
        self.i = i;
        self.j = j;
        self
    }

    /// Records what produced the box.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Sets the heading change from the headings at the box's two ends.
    #[must_use]
    pub fn with_headings(mut self, entry_heading: f64, exit_heading: f64) -> Self {
        self.heading_delta = heading_delta(entry_heading, exit_heading);
        self
    }

    /// Marks the box as interpolated, as part of a run of `run_length` boxes.
    #[must_use]
    pub fn interpolated(mut self, run_length: u32, centroid_heading_delta: f64) -> Self {
        self.interpolated = true;
        self.run_length = run_length;
        self.centroid_heading_delta = centroid_heading_delta;
        self
    }

    /// Attaches diagnostic text.
    #[must_use]
    pub fn with_debug(mut self, debug: impl Into<String>) -> Self {
        self.debug = debug.into();
        self
    }

    /// Grows the box to cover `pos`, and the time window to cover `t`.
    pub fn enclose(&mut self, pos: Latlong, t: DateTime<Utc>) {
        self.bbox.enclose(pos);
        if self.start > t {
            self.start = t;
        }
        if self.end < t {
            self.end = t;
        }
    }

    /// Widens any side shorter than `min_deg` degrees to exactly `min_deg`,
    /// keeping the box centred where it was.
    pub fn ensure_min_side(&mut self, min_deg: f64) {
        if self.bbox.long_width() < min_deg {
            let c = self.bbox.center();
            self.bbox.sw.long = c.long - min_deg / 2.0;
            self.bbox.ne.long = c.long + min_deg / 2.0;
        }
        if self.bbox.lat_height() < min_deg {
            let c = self.bbox.center();
            self.bbox.sw.lat = c.lat - min_deg / 2.0;
            self.bbox.ne.lat = c.lat + min_deg / 2.0;
        }
    }

    /// True if the two boxes overlap in space; time is not considered.
    pub fn space_compare(&self, other: &Self) -> bool {
        self.bbox.intersects_box(&other.bbox)
    }

    /// True if the time windows share more than a single instant.
    pub fn overlaps_in_time(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// An interpolated box is too rough to compare if the track turned
    /// sharply across it, its centre is well off the heading, or it is part
    /// of a long interpolation run.
    pub fn too_approximate_for_comparison(&self, config: &CompareConfig) -> bool {
        if !self.interpolated {
            return false;
        }
        self.centroid_heading_delta.abs() > config.max_centroid_deviation_deg
            || self.heading_delta.abs() > config.max_heading_deviation_deg
            || self.run_length > config.max_interpolation_run
    }

    /// The time window as a range.
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    /// Length of the time window.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl fmt::Display for LatlongTimeBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.duration().num_milliseconds() as f64 / 1000.0;
        write!(
            f,
            "{{{:3},{:3}}} {}+{:5.4},{:5.4}, {}[+{}s], {:3.0}deg [{}]",
            self.i,
            self.j,
            self.bbox.sw,
            self.bbox.lat_height(),
            self.bbox.long_width(),
            self.start.format("%H:%M:%S%.3f"),
            secs,
            self.heading_delta,
            self.source
        )?;
        if self.interpolated {
            write!(
                f,
                " InterpDelta:{:3.0}deg, n={}",
                self.centroid_heading_delta, self.run_length
            )?;
        }
        Ok(())
    }
}

// Whole seconds in `d`, rounding any fraction up; zero for non-positive spans.
fn seconds_rounded_up(d: TimeDelta) -> usize {
    let ms = d.num_milliseconds();
    if ms <= 0 {
        return 0;
    }
    usize::try_from((ms + 999) / 1000).unwrap_or(0)
}

/// Renders a box sequence as ASCII, one character per second from `start`.
///
/// See [`as_flagged_timeline`].
pub fn as_timeline(boxes: &[LatlongTimeBox], start: DateTime<Utc>) -> String {
    as_flagged_timeline(boxes, start, None)
}

/// Renders a box sequence as ASCII, one character per second from `start`,
/// drawing the box at index `flag` with `=` instead of `-`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use trackgeo::latlong::Latlong;
/// use trackgeo::timebox::{LatlongTimeBox, as_flagged_timeline};
///
/// let t0 = Utc.with_ymd_and_hms(2100, 1, 1, 8, 0, 0).unwrap();
/// let secs = |s| t0 + chrono::TimeDelta::seconds(s);
/// let b = Latlong::new(0.0, 0.0).box_to(Latlong::new(1.0, 1.0));
/// let boxes = vec![
///     LatlongTimeBox::new(b, secs(2), secs(5)),
///     LatlongTimeBox::new(b, secs(5), secs(9)),
/// ];
/// assert_eq!(as_flagged_timeline(&boxes, t0, Some(1)), "  |--|===|");
/// ```
pub fn as_flagged_timeline(
    boxes: &[LatlongTimeBox],
    start: DateTime<Utc>,
    flag: Option<usize>,
) -> String {
    let Some(first) = boxes.first() else {
        return "[empty]".to_owned();
    };

    let mut out = " ".repeat(seconds_rounded_up(first.start - start));
    out.push('|');

    let mut prev_end = first.start;
    for (idx, b) in boxes.iter().enumerate() {
        out.push_str(&" ".repeat(seconds_rounded_up(b.start - prev_end)));
        let ch = if flag == Some(idx) { "=" } else { "-" };
        out.push_str(&ch.repeat(seconds_rounded_up(b.duration() - TimeDelta::seconds(1))));
        out.push('|');
        prev_end = b.end;
    }
    out
}
