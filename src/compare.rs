//! Decides whether two tracks are the same flight, by comparing their
//! space-time boxes.
//!
//! Every pair of boxes (one from each track) that overlaps in time must also
//! overlap in space. A single pair that overlaps in time but not in space
//! means the tracks diverged and the verdict is "different flights". The
//! confidence of a match is the average, over both tracks, of the fraction
//! of boxes corroborated by the other track.
//!
//! Both sequences must be in time order. The walk is a single pass with two
//! cursors:
//!
//! ```text
//!   A:  |=====|-----|-----|      A is the track whose current box
//!   B:     |==|---|-----|        started first
//! ```
//!
//! While the current B box ends before the current A box, A encloses it:
//! score the pair and step B. Once B sticks out past the end of A, score
//! that pair too, step A, and swap the roles of the two tracks. If B starts
//! exactly where A ends the boxes only touch, so A steps without scoring or
//! swapping.

use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::config::CompareConfig;
use crate::timebox::{LatlongTimeBox, as_flagged_timeline};

/// How one box fared against the other track.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxResult {
    /// Boxes from the other track that overlapped in time.
    pub time_overlaps: u32,
    /// Boxes from the other track that overlapped in time and space.
    pub time_space_overlaps: u32,
    /// Comparisons skipped because one of the boxes was too approximate.
    pub ignores: u32,
    /// Indices of other-track boxes that overlapped in time only.
    pub time_only_indices: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairScore {
    Ignored,
    TimeOnly,
    TimeAndSpace,
}

impl BoxResult {
    fn record(&mut self, score: PairScore, other: usize) {
        match score {
            PairScore::Ignored => {
                self.ignores += 1;
                return;
            }
            PairScore::TimeAndSpace => self.time_space_overlaps += 1,
            PairScore::TimeOnly => self.time_only_indices.push(other),
        }
        self.time_overlaps += 1;
    }
}

/// Per-track summary of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxSliceResult {
    /// One entry per box in the track.
    pub boxes: Vec<BoxResult>,
    /// Boxes that overlapped the other track in time but never in space.
    pub num_just_time_overlap: usize,
    /// Boxes with at least one time and space overlap.
    pub num_time_space_overlap: usize,
    /// Boxes with at least one skipped comparison.
    pub num_ignored: usize,
    /// Which boxes overlapped in time only.
    pub bad_box_indices: Vec<usize>,
    /// For each bad box, the other-track boxes it failed against.
    pub bad_box_other_indices: Vec<Vec<usize>>,
}

impl BoxSliceResult {
    fn new(num_boxes: usize) -> Self {
        Self {
            boxes: vec![BoxResult::default(); num_boxes],
            ..Self::default()
        }
    }

    /// Number of boxes in the track.
    pub fn num_boxes(&self) -> usize {
        self.boxes.len()
    }

    /// Fraction of the track's boxes that overlapped in time and space.
    pub fn time_space_fraction(&self) -> f64 {
        if self.boxes.is_empty() {
            return 0.0;
        }
        self.num_time_space_overlap as f64 / self.boxes.len() as f64
    }

    fn finalize(&mut self) {
        self.num_just_time_overlap = 0;
        self.num_time_space_overlap = 0;
        self.num_ignored = 0;
        self.bad_box_indices.clear();
        self.bad_box_other_indices.clear();

        for (idx, r) in self.boxes.iter().enumerate() {
            if r.time_space_overlaps > 0 {
                self.num_time_space_overlap += 1;
            } else if r.time_overlaps > 0 {
                self.num_just_time_overlap += 1;
                self.bad_box_indices.push(idx);
                self.bad_box_other_indices.push(r.time_only_indices.clone());
            }
            if r.ignores > 0 {
                self.num_ignored += 1;
            }
        }
    }
}

/// Why the comparator reached its conclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// At least one track had no boxes.
    EmptyInput,
    /// One track ended before the other began.
    NoTimeOverlap,
    /// Some box overlapped the other track in time but not in space.
    TimeOnlyOverlap,
    /// Every scored pair overlapped in space as well as time.
    SameFlight,
    /// The tracks overlap in time but no pair was ever scored.
    NoScoredPairs,
}

/// The outcome of comparing two box sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceComparison {
    /// Why the comparison came out the way it did.
    pub verdict: Verdict,
    /// True when the tracks should be treated as the same flight.
    pub overlaps: bool,
    /// Confidence in a match, in `[0, 1]`; 0 when `overlaps` is false.
    pub confidence: f64,
    /// Results for the first sequence passed in.
    pub first: BoxSliceResult,
    /// Results for the second sequence passed in.
    pub second: BoxSliceResult,
    /// Human-readable notes on the walk and the outcome.
    pub diagnostic: String,
}

impl SliceComparison {
    fn rejected(
        verdict: Verdict,
        first: BoxSliceResult,
        second: BoxSliceResult,
        diagnostic: String,
    ) -> Self {
        Self {
            verdict,
            overlaps: false,
            confidence: 0.0,
            first,
            second,
            diagnostic,
        }
    }

    /// The `(overlaps, confidence)` pair.
    pub fn outcome(&self) -> (bool, f64) {
        (self.overlaps, self.confidence)
    }
}

/// Compares two tracks with the default quality-gate thresholds.
pub fn compare_box_slices(first: &[LatlongTimeBox], second: &[LatlongTimeBox]) -> SliceComparison {
    compare_box_slices_with(&CompareConfig::default(), first, second)
}

fn score_pair(config: &CompareConfig, a: &LatlongTimeBox, b: &LatlongTimeBox) -> Option<PairScore> {
    if !a.overlaps_in_time(b) {
        return None;
    }
    if a.too_approximate_for_comparison(config) || b.too_approximate_for_comparison(config) {
        return Some(PairScore::Ignored);
    }
    if a.space_compare(b) {
        Some(PairScore::TimeAndSpace)
    } else {
        Some(PairScore::TimeOnly)
    }
}

/// Compares two tracks, each given as a time-ordered sequence of boxes.
pub fn compare_box_slices_with(
    config: &CompareConfig,
    first: &[LatlongTimeBox],
    second: &[LatlongTimeBox],
) -> SliceComparison {
    let tracks = [first, second];
    let mut results = [
        BoxSliceResult::new(first.len()),
        BoxSliceResult::new(second.len()),
    ];

    let (Some(first0), Some(second0), Some(first_last), Some(second_last)) =
        (first.first(), second.first(), first.last(), second.last())
    else {
        let [r1, r2] = results;
        return SliceComparison::rejected(
            Verdict::EmptyInput,
            r1,
            r2,
            "at least one slice was empty, abort".to_owned(),
        );
    };

    let mut diag = format!(
        "* t1: {} --> {}\n* t2: {} --> {}\n",
        first0.start, first_last.end, second0.start, second_last.end
    );

    // role indices into `tracks`; A is the track whose current box started first
    let (mut ta, mut tb) = if second0.start < first0.start { (1, 0) } else { (0, 1) };

    let a_last_end = tracks[ta][tracks[ta].len() - 1].end;
    let b_first_start = tracks[tb][0].start;
    if a_last_end < b_first_start {
        diag.push_str("* no time overlap at all, bailing\n");
        debug!(first = first.len(), second = second.len(), "tracks never overlap in time");
        let [r1, r2] = results;
        return SliceComparison::rejected(Verdict::NoTimeOverlap, r1, r2, diag);
    }

    let mut cursor = [0_usize; 2];
    while tracks[ta][cursor[ta]].end < b_first_start {
        cursor[ta] += 1;
    }

    let timeline_start = tracks[ta][0].start;
    let mut flips = 0_u32;
    let score = |a_role: usize, b_role: usize, cursor: &[usize; 2], results: &mut [BoxSliceResult; 2]| {
        let (ia, ib) = (cursor[a_role], cursor[b_role]);
        let Some(s) = score_pair(config, &tracks[a_role][ia], &tracks[b_role][ib]) else {
            trace!(track = a_role, ia, ib, "pair only touches in time, not scored");
            return;
        };
        trace!(
            track = a_role,
            ia,
            ib,
            score = ?s,
            a = %as_flagged_timeline(tracks[a_role], timeline_start, Some(ia)),
            b = %as_flagged_timeline(tracks[b_role], timeline_start, Some(ib)),
            "scored pair"
        );
        results[a_role].boxes[ia].record(s, ib);
        results[b_role].boxes[ib].record(s, ia);
    };

    'walk: loop {
        if cursor[ta] >= tracks[ta].len() || cursor[tb] >= tracks[tb].len() {
            let _ = writeln!(diag, "** Breaking loop; iA={}, iB={}", cursor[ta], cursor[tb]);
            break;
        }

        // current A encloses current B
        while tracks[tb][cursor[tb]].end < tracks[ta][cursor[ta]].end {
            score(ta, tb, &cursor, &mut results);
            cursor[tb] += 1;
            if cursor[tb] >= tracks[tb].len() {
                break 'walk;
            }
        }

        if tracks[tb][cursor[tb]].start == tracks[ta][cursor[ta]].end {
            cursor[ta] += 1;
            if cursor[ta] >= tracks[ta].len() {
                break 'walk;
            }
        } else {
            score(ta, tb, &cursor, &mut results);
            cursor[ta] += 1;
            if cursor[ta] >= tracks[ta].len() {
                break 'walk;
            }
            std::mem::swap(&mut ta, &mut tb);
            flips += 1;
            trace!(flips, "flip");
        }
    }

    let [mut r1, mut r2] = results;
    r1.finalize();
    r2.finalize();

    diag.push_str("**** Outcome\n");

    let (verdict, confidence) = if r1.num_just_time_overlap > 0 || r2.num_just_time_overlap > 0 {
        describe_bad_boxes(&mut diag, "r1", &r1, first, second);
        describe_bad_boxes(&mut diag, "r2", &r2, second, first);
        diag.push_str("* some time-only overlaps found, rejecting\n");
        (Verdict::TimeOnlyOverlap, 0.0)
    } else if r1.num_time_space_overlap > 0 || r2.num_time_space_overlap > 0 {
        diag.push_str("* time+space overlaps!\n");
        let conf = (r1.time_space_fraction() + r2.time_space_fraction()) / 2.0;
        (Verdict::SameFlight, conf)
    } else {
        diag.push_str("* no scored pairs\n");
        (Verdict::NoScoredPairs, 0.0)
    };
    let overlaps = verdict == Verdict::SameFlight;

    let _ = write!(
        diag,
        "tA[{}:+{}-{}({}?)],tB[{}:+{}-{}({}?)]={:.2},{}",
        r1.num_boxes(),
        r1.num_time_space_overlap,
        r1.num_just_time_overlap,
        r1.num_ignored,
        r2.num_boxes(),
        r2.num_time_space_overlap,
        r2.num_just_time_overlap,
        r2.num_ignored,
        confidence,
        overlaps
    );

    debug!(?verdict, overlaps, confidence, flips, "compared box slices");

    SliceComparison {
        verdict,
        overlaps,
        confidence,
        first: r1,
        second: r2,
        diagnostic: diag,
    }
}

fn describe_bad_boxes(
    diag: &mut String,
    label: &str,
    result: &BoxSliceResult,
    own: &[LatlongTimeBox],
    other: &[LatlongTimeBox],
) {
    for (idx, others) in result.bad_box_indices.iter().zip(&result.bad_box_other_indices) {
        let b = &own[*idx];
        let _ = writeln!(diag, "* {label} bad box {idx:3} - {b}\n{}", b.debug);
        for o in others {
            let ob = &other[*o];
            let _ = writeln!(diag, "**  otherbox {o:3} - {ob}\n{}", ob.debug);
        }
    }
}
