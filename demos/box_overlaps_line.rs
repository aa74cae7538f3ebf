//! Classify track segments against a box.
use trackgeo::prelude::*;

fn main() {
    let bbox = LatlongBox::new(Latlong::new(0.0, 0.0), Latlong::new(10.0, 10.0));

    let cases = [
        ("inside", Latlong::new(2.0, 2.0), Latlong::new(3.0, 3.0), OverlapOutcome::IsContained),
        ("enters", Latlong::new(20.0, 2.0), Latlong::new(2.0, 2.0), OverlapOutcome::StraddlesStart),
        ("leaves", Latlong::new(2.0, 2.0), Latlong::new(20.0, 2.0), OverlapOutcome::StraddlesEnd),
        ("crosses", Latlong::new(5.0, -5.0), Latlong::new(5.0, 15.0), OverlapOutcome::Contains),
        ("misses", Latlong::new(20.0, 20.0), Latlong::new(30.0, 30.0), OverlapOutcome::Disjoint),
    ];

    println!("Box {bbox}");
    for (name, from, to, expected) in cases {
        let line = from.line_to(to);
        let got = bbox.overlaps_line(&line);
        println!("{name:>8}: {line} => {got}");
        assert_eq!(got, expected, "segment that {name} the box");
    }
}
