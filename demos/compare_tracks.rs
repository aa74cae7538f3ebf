//! Compare two observations of the same flight, then a diverging one.
//!
//! Run with `RUST_LOG=trackgeo=trace` to watch the comparator walk the boxes.
use chrono::{TimeDelta, TimeZone, Utc};
use trackgeo::prelude::*;
use tracing_subscriber::EnvFilter;

/// One box per `secs` seconds along a straight path, heading `heading`.
fn track(
    start: Latlong,
    heading: f64,
    t0: chrono::DateTime<Utc>,
    n: usize,
    secs: i64,
) -> Vec<LatlongTimeBox> {
    let mut pos = start;
    let mut t = t0;
    let mut boxes = Vec::with_capacity(n);
    for i in 0..n {
        let next = pos.move_km(heading, 3.0);
        let mut b = LatlongTimeBox::at(pos, t).with_indices(i, i + 1);
        b.enclose(next, t + TimeDelta::seconds(secs));
        b.ensure_min_side(0.01);
        boxes.push(b);
        pos = next;
        t += TimeDelta::seconds(secs);
    }
    boxes
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trackgeo=debug".parse().unwrap()))
        .init();

    let t0 = Utc.with_ymd_and_hms(2100, 1, 1, 8, 0, 0).unwrap();
    let sfo = Latlong::new(37.6188172, -122.3754281);

    let adsb = track(sfo, 135.0, t0, 12, 20);
    let radar = track(sfo, 135.0, t0 + TimeDelta::seconds(5), 8, 30);
    let other = track(sfo, 45.0, t0 + TimeDelta::seconds(5), 8, 30);

    for (name, b) in [("radar", &radar), ("other", &other)] {
        let result = compare_box_slices(&adsb, b);
        let (overlaps, confidence) = result.outcome();
        println!("adsb vs {name}: {:?}, overlaps={overlaps}, confidence={confidence:.2}", result.verdict);
        println!("{}\n", result.diagnostic);
    }
}
