//! Tests for points, headings, lines and the basic box and circle shapes.

#[cfg(test)]
mod tests {
    use crate::error::GeoError;
    use crate::heading::{heading_delta, interpolate_heading};
    use crate::latlong::{Latlong, NamedLatlong};
    use crate::latlong_box::LatlongBox;
    use crate::line::{LatlongLine, Side};

    const SFO: Latlong = Latlong::new(37.6188172, -122.3754281);
    const SJC: Latlong = Latlong::new(37.3639472, -121.9289375);

    fn ll(lat: f64, long: f64) -> Latlong {
        Latlong::new(lat, long)
    }

    fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
        assert!(
            (actual - expected).abs() <= tol,
            "{what}: got {actual}, expected {expected} (tolerance {tol})"
        );
    }

    // ============================================================================
    // POINTS
    // ============================================================================

    #[test]
    fn test_haversine_sjc_to_sfo() {
        assert_close(SJC.dist_km(SFO), 48.528, 0.001, "SJC to SFO");
        assert_close(SJC.dist_nm(SFO), 48.528 * 0.539_957, 0.001, "SJC to SFO in NM");
    }

    #[test]
    fn test_bearings() {
        let cases = [
            (ll(36.0, -120.0), ll(37.0, -120.0), 0.0),
            (ll(0.0, -120.0), ll(0.0, -110.0), 90.0),
            (ll(37.0, -120.0), ll(36.0, -120.0), 180.0),
            (ll(0.0, -120.0), ll(0.0, -130.0), 270.0),
            (SFO, SJC, 125.596),
        ];
        for (i, (from, to, expected)) in cases.iter().enumerate() {
            assert_close(from.bearing_towards(*to), *expected, 0.001, &format!("[{i}] bearing"));
        }
    }

    #[test]
    fn test_move_km() {
        let start = ll(36.0, -120.0);
        let cases = [
            (0.0, ll(36.899322, -120.0)),
            (90.0, ll(35.994872, -118.888426)),
            (180.0, ll(35.100678, -120.0)),
            (270.0, ll(35.994872, -121.111574)),
        ];
        for (heading, expected) in cases {
            let actual = start.move_km(heading, 100.0);
            assert_close(actual.lat, expected.lat, 1e-5, &format!("lat at heading {heading}"));
            assert_close(actual.long, expected.long, 1e-5, &format!("long at heading {heading}"));
        }
    }

    #[test]
    fn test_point_equality_uses_epsilon() {
        let a = ll(37.0, -122.0);
        let b = ll(37.0 + 1e-9, -122.0);
        assert_eq!(a, b, "points within epsilon compare equal");
        assert!(!a.exactly_equal(b), "exact equality sees the difference");
        assert_ne!(a, ll(37.001, -122.0), "points a millidegree apart differ");
    }

    #[test]
    fn test_point_helpers() {
        assert!(ll(0.001, -0.002).is_nil(), "near-origin point is nil");
        assert!(!SFO.is_nil(), "SFO is not nil");
        assert!(!ll(f64::NAN, 0.0).is_finite(), "NaN is not finite");
        assert!(
            matches!(
                Latlong::try_new(f64::INFINITY, 1.0),
                Err(GeoError::NonFiniteCoordinate { .. })
            ),
            "infinite latitude is rejected"
        );
        assert_eq!(Latlong::try_new(1.0, 2.0), Ok(ll(1.0, 2.0)));

        let mid = ll(0.0, 0.0).interpolate_to(ll(10.0, -20.0), 0.25);
        assert_eq!(mid, ll(2.5, -5.0), "quarter of the way along");
        assert_close(ll(0.0, 0.0).latlong_dist(ll(3.0, 4.0)), 5.0, 1e-12, "planar distance");
        assert_close(SFO.dist3_km(SFO, 3280.8399), 1.0, 1e-9, "straight up one km");
        assert_eq!(SFO.to_string(), "(37.6188,-122.3754)");
    }

    #[test]
    fn test_named_latlong() {
        let named = NamedLatlong::new("KSFO", SFO);
        assert_eq!(named.short_string(), "KSFO");
        assert_eq!(named.to_string(), "(37.6188,-122.3754)[KSFO]");

        let anon = NamedLatlong::new("", SJC);
        assert_eq!(anon.short_string(), "(37.3639,-121.9289)");
        assert!(NamedLatlong::default().is_nil(), "default named point is nil");
    }

    // ============================================================================
    // HEADINGS
    // ============================================================================

    #[test]
    fn test_heading_delta_wraps() {
        assert_close(heading_delta(350.0, 10.0), 20.0, 1e-12, "clockwise over north");
        assert_close(heading_delta(10.0, 350.0), -20.0, 1e-12, "anticlockwise over north");
        assert_close(heading_delta(90.0, 270.0), -180.0, 1e-12, "half turn is -180");
        assert_close(heading_delta(45.0, 45.0), 0.0, 1e-12, "no turn");
    }

    #[test]
    fn test_interpolate_heading_takes_short_way() {
        assert_close(interpolate_heading(10.0, 20.0, 0.5), 15.0, 1e-12, "simple");
        assert_close(interpolate_heading(6.0, 354.0, 0.5), 0.0, 1e-12, "6 to 354");
        assert_close(interpolate_heading(354.0, 6.0, 0.5), 0.0, 1e-12, "354 to 6");
        assert_close(interpolate_heading(350.0, 20.0, 0.25), 357.5, 1e-12, "350 to 20");
    }

    // ============================================================================
    // LINES
    // ============================================================================

    #[test]
    fn test_line_observers() {
        let origin = ll(10.0, 10.0);
        assert!(!origin.line_to(ll(10.0, 20.0)).is_vertical(), "constant latitude is horizontal");
        assert!(!origin.line_to(ll(20.0, 20.0)).is_vertical(), "diagonal is not vertical");
        assert!(origin.line_to(ll(20.0, 10.0)).is_vertical(), "constant longitude is vertical");
        assert!(origin.line_to(origin).is_degenerate(), "zero-length line");
        assert!(!origin.line_to(ll(20.0, 20.0)).is_degenerate(), "diagonal is fine");

        let vertical = origin.line_to(ll(20.0, 10.0));
        assert_eq!(vertical.intercept(), None, "vertical lines have no intercept");
        assert_eq!(vertical.y_at(3.0), None, "nor a y for a given x");

        let diag = ll(0.0, 0.0).line_to(ll(2.0, 1.0));
        assert_eq!(diag.slope(), 2.0);
        assert_eq!(diag.intercept(), Some(0.0));
        assert_eq!(diag.y_at(3.0), Some(6.0));
    }

    #[test]
    fn test_try_new_rejects_degenerate() {
        let p = ll(1.0, 2.0);
        assert_eq!(
            LatlongLine::try_new(p, p).map(|l| l.to()),
            Err(GeoError::DegenerateLine { at: p })
        );
        assert!(LatlongLine::try_new(p, ll(2.0, 2.0)).is_ok(), "distinct points make a line");
    }

    #[test]
    fn test_line_intersects() {
        let cases = [
            (ll(1.0, 1.0), ll(1.0, 4.0), ll(2.0, 1.0), ll(2.0, 4.0), false), // parallel
            (ll(1.0, 0.0), ll(1.0, 3.0), ll(0.0, 2.0), ll(3.0, 2.0), true),  // cross
            (ll(0.0, 0.0), ll(6.0, 3.0), ll(0.0, 3.0), ll(6.0, 0.0), true),  // diagonal cross
            (ll(1.0, 0.0), ll(1.0, 3.0), ll(0.0, 6.0), ll(3.0, 6.0), false), // apart
            (ll(0.0, 0.0), ll(5.0, 0.0), ll(0.0, 0.0), ll(0.0, 5.0), true),  // touch
            (ll(0.0, 6.0), ll(6.0, 6.0), ll(6.0, 0.0), ll(6.0, 6.0), true),  // touch
        ];
        for (i, (p1, p2, p3, p4, expected)) in cases.iter().enumerate() {
            let (l1, l2) = (p1.line_to(*p2), p3.line_to(*p4));
            let actual = l1.intersects(&l2);
            assert_eq!(actual.is_some(), *expected, "[{i}] {l1} vs {l2}: {actual:?}");
        }
    }

    #[test]
    fn test_intersection_points() {
        let cross = ll(1.0, 0.0).line_to(ll(1.0, 3.0));
        let other = ll(0.0, 2.0).line_to(ll(3.0, 2.0));
        assert_eq!(cross.intersects(&other), Some(ll(1.0, 2.0)));

        let a = ll(0.0, 0.0).line_to(ll(6.0, 3.0));
        let b = ll(0.0, 3.0).line_to(ll(6.0, 0.0));
        assert_eq!(a.intersects(&b), Some(ll(3.0, 1.5)));

        // the infinite lines meet even when the segments don't
        let short = ll(1.0, 0.0).line_to(ll(1.0, 3.0));
        let far = ll(0.0, 6.0).line_to(ll(3.0, 6.0));
        assert_eq!(short.intersect_infinite(&far), Some(ll(1.0, 6.0)));
        assert_eq!(short.intersects(&far), None);
    }

    #[test]
    fn test_parallel_and_degenerate_intersections() {
        let v1 = ll(0.0, 1.0).line_to(ll(5.0, 1.0));
        let v2 = ll(0.0, 2.0).line_to(ll(5.0, 2.0));
        assert_eq!(v1.intersect_infinite(&v2), None, "two vertical lines never meet");

        let d1 = ll(0.0, 0.0).line_to(ll(1.0, 1.0));
        let d2 = ll(0.0, 1.0).line_to(ll(1.0, 2.0));
        assert_eq!(d1.intersect_infinite(&d2), None, "equal slopes are parallel");

        let point = ll(0.5, 0.5).line_to(ll(0.5, 0.5));
        assert_eq!(d1.intersect_infinite(&point), None, "degenerate line has no slope");
    }

    #[test]
    fn test_which_side() {
        let cases = [
            (ll(5.0, 0.0), ll(5.0, 10.0), ll(0.0, 5.0), Side::Right),
            (ll(5.0, 0.0), ll(5.0, 10.0), ll(10.0, 5.0), Side::Left),
            (ll(5.0, 0.0), ll(5.0, 10.0), ll(5.0, 5.0), Side::On),
            (ll(5.0, 10.0), ll(5.0, 0.0), ll(0.0, 5.0), Side::Left),
            (ll(5.0, 10.0), ll(5.0, 0.0), ll(10.0, 5.0), Side::Right),
            (ll(5.0, 10.0), ll(5.0, 0.0), ll(5.0, 5.0), Side::On),
            (ll(0.0, 0.0), ll(10.0, -10.0), ll(0.0, 0.0), Side::On),
            (ll(0.0, 0.0), ll(10.0, -10.0), ll(5.0, -5.0), Side::On),
            (ll(0.0, 0.0), ll(10.0, -10.0), ll(10.0, -10.0), Side::On),
            (ll(0.0, 0.0), ll(10.0, -10.0), ll(5.0, 0.0), Side::Right),
            (ll(0.0, 0.0), ll(10.0, -10.0), ll(5.0, -10.0), Side::Left),
            (ll(0.0, 0.0), ll(10.0, -10.0), ll(-1.0, 20.0), Side::Right),
        ];
        for (i, (from, to, pos, expected)) in cases.iter().enumerate() {
            let actual = from.line_to(*to).which_side(*pos);
            assert_eq!(actual, *expected, "[{i}] {pos} against {from}->{to}");
        }
    }

    #[test]
    fn test_closest_distance() {
        let cases = [
            (ll(36.0, -120.0), ll(37.0, -120.0), ll(36.5, -120.0), 0.0),
            (ll(37.0, -120.0), ll(36.0, -120.0), ll(36.5, -121.0), 89.3844),
            (ll(36.0, -120.0), ll(37.0, -119.0), ll(36.5, -119.4), 7.1325),
        ];
        for (i, (from, to, pos, expected)) in cases.iter().enumerate() {
            let actual = from
                .line_to(*to)
                .closest_distance_km(*pos)
                .expect("line is not degenerate");
            assert_close(actual, *expected, 0.001, &format!("[{i}] closest distance"));
        }
    }

    #[test]
    fn test_closest_to_horizontal_and_vertical() {
        let horiz = ll(2.0, 0.0).line_to(ll(2.0, 10.0));
        assert_eq!(horiz.closest_to(ll(7.0, 4.0)), Ok(ll(2.0, 4.0)));
        let vert = ll(0.0, 3.0).line_to(ll(10.0, 3.0));
        assert_eq!(vert.closest_to(ll(7.0, 4.0)), Ok(ll(7.0, 3.0)));

        let perp = vert.perpendicular_from(ll(7.0, 4.0)).expect("line is not degenerate");
        assert_eq!(perp.from(), ll(7.0, 4.0));
        assert_eq!(perp.to(), ll(7.0, 3.0));

        let p = ll(1.0, 1.0);
        assert!(p.line_to(p).closest_to(ll(0.0, 0.0)).is_err(), "degenerate line has no foot");
    }

    #[test]
    fn test_fraction_along() {
        // horizontal, vertical and 45 degree lines; the first column is latitude
        let cases = [
            (ll(-120.0, 35.0), ll(-118.0, 35.0), ll(-121.0, 35.0), -0.50),
            (ll(-120.0, 35.0), ll(-118.0, 35.0), ll(-120.0, 35.0), 0.00),
            (ll(-120.0, 35.0), ll(-118.0, 35.0), ll(-118.5, 35.0), 0.75),
            (ll(-120.0, 35.0), ll(-118.0, 35.0), ll(-116.0, 35.0), 2.00),
            (ll(-120.0, 35.0), ll(-118.0, 35.0), ll(-119.0, 37.0), 0.50),
            (ll(-120.0, 35.0), ll(-120.0, 39.0), ll(-120.0, 35.0), 0.00),
            (ll(-120.0, 35.0), ll(-120.0, 39.0), ll(-120.0, 38.0), 0.75),
            (ll(-120.0, 35.0), ll(-120.0, 39.0), ll(-120.0, 47.0), 3.00),
            (ll(-120.0, 35.0), ll(-118.0, 37.0), ll(-121.0, 34.0), -0.50),
            (ll(-120.0, 35.0), ll(-118.0, 37.0), ll(-120.0, 35.0), 0.00),
            (ll(-120.0, 35.0), ll(-118.0, 37.0), ll(-119.0, 36.0), 0.50),
            (ll(-120.0, 35.0), ll(-118.0, 37.0), ll(-117.0, 38.0), 1.50),
        ];
        for (i, (from, to, pos, expected)) in cases.iter().enumerate() {
            let actual = from.line_to(*to).fraction_along(*pos).expect("line is not degenerate");
            assert_close(actual, *expected, 0.001, &format!("[{i}] fraction along"));
        }
    }

    #[test]
    fn test_lies_on() {
        let line = ll(36.0, -120.0).line_to(ll(37.0, -119.0));
        assert!(ll(36.5, -119.5).lies_on(&line), "midpoint lies on the line");
        assert!(ll(36.5, -119.501).lies_on(&line), "about 90m off is within the snap");
        assert!(!ll(36.5, -119.4).lies_on(&line), "7km off is not");
        assert!(!ll(38.0, -118.0).lies_on(&line), "beyond the end of the segment");
    }

    #[test]
    fn test_line_display() {
        let line = ll(0.0, 0.0).line_to(ll(2.0, 1.0));
        assert_eq!(line.to_string(), "[y=2.00.x + 0.00] (0.0,0.0)->(1.0,2.0)");
    }

    // ============================================================================
    // BOXES
    // ============================================================================

    #[test]
    fn test_centered_box_diagonal() {
        let cases = [(50.0, 0.0, 49.998), (0.0, 50.0, 49.998), (50.0, 50.0, 70.707)];
        for (width, height, expected) in cases {
            let b = SFO.centered_box(width, height);
            assert_close(b.sw.dist_km(b.ne), expected, 0.001, &format!("{width}x{height} box"));
            assert_eq!(b.center(), SFO, "centred on SFO");
            assert_eq!(LatlongBox::centered(SFO, width, height), b, "both constructors agree");
        }
    }

    #[test]
    fn test_box_contains() {
        let b = LatlongBox::new(ll(36.0, -122.0), ll(40.0, -118.0));
        let inside = [ll(36.0, -122.0), ll(37.0, -121.0), ll(40.0, -118.0)];
        let outside = [ll(35.0, -120.0), ll(41.0, -120.0), ll(38.0, -123.0), ll(38.0, -117.0)];
        for p in inside {
            assert!(b.contains(p), "{p} should be inside {b}");
        }
        for p in outside {
            assert!(!b.contains(p), "{p} should be outside {b}");
        }
    }

    #[test]
    fn test_box_construction_normalises_corners() {
        let b = ll(40.0, -118.0).box_to(ll(36.0, -122.0));
        assert_eq!(b.sw, ll(36.0, -122.0));
        assert_eq!(b.ne, ll(40.0, -118.0));
        assert_eq!(b.se(), ll(36.0, -118.0));
        assert_eq!(b.nw(), ll(40.0, -122.0));
        assert_eq!(b.lat_height(), 4.0);
        assert_eq!(b.long_width(), 4.0);
    }

    #[test]
    fn test_box_from_points_and_enclose() {
        assert_eq!(LatlongBox::from_points(&[]), Err(GeoError::EmptyPointSet));

        let b = LatlongBox::from_points(&[ll(1.0, 5.0), ll(-2.0, 3.0), ll(4.0, 4.0)])
            .expect("points are not empty");
        assert_eq!(b.sw, ll(-2.0, 3.0));
        assert_eq!(b.ne, ll(4.0, 5.0));

        let mut grown = b;
        grown.enclose(ll(10.0, -10.0));
        assert_eq!(grown.sw, ll(-2.0, -10.0));
        assert_eq!(grown.ne, ll(10.0, 5.0));
        grown.enclose(ll(0.0, 0.0));
        assert_eq!(grown.sw, ll(-2.0, -10.0), "enclosing an inside point changes nothing");
    }

    #[test]
    fn test_box_edges() {
        let b = LatlongBox::new(ll(0.0, 0.0), ll(10.0, 20.0));
        let [bottom, left, right, top] = b.edges();
        assert!(!bottom.is_vertical() && bottom.slope() == 0.0, "bottom is horizontal");
        assert!(left.is_vertical(), "left is vertical");
        assert!(right.is_vertical(), "right is vertical");
        assert_eq!(top.from(), ll(10.0, 0.0));
        assert_eq!(top.to(), ll(10.0, 20.0));
        assert_eq!(right.from(), ll(0.0, 20.0));
    }

    #[test]
    fn test_box_altitudes_and_display() {
        let b = LatlongBox::new(ll(0.0, 0.0), ll(1.0, 1.0)).with_altitudes(3000, 8000);
        assert!(b.intersects_altitude(5000), "inside the band");
        assert!(!b.intersects_altitude(2000), "below the floor");
        assert!(!b.intersects_altitude(9000), "above the ceiling");
        assert_eq!(b.to_string(), "(0.0000,0.0000)-(1.0000,1.0000)[3000,8000]");

        let open = b.with_altitudes(0, 0);
        assert!(open.intersects_altitude(-500), "no floor");
        assert!(open.intersects_altitude(60_000), "no ceiling");
    }

    // ============================================================================
    // CIRCLES
    // ============================================================================

    #[test]
    fn test_circle_contains() {
        let c = SFO.circle(10.0);
        assert!(c.contains(SFO), "centre is inside");
        assert!(c.contains(SFO.move_km(45.0, 9.9)), "9.9km out is inside");
        assert!(!c.contains(SFO.move_km(45.0, 10.1)), "10.1km out is outside");
        assert!(!c.contains(SJC), "SJC is 48km away");
        assert_eq!(c.to_string(), "(37.6188,-122.3754), rad=10.0");

        let bound = c.bounding_box();
        assert!(bound.contains(SFO.move_km(0.0, 9.9)), "bounding box covers the circle");
        assert!(bound.contains(SFO.move_km(270.0, 9.9)), "bounding box covers the circle");
    }
}
