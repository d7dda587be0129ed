use kurbo::{CubicBez, ParamCurve, Point, QuadBez};
use rturtle::*;

fn cubics() -> Vec<[Point; 4]> {
    vec![
        // Quarter circle of radius 100.
        [
            Point::new(100.0, 0.0),
            Point::new(100.0, 55.228),
            Point::new(55.228, 100.0),
            Point::new(0.0, 100.0),
        ],
        // S-curve.
        [
            Point::new(0.0, 0.0),
            Point::new(80.0, -40.0),
            Point::new(-20.0, 90.0),
            Point::new(60.0, 50.0),
        ],
        // Small glyph-sized bowl.
        [
            Point::new(12.5, 3.25),
            Point::new(30.0, 3.25),
            Point::new(41.0, 18.0),
            Point::new(41.0, 35.75),
        ],
    ]
}

#[test]
fn test_cubic_endpoint_is_exact() {
    for [p0, p1, p2, p3] in cubics() {
        let points = flatten_cubic(p0, p1, p2, p3);
        assert_eq!(*points.last().unwrap(), p3);
    }
}

#[test]
fn test_samples_lie_on_curve() {
    for [p0, p1, p2, p3] in cubics() {
        let points = flatten_cubic(p0, p1, p2, p3);
        let curve = CubicBez::new(p0, p1, p2, p3);
        let n = points.len();
        for (i, p) in points.iter().enumerate() {
            let expected = curve.eval((i + 1) as f64 / n as f64);
            assert!(p.distance(expected) < 1e-9);
        }
    }

    let quad = QuadBez::new((0.0, 0.0), (50.0, 80.0), (100.0, 0.0));
    let points = flatten_quad(quad.p0, quad.p1, quad.p2);
    let n = points.len();
    for (i, p) in points.iter().enumerate() {
        assert!(p.distance(quad.eval((i + 1) as f64 / n as f64)) < 1e-9);
    }
}

#[test]
fn test_segments_are_roughly_three_units() {
    let [p0, p1, p2, p3] = cubics()[0];
    let mut polyline = vec![p0];
    polyline.extend(flatten_cubic(p0, p1, p2, p3));

    let segments = polyline.len() - 1;
    let average = polyline_length(&polyline) / segments as f64;
    assert!(average >= 3.0 && average < 3.2, "average segment {}", average);
}

#[test]
fn test_chunk_count_stable_under_finer_estimate() {
    let coarse = Flattening::default();
    let fine = Flattening {
        coarse_samples: 100,
        ..Flattening::default()
    };

    for [p0, p1, p2, p3] in cubics() {
        let a = coarse.flatten_cubic(p0, p1, p2, p3).len();
        let b = fine.flatten_cubic(p0, p1, p2, p3).len();
        // A finer estimate only lengthens the polyline, and not by much.
        assert!(b >= a, "finer estimate shrank chunk count: {} -> {}", a, b);
        assert!(b <= a + a / 10 + 1, "chunk count unstable: {} -> {}", a, b);
    }
}

#[test]
fn test_custom_segment_length() {
    let flattening = Flattening {
        segment_length: 1.0,
        ..Flattening::default()
    };
    let points = flattening.flatten_quad(
        Point::new(0.0, 0.0),
        Point::new(10.25, 0.0),
        Point::new(20.5, 0.0),
    );
    assert_eq!(points.len(), 20);
}
