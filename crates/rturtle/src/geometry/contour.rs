use crate::geometry::containment::point_in_polygon;
use crate::geometry::flatten::Flattening;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// One closed sub-path of an outline, approximated as a polygon.
///
/// The filled region runs from `start` through every point and back to
/// `start`; the closing point is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub start: Point,
    pub points: Vec<Point>,
    /// Set by the nesting classifier when the contour cuts into an ancestor's fill.
    pub is_hole: bool,
}

impl Contour {
    /// Create an empty contour anchored at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            start,
            points: Vec::new(),
            is_hole: false,
        }
    }

    /// True when the contour never drew anything after its start point.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recently added point, or `start` when nothing was drawn.
    pub fn last_point(&self) -> Point {
        self.points.last().copied().unwrap_or(self.start)
    }

    /// Even-odd containment test against the closed polygon.
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, self.start, &self.points)
    }

    /// The closed polygon as a path, for previews and rasterizers.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        for point in &self.points {
            path.line_to(*point);
        }
        path.close_path();
        path
    }

    /// Axis-aligned bounds of the start point and all accumulated points.
    pub fn bounding_box(&self) -> Rect {
        self.points
            .iter()
            .fold(Rect::from_points(self.start, self.start), |rect, p| {
                rect.union_pt(*p)
            })
    }
}

/// Accumulates flattened segments into a single [`Contour`].
#[derive(Debug, Clone)]
pub struct ContourBuilder {
    contour: Contour,
    flattening: Flattening,
}

impl ContourBuilder {
    /// Open a new contour at `start` with an empty point sequence.
    pub fn begin(start: Point, flattening: Flattening) -> Self {
        Self {
            contour: Contour::new(start),
            flattening,
        }
    }

    pub fn start(&self) -> Point {
        self.contour.start
    }

    pub fn last_point(&self) -> Point {
        self.contour.last_point()
    }

    pub fn is_empty(&self) -> bool {
        self.contour.is_empty()
    }

    pub fn line_to(&mut self, point: Point) {
        self.contour.points.push(point);
    }

    /// Flatten a quadratic curve from the current point and append it.
    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        let from = self.last_point();
        let points = self.flattening.flatten_quad(from, ctrl, to);
        self.contour.points.extend(points);
    }

    /// Flatten a cubic curve from the current point and append it.
    pub fn cubic_to(&mut self, c1: Point, c2: Point, to: Point) {
        let from = self.last_point();
        let points = self.flattening.flatten_cubic(from, c1, c2, to);
        self.contour.points.extend(points);
    }

    /// Borrow the contour accumulated so far.
    pub fn contour(&self) -> &Contour {
        &self.contour
    }

    pub fn finish(self) -> Contour {
        self.contour
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};

    #[test]
    fn test_builder_lines() {
        let mut builder = ContourBuilder::begin(Point::new(1.0, 2.0), Flattening::default());
        assert!(builder.is_empty());
        assert_eq!(builder.last_point(), Point::new(1.0, 2.0));

        builder.line_to(Point::new(5.0, 2.0));
        builder.line_to(Point::new(5.0, 8.0));
        assert_eq!(builder.last_point(), Point::new(5.0, 8.0));

        let contour = builder.finish();
        assert_eq!(contour.start, Point::new(1.0, 2.0));
        assert_eq!(contour.points.len(), 2);
        assert!(!contour.is_hole);
    }

    #[test]
    fn test_builder_curve_starts_from_last_point() {
        let mut builder = ContourBuilder::begin(Point::new(0.0, 0.0), Flattening::default());
        builder.line_to(Point::new(30.0, 0.0));
        // Straight quadratic from (30, 0) to (61.5, 0): ten chunks.
        builder.quad_to(Point::new(45.75, 0.0), Point::new(61.5, 0.0));

        let contour = builder.finish();
        assert_eq!(contour.points.len(), 11);
        assert!((contour.points[1].x - 33.15).abs() < 1e-9);
        assert_eq!(contour.last_point(), Point::new(61.5, 0.0));
    }

    #[test]
    fn test_contains_and_bounds() {
        let mut builder = ContourBuilder::begin(Point::new(0.0, 0.0), Flattening::default());
        builder.line_to(Point::new(10.0, 0.0));
        builder.line_to(Point::new(10.0, 20.0));
        builder.line_to(Point::new(0.0, 20.0));
        let contour = builder.finish();

        assert!(contour.contains(Point::new(5.0, 15.0)));
        assert!(!contour.contains(Point::new(5.0, 25.0)));

        let bbox = contour.bounding_box();
        assert_eq!(bbox.min_x(), 0.0);
        assert_eq!(bbox.max_x(), 10.0);
        assert_eq!(bbox.max_y(), 20.0);
    }

    #[test]
    fn test_to_bezpath_is_closed_polygon() {
        let mut contour = Contour::new(Point::new(0.0, 0.0));
        contour.points.push(Point::new(4.0, 0.0));
        contour.points.push(Point::new(4.0, 3.0));

        let path = contour.to_bezpath();
        let elements = path.elements();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(elements[3], PathEl::ClosePath);
        assert!((path.area().abs() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_contour() {
        let contour = Contour::new(Point::new(3.0, 3.0));
        assert!(contour.is_empty());
        assert!(!contour.contains(Point::new(3.0, 3.0)));
        assert_eq!(contour.last_point(), Point::new(3.0, 3.0));
    }
}
