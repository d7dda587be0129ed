use kurbo::Point;

/// Even-odd point-in-polygon test.
///
/// The polygon is `start`, then every point of `points`, closed by an implicit
/// edge back to `start`. A polygon without any `points` contains nothing.
pub fn point_in_polygon(point: Point, start: Point, points: &[Point]) -> bool {
    let mut inside = false;
    let mut prev = points.last().copied().unwrap_or(start);

    for current in std::iter::once(start).chain(points.iter().copied()) {
        if (prev.y > point.y) != (current.y > point.y) {
            let x_cross = (current.x - prev.x) * (point.y - prev.y) / (current.y - prev.y) + prev.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        prev = current;
    }

    inside
}
