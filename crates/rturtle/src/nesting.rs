use crate::geometry::Contour;
use log::{debug, warn};

/// Outcome of [`classify_holes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Number of container/contained swaps performed while reordering.
    pub swaps: usize,
    /// False when the reordering pass hit its iteration cap (mutually
    /// overlapping contours) instead of reaching a stable order.
    pub converged: bool,
    /// Number of contours marked as holes.
    pub holes: usize,
}

/// Mark contours that sit inside another contour as holes and move every
/// container ahead of the contours it contains.
///
/// Containment is decided by testing a contour's start point against the
/// other contour's polygon. Nesting depth is not tracked: a contour inside two
/// ancestors is still just a hole, so a hole-within-a-hole renders as a hole.
pub fn classify_holes(contours: &mut [Contour]) -> Classification {
    let cap = contours.len().saturating_pow(3).saturating_add(1);
    let mut swaps = 0;
    let mut converged = true;

    // Swap and rescan from the top until a full scan finds nothing misordered.
    while let Some((j, i)) = find_misordered(contours) {
        if swaps == cap {
            warn!(
                "contour reordering did not settle after {} swaps; keeping current order",
                swaps
            );
            converged = false;
            break;
        }
        contours[j].is_hole = true;
        contours.swap(i, j);
        swaps += 1;
    }

    // Holes whose container already came first never triggered a swap.
    for j in 0..contours.len() {
        let start = contours[j].start;
        let contained = contours
            .iter()
            .enumerate()
            .any(|(i, other)| i != j && other.contains(start));
        if contained {
            contours[j].is_hole = true;
        }
    }

    let holes = contours.iter().filter(|c| c.is_hole).count();
    debug!(
        "classified {} contours: {} holes after {} swaps",
        contours.len(),
        holes,
        swaps
    );

    Classification {
        swaps,
        converged,
        holes,
    }
}

/// First pair `(j, i)` with `i > j` where contour `i` contains the start of contour `j`.
fn find_misordered(contours: &[Contour]) -> Option<(usize, usize)> {
    for j in 0..contours.len() {
        let start = contours[j].start;
        for i in (j + 1)..contours.len() {
            if contours[i].contains(start) {
                return Some((j, i));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    fn square(x: f64, y: f64, size: f64) -> Contour {
        let mut contour = Contour::new(Point::new(x, y));
        contour.points = vec![
            Point::new(x + size, y),
            Point::new(x + size, y + size),
            Point::new(x, y + size),
        ];
        contour
    }

    #[test]
    fn test_inner_after_outer_is_hole() {
        let mut contours = vec![square(0.0, 0.0, 10.0), square(3.0, 3.0, 4.0)];
        let result = classify_holes(&mut contours);

        assert_eq!(result.swaps, 0);
        assert!(result.converged);
        assert_eq!(result.holes, 1);
        assert!(!contours[0].is_hole);
        assert!(contours[1].is_hole);
        assert_eq!(contours[1].start, Point::new(3.0, 3.0));
    }

    #[test]
    fn test_inner_first_is_moved_behind_container() {
        let mut contours = vec![square(3.0, 3.0, 4.0), square(0.0, 0.0, 10.0)];
        let result = classify_holes(&mut contours);

        assert_eq!(result.swaps, 1);
        assert_eq!(contours[0].start, Point::new(0.0, 0.0));
        assert!(!contours[0].is_hole);
        assert_eq!(contours[1].start, Point::new(3.0, 3.0));
        assert!(contours[1].is_hole);
    }

    #[test]
    fn test_disjoint_contours_are_solid() {
        let mut contours = vec![square(0.0, 0.0, 10.0), square(20.0, 0.0, 10.0)];
        let result = classify_holes(&mut contours);

        assert_eq!(result.holes, 0);
        assert!(contours.iter().all(|c| !c.is_hole));
        assert_eq!(contours[0].start, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_double_nesting_is_only_boolean() {
        // Outer ring, inner ring, and an island inside the inner ring: the
        // island is contained by two ancestors and is still only a hole.
        let mut contours = vec![
            square(4.0, 4.0, 2.0),
            square(2.0, 2.0, 6.0),
            square(0.0, 0.0, 10.0),
        ];
        let result = classify_holes(&mut contours);

        assert!(result.converged);
        assert_eq!(contours[0].start, Point::new(0.0, 0.0));
        assert!(!contours[0].is_hole);
        assert!(contours[1].is_hole);
        assert!(contours[2].is_hole);

        let order: Vec<Point> = contours.iter().map(|c| c.start).collect();
        let outer = order.iter().position(|p| *p == Point::new(0.0, 0.0)).unwrap();
        let middle = order.iter().position(|p| *p == Point::new(2.0, 2.0)).unwrap();
        let island = order.iter().position(|p| *p == Point::new(4.0, 4.0)).unwrap();
        assert!(outer < middle && outer < island);
    }

    #[test]
    fn test_mutual_containment_terminates() {
        // Each contour's start lies inside the other one.
        let a = square(0.0, 0.0, 10.0);
        let mut b = Contour::new(Point::new(5.0, 5.0));
        b.points = vec![
            Point::new(5.0, -5.0),
            Point::new(-5.0, -5.0),
            Point::new(-5.0, 5.0),
        ];
        assert!(b.contains(a.start) && a.contains(b.start));

        let mut contours = vec![a, b];
        let result = classify_holes(&mut contours);
        assert!(!result.converged);
        assert_eq!(result.swaps, 9);
        assert!(contours.iter().all(|c| c.is_hole));
    }

    #[test]
    fn test_empty_input() {
        let mut contours: Vec<Contour> = Vec::new();
        let result = classify_holes(&mut contours);
        assert_eq!(result.swaps, 0);
        assert!(result.converged);
        assert_eq!(result.holes, 0);
    }
}
