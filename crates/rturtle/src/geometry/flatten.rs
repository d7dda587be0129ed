use kurbo::Point;
use log::debug;
use serde::{Deserialize, Serialize};

/// Subdivisions of the tentative polyline used to estimate a curve's length.
pub const COARSE_SAMPLES: usize = 10;

/// Approximate length of one flattened segment, in outline units.
pub const SEGMENT_LENGTH: f64 = 3.0;

/// Sampling density used when turning Bézier segments into polylines.
///
/// Flattening runs in two passes: a coarse pass with `coarse_samples`
/// subdivisions estimates the curve's length, then the curve is resampled so
/// that every output segment is roughly `segment_length` long.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flattening {
    pub coarse_samples: usize,
    pub segment_length: f64,
}

impl Default for Flattening {
    fn default() -> Self {
        Self {
            coarse_samples: COARSE_SAMPLES,
            segment_length: SEGMENT_LENGTH,
        }
    }
}

impl Flattening {
    /// Number of chunks to split a curve of (estimated) `length` into. Never zero.
    pub fn chunks_for_length(&self, length: f64) -> usize {
        let chunks = (length / self.segment_length).floor();
        if chunks.is_finite() && chunks >= 1.0 {
            chunks as usize
        } else {
            debug!(
                "curve length {:.4} yields no whole segment of {}; clamping to one chunk",
                length, self.segment_length
            );
            1
        }
    }

    /// Flatten a quadratic curve. The result excludes `from` and ends exactly at `to`.
    pub fn flatten_quad(&self, from: Point, ctrl: Point, to: Point) -> Vec<Point> {
        let mut tentative = vec![from];
        tentative.extend(sample_quad(from, ctrl, to, self.coarse_samples));
        let chunks = self.chunks_for_length(polyline_length(&tentative));
        sample_quad(from, ctrl, to, chunks)
    }

    /// Flatten a cubic curve. The result excludes `from` and ends exactly at `to`.
    pub fn flatten_cubic(&self, from: Point, c1: Point, c2: Point, to: Point) -> Vec<Point> {
        let mut tentative = vec![from];
        tentative.extend(sample_cubic(from, c1, c2, to, self.coarse_samples));
        let chunks = self.chunks_for_length(polyline_length(&tentative));
        sample_cubic(from, c1, c2, to, chunks)
    }
}

/// Flatten a quadratic curve with the default sampling density.
pub fn flatten_quad(from: Point, ctrl: Point, to: Point) -> Vec<Point> {
    Flattening::default().flatten_quad(from, ctrl, to)
}

/// Flatten a cubic curve with the default sampling density.
pub fn flatten_cubic(from: Point, c1: Point, c2: Point, to: Point) -> Vec<Point> {
    Flattening::default().flatten_cubic(from, c1, c2, to)
}

/// Sample a quadratic curve at `i / chunks` for `i in 1..=chunks` by repeated
/// linear interpolation.
pub fn sample_quad(from: Point, ctrl: Point, to: Point, chunks: usize) -> Vec<Point> {
    let chunks = chunks.max(1);
    (1..=chunks)
        .map(|i| {
            if i == chunks {
                return to;
            }
            let t = i as f64 / chunks as f64;
            let p1 = from.lerp(ctrl, t);
            let p2 = ctrl.lerp(to, t);
            p1.lerp(p2, t)
        })
        .collect()
}

/// Sample a cubic curve at `i / chunks` for `i in 1..=chunks` (de Casteljau).
pub fn sample_cubic(from: Point, c1: Point, c2: Point, to: Point, chunks: usize) -> Vec<Point> {
    let chunks = chunks.max(1);
    (1..=chunks)
        .map(|i| {
            if i == chunks {
                return to;
            }
            let t = i as f64 / chunks as f64;
            let p1 = from.lerp(c1, t);
            let p2 = c1.lerp(c2, t);
            let p3 = c2.lerp(to, t);
            let q1 = p1.lerp(p2, t);
            let q2 = p2.lerp(p3, t);
            q1.lerp(q2, t)
        })
        .collect()
}

/// Total length of an open polyline.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}
