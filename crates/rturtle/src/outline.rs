use crate::geometry::{Contour, ContourBuilder, Flattening};
use crate::nesting::{classify_holes, Classification};
use kurbo::{BezPath, PathEl, Point};
use serde::{Deserialize, Serialize};
use std::mem;

/// One operation of a raw vector outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// Control point, end point.
    QuadTo(Point, Point),
    /// First control point, second control point, end point.
    CubicTo(Point, Point, Point),
    Close,
}

impl From<PathEl> for Segment {
    fn from(el: PathEl) -> Self {
        match el {
            PathEl::MoveTo(p) => Segment::MoveTo(p),
            PathEl::LineTo(p) => Segment::LineTo(p),
            PathEl::QuadTo(c, p) => Segment::QuadTo(c, p),
            PathEl::CurveTo(c1, c2, p) => Segment::CubicTo(c1, c2, p),
            PathEl::ClosePath => Segment::Close,
        }
    }
}

/// Interface for outline producers (font rasterizers, text layout engines, SVG readers).
pub trait OutlineSink {
    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);

    fn close(&mut self);
}

/// An ordered collection of contours decomposed from one input shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub contours: Vec<Contour>,
}

/// A contour's filled polygon and fill state, handed to preview renderers.
#[derive(Debug, Clone)]
pub struct PreviewShape {
    pub path: BezPath,
    pub is_hole: bool,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Contours that produce motion, in emission order.
    pub fn drawable(&self) -> impl Iterator<Item = &Contour> {
        self.contours.iter().filter(|c| !c.is_empty())
    }

    /// Mark holes and reorder so each hole follows its container.
    pub fn classify(&mut self) -> Classification {
        classify_holes(&mut self.contours)
    }

    /// Every drawable contour as a closed polygon with its hole flag.
    pub fn preview_shapes(&self) -> Vec<PreviewShape> {
        self.drawable()
            .map(|contour| PreviewShape {
                path: contour.to_bezpath(),
                is_hole: contour.is_hole,
            })
            .collect()
    }
}

/// Splits a segment stream into independent contours.
///
/// Decomposition starts with an implicit, possibly empty contour at the
/// origin. `MoveTo` and `Close` only record where the next contour begins; the
/// first drawing segment after them opens that contour.
#[derive(Debug, Clone)]
pub struct OutlineDecomposer {
    flattening: Flattening,
    finished: Vec<Contour>,
    active: ContourBuilder,
    pending_jump: Option<Point>,
}

impl Default for OutlineDecomposer {
    fn default() -> Self {
        Self::new(Flattening::default())
    }
}

impl OutlineDecomposer {
    pub fn new(flattening: Flattening) -> Self {
        Self {
            flattening,
            finished: Vec::new(),
            active: ContourBuilder::begin(Point::ORIGIN, flattening),
            pending_jump: None,
        }
    }

    /// Feed one segment.
    pub fn push(&mut self, segment: Segment) {
        match segment {
            Segment::MoveTo(p) => self.pending_jump = Some(p),
            // After closing, the pen sits back at the start of the closed contour.
            Segment::Close => self.pending_jump = Some(self.active.start()),
            Segment::LineTo(p) => {
                self.open_pending();
                self.active.line_to(p);
            }
            Segment::QuadTo(c, p) => {
                self.open_pending();
                self.active.quad_to(c, p);
            }
            Segment::CubicTo(c1, c2, p) => {
                self.open_pending();
                self.active.cubic_to(c1, c2, p);
            }
        }
    }

    /// Feed every element of a kurbo path.
    pub fn push_bezpath(&mut self, path: &BezPath) {
        for el in path.elements() {
            self.push(Segment::from(*el));
        }
    }

    /// Number of contours established so far, including the active one.
    pub fn contour_count(&self) -> usize {
        self.finished.len() + 1
    }

    /// Close out the active contour and return every contour in source order.
    pub fn finish(mut self) -> Outline {
        self.finished.push(self.active.finish());
        Outline {
            contours: self.finished,
        }
    }

    fn open_pending(&mut self) {
        if let Some(start) = self.pending_jump.take() {
            let next = ContourBuilder::begin(start, self.flattening);
            let done = mem::replace(&mut self.active, next);
            self.finished.push(done.finish());
        }
    }
}

impl OutlineSink for OutlineDecomposer {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(Segment::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(Segment::LineTo(Point::new(x, y)));
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.push(Segment::QuadTo(Point::new(cx, cy), Point::new(x, y)));
    }

    fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.push(Segment::CubicTo(
            Point::new(c1x, c1y),
            Point::new(c2x, c2y),
            Point::new(x, y),
        ));
    }

    fn close(&mut self) {
        self.push(Segment::Close);
    }
}

/// Decompose a segment stream into an outline (source order, unclassified).
pub fn decompose<I>(segments: I, flattening: Flattening) -> Outline
where
    I: IntoIterator<Item = Segment>,
{
    let mut decomposer = OutlineDecomposer::new(flattening);
    for segment in segments {
        decomposer.push(segment);
    }
    decomposer.finish()
}

/// Decompose a kurbo path into an outline (source order, unclassified).
pub fn decompose_bezpath(path: &BezPath, flattening: Flattening) -> Outline {
    let mut decomposer = OutlineDecomposer::new(flattening);
    decomposer.push_bezpath(path);
    decomposer.finish()
}
