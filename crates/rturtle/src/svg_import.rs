use anyhow::{anyhow, Context, Result};
use kurbo::{Affine, BezPath, Point, Shape};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Read an SVG file and merge every visible path into a single outline path.
///
/// Curves are kept as curves; flattening happens later during decomposition.
/// Coordinates stay in SVG space (y pointing down).
pub fn bezpath_from_svg<P: AsRef<Path>>(path: P) -> Result<BezPath> {
    let svg_path = path.as_ref();
    let data =
        fs::read(svg_path).with_context(|| format!("Failed to read SVG {}", svg_path.display()))?;
    bezpath_from_svg_data(&data)
        .with_context(|| format!("Failed to import SVG {}", svg_path.display()))
}

/// Parse SVG bytes and merge every visible path into a single outline path.
pub fn bezpath_from_svg_data(data: &[u8]) -> Result<BezPath> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt).map_err(|err| anyhow!("Failed to parse SVG: {}", err))?;

    let mut outline = BezPath::new();
    let mut path_count = 0;
    collect_usvg_group(tree.root(), &mut outline, &mut path_count);

    if path_count == 0 {
        warn!("SVG contains no visible paths");
    } else {
        debug!("imported {} SVG paths ({} elements)", path_count, outline.elements().len());
    }

    Ok(outline)
}

/// Shift a path left by half its bounding-box width, the way text outlines
/// are centered on the plotter's home position.
pub fn center_horizontally(path: &mut BezPath) {
    let bbox = path.bounding_box();
    path.apply_affine(Affine::translate((-bbox.width() / 2.0, 0.0)));
}

/// Recursively append the paths of a usvg Group to `out`.
fn collect_usvg_group(group: &usvg::Group, out: &mut BezPath, path_count: &mut usize) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => {
                collect_usvg_group(g, out, path_count);
            }
            usvg::Node::Path(path) => {
                if !path.is_visible() {
                    continue;
                }

                let mut bezpath = convert_tiny_skia_to_kurbo(path.data());
                if bezpath.elements().is_empty() {
                    continue;
                }
                bezpath.apply_affine(affine_from_transform(path.abs_transform()));

                *path_count += 1;
                out.extend(bezpath.elements().iter().copied());
            }
            usvg::Node::Image(_) => {
                // Images carry no outline
            }
            usvg::Node::Text(_) => {
                // Text nodes are already converted to paths by usvg
            }
        }
    }
}

fn affine_from_transform(ts: tiny_skia_path::Transform) -> Affine {
    Affine::new([
        ts.sx as f64,
        ts.ky as f64,
        ts.kx as f64,
        ts.sy as f64,
        ts.tx as f64,
        ts.ty as f64,
    ])
}

fn to_point(p: tiny_skia_path::Point) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

/// Convert a tiny_skia_path to kurbo BezPath, preserving all curve information.
fn convert_tiny_skia_to_kurbo(path: &tiny_skia_path::Path) -> BezPath {
    let mut bezpath = BezPath::new();

    for segment in path.segments() {
        match segment {
            tiny_skia_path::PathSegment::MoveTo(p) => bezpath.move_to(to_point(p)),
            tiny_skia_path::PathSegment::LineTo(p) => bezpath.line_to(to_point(p)),
            tiny_skia_path::PathSegment::QuadTo(p1, p2) => {
                bezpath.quad_to(to_point(p1), to_point(p2))
            }
            tiny_skia_path::PathSegment::CubicTo(p1, p2, p3) => {
                bezpath.curve_to(to_point(p1), to_point(p2), to_point(p3))
            }
            tiny_skia_path::PathSegment::Close => bezpath.close_path(),
        }
    }

    bezpath
}
