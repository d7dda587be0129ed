mod config;
mod emitter;
mod geometry;
mod nesting;
mod outline;
mod postprocessor;
mod svg_import;
mod types;

pub use config::RenderConfig;
pub use emitter::{emit_contour, emit_outline, shortest_turn, turn_towards, Leg, Palette};
pub use geometry::*;
pub use nesting::{classify_holes, Classification};
pub use outline::{
    decompose, decompose_bezpath, Outline, OutlineDecomposer, OutlineSink, PreviewShape, Segment,
};
pub use postprocessor::{post_process, Dialect};
pub use svg_import::{bezpath_from_svg, bezpath_from_svg_data, center_horizontally};
pub use types::*;

use kurbo::BezPath;
use log::{info, warn};
use std::path::Path;

/// High-level function: outline → classified contours → motion → script.
pub fn compile(mut outline: Outline, config: &RenderConfig) -> Script {
    let classification = outline.classify();
    if !classification.converged {
        warn!("overlapping contours left in a best-effort order");
    }

    let drawable = outline.drawable().count();
    if drawable == 0 {
        warn!("outline has no drawable contours; script will only contain the preamble and postamble");
    }
    info!(
        "compiling {} contours ({} holes)",
        drawable,
        outline.drawable().filter(|c| c.is_hole).count()
    );

    let program = emit_outline(&outline, &config.palette());
    post_process(&program, config.dialect)
}

/// Compile a raw segment stream.
pub fn compile_segments<I>(segments: I, config: &RenderConfig) -> Script
where
    I: IntoIterator<Item = Segment>,
{
    compile(decompose(segments, config.flattening), config)
}

/// Compile a kurbo path, centering it first when the config asks for it.
pub fn compile_bezpath(path: &BezPath, config: &RenderConfig) -> Script {
    if config.center_horizontally {
        let mut centered = path.clone();
        center_horizontally(&mut centered);
        compile(decompose_bezpath(&centered, config.flattening), config)
    } else {
        compile(decompose_bezpath(path, config.flattening), config)
    }
}

/// Read an SVG file and compile its visible paths.
pub fn compile_svg<P: AsRef<Path>>(path: P, config: &RenderConfig) -> anyhow::Result<Script> {
    let bezpath = bezpath_from_svg(path)?;
    Ok(compile_bezpath(&bezpath, config))
}
