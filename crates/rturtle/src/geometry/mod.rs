pub mod containment;
pub mod contour;
pub mod flatten;

// Re-export public types
pub use containment::point_in_polygon;
pub use contour::{Contour, ContourBuilder};
pub use flatten::{
    flatten_cubic, flatten_quad, polyline_length, sample_cubic, sample_quad, Flattening,
    COARSE_SAMPLES, SEGMENT_LENGTH,
};
