//! Label and Tag Preview Layout
//!
//! This crate computes the preview geometry of adhesive labels and hang tags
//! from a handful of physical parameters. The result is a plain value tree of
//! positioned rectangles, silhouettes, perforation lines and sensing cutouts
//! that any renderer can draw.
//!
//! # Example
//!
//! ```rust
//! use media_preview::{
//!     layout, MediaSpec, MediaType, MeasurementUnit, Renderer, Shape, SvgRenderer,
//! };
//!
//! let spec = MediaSpec::new(MeasurementUnit::Inches)
//!     .media_type(MediaType::Label)
//!     .shape(Shape::SquareRectangle)
//!     .width(2.0)
//!     .length(4.0)
//!     .standard_perforation(true);
//!
//! let result = layout(&spec).unwrap();
//! assert_eq!(result.units.len(), 2);
//!
//! let svg = SvgRenderer::default().render(&result).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

mod convert;
mod error;
mod geometry;
mod layout;
mod media;
mod render;
mod repetition;
mod scale;
mod sensing;
mod shape;

pub use crate::{
    convert::{convert, convert_named, Conversion},
    error::{Error, ValidationError, Warning},
    geometry::{Point, Rect, Size},
    layout::{
        layout, Caption, LayoutConfig, LayoutEngine, LayoutResult, LineStyle, MediaUnit,
        OuterEdges, Separator, UnitBody, CAPTION_TEXT,
    },
    media::{
        default_inset, FinishedFormat, MeasurementUnit, MediaSpec, MediaType, SensingDetails,
        Shape, DEFAULT_INSET_INCHES,
    },
    render::{Palette, Renderer, SvgRenderer},
    repetition::plan_repetition,
    scale::scale_factor,
    sensing::{build_overlay, Cutout, CutoutKind, Fill},
    shape::{build_shape, Outline, Silhouette, RAT_TAIL_BORDER},
};

/// Reference pixel density, in pixels per inch.
///
/// This is the CSS pixel: the preview keeps the physical proportions of the
/// media whatever unit a `MediaSpec` is written in.
pub const PX_PER_INCH: f64 = 96.0;

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;
