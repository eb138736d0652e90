//! The layout engine: [`MediaSpec`] in, fully positioned [`LayoutResult`] out.

use log::{debug, info, warn};

use crate::{
    error::{Error, ValidationError, Warning},
    geometry::{Point, Rect, Size},
    media::{default_inset, FinishedFormat, MediaSpec, MediaType},
    repetition::plan_repetition,
    scale::scale_factor,
    sensing::{build_overlay, Cutout},
    shape::{build_shape, Silhouette},
};

/// Text of the note printed under every preview.
pub const CAPTION_TEXT: &str =
    "Note: Not to actual scale. This render does not reflect the final drawing after purchasing";

/// Padding and caption metrics used to size the preview container.
///
/// # Example
///
/// ```
/// use media_preview::{LayoutConfig, LayoutEngine};
///
/// let engine = LayoutEngine::new(LayoutConfig::default().side_padding(24.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    side_padding: f64,
    top_padding: f64,
    bottom_padding: f64,
    narrow_bottom_padding: f64,
    narrow_below: f64,
    caption_margin: f64,
    caption_padding: f64,
    caption_line_height: f64,
    max_liner_px: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            side_padding: 40.0,
            top_padding: 40.0,
            bottom_padding: 50.0,
            narrow_bottom_padding: 70.0,
            narrow_below: 300.0,
            caption_margin: 10.0,
            caption_padding: 10.0,
            caption_line_height: 15.0,
            max_liner_px: 100_000.0,
        }
    }
}

impl LayoutConfig {
    /// Padding left and right of the stack.
    pub fn side_padding(self, px: f64) -> Self {
        LayoutConfig {
            side_padding: px,
            ..self
        }
    }

    /// Padding above the stack.
    pub fn top_padding(self, px: f64) -> Self {
        LayoutConfig {
            top_padding: px,
            ..self
        }
    }

    /// Bottom padding for regular media, and for media narrower than
    /// `narrow_below` pixels whose caption wraps onto two lines.
    pub fn bottom_padding(self, regular: f64, narrow: f64, narrow_below: f64) -> Self {
        LayoutConfig {
            bottom_padding: regular,
            narrow_bottom_padding: narrow,
            narrow_below,
            ..self
        }
    }

    /// Height of one caption line. The caption block adds 10px of padding
    /// above and below its lines.
    pub fn caption_line_height(self, px: f64) -> Self {
        LayoutConfig {
            caption_line_height: px,
            ..self
        }
    }

    /// Largest liner width or length, in pixels, accepted by the engine.
    pub fn max_liner_px(self, px: f64) -> Self {
        LayoutConfig {
            max_liner_px: px,
            ..self
        }
    }
}

/// How a horizontal edge is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Perforated edge.
    Dashed,
    /// Plain cut edge.
    Solid,
}

/// Perforation line between two adjacent units, in stack coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separator {
    /// Height of the boundary, equal to the top of the lower unit.
    pub y: f64,
    pub x: f64,
    /// Length of the line, always the liner width.
    pub width: f64,
    pub style: LineStyle,
}

/// Line style of the top and bottom edge of the whole stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OuterEdges {
    pub top: LineStyle,
    pub bottom: LineStyle,
}

/// What a unit holds, depending on the media type.
#[derive(Debug, Clone, PartialEq)]
pub enum UnitBody {
    /// A liner with one centered label silhouette on it.
    Label { liner: Rect, label: Silhouette },
    /// A bare tag with its sensing overlays.
    Tag { tag: Rect, cutouts: Vec<Cutout> },
}

/// One copy of the previewed media. All geometry is in stack coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaUnit {
    /// Zero-based position in the stack, top first.
    pub index: usize,
    /// Liner or tag rectangle of this unit.
    pub bounds: Rect,
    pub body: UnitBody,
}

/// Note block at the bottom of the container, in container coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: &'static str,
    /// 2 on narrow media, where the text is wrapped, otherwise 1.
    pub lines: usize,
    pub rect: Rect,
}

/// Everything a renderer needs to draw one preview.
///
/// Produced fresh by every [`LayoutEngine::layout`] call and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Size of the whole preview, padding and caption included.
    pub container: Size,
    /// Position of the stack's top-left corner inside the container.
    pub stack_origin: Point,
    /// Size of one liner or tag, at least 1px on each side.
    pub liner: Size,
    pub top_padding: f64,
    /// 70px below narrow media, 50px otherwise, with the default config.
    pub bottom_padding: f64,
    /// The repeated units, top to bottom.
    pub units: Vec<MediaUnit>,
    /// One line per boundary between units, only when perforated.
    pub separators: Vec<Separator>,
    pub edges: OuterEdges,
    pub caption: Caption,
    pub finished_format: Option<FinishedFormat>,
    /// Non-fatal problems found while laying out, already logged.
    pub warnings: Vec<Warning>,
}

impl LayoutResult {
    /// Number of repeated units, between 1 and 3.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }
}

/// Computes layouts with a fixed [`LayoutConfig`].
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

/// Lay out `spec` with the default configuration.
pub fn layout(spec: &MediaSpec) -> Result<LayoutResult, Error> {
    LayoutEngine::default().layout(spec)
}

impl LayoutEngine {
    /// Create an engine using `config` for padding, caption and size limits.
    pub fn new(config: LayoutConfig) -> Self {
        LayoutEngine { config }
    }

    /// Configuration this engine lays out with.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Compute the preview of `spec`.
    ///
    /// # Arguments
    ///
    /// * `spec` - The media to preview, in any measurement unit.
    ///
    /// # Returns
    ///
    /// The positioned geometry, or a [`ValidationError`] when the media type,
    /// width or length is missing, when a linear field is not finite, or when
    /// any linear field converts to more pixels than the configured limit. Zero or negative dimensions are floored to a 1px liner; a label
    /// that no longer fits its liner is kept with its negative size and
    /// reported in [`LayoutResult::warnings`].
    pub fn layout(&self, spec: &MediaSpec) -> Result<LayoutResult, Error> {
        let media_type = self.validate(spec)?;
        let cfg = &self.config;
        let unit = spec.measurement_unit;
        let scale = scale_factor(unit);
        let mut warnings = Vec::new();

        // validate() guarantees both are present
        let width = spec.width.unwrap_or_default();
        let length = spec.length.unwrap_or_default();

        let liner = Size::new((width * scale).max(1.0), (length * scale).max(1.0));
        debug!(
            "Liner dimensions (px): width = {}, height = {}",
            liner.width, liner.height
        );

        let inset_px = |value: Option<f64>| value.unwrap_or_else(|| default_inset(unit)) * scale;

        let label = match media_type {
            MediaType::Label => {
                let label = Size::new(
                    liner.width - (inset_px(spec.left_margin) + inset_px(spec.right_margin)),
                    liner.height - 2.0 * inset_px(spec.gap_down),
                );
                debug!(
                    "Label dimensions (px): width = {}, height = {}",
                    label.width, label.height
                );
                if label.width <= 0.0 || label.height <= 0.0 {
                    let warning = Warning::DegenerateGeometry {
                        width: label.width,
                        height: label.height,
                    };
                    warn!("{}", warning);
                    warnings.push(warning);
                }
                Some(label)
            }
            MediaType::Tag => None,
        };

        let count = plan_repetition(length, unit);
        debug!("Previewing {} unit(s) of {}", count, media_type);

        let narrow = liner.width < cfg.narrow_below;
        let bottom_padding = if narrow {
            cfg.narrow_bottom_padding
        } else {
            cfg.bottom_padding
        };
        let container = Size::new(
            liner.width + 2.0 * cfg.side_padding,
            count as f64 * liner.height + cfg.top_padding + bottom_padding,
        );

        let perforated = match media_type {
            MediaType::Label => spec.standard_perforation,
            MediaType::Tag => true,
        };

        let units = (0..count)
            .map(|index| {
                let bounds = Rect::new(0.0, index as f64 * liner.height, liner.width, liner.height);
                let body = match label {
                    Some(label) => {
                        let silhouette = build_shape(
                            spec.shape,
                            label.width,
                            label.height,
                            inset_px(spec.corner_radius),
                        )
                        .translate(
                            bounds.x + (liner.width - label.width) / 2.0,
                            bounds.y + (liner.height - label.height) / 2.0,
                        );
                        UnitBody::Label {
                            liner: bounds,
                            label: silhouette,
                        }
                    }
                    None => UnitBody::Tag {
                        tag: bounds,
                        cutouts: build_overlay(
                            spec.sensing_details,
                            index,
                            count,
                            liner.width,
                            liner.height,
                        )
                        .into_iter()
                        .map(|cutout| cutout.translate(bounds.x, bounds.y))
                        .collect(),
                    },
                };
                MediaUnit {
                    index,
                    bounds,
                    body,
                }
            })
            .collect::<Vec<_>>();

        let separators = if perforated {
            (1..count)
                .map(|index| Separator {
                    y: index as f64 * liner.height,
                    x: 0.0,
                    width: liner.width,
                    style: LineStyle::Dashed,
                })
                .collect()
        } else {
            Vec::new()
        };

        let edge_style = if perforated {
            LineStyle::Dashed
        } else {
            LineStyle::Solid
        };

        let lines = if narrow { 2 } else { 1 };
        let caption_height = lines as f64 * cfg.caption_line_height + 2.0 * cfg.caption_padding;
        let caption = Caption {
            text: CAPTION_TEXT,
            lines,
            rect: Rect::new(
                0.0,
                container.height - cfg.caption_margin - caption_height,
                container.width,
                caption_height,
            ),
        };

        info!(
            "Laid out {} {} unit(s) in a {}x{}px container",
            count, media_type, container.width, container.height
        );

        Ok(LayoutResult {
            container,
            stack_origin: Point::new(cfg.side_padding, cfg.top_padding),
            liner,
            top_padding: cfg.top_padding,
            bottom_padding,
            units,
            separators,
            edges: OuterEdges {
                top: edge_style,
                bottom: edge_style,
            },
            caption,
            finished_format: spec.finished_format,
            warnings,
        })
    }

    fn validate(&self, spec: &MediaSpec) -> Result<MediaType, ValidationError> {
        let media_type = spec.media_type.ok_or(ValidationError::MissingMediaType)?;
        spec.width.ok_or(ValidationError::MissingWidth)?;
        spec.length.ok_or(ValidationError::MissingLength)?;

        let scale = scale_factor(spec.measurement_unit);
        let max = self.config.max_liner_px;
        for &(field, value) in spec.linear_fields().iter() {
            let value = match value {
                Some(value) => value,
                None => continue,
            };
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field, value });
            }
            // Any field past the liner limit overflows the pixel geometry, whatever its sign.
            let pixels = value.abs() * scale;
            if pixels > max {
                return Err(ValidationError::TooLarge { field, pixels, max });
            }
        }

        Ok(media_type)
    }
}
