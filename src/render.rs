//! Interpreters over a [`LayoutResult`].
//!
//! The layout engine produces geometry only. A [`Renderer`] decides how that
//! geometry turns into pixels; [`SvgRenderer`] is the one shipped with the
//! crate.

use std::fmt::{self, Write};

use crate::{
    layout::{Caption, LayoutResult, LineStyle, UnitBody},
    sensing::{Cutout, Fill},
    shape::{Outline, Silhouette},
};

/// Something that can draw a finished layout.
pub trait Renderer {
    /// Drawn form of a layout, or a result wrapping it when drawing can fail.
    type Output;

    /// Draw `layout`. The layout itself is never modified.
    fn render(&mut self, layout: &LayoutResult) -> Self::Output;
}

/// Colours and stroke metrics used when drawing a preview.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Container fill, also used to paint notches and slots.
    pub background: String,
    /// Container border.
    pub frame: String,
    pub liner: String,
    /// Fill of the die-cut label.
    pub label: String,
    pub tag: String,
    /// Perforations, outlines and the sensing mark.
    pub ink: String,
    pub caption: String,
    /// Halo drawn behind the caption text.
    pub caption_backdrop: String,
    pub stroke_width: f64,
    /// Dash and gap length of a perforation line.
    pub dash: (f64, f64),
    pub caption_font_size: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: "#f4f4f4".to_string(),
            frame: "#ddd".to_string(),
            liner: "#FFF9DB".to_string(),
            label: "#FFFFFF".to_string(),
            tag: "#FDF5E6".to_string(),
            ink: "#000".to_string(),
            caption: "#666".to_string(),
            caption_backdrop: "rgba(255, 255, 255, 0.8)".to_string(),
            stroke_width: 2.0,
            dash: (6.0, 4.0),
            caption_font_size: 12.0,
        }
    }
}

/// Renders a layout as a standalone SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    palette: Palette,
}

impl Renderer for SvgRenderer {
    type Output = Result<String, fmt::Error>;

    fn render(&mut self, layout: &LayoutResult) -> Self::Output {
        let mut svg = String::new();
        self.write_to(layout, &mut svg)?;
        Ok(svg)
    }
}

impl SvgRenderer {
    /// Create a renderer drawing with `palette` instead of the default colours.
    pub fn new(palette: Palette) -> Self {
        SvgRenderer { palette }
    }

    /// Colours and stroke metrics in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Write the SVG document for `layout` into `out`.
    pub fn write_to<W: Write>(&self, layout: &LayoutResult, out: &mut W) -> fmt::Result {
        let p = &self.palette;
        let container = layout.container;

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.2} {:.2}">"#,
            container.width.ceil(),
            container.height.ceil(),
            container.width,
            container.height
        )?;
        if let Some(format) = layout.finished_format {
            writeln!(out, "  <title>{} preview</title>", format)?;
        }
        writeln!(
            out,
            r#"  <rect x="0.50" y="0.50" width="{:.2}" height="{:.2}" rx="5" fill="{}" stroke="{}"/>"#,
            container.width - 1.0,
            container.height - 1.0,
            p.background,
            p.frame
        )?;
        writeln!(
            out,
            r#"  <g transform="translate({:.2},{:.2})">"#,
            layout.stack_origin.x, layout.stack_origin.y
        )?;

        for unit in &layout.units {
            let b = unit.bounds;
            let fill = match unit.body {
                UnitBody::Label { .. } => &p.liner,
                UnitBody::Tag { .. } => &p.tag,
            };
            writeln!(
                out,
                r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                b.x, b.y, b.width, b.height, fill
            )?;
            self.line(out, b.x, b.y, b.x, b.bottom(), LineStyle::Solid)?;
            self.line(out, b.right(), b.y, b.right(), b.bottom(), LineStyle::Solid)?;

            if let UnitBody::Label { label, .. } = &unit.body {
                self.silhouette(out, label)?;
            }
        }

        let width = layout.liner.width;
        let stack_bottom = layout.units.last().map(|u| u.bounds.bottom()).unwrap_or(0.0);
        self.line(out, 0.0, 0.0, width, 0.0, layout.edges.top)?;
        for separator in &layout.separators {
            self.line(
                out,
                separator.x,
                separator.y,
                separator.x + separator.width,
                separator.y,
                separator.style,
            )?;
        }
        self.line(out, 0.0, stack_bottom, width, stack_bottom, layout.edges.bottom)?;

        // Cutouts go last so they sit above the perforation lines.
        for unit in &layout.units {
            if let UnitBody::Tag { cutouts, .. } = &unit.body {
                for cutout in cutouts {
                    self.cutout(out, cutout)?;
                }
            }
        }

        writeln!(out, "  </g>")?;
        self.caption(out, &layout.caption)?;
        writeln!(out, "</svg>")
    }

    fn line<W: Write>(
        &self,
        out: &mut W,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: LineStyle,
    ) -> fmt::Result {
        let p = &self.palette;
        write!(
            out,
            r#"    <path d="M{:.2},{:.2}L{:.2},{:.2}" stroke="{}" stroke-width="{:.2}""#,
            x1, y1, x2, y2, p.ink, p.stroke_width
        )?;
        if style == LineStyle::Dashed {
            write!(out, r#" stroke-dasharray="{:.2},{:.2}""#, p.dash.0, p.dash.1)?;
        }
        writeln!(out, "/>")
    }

    fn silhouette<W: Write>(&self, out: &mut W, silhouette: &Silhouette) -> fmt::Result {
        let p = &self.palette;
        match &silhouette.inner {
            // Filled outline with an inset copy on top: the gap reads as a border.
            Some(inner) => {
                self.outline(out, &silhouette.outer, &p.ink, None)?;
                self.outline(out, inner, &p.label, None)
            }
            None => self.outline(out, &silhouette.outer, &p.label, Some(p.ink.as_str())),
        }
    }

    fn outline<W: Write>(
        &self,
        out: &mut W,
        outline: &Outline,
        fill: &str,
        stroke: Option<&str>,
    ) -> fmt::Result {
        let bounds = outline.bounds();
        // Degenerate insets are reported on the layout, not drawn.
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Ok(());
        }

        match outline {
            Outline::RoundedRect {
                rect,
                corner_radius,
            } => write!(
                out,
                r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" ry="{:.2}" fill="{}""#,
                rect.x, rect.y, rect.width, rect.height, corner_radius, corner_radius, fill
            )?,
            Outline::Polygon { points, .. } => {
                let points = points
                    .iter()
                    .map(|pt| format!("{:.2},{:.2}", pt.x, pt.y))
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(out, r#"    <polygon points="{}" fill="{}""#, points, fill)?
            }
        }

        match stroke {
            Some(stroke) => writeln!(
                out,
                r#" stroke="{}" stroke-width="{:.2}"/>"#,
                stroke, self.palette.stroke_width
            ),
            None => writeln!(out, "/>"),
        }
    }

    fn cutout<W: Write>(&self, out: &mut W, cutout: &Cutout) -> fmt::Result {
        let fill = match cutout.fill() {
            Fill::Background => &self.palette.background,
            Fill::Ink => &self.palette.ink,
        };
        let r = cutout.rect;
        writeln!(
            out,
            r#"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
            r.x, r.y, r.width, r.height, fill
        )
    }

    fn caption<W: Write>(&self, out: &mut W, caption: &Caption) -> fmt::Result {
        let p = &self.palette;
        let r = caption.rect;
        let lines = wrap_caption(caption.text, caption.lines);
        let line_height = (r.height - p.caption_font_size) / (lines.len() as f64 + 1.0);

        writeln!(
            out,
            r#"  <g font-size="{:.2}" font-style="italic" font-weight="bold" fill="{}" text-anchor="middle">"#,
            p.caption_font_size, p.caption
        )?;
        for (i, line) in lines.iter().enumerate() {
            let y = r.y + p.caption_font_size / 2.0 + line_height * (i as f64 + 1.0);
            writeln!(
                out,
                r#"    <text x="{:.2}" y="{:.2}" dominant-baseline="middle" style="paint-order:stroke" stroke="{}" stroke-width="3">{}</text>"#,
                r.x + r.width / 2.0,
                y,
                p.caption_backdrop,
                line
            )?;
        }
        writeln!(out, "  </g>")
    }
}

/// Split `text` into `lines` pieces at word boundaries, balancing lengths.
fn wrap_caption(text: &str, lines: usize) -> Vec<&str> {
    if lines < 2 {
        return vec![text];
    }

    let middle = text.len() / 2;
    let split = text
        .match_indices(' ')
        .map(|(i, _)| i)
        .min_by_key(|&i| (i as isize - middle as isize).abs());

    match split {
        Some(i) => vec![&text[..i], &text[i + 1..]],
        None => vec![text],
    }
}
