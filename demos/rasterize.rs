use image::{Rgb, RgbImage};
use media_preview::{
    layout, Fill, LayoutResult, LineStyle, MeasurementUnit, MediaSpec, MediaType, Outline,
    Palette, Point, Rect, Renderer, SensingDetails, Shape, UnitBody,
};
use std::env;
//
// cargo run --example rasterize [label|rat-tail|tag] [OUTPUT.png]
//

fn print_usage() {
    println!("Usage: cargo run --example rasterize [OPTION] [OUTPUT.png]");
    println!("Options:");
    println!("  label      2 x 4 in perforated rectangular label");
    println!("  oval       2 x 2 in oval label");
    println!("  rat-tail   0.5 x 2.5 in jewelry rat-tail label");
    println!("  tag        1.5 x 3.5 in tag with left and right notches");
    println!("\nIf no option is provided, 'label' is used as default.");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let option = args.get(1).map(String::as_str).unwrap_or("label");

    if option == "--help" || option == "-h" {
        print_usage();
        return;
    }

    let base = MediaSpec::new(MeasurementUnit::Inches);
    let spec = match option {
        "label" => base
            .media_type(MediaType::Label)
            .width(2.0)
            .length(4.0)
            .standard_perforation(true),
        "oval" => base
            .media_type(MediaType::Label)
            .shape(Shape::CircularOval)
            .width(2.0)
            .length(2.0),
        "rat-tail" => base
            .media_type(MediaType::Label)
            .shape(Shape::JewelryRatTail)
            .width(0.5)
            .length(2.5)
            .margins(Some(0.0625), Some(0.0625)),
        "tag" => base
            .media_type(MediaType::Tag)
            .width(1.5)
            .length(3.5)
            .sensing_details(SensingDetails::LeftRightNotches),
        _ => {
            eprintln!("Error: Unknown option '{}'", option);
            print_usage();
            return;
        }
    };

    let result = layout(&spec).expect("Invalid media spec");
    let image = Raster::new(Palette::default()).render(&result);

    let path = args.get(2).map(String::as_str).unwrap_or("preview.png");
    match image.save(path) {
        Ok(()) => println!("Saved {}x{} preview to {}", image.width(), image.height(), path),
        Err(err) => eprintln!("Failed to save {}: {}", path, err),
    }
}

/// Draws a layout into an RGB bitmap, one pixel per layout pixel.
struct Raster {
    palette: Palette,
}

impl Renderer for Raster {
    type Output = RgbImage;

    fn render(&mut self, layout: &LayoutResult) -> RgbImage {
        let p = &self.palette;
        let width = layout.container.width.ceil().max(1.0) as u32;
        let height = layout.container.height.ceil().max(1.0) as u32;
        let mut img = RgbImage::from_pixel(width, height, color(&p.background));
        let origin = layout.stack_origin;
        let ink = color(&p.ink);
        let stroke = p.stroke_width;

        for unit in &layout.units {
            let bounds = unit.bounds.translate(origin.x, origin.y);
            let fill = match unit.body {
                UnitBody::Label { .. } => color(&p.liner),
                UnitBody::Tag { .. } => color(&p.tag),
            };
            fill_rect(&mut img, bounds, fill);
            fill_rect(&mut img, Rect::new(bounds.x, bounds.y, stroke, bounds.height), ink);
            fill_rect(
                &mut img,
                Rect::new(bounds.right() - stroke, bounds.y, stroke, bounds.height),
                ink,
            );

            if let UnitBody::Label { label, .. } = &unit.body {
                let outer = label.outer.clone().translate(origin.x, origin.y);
                match &label.inner {
                    Some(inner) => {
                        fill_outline(&mut img, &outer, ink);
                        let inner = inner.clone().translate(origin.x, origin.y);
                        fill_outline(&mut img, &inner, color(&p.label));
                    }
                    None => {
                        fill_outline(&mut img, &outer, ink);
                        let inset = match outer {
                            Outline::RoundedRect {
                                rect,
                                corner_radius,
                            } => Outline::RoundedRect {
                                rect: rect.inset(stroke),
                                corner_radius: (corner_radius - stroke).max(0.0),
                            },
                            polygon => polygon,
                        };
                        fill_outline(&mut img, &inset, color(&p.label));
                    }
                }
            }
        }

        let liner_width = layout.liner.width;
        let bottom = layout.units.last().map(|u| u.bounds.bottom()).unwrap_or(0.0);
        let mut lines = vec![(0.0, layout.edges.top)];
        lines.extend(layout.separators.iter().map(|s| (s.y, s.style)));
        lines.push((bottom, layout.edges.bottom));
        for (y, style) in lines {
            hline(
                &mut img,
                origin.x,
                origin.y + y,
                liner_width,
                style,
                p.dash,
                stroke,
                ink,
            );
        }

        for unit in &layout.units {
            if let UnitBody::Tag { cutouts, .. } = &unit.body {
                for cutout in cutouts {
                    let fill = match cutout.fill() {
                        Fill::Background => color(&p.background),
                        Fill::Ink => ink,
                    };
                    fill_rect(&mut img, cutout.rect.translate(origin.x, origin.y), fill);
                }
            }
        }

        img
    }
}

impl Raster {
    fn new(palette: Palette) -> Self {
        Raster { palette }
    }
}

/// Parse `#rgb` or `#rrggbb`; anything else draws as mid grey.
fn color(hex: &str) -> Rgb<u8> {
    let digits = hex.trim_start_matches('#');
    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0x80);
    match digits.len() {
        3 => {
            let c: Vec<u8> = digits
                .chars()
                .map(|c| channel(&format!("{}{}", c, c)))
                .collect();
            Rgb([c[0], c[1], c[2]])
        }
        6 => Rgb([
            channel(&digits[0..2]),
            channel(&digits[2..4]),
            channel(&digits[4..6]),
        ]),
        _ => Rgb([0x80, 0x80, 0x80]),
    }
}

fn pixels_in(img: &RgbImage, rect: Rect) -> impl Iterator<Item = (u32, u32)> {
    let x0 = rect.x.max(0.0).floor() as u32;
    let y0 = rect.y.max(0.0).floor() as u32;
    let x1 = (rect.right().ceil().max(0.0) as u32).min(img.width());
    let y1 = (rect.bottom().ceil().max(0.0) as u32).min(img.height());
    (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
}

fn fill_rect(img: &mut RgbImage, rect: Rect, fill: Rgb<u8>) {
    let pixels: Vec<_> = pixels_in(img, rect).collect();
    for (x, y) in pixels {
        img.put_pixel(x, y, fill);
    }
}

fn fill_outline(img: &mut RgbImage, outline: &Outline, fill: Rgb<u8>) {
    let bounds = outline.bounds();
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return;
    }
    let pixels: Vec<_> = pixels_in(img, bounds)
        .filter(|&(x, y)| {
            let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
            match outline {
                Outline::RoundedRect {
                    rect,
                    corner_radius,
                } => in_rounded_rect(center, *rect, *corner_radius),
                Outline::Polygon { points, .. } => in_polygon(center, points),
            }
        })
        .collect();
    for (x, y) in pixels {
        img.put_pixel(x, y, fill);
    }
}

fn in_rounded_rect(pt: Point, rect: Rect, radius: f64) -> bool {
    if !rect.contains(pt) {
        return false;
    }
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let cx = pt.x.max(rect.x + r).min(rect.right() - r);
    let cy = pt.y.max(rect.y + r).min(rect.bottom() - r);
    (pt.x - cx).powi(2) + (pt.y - cy).powi(2) <= r * r
}

// Even-odd ray casting.
fn in_polygon(pt: Point, points: &[Point]) -> bool {
    let mut inside = false;
    let mut j = points.len().wrapping_sub(1);
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > pt.y) != (b.y > pt.y) && pt.x < (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[allow(clippy::too_many_arguments)]
fn hline(
    img: &mut RgbImage,
    x: f64,
    y: f64,
    width: f64,
    style: LineStyle,
    dash: (f64, f64),
    stroke: f64,
    ink: Rgb<u8>,
) {
    let top = y - stroke / 2.0;
    match style {
        LineStyle::Solid => fill_rect(img, Rect::new(x, top, width, stroke), ink),
        LineStyle::Dashed => {
            let mut start = x;
            while start < x + width {
                let len = dash.0.min(x + width - start);
                fill_rect(img, Rect::new(start, top, len, stroke), ink);
                start += dash.0 + dash.1;
            }
        }
    }
}
