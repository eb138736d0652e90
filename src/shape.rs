//! Label silhouettes.
//!
//! A silhouette is built at the origin with the label's own width and height;
//! the layout engine moves it into place.

use crate::{
    geometry::{Point, Rect},
    media::Shape,
};

/// Border ring width of a rat-tail label, in pixels.
pub const RAT_TAIL_BORDER: f64 = 3.0;

/// Rat-tail outline as fractions of the label box: a chevron cut into the top
/// and the bottom edge.
const RAT_TAIL_OUTLINE: [(f64, f64); 10] = [
    (0.0, 0.0),
    (0.2, 0.0),
    (0.5, 0.25),
    (0.8, 0.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.8, 1.0),
    (0.5, 0.75),
    (0.2, 1.0),
    (0.0, 1.0),
];

/// A closed outline in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    RoundedRect { rect: Rect, corner_radius: f64 },
    Polygon { bounds: Rect, points: Vec<Point> },
}

impl Outline {
    pub fn bounds(&self) -> Rect {
        match self {
            Self::RoundedRect { rect, .. } => *rect,
            Self::Polygon { bounds, .. } => *bounds,
        }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        match self {
            Self::RoundedRect {
                rect,
                corner_radius,
            } => Self::RoundedRect {
                rect: rect.translate(dx, dy),
                corner_radius,
            },
            Self::Polygon { bounds, points } => Self::Polygon {
                bounds: bounds.translate(dx, dy),
                points: points.into_iter().map(|p| p.translate(dx, dy)).collect(),
            },
        }
    }
}

/// The die-cut label drawn on a liner.
///
/// `inner` is set for shapes drawn as a filled outline with an inset copy on
/// top, which leaves a visible border ring between the two.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    pub shape: Shape,
    pub outer: Outline,
    pub inner: Option<Outline>,
}

impl Silhouette {
    pub fn bounds(&self) -> Rect {
        self.outer.bounds()
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Silhouette {
            shape: self.shape,
            outer: self.outer.translate(dx, dy),
            inner: self.inner.map(|inner| inner.translate(dx, dy)),
        }
    }
}

/// Build the silhouette of a `label_width` x `label_height` label.
///
/// Dimensions are used as given, negative ones included.
pub fn build_shape(
    shape: Shape,
    label_width: f64,
    label_height: f64,
    corner_radius_px: f64,
) -> Silhouette {
    let rect = Rect::new(0.0, 0.0, label_width, label_height);

    match shape {
        Shape::SquareRectangle => rounded(shape, rect, corner_radius_px),
        // Same drawing as SquareRectangle for now, but still tagged `Other`.
        Shape::Other => rounded(shape, rect, corner_radius_px),
        Shape::CircularOval => {
            let radius = (label_width.min(label_height) / 2.0).max(0.0);
            rounded(shape, rect, radius)
        }
        Shape::JewelryRatTail => Silhouette {
            shape,
            outer: rat_tail(rect),
            inner: Some(rat_tail(rect.inset(RAT_TAIL_BORDER))),
        },
    }
}

fn rounded(shape: Shape, rect: Rect, corner_radius: f64) -> Silhouette {
    Silhouette {
        shape,
        outer: Outline::RoundedRect {
            rect,
            corner_radius,
        },
        inner: None,
    }
}

fn rat_tail(bounds: Rect) -> Outline {
    Outline::Polygon {
        bounds,
        points: RAT_TAIL_OUTLINE
            .iter()
            .map(|&(fx, fy)| bounds.at_fraction(fx, fy))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_uses_given_radius() {
        let silhouette = build_shape(Shape::SquareRectangle, 168.0, 360.0, 12.0);
        assert_eq!(
            silhouette.outer,
            Outline::RoundedRect {
                rect: Rect::new(0.0, 0.0, 168.0, 360.0),
                corner_radius: 12.0,
            }
        );
        assert_eq!(silhouette.inner, None);
    }

    #[test]
    fn other_is_drawn_as_a_rectangle_but_keeps_its_tag() {
        let other = build_shape(Shape::Other, 50.0, 80.0, 12.0);
        let square = build_shape(Shape::SquareRectangle, 50.0, 80.0, 12.0);
        assert_eq!(other.shape, Shape::Other);
        assert_eq!(other.outer, square.outer);
        assert_ne!(other, square);
    }

    #[test]
    fn oval_radius_is_half_the_smaller_side() {
        let silhouette = build_shape(Shape::CircularOval, 100.0, 40.0, 12.0);
        match silhouette.outer {
            Outline::RoundedRect { corner_radius, .. } => assert_eq!(corner_radius, 20.0),
            other => panic!("unexpected outline {:?}", other),
        }
    }

    #[test]
    fn oval_radius_never_goes_negative() {
        let silhouette = build_shape(Shape::CircularOval, -10.0, 40.0, 12.0);
        match silhouette.outer {
            Outline::RoundedRect {
                rect,
                corner_radius,
            } => {
                assert_eq!(corner_radius, 0.0);
                assert_eq!(rect.width, -10.0);
            }
            other => panic!("unexpected outline {:?}", other),
        }
    }

    #[test]
    fn rat_tail_inner_is_inset_by_three_pixels() {
        let silhouette = build_shape(Shape::JewelryRatTail, 100.0, 50.0, 12.0);
        let outer = silhouette.outer.bounds();
        let inner = silhouette.inner.as_ref().map(Outline::bounds).unwrap();

        assert_eq!(inner.size(), crate::geometry::Size::new(94.0, 44.0));
        assert_eq!(inner.x - outer.x, 3.0);
        assert_eq!(inner.y - outer.y, 3.0);
        assert_eq!(outer.right() - inner.right(), 3.0);
        assert_eq!(outer.bottom() - inner.bottom(), 3.0);
    }

    #[test]
    fn rat_tail_outline_is_proportional_and_ignores_radius() {
        let a = build_shape(Shape::JewelryRatTail, 100.0, 50.0, 0.0);
        let b = build_shape(Shape::JewelryRatTail, 100.0, 50.0, 30.0);
        assert_eq!(a, b);

        match a.outer {
            Outline::Polygon { points, .. } => {
                assert_eq!(points.len(), 10);
                assert_eq!(points[2], Point::new(50.0, 12.5));
                assert_eq!(points[7], Point::new(50.0, 37.5));
                assert_eq!(points[5], Point::new(100.0, 50.0));
            }
            other => panic!("unexpected outline {:?}", other),
        }
    }

    #[test]
    fn translate_moves_both_outlines() {
        let silhouette = build_shape(Shape::JewelryRatTail, 100.0, 50.0, 0.0).translate(10.0, 20.0);
        assert_eq!(silhouette.bounds(), Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(
            silhouette.inner.map(|inner| inner.bounds()),
            Some(Rect::new(13.0, 23.0, 94.0, 44.0))
        );
    }
}
