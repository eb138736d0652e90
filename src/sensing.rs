//! Tag sensing overlays.
//!
//! Notches and slots are not boolean cuts: they are rectangles painted in the
//! background colour above a perforation line so the line appears interrupted.
//! The sensing mark is the one overlay painted in ink.

use crate::{geometry::Rect, media::SensingDetails};

/// Depth of a side notch, and width of a central slot.
pub const NOTCH_WIDTH: f64 = 40.0;
/// Height of a notch or slot, centered on the perforation.
pub const NOTCH_HEIGHT: f64 = 14.0;
/// Height of the black sensing mark, which spans the whole liner width.
pub const MARK_HEIGHT: f64 = 10.0;
/// Distance between the bottom of the sensing mark and the unit's bottom edge.
pub const MARK_OFFSET: f64 = 20.0;

/// Which sensing feature an overlay draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoutKind {
    /// Notch flush with the left side, centered on a perforation.
    LeftNotch,
    /// Notch flush with the right side, centered on a perforation.
    RightNotch,
    /// Slot centered horizontally on a perforation.
    CentralSlot,
    /// Printed bar near the bottom of the tag.
    BlackMark,
}

/// How an overlay is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Same colour as the container background.
    Background,
    /// Opaque black.
    Ink,
}

/// One overlay rectangle, relative to the top-left corner of its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cutout {
    pub kind: CutoutKind,
    pub rect: Rect,
}

impl Cutout {
    /// Paint used for this overlay: ink for the mark, background otherwise.
    pub fn fill(&self) -> Fill {
        match self.kind {
            CutoutKind::BlackMark => Fill::Ink,
            CutoutKind::LeftNotch | CutoutKind::RightNotch | CutoutKind::CentralSlot => {
                Fill::Background
            }
        }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Cutout {
            rect: self.rect.translate(dx, dy),
            ..self
        }
    }
}

/// Overlays for tag `unit_index` of a stack of `total_units`.
///
/// # Arguments
///
/// * `sensing` - Sensing feature chosen for the tag.
/// * `unit_index` - Zero-based position of the tag in the stack.
/// * `total_units` - Number of tags in the stack.
/// * `liner_width_px`, `liner_height_px` - Size of one tag in pixels.
///
/// # Returns
///
/// Overlay rectangles relative to the tag's top-left corner, top edge first.
///
/// Notches and slots go on the top edge of every unit. The bottom edge is
/// annotated too unless the unit closes a stack of several, whose last bottom
/// edge is the outer boundary rather than an inner perforation.
pub fn build_overlay(
    sensing: SensingDetails,
    unit_index: usize,
    total_units: usize,
    liner_width_px: f64,
    liner_height_px: f64,
) -> Vec<Cutout> {
    let kinds: &[CutoutKind] = match sensing {
        SensingDetails::None => &[],
        SensingDetails::BlackSensingMark => {
            return vec![Cutout {
                kind: CutoutKind::BlackMark,
                rect: Rect::new(
                    0.0,
                    liner_height_px - MARK_OFFSET - MARK_HEIGHT,
                    liner_width_px,
                    MARK_HEIGHT,
                ),
            }];
        }
        SensingDetails::LeftRightNotches => &[CutoutKind::LeftNotch, CutoutKind::RightNotch],
        SensingDetails::LeftNotch => &[CutoutKind::LeftNotch],
        SensingDetails::RightNotch => &[CutoutKind::RightNotch],
        SensingDetails::CentralSensingSlot => &[CutoutKind::CentralSlot],
    };

    let mut edges = vec![0.0];
    if total_units <= 1 || unit_index + 1 < total_units {
        edges.push(liner_height_px);
    }

    edges
        .iter()
        .flat_map(|&edge| {
            kinds.iter().map(move |&kind| Cutout {
                kind,
                rect: notch_rect(kind, edge, liner_width_px),
            })
        })
        .collect()
}

fn notch_rect(kind: CutoutKind, edge: f64, liner_width_px: f64) -> Rect {
    let x = match kind {
        CutoutKind::LeftNotch => 0.0,
        CutoutKind::RightNotch => liner_width_px - NOTCH_WIDTH,
        CutoutKind::CentralSlot => liner_width_px / 2.0 - NOTCH_WIDTH / 2.0,
        CutoutKind::BlackMark => 0.0,
    };
    Rect::new(x, edge - NOTCH_HEIGHT / 2.0, NOTCH_WIDTH, NOTCH_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_draws_nothing() {
        assert!(build_overlay(SensingDetails::None, 0, 1, 96.0, 576.0).is_empty());
    }

    #[test]
    fn black_mark_sits_above_the_bottom_edge_only() {
        let cutouts = build_overlay(SensingDetails::BlackSensingMark, 0, 1, 96.0, 576.0);
        assert_eq!(
            cutouts,
            vec![Cutout {
                kind: CutoutKind::BlackMark,
                rect: Rect::new(0.0, 546.0, 96.0, 10.0),
            }]
        );
        assert_eq!(cutouts[0].fill(), Fill::Ink);
        assert_eq!(576.0 - cutouts[0].rect.bottom(), MARK_OFFSET);
    }

    #[test]
    fn standalone_unit_is_notched_on_both_edges() {
        let cutouts = build_overlay(SensingDetails::LeftNotch, 0, 1, 200.0, 300.0);
        let rects: Vec<Rect> = cutouts.iter().map(|c| c.rect).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(0.0, -7.0, 40.0, 14.0),
                Rect::new(0.0, 293.0, 40.0, 14.0),
            ]
        );
        assert!(cutouts.iter().all(|c| c.fill() == Fill::Background));
    }

    #[test]
    fn last_unit_of_a_stack_skips_its_bottom_edge() {
        let first = build_overlay(SensingDetails::RightNotch, 0, 3, 200.0, 100.0);
        let middle = build_overlay(SensingDetails::RightNotch, 1, 3, 200.0, 100.0);
        let last = build_overlay(SensingDetails::RightNotch, 2, 3, 200.0, 100.0);

        assert_eq!(first.len(), 2);
        assert_eq!(middle.len(), 2);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].rect, Rect::new(160.0, -7.0, 40.0, 14.0));
    }

    #[test]
    fn left_right_notches_are_flush_to_both_sides() {
        let cutouts = build_overlay(SensingDetails::LeftRightNotches, 0, 2, 200.0, 100.0);
        let kinds: Vec<CutoutKind> = cutouts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                CutoutKind::LeftNotch,
                CutoutKind::RightNotch,
                CutoutKind::LeftNotch,
                CutoutKind::RightNotch,
            ]
        );
        assert_eq!(cutouts[0].rect.x, 0.0);
        assert_eq!(cutouts[1].rect.right(), 200.0);
        assert_eq!(cutouts[3].rect.y + NOTCH_HEIGHT / 2.0, 100.0);
    }

    #[test]
    fn central_slot_straddles_the_center() {
        let cutouts = build_overlay(SensingDetails::CentralSensingSlot, 0, 1, 96.0, 288.0);
        assert_eq!(cutouts.len(), 2);
        for cutout in &cutouts {
            assert_eq!(cutout.kind, CutoutKind::CentralSlot);
            assert_eq!(cutout.rect.x, 28.0);
            assert_eq!(cutout.rect.right(), 68.0);
        }
        assert_eq!(cutouts[0].rect.y, -7.0);
        assert_eq!(cutouts[1].rect.y, 281.0);
    }
}
