use std::{fmt, str::FromStr};

use crate::error::Error;

/// Default gap, margins and corner radius, in inches.
pub const DEFAULT_INSET_INCHES: f64 = 0.125;

/// Kind of media being previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// Adhesive label on a liner.
    Label,
    /// Hang tag, no liner.
    Tag,
}

/// Die-cut outline of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    SquareRectangle,
    CircularOval,
    JewelryRatTail,
    /// Custom outline. Drawn like `SquareRectangle` until a real geometry exists.
    Other,
}

/// Printer-alignment feature cut or printed on a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensingDetails {
    None,
    BlackSensingMark,
    LeftRightNotches,
    LeftNotch,
    RightNotch,
    CentralSensingSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementUnit {
    Inches,
    Millimeters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishedFormat {
    Roll,
    Fanfold,
}

impl MeasurementUnit {
    /// Length of one inch in this unit.
    pub fn per_inch(&self) -> f64 {
        match self {
            Self::Inches => 1.0,
            Self::Millimeters => crate::MM_PER_INCH,
        }
    }
}

// Option labels as an outer form presents them. Spellings after `|` are also
// accepted on input.

macro_rules! options {
    ($ty:ident, $kind:literal, { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in presentation order.
            pub const ALL: &'static [$ty] = &[$(Self::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                $(
                    if token.eq_ignore_ascii_case($label)
                        || token.eq_ignore_ascii_case(stringify!($variant))
                        $(|| token.eq_ignore_ascii_case($alias))*
                    {
                        return Ok(Self::$variant);
                    }
                )+
                Err(Error::UnknownOption {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

options!(MediaType, "media type", {
    Label => "Label",
    Tag => "Tag",
});

options!(Shape, "shape", {
    SquareRectangle => "Square/Rectangle",
    CircularOval => "Circular/Oval",
    JewelryRatTail => "Jewelry/Rat-tail",
    Other => "Other",
});

options!(SensingDetails, "sensing details", {
    None => "None",
    BlackSensingMark => "Black Sensing Mark",
    LeftRightNotches => "Left & Right Notches" | "Left/Right Notches",
    LeftNotch => "Left Notch",
    RightNotch => "Right Notch",
    CentralSensingSlot => "Central Sensing Slot",
});

options!(MeasurementUnit, "measurement unit", {
    Inches => "Inches",
    Millimeters => "Millimeters",
});

options!(FinishedFormat, "finished format", {
    Roll => "Roll",
    Fanfold => "Fanfold",
});

/// Physical description of the media to preview.
///
/// All linear fields are expressed in `measurement_unit`. Use
/// [`convert`](crate::convert()) to change the unit; it rewrites every linear
/// field at once.
///
/// # Example
///
/// ```
/// use media_preview::{MediaSpec, MediaType, MeasurementUnit, Shape};
///
/// let spec = MediaSpec::new(MeasurementUnit::Inches)
///     .media_type(MediaType::Label)
///     .shape(Shape::CircularOval)
///     .width(2.0)
///     .length(4.0)
///     .standard_perforation(true);
/// assert_eq!(spec.gap_down, Some(0.125));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSpec {
    pub media_type: Option<MediaType>,
    pub shape: Shape,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub gap_down: Option<f64>,
    pub left_margin: Option<f64>,
    pub right_margin: Option<f64>,
    pub corner_radius: Option<f64>,
    pub standard_perforation: bool,
    pub sensing_details: SensingDetails,
    pub measurement_unit: MeasurementUnit,
    pub finished_format: Option<FinishedFormat>,
}

impl MediaSpec {
    /// Start a spec in `unit` with no media type or dimensions, and the
    /// default 0.125 inch gap, margins and corner radius.
    pub fn new(unit: MeasurementUnit) -> MediaSpec {
        let inset = Some(default_inset(unit));
        MediaSpec {
            media_type: None,
            shape: Shape::SquareRectangle,
            width: None,
            length: None,
            gap_down: inset,
            left_margin: inset,
            right_margin: inset,
            corner_radius: inset,
            standard_perforation: false,
            sensing_details: SensingDetails::None,
            measurement_unit: unit,
            finished_format: None,
        }
    }

    pub fn media_type(self, media_type: MediaType) -> Self {
        MediaSpec {
            media_type: Some(media_type),
            ..self
        }
    }

    pub fn shape(self, shape: Shape) -> Self {
        MediaSpec { shape, ..self }
    }

    pub fn width(self, width: f64) -> Self {
        MediaSpec {
            width: Some(width),
            ..self
        }
    }

    pub fn length(self, length: f64) -> Self {
        MediaSpec {
            length: Some(length),
            ..self
        }
    }

    pub fn gap_down(self, gap_down: Option<f64>) -> Self {
        MediaSpec { gap_down, ..self }
    }

    /// Set both side margins.
    pub fn margins(self, left: Option<f64>, right: Option<f64>) -> Self {
        MediaSpec {
            left_margin: left,
            right_margin: right,
            ..self
        }
    }

    pub fn corner_radius(self, corner_radius: Option<f64>) -> Self {
        MediaSpec {
            corner_radius,
            ..self
        }
    }

    pub fn standard_perforation(self, flag: bool) -> Self {
        MediaSpec {
            standard_perforation: flag,
            ..self
        }
    }

    pub fn sensing_details(self, sensing_details: SensingDetails) -> Self {
        MediaSpec {
            sensing_details,
            ..self
        }
    }

    pub fn finished_format(self, format: FinishedFormat) -> Self {
        MediaSpec {
            finished_format: Some(format),
            ..self
        }
    }

    /// The linear fields as `(name, value)` pairs, in declaration order.
    pub(crate) fn linear_fields(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("width", self.width),
            ("length", self.length),
            ("gap_down", self.gap_down),
            ("left_margin", self.left_margin),
            ("right_margin", self.right_margin),
            ("corner_radius", self.corner_radius),
        ]
    }
}

/// The 0.125 inch default expressed in `unit`.
pub fn default_inset(unit: MeasurementUnit) -> f64 {
    DEFAULT_INSET_INCHES * unit.per_inch()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_labels_and_identifiers() {
        assert_eq!("Jewelry/Rat-tail".parse::<Shape>(), Ok(Shape::JewelryRatTail));
        assert_eq!("jewelryrattail".parse::<Shape>(), Ok(Shape::JewelryRatTail));
        assert_eq!(" Tag ".parse::<MediaType>(), Ok(MediaType::Tag));
        assert_eq!(
            "Left & Right Notches".parse::<SensingDetails>(),
            Ok(SensingDetails::LeftRightNotches)
        );
        assert_eq!("fanfold".parse::<FinishedFormat>(), Ok(FinishedFormat::Fanfold));
    }

    #[test]
    fn singular_millimeter_is_not_a_unit() {
        assert_eq!(
            "Millimeter".parse::<MeasurementUnit>(),
            Err(Error::UnknownOption {
                kind: "measurement unit",
                value: "Millimeter".to_string(),
            })
        );
        assert_eq!(
            "Millimeters".parse::<MeasurementUnit>(),
            Ok(MeasurementUnit::Millimeters)
        );
    }

    #[test]
    fn labels_round_trip_through_display() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>(), Ok(*shape));
        }
        for sensing in SensingDetails::ALL {
            assert_eq!(sensing.to_string().parse::<SensingDetails>(), Ok(*sensing));
        }
    }

    #[test]
    fn new_spec_defaults_insets_in_its_own_unit() {
        let spec = MediaSpec::new(MeasurementUnit::Millimeters);
        assert_eq!(spec.media_type, None);
        assert_eq!(spec.width, None);
        assert!((spec.left_margin.unwrap() - 3.175).abs() < 1e-9);
        assert!((spec.corner_radius.unwrap() - 3.175).abs() < 1e-9);
    }

    #[test]
    fn builder_keeps_other_fields() {
        let spec = MediaSpec::new(MeasurementUnit::Inches)
            .media_type(MediaType::Tag)
            .width(1.0)
            .length(6.0)
            .sensing_details(SensingDetails::CentralSensingSlot)
            .margins(None, Some(0.5));
        assert_eq!(spec.media_type, Some(MediaType::Tag));
        assert_eq!(spec.left_margin, None);
        assert_eq!(spec.right_margin, Some(0.5));
        assert_eq!(spec.gap_down, Some(0.125));
        assert_eq!(spec.sensing_details, SensingDetails::CentralSensingSlot);
    }
}
