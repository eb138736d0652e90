//! Measurement unit conversion for [`MediaSpec`].

use log::{debug, warn};

use crate::{
    error::Warning,
    media::{MeasurementUnit, MediaSpec},
};

/// Outcome of [`convert_named`].
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub spec: MediaSpec,
    pub warning: Option<Warning>,
}

/// Rewrite every linear field of `spec` in `target` units.
///
/// Present fields are scaled by 25.4 and rounded to 4 decimal places; absent
/// fields stay absent. Converting to the current unit returns a plain copy.
pub fn convert(spec: &MediaSpec, target: MeasurementUnit) -> MediaSpec {
    if spec.measurement_unit == target {
        return spec.clone();
    }

    let factor = target.per_inch() / spec.measurement_unit.per_inch();
    let scale = |value: Option<f64>| value.map(|v| round4(v * factor));

    debug!(
        "Converting media spec from {} to {}",
        spec.measurement_unit, target
    );

    MediaSpec {
        width: scale(spec.width),
        length: scale(spec.length),
        gap_down: scale(spec.gap_down),
        left_margin: scale(spec.left_margin),
        right_margin: scale(spec.right_margin),
        corner_radius: scale(spec.corner_radius),
        measurement_unit: target,
        ..spec.clone()
    }
}

/// Convert using a unit token supplied by an outer layer.
///
/// An unrecognized token leaves the media spec as it is and reports
/// [`Warning::UnitMismatch`].
pub fn convert_named(spec: &MediaSpec, token: &str) -> Conversion {
    match token.parse::<MeasurementUnit>() {
        Ok(target) => Conversion {
            spec: convert(spec, target),
            warning: None,
        },
        Err(_) => {
            let warning = Warning::UnitMismatch {
                token: token.to_string(),
            };
            warn!("{}", warning);
            Conversion {
                spec: spec.clone(),
                warning: Some(warning),
            }
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaType;

    fn close(a: Option<f64>, b: Option<f64>) -> bool {
        match (a, b) {
            (Some(a), Some(b)) => (a - b).abs() <= 1e-4,
            (None, None) => true,
            _ => false,
        }
    }

    fn assert_fields_close(a: &MediaSpec, b: &MediaSpec) {
        for ((name, left), (_, right)) in a.linear_fields().iter().zip(b.linear_fields().iter()) {
            assert!(close(*left, *right), "{}: {:?} != {:?}", name, left, right);
        }
    }

    #[test]
    fn inches_to_millimeters() {
        let spec = MediaSpec::new(MeasurementUnit::Inches).width(1.0).length(1.0);
        let mm = convert(&spec, MeasurementUnit::Millimeters);

        assert_eq!(mm.measurement_unit, MeasurementUnit::Millimeters);
        assert!(close(mm.width, Some(25.4)));
        assert!(close(mm.length, Some(25.4)));
        assert!(close(mm.gap_down, Some(3.175)));
        assert!(close(mm.corner_radius, Some(3.175)));
    }

    #[test]
    fn same_unit_is_a_no_op() {
        let spec = MediaSpec::new(MeasurementUnit::Inches).width(1.23456789);
        assert_eq!(convert(&spec, MeasurementUnit::Inches), spec);
    }

    #[test]
    fn absent_fields_stay_absent() {
        let spec = MediaSpec::new(MeasurementUnit::Inches)
            .length(2.0)
            .gap_down(None)
            .corner_radius(None);
        let mm = convert(&spec, MeasurementUnit::Millimeters);

        assert_eq!(mm.width, None);
        assert_eq!(mm.gap_down, None);
        assert_eq!(mm.corner_radius, None);
        assert!(close(mm.length, Some(50.8)));
    }

    #[test]
    fn rounds_to_four_places() {
        let spec = MediaSpec::new(MeasurementUnit::Millimeters).width(10.0);
        let inches = convert(&spec, MeasurementUnit::Inches);
        assert_eq!(inches.width, Some(0.3937));
    }

    #[test]
    fn round_trip_from_inches() {
        let widths = [0.0, 0.3, 1.0, 2.125, 4.0, 7.77777, 12.5];
        for &width in widths.iter() {
            let spec = MediaSpec::new(MeasurementUnit::Inches)
                .media_type(MediaType::Label)
                .width(width)
                .length(width * 1.7)
                .margins(Some(0.0625), Some(0.2))
                .gap_down(Some(0.33333));
            let back = convert(
                &convert(&spec, MeasurementUnit::Millimeters),
                MeasurementUnit::Inches,
            );
            assert_fields_close(&spec, &back);
            assert_eq!(back.media_type, spec.media_type);
        }
    }

    #[test]
    fn round_trip_from_whole_inch_millimeters() {
        let spec = MediaSpec::new(MeasurementUnit::Millimeters)
            .width(50.8)
            .length(101.6);
        let back = convert(
            &convert(&spec, MeasurementUnit::Inches),
            MeasurementUnit::Millimeters,
        );
        assert_fields_close(&spec, &back);
    }

    #[test]
    fn round_trip_from_millimeters_drifts_within_inch_precision() {
        // Half a unit in the fourth inch decimal, plus the final millimeter rounding.
        let bound = 0.5e-4 * 25.4 + 0.5e-4 + 1e-9;

        let spec = MediaSpec::new(MeasurementUnit::Millimeters).width(1.0);
        let inches = convert(&spec, MeasurementUnit::Inches);
        assert_eq!(inches.width, Some(0.0394));
        let back = convert(&inches, MeasurementUnit::Millimeters);
        assert_eq!(back.width, Some(1.0008));

        for &width in [0.5, 1.0, 3.3, 12.34, 33.3, 99.99, 250.0].iter() {
            let spec = MediaSpec::new(MeasurementUnit::Millimeters)
                .width(width)
                .length(width / 3.0);
            let back = convert(
                &convert(&spec, MeasurementUnit::Inches),
                MeasurementUnit::Millimeters,
            );
            for ((name, before), (_, after)) in
                spec.linear_fields().iter().zip(back.linear_fields().iter())
            {
                let drift = (before.unwrap() - after.unwrap()).abs();
                assert!(drift <= bound, "{} drifted by {}", name, drift);
            }
        }
    }

    #[test]
    fn unknown_token_is_reported_not_applied() {
        let spec = MediaSpec::new(MeasurementUnit::Inches).width(2.0);
        let conversion = convert_named(&spec, "Millimeter");

        assert_eq!(conversion.spec, spec);
        assert_eq!(
            conversion.warning,
            Some(Warning::UnitMismatch {
                token: "Millimeter".to_string()
            })
        );
    }

    #[test]
    fn named_conversion_accepts_canonical_spelling() {
        let spec = MediaSpec::new(MeasurementUnit::Inches).width(2.0);
        let conversion = convert_named(&spec, "Millimeters");

        assert_eq!(conversion.warning, None);
        assert!(close(conversion.spec.width, Some(50.8)));
    }
}
