use crate::media::MeasurementUnit;

/// Above this length (inches) a single unit is previewed.
const SINGLE_UNIT_ABOVE_INCHES: f64 = 5.0;
/// Above this length (inches), and up to the single-unit threshold, two units.
const TWO_UNITS_ABOVE_INCHES: f64 = 3.0;

/// Number of stacked copies to preview for a unit `length` long.
///
/// Longer media leave less room, so fewer copies are shown: one above 5 in,
/// two above 3 in, three otherwise. The same rule holds for labels and tags.
pub fn plan_repetition(length: f64, unit: MeasurementUnit) -> usize {
    let per_inch = unit.per_inch();

    if length > SINGLE_UNIT_ABOVE_INCHES * per_inch {
        1
    } else if length > TWO_UNITS_ABOVE_INCHES * per_inch {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_in_inches() {
        assert_eq!(plan_repetition(6.0, MeasurementUnit::Inches), 1);
        assert_eq!(plan_repetition(5.0, MeasurementUnit::Inches), 2);
        assert_eq!(plan_repetition(4.0, MeasurementUnit::Inches), 2);
        assert_eq!(plan_repetition(3.0, MeasurementUnit::Inches), 3);
        assert_eq!(plan_repetition(0.5, MeasurementUnit::Inches), 3);
    }

    #[test]
    fn thresholds_scale_for_millimeters() {
        assert_eq!(plan_repetition(127.1, MeasurementUnit::Millimeters), 1);
        assert_eq!(plan_repetition(127.0, MeasurementUnit::Millimeters), 2);
        assert_eq!(plan_repetition(76.3, MeasurementUnit::Millimeters), 2);
        assert_eq!(plan_repetition(76.1, MeasurementUnit::Millimeters), 3);
        // 4 inches would be two units, 4 millimeters is well under 3 inches
        assert_eq!(plan_repetition(4.0, MeasurementUnit::Millimeters), 3);
    }

    #[test]
    fn never_increases_with_length() {
        for unit in MeasurementUnit::ALL {
            let mut previous = usize::MAX;
            for step in 0..=400 {
                let length = step as f64 * 0.05 * unit.per_inch();
                let count = plan_repetition(length, *unit);
                assert!(count <= previous, "{} {} -> {}", length, unit, count);
                assert!((1..=3).contains(&count));
                previous = count;
            }
        }
    }

    #[test]
    fn nan_falls_through_to_three() {
        assert_eq!(plan_repetition(f64::NAN, MeasurementUnit::Inches), 3);
    }
}
