use crate::{media::MeasurementUnit, PX_PER_INCH};

/// Pixels per one `unit`, at the CSS reference density of 96 px per inch.
pub fn scale_factor(unit: MeasurementUnit) -> f64 {
    PX_PER_INCH / unit.per_inch()
}
