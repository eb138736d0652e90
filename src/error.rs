//! Error and warning types for media layout operations.
//!
//! Fatal problems are returned as [`Error`]; everything the engine can still
//! draw through is reported as a [`Warning`] next to the result.

use thiserror::Error;

/// Main error type for media preview operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The media spec cannot be laid out.
    ///
    /// No partial layout is produced when this is returned.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An option label from an outer layer did not match any known variant.
    #[error("Unknown {kind} option: {value:?}")]
    UnknownOption { kind: &'static str, value: String },
}

/// Reasons a [`MediaSpec`](crate::MediaSpec) is rejected by the layout engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// No [`MediaType`](crate::MediaType) was chosen.
    #[error("Media type must be specified")]
    MissingMediaType,

    /// The liner width is absent.
    #[error("Width must be specified")]
    MissingWidth,

    /// The liner length is absent.
    #[error("Length must be specified")]
    MissingLength,

    /// A linear field holds NaN or an infinity.
    #[error("{field} is not a finite number: {value}")]
    NonFinite { field: &'static str, value: f64 },

    /// A linear field converts to more pixels than the configured liner limit.
    ///
    /// `pixels` is the field's magnitude at 96 px/in.
    #[error("{field} of {pixels}px exceeds the {max}px limit")]
    TooLarge {
        field: &'static str,
        pixels: f64,
        max: f64,
    },
}

/// Non-fatal diagnostics.
///
/// Warnings never stop a computation. They are logged at `warn` level where
/// they arise and handed back to the caller so a UI can flag them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Warning {
    /// Margins or gap leave no room for the label inside its liner.
    ///
    /// The inset keeps its zero or negative size rather than being clamped.
    #[error("Label inset is degenerate: {width}px x {height}px")]
    DegenerateGeometry { width: f64, height: f64 },

    /// A unit conversion was requested with a token that names no unit.
    /// The media spec is left untouched.
    #[error("Unrecognized measurement unit {token:?}, conversion skipped")]
    UnitMismatch { token: String },
}
