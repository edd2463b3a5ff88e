/// ==============================================================================================
/// ======================================= Error Types ==========================================
/// ==============================================================================================

use std::fmt;

/// Negative error codes preserved from the host filter's taxonomy, one per
/// validated field, in declaration order.
pub const ERR_DIMENSIONS_X: i32 = -5000;
pub const ERR_DIMENSIONS_Y: i32 = -5001;
pub const ERR_DIMENSIONS_Z: i32 = -5002;
pub const ERR_RESOLUTION_X: i32 = -5003;
pub const ERR_RESOLUTION_Y: i32 = -5004;
pub const ERR_RESOLUTION_Z: i32 = -5005;

/// Which configuration field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    DimensionsX,
    DimensionsY,
    DimensionsZ,
    ResolutionX,
    ResolutionY,
    ResolutionZ,
}

impl InvalidField {
    /// The host's negative error code for this field.
    pub fn code(self) -> i32 {
        match self {
            InvalidField::DimensionsX => ERR_DIMENSIONS_X,
            InvalidField::DimensionsY => ERR_DIMENSIONS_Y,
            InvalidField::DimensionsZ => ERR_DIMENSIONS_Z,
            InvalidField::ResolutionX => ERR_RESOLUTION_X,
            InvalidField::ResolutionY => ERR_RESOLUTION_Y,
            InvalidField::ResolutionZ => ERR_RESOLUTION_Z,
        }
    }

    fn label(self) -> &'static str {
        match self {
            InvalidField::DimensionsX => "Dimensions.x",
            InvalidField::DimensionsY => "Dimensions.y",
            InvalidField::DimensionsZ => "Dimensions.z",
            InvalidField::ResolutionX => "Resolution.x",
            InvalidField::ResolutionY => "Resolution.y",
            InvalidField::ResolutionZ => "Resolution.z",
        }
    }
}

/// Fatal and non-fatal conditions the core can report.
#[derive(Debug)]
pub enum SimError {
    /// A dimension or resolution field was non-positive; pre-run, fatal.
    ParameterInvalid { field: InvalidField },
    /// The working buffers could not be allocated; fatal.
    AllocationFailed { what: &'static str },
    /// The Avrami regression could not be computed; non-fatal, (k, n) left unset.
    FitDegenerate { reason: &'static str },
    /// A host-driven cancellation arrived between steps; partial outputs not published.
    Cancelled,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::ParameterInvalid { field } => {
                write!(f, "{} must be a value > 0 (code {})", field.label(), field.code())
            }
            SimError::AllocationFailed { what } => {
                write!(f, "unable to allocate memory for {what}")
            }
            SimError::FitDegenerate { reason } => {
                write!(f, "unable to fit Avrami parameters: {reason}")
            }
            SimError::Cancelled => write!(f, "simulation cancelled between steps"),
        }
    }
}

impl std::error::Error for SimError {}

pub type Result<T> = std::result::Result<T, SimError>;
