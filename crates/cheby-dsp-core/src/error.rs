//! Error types for filter design and response evaluation.
//!
//! Every variant describes an input outside its domain. Denominator
//! singularities during a sweep are not errors: they are reported per
//! sample on the [`FrequencyResponse`](crate::FrequencyResponse).

use core::fmt;

use thiserror::Error;

/// Which side of a rational transfer function a coefficient vector belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CoefficientSide {
    /// `b`, the numerator
    Numerator,
    /// `a`, the denominator
    Denominator,
}

impl fmt::Display for CoefficientSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numerator => write!(f, "numerator"),
            Self::Denominator => write!(f, "denominator"),
        }
    }
}

/// Errors that can occur while designing a filter or evaluating its response.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DesignError {
    /// Filter order is zero or above the supported maximum.
    #[error("invalid filter order: {order} (must be 1..={max})")]
    InvalidOrder {
        /// The invalid order
        order: usize,
        /// Highest supported order
        max: usize,
    },

    /// Passband ripple is not a positive, finite number of dB.
    #[error("invalid passband ripple: {ripple_db} dB (must be > 0)")]
    InvalidRipple {
        /// The invalid ripple value
        ripple_db: f64,
    },

    /// Normalized cutoff lies outside the open interval (0, 1).
    #[error("invalid normalized cutoff: {cutoff_norm} (must be > 0 and < 1)")]
    InvalidCutoff {
        /// The invalid cutoff value
        cutoff_norm: f64,
    },

    /// Sample rate is not a positive, finite frequency.
    #[error("invalid sample rate: {sample_rate_hz} Hz (must be > 0)")]
    InvalidSampleRate {
        /// The invalid sample rate
        sample_rate_hz: f64,
    },

    /// A coefficient vector has no terms.
    #[error("empty {side} coefficient vector (needs at least a constant term)")]
    EmptyCoefficients {
        /// Which vector was empty
        side: CoefficientSide,
    },
}

/// A specialized `Result` type for design and evaluation.
pub type Result<T> = core::result::Result<T, DesignError>;

impl DesignError {
    /// Returns `true` for out-of-domain inputs.
    ///
    /// Currently every variant is a parameter error.
    #[must_use]
    pub const fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::InvalidOrder { .. }
                | Self::InvalidRipple { .. }
                | Self::InvalidCutoff { .. }
                | Self::InvalidSampleRate { .. }
                | Self::EmptyCoefficients { .. }
        )
    }

    /// Returns `true` if this is a coefficient vector error.
    #[must_use]
    pub const fn is_coefficient_error(&self) -> bool {
        matches!(self, Self::EmptyCoefficients { .. })
    }
}
