//! Design and evaluation constants
//!
//! Fixed sizes and defaults shared by the designer and the response
//! evaluator. Everything is compile-time so the core never allocates.

/// Number of unit-circle samples in a frequency response sweep
pub const RESPONSE_POINTS: usize = 512;

/// Sample rate used when the caller does not supply one
pub const DEFAULT_SAMPLE_RATE_HZ: f64 = 8000.0;

/// Highest supported filter order
///
/// Bounds the pole set capacity.
pub const MAX_ORDER: usize = 32;

/// Capacity of an expanded denominator (`MAX_ORDER + 1` terms)
pub const MAX_COEFFS: usize = MAX_ORDER + 1;

/// Magnitude reported in dB for an exactly zero response
pub const MAGNITUDE_FLOOR_DB: f64 = -120.0;
