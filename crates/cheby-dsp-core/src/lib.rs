//! Chebyshev DSP Core Library
//!
//! Chebyshev Type I lowpass pole design and rational transfer function
//! evaluation. This crate is `no_std` compatible and never allocates, so
//! it runs unchanged on embedded and WASM targets.
//!
//! # Modules
//!
//! - [`types`] - Core types: Complex, PoleSet
//! - [`design`] - Analog prototype poles and bilinear mapping
//! - [`polynomial`] - Pole expansion and polynomial evaluation in `z^-1`
//! - [`response`] - Magnitude response from DC to Nyquist
//! - [`error`] - Parameter errors
//! - [`config`] - Sizes and defaults
//!
//! # Example
//!
//! ```
//! use cheby_dsp_core::{design_chebyshev1_prewarped, evaluate_response};
//!
//! let design = design_chebyshev1_prewarped(4, 1.0, 0.25).unwrap();
//! let a = design.denominator();
//! let response = evaluate_response(&[1.0], &a, 8000.0).unwrap();
//! assert_eq!(response.mag().len(), 512);
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod config;
pub mod design;
pub mod error;
pub mod polynomial;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use config::{DEFAULT_SAMPLE_RATE_HZ, MAX_ORDER, RESPONSE_POINTS};
pub use design::{
    analog_poles, bilinear, design_chebyshev1, design_chebyshev1_prewarped, ripple_factor,
    FilterDesign,
};
pub use error::{CoefficientSide, DesignError, Result};
pub use polynomial::{eval_in_z_inverse, poles_to_coefficients, Coefficients};
pub use response::{evaluate_response, evaluate_response_default, transfer_at, FrequencyResponse};
pub use types::{Complex, PoleSet};
