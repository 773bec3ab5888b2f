//! Frequency response evaluation.
//!
//! Samples `H(z) = B(z^-1)/A(z^-1)` on the upper half of the unit circle,
//! from DC to Nyquist, and reports magnitude against frequency in Hz.

use core::f64::consts::PI;

#[allow(unused_imports)]
use num_traits::Float;

use crate::config::{DEFAULT_SAMPLE_RATE_HZ, MAGNITUDE_FLOOR_DB, RESPONSE_POINTS};
use crate::error::{CoefficientSide, DesignError, Result};
use crate::polynomial::eval_in_z_inverse;
use crate::types::Complex;

/// Magnitude response sampled at [`RESPONSE_POINTS`] frequencies.
///
/// `freq_hz` ascends from 0 to Nyquist; `mag[i]` is the magnitude at
/// `freq_hz[i]`. A sample where the denominator vanished holds `+∞`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyResponse {
    freq_hz: [f64; RESPONSE_POINTS],
    mag: [f64; RESPONSE_POINTS],
    sample_rate_hz: f64,
    singularities: usize,
}

impl FrequencyResponse {
    /// Frequencies in Hz, ascending from 0 to `sample_rate_hz / 2`.
    #[must_use]
    pub fn freq_hz(&self) -> &[f64] {
        &self.freq_hz
    }

    /// Magnitudes, non-negative, `+∞` at singular samples.
    #[must_use]
    pub fn mag(&self) -> &[f64] {
        &self.mag
    }

    /// Sample rate the response was evaluated for.
    #[must_use]
    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    /// Nyquist frequency (last entry of `freq_hz`).
    #[must_use]
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        RESPONSE_POINTS
    }

    /// Always false, a response has a fixed number of samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Number of samples where the denominator was exactly zero.
    #[must_use]
    pub fn singularities(&self) -> usize {
        self.singularities
    }

    /// Magnitude of sample `index` in dB.
    ///
    /// Zero magnitude reports [`MAGNITUDE_FLOOR_DB`], NaN stays NaN.
    #[must_use]
    pub fn magnitude_db(&self, index: usize) -> Option<f64> {
        self.mag.get(index).map(|&m| to_db(m))
    }

    /// All magnitudes in dB, in frequency order.
    pub fn magnitudes_db(&self) -> impl Iterator<Item = f64> + '_ {
        self.mag.iter().map(|&m| to_db(m))
    }

    /// Frequency of sample `index` as a fraction of Nyquist, in [0, 1].
    #[must_use]
    pub fn normalized_frequency(&self, index: usize) -> Option<f64> {
        self.freq_hz.get(index).map(|&f| f / self.nyquist_hz())
    }

    /// Iterate over `(freq_hz, mag)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.freq_hz.iter().copied().zip(self.mag.iter().copied())
    }
}

/// Evaluate the transfer function at `ω` rad/sample.
///
/// Returns `None` when the denominator is exactly zero at `e^{jω}`.
#[must_use]
pub fn transfer_at(b: &[f64], a: &[f64], omega: f64) -> Option<Complex> {
    let z_inv = Complex::cis(-omega);
    eval_in_z_inverse(b, z_inv).checked_div(eval_in_z_inverse(a, z_inv))
}

/// Evaluate the magnitude response at the default 8 kHz sample rate.
///
/// # Errors
/// See [`evaluate_response`].
pub fn evaluate_response_default(b: &[f64], a: &[f64]) -> Result<FrequencyResponse> {
    evaluate_response(b, a, DEFAULT_SAMPLE_RATE_HZ)
}

/// Evaluate the magnitude response of `B(z^-1)/A(z^-1)` from DC to Nyquist.
///
/// # Arguments
/// * `b` - Numerator coefficients, `b[k]` multiplies `z^-k`
/// * `a` - Denominator coefficients, `a[k]` multiplies `z^-k`
/// * `sample_rate_hz` - Sample rate used to label the frequency axis
///
/// Sample `i` sits at `ω_i = π·i/(N−1)`. The DC and Nyquist points use
/// `z = ±1` exactly so that a zero of the denominator there is detected.
/// Samples where the denominator is exactly zero get `+∞` and the sweep
/// continues.
///
/// # Errors
/// Returns an error if either coefficient vector is empty or the sample
/// rate is not positive and finite.
pub fn evaluate_response(b: &[f64], a: &[f64], sample_rate_hz: f64) -> Result<FrequencyResponse> {
    if b.is_empty() {
        return Err(DesignError::EmptyCoefficients {
            side: CoefficientSide::Numerator,
        });
    }
    if a.is_empty() {
        return Err(DesignError::EmptyCoefficients {
            side: CoefficientSide::Denominator,
        });
    }
    if !(sample_rate_hz.is_finite() && sample_rate_hz > 0.0) {
        return Err(DesignError::InvalidSampleRate { sample_rate_hz });
    }

    let last = RESPONSE_POINTS - 1;
    let mut freq_hz = [0.0; RESPONSE_POINTS];
    let mut mag = [0.0; RESPONSE_POINTS];
    let mut singularities = 0;

    for (i, (freq, m)) in freq_hz.iter_mut().zip(mag.iter_mut()).enumerate() {
        let omega = PI * i as f64 / last as f64;
        let z_inv = match i {
            0 => Complex::ONE,
            _ if i == last => Complex::from_real(-1.0),
            _ => Complex::cis(-omega),
        };

        let num = eval_in_z_inverse(b, z_inv);
        let den = eval_in_z_inverse(a, z_inv);

        *m = if den == Complex::ZERO {
            singularities += 1;
            #[cfg(feature = "defmt")]
            defmt::warn!("denominator vanishes at bin {} (omega={})", i, omega);
            f64::INFINITY
        } else {
            num.magnitude() / den.magnitude()
        };
        *freq = omega * sample_rate_hz / (2.0 * PI);
    }
    freq_hz[last] = sample_rate_hz / 2.0;

    Ok(FrequencyResponse {
        freq_hz,
        mag,
        sample_rate_hz,
        singularities,
    })
}

fn to_db(mag: f64) -> f64 {
    if mag == 0.0 {
        MAGNITUDE_FLOOR_DB
    } else {
        20.0 * mag.log10()
    }
}
