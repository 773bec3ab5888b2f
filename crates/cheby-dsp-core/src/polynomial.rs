//! Polynomials in `z^-1`.
//!
//! Expands a pole set into denominator coefficients and evaluates
//! coefficient vectors at a point of the z-plane.

use crate::config::{MAX_COEFFS, MAX_ORDER};
use crate::error::{DesignError, Result};
use crate::types::Complex;

/// Real coefficient vector produced by pole expansion, index 0 is the constant term.
pub type Coefficients = heapless::Vec<f64, MAX_COEFFS>;

/// Expand `Π (1 − p_k·z^-1)` into real coefficients.
///
/// The result has `poles.len() + 1` terms with `a[0] = 1`. Poles are
/// expected to come in conjugate pairs (or be real); the imaginary residue
/// of each coefficient is discarded.
///
/// # Errors
/// Returns [`DesignError::InvalidOrder`] if more than `MAX_ORDER` poles are given.
pub fn poles_to_coefficients(poles: &[Complex]) -> Result<Coefficients> {
    if poles.len() > MAX_ORDER {
        return Err(DesignError::InvalidOrder {
            order: poles.len(),
            max: MAX_ORDER,
        });
    }
    Ok(expand(poles))
}

/// Expansion without the length check; callers guarantee `poles.len() <= MAX_ORDER`.
pub(crate) fn expand(poles: &[Complex]) -> Coefficients {
    let mut acc: heapless::Vec<Complex, MAX_COEFFS> = heapless::Vec::new();
    let _ = acc.push(Complex::ONE);

    for &pole in poles.iter().take(MAX_ORDER) {
        let _ = acc.push(Complex::ZERO);
        // Multiply the running product by (1 - pole·z^-1), highest power first
        for j in (1..acc.len()).rev() {
            acc[j] = acc[j] - pole * acc[j - 1];
        }
    }

    acc.iter().map(|c| c.re).collect()
}

/// Evaluate `Σ c[k]·w^k` with Horner's scheme.
///
/// With `w = z^-1` this is the value of a transfer function numerator or
/// denominator at `z`. An empty slice evaluates to zero.
#[must_use]
pub fn eval_in_z_inverse(coeffs: &[f64], z_inv: Complex) -> Complex {
    coeffs
        .iter()
        .rev()
        .fold(Complex::ZERO, |acc, &c| acc * z_inv + Complex::from_real(c))
}
