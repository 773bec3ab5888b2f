//! Chebyshev Type I Lowpass Design
//!
//! Places the analog prototype poles on an ellipse in the left half of the
//! s-plane and maps them into the unit disk with the bilinear transform.
//!
//! # Operations
//!
//! - [`design_chebyshev1`]: prototype poles mapped without pre-warping
//! - [`design_chebyshev1_prewarped`]: prototype scaled so the passband edge
//!   lands on `cutoff_norm · Nyquist`
//! - [`analog_poles`], [`ripple_factor`], [`bilinear`]: the individual steps
//!
//! Only the denominator side is designed here. Numerator coefficients are
//! supplied by the caller when evaluating a response.

use core::f64::consts::{LN_10, PI};

#[allow(unused_imports)]
use num_traits::Float;

use crate::config::MAX_ORDER;
use crate::error::{DesignError, Result};
use crate::polynomial::{expand, Coefficients};
use crate::types::{Complex, PoleSet};

/// Result of a Chebyshev Type I design.
///
/// Holds the ripple factor and the digital poles, plus the inputs the design
/// was made from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FilterDesign {
    eps: f64,
    poles: PoleSet,
    ripple_db: f64,
    cutoff_norm: f64,
}

impl FilterDesign {
    /// Ripple factor `sqrt(10^(ripple_db/10) − 1)`, always > 0.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Digital poles, ordered by generating index `k = 1..=order`.
    #[must_use]
    pub fn poles(&self) -> &[Complex] {
        &self.poles
    }

    /// Filter order (number of poles).
    #[must_use]
    pub fn order(&self) -> usize {
        self.poles.len()
    }

    /// Passband ripple in dB the design was made for.
    #[must_use]
    pub fn ripple_db(&self) -> f64 {
        self.ripple_db
    }

    /// Normalized cutoff the design was made for.
    #[must_use]
    pub fn cutoff_norm(&self) -> f64 {
        self.cutoff_norm
    }

    /// Passband gain floor `1/sqrt(1 + eps²)`.
    ///
    /// The magnitude of a unity-peak design oscillates between this value
    /// and 1 inside the passband.
    #[must_use]
    pub fn passband_floor(&self) -> f64 {
        1.0 / (1.0 + self.eps * self.eps).sqrt()
    }

    /// Denominator coefficients `a` (with `a[0] = 1`) expanded from the poles.
    #[must_use]
    pub fn denominator(&self) -> Coefficients {
        expand(&self.poles)
    }
}

/// Compute the ripple factor from passband ripple in dB.
///
/// `eps = sqrt(10^(ripple_db/10) − 1)`, evaluated through `expm1` so that
/// very small ripple keeps full precision.
///
/// # Errors
/// Returns [`DesignError::InvalidRipple`] unless `ripple_db` is finite and
/// positive and yields a finite, non-zero `eps`.
pub fn ripple_factor(ripple_db: f64) -> Result<f64> {
    if !(ripple_db.is_finite() && ripple_db > 0.0) {
        return Err(DesignError::InvalidRipple { ripple_db });
    }

    let eps = (ripple_db / 10.0 * LN_10).exp_m1().sqrt();
    if eps > 0.0 && eps.is_finite() {
        Ok(eps)
    } else {
        Err(DesignError::InvalidRipple { ripple_db })
    }
}

/// Compute the analog prototype poles for a given order and ripple.
///
/// Pole `k` sits at `(−sinh(v)·sin θ_k, cosh(v)·cos θ_k)` with
/// `v = asinh(1/eps)/order` and `θ_k = π(2k−1)/(2·order)`. For odd orders
/// the middle pole is exactly real.
///
/// # Errors
/// Returns an error for an order outside `1..=MAX_ORDER` or invalid ripple.
pub fn analog_poles(order: usize, ripple_db: f64) -> Result<PoleSet> {
    check_order(order)?;
    let eps = ripple_factor(ripple_db)?;
    Ok(prototype_poles(order, eps))
}

/// Map an analog pole to the z-plane.
///
/// Bilinear transform `z = (2 + s)/(2 − s)` (sample period 1) in closed
/// form. Left half-plane poles land strictly inside the unit circle. The
/// point `s = 2` has no finite image.
///
/// Poles with `|s| > 2` are divided through by `|s|²/4` first, so any
/// finite pole maps to a finite point.
#[must_use]
pub fn bilinear(pole: Complex) -> Complex {
    let half = pole.magnitude() / 2.0;
    if half <= 1.0 {
        let q = pole.magnitude_squared() / 4.0;
        let denom = 1.0 - pole.re + q;
        Complex::new((1.0 - q) / denom, pole.im / denom)
    } else {
        let inv = 1.0 / half;
        let inv_q = inv * inv;
        let denom = inv_q - pole.re * inv * inv + 1.0;
        Complex::new((inv_q - 1.0) / denom, pole.im * inv * inv / denom)
    }
}

/// Design a Chebyshev Type I lowpass filter.
///
/// # Arguments
/// * `order` - Filter order (number of poles), `1..=MAX_ORDER`
/// * `ripple_db` - Passband ripple in dB, > 0
/// * `cutoff_norm` - Cutoff as a fraction of Nyquist, in (0, 1)
///
/// The cutoff is validated and recorded but does not scale the mapping;
/// the prototype's unit radian edge maps to `2·atan(1/2)` rad/sample. Use
/// [`design_chebyshev1_prewarped`] to place the edge at `cutoff_norm`.
///
/// # Errors
/// Returns an `InvalidParameter`-class [`DesignError`] for out-of-domain input.
pub fn design_chebyshev1(order: usize, ripple_db: f64, cutoff_norm: f64) -> Result<FilterDesign> {
    design(order, ripple_db, cutoff_norm, false)
}

/// Design a Chebyshev Type I lowpass filter with its passband edge at `cutoff_norm`.
///
/// The analog prototype is scaled by `Ω_c = 2·tan(π·cutoff_norm/2)` before
/// the bilinear map, which cancels the transform's frequency warping at
/// the cutoff.
///
/// # Errors
/// Same as [`design_chebyshev1`].
pub fn design_chebyshev1_prewarped(
    order: usize,
    ripple_db: f64,
    cutoff_norm: f64,
) -> Result<FilterDesign> {
    design(order, ripple_db, cutoff_norm, true)
}

fn design(order: usize, ripple_db: f64, cutoff_norm: f64, prewarp: bool) -> Result<FilterDesign> {
    check_order(order)?;
    let eps = ripple_factor(ripple_db)?;
    check_cutoff(cutoff_norm)?;

    let scale = if prewarp {
        2.0 * (PI * cutoff_norm / 2.0).tan()
    } else {
        1.0
    };

    let prototype = prototype_poles(order, eps);
    let poles: PoleSet = prototype.iter().map(|&p| bilinear(p * scale)).collect();

    // Near-zero ripple pushes poles so far out that z rounds onto the unit circle
    if !poles.iter().all(|&z| inside_unit_disk(z)) {
        let cutoff_to_blame = prewarp && prototype.iter().all(|&p| inside_unit_disk(bilinear(p)));
        return Err(if cutoff_to_blame {
            DesignError::InvalidCutoff { cutoff_norm }
        } else {
            DesignError::InvalidRipple { ripple_db }
        });
    }

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "cheby1 order={} ripple={}dB eps={} prewarp={}",
        order,
        ripple_db,
        eps,
        prewarp
    );

    Ok(FilterDesign {
        eps,
        poles,
        ripple_db,
        cutoff_norm,
    })
}

fn prototype_poles(order: usize, eps: f64) -> PoleSet {
    let n = order as f64;
    let sinh_arg = (1.0 / eps).asinh() / n;
    let a = sinh_arg.sinh();
    let b = sinh_arg.cosh();

    let mut poles = PoleSet::new();
    for k in 1..=order {
        let theta = PI * (2 * k - 1) as f64 / (2.0 * n);
        // θ = π/2 exactly: cos would leave a ~1e-17 residue
        let im = if 2 * k - 1 == order {
            0.0
        } else {
            b * theta.cos()
        };
        // Capacity is MAX_ORDER, checked by the caller
        let _ = poles.push(Complex::new(-a * theta.sin(), im));
    }
    poles
}

fn inside_unit_disk(z: Complex) -> bool {
    z.magnitude() < 1.0
}

fn check_order(order: usize) -> Result<()> {
    if (1..=MAX_ORDER).contains(&order) {
        Ok(())
    } else {
        Err(DesignError::InvalidOrder {
            order,
            max: MAX_ORDER,
        })
    }
}

fn check_cutoff(cutoff_norm: f64) -> Result<()> {
    if cutoff_norm > 0.0 && cutoff_norm < 1.0 {
        Ok(())
    } else {
        Err(DesignError::InvalidCutoff { cutoff_norm })
    }
}
