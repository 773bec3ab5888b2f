//! Core types for pole and transfer function arithmetic.

#[allow(unused_imports)]
use num_traits::Float;

use crate::config::MAX_ORDER;

/// Complex number over `f64`.
///
/// Used for analog poles in the s-plane, digital poles in the z-plane and
/// points on the unit circle during response evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Complex {
    /// Real part
    pub re: f64,
    /// Imaginary part
    pub im: f64,
}

impl Complex {
    /// Zero.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// Multiplicative identity.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Create a new complex number.
    #[must_use]
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Create a complex number from a real value (im = 0).
    #[must_use]
    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Point on the unit circle at `angle` radians, `e^{j·angle}`.
    #[must_use]
    #[inline]
    pub fn cis(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { re: cos, im: sin }
    }

    /// Calculate magnitude (absolute value).
    ///
    /// Uses `hypot` so large pole coordinates do not overflow the square.
    #[must_use]
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Calculate magnitude squared.
    #[must_use]
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Phase angle in radians (-π to π).
    #[must_use]
    #[inline]
    pub fn phase(&self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate.
    #[must_use]
    #[inline]
    pub const fn conjugate(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Scale by a real factor.
    #[must_use]
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }

    /// Add two complex numbers.
    #[must_use]
    #[inline]
    pub fn add(&self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Subtract two complex numbers.
    #[must_use]
    #[inline]
    pub fn sub(&self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// Complex multiply.
    #[must_use]
    #[inline]
    pub fn multiply(&self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// Reciprocal `1/self`.
    ///
    /// Returns `None` for exact zero.
    #[must_use]
    pub fn reciprocal(&self) -> Option<Self> {
        let norm = self.magnitude_squared();
        if norm == 0.0 {
            None
        } else {
            Some(self.conjugate().scale(1.0 / norm))
        }
    }

    /// Complex division `self / other`.
    ///
    /// Returns `None` when `other` is exactly zero.
    #[must_use]
    pub fn checked_div(&self, other: Self) -> Option<Self> {
        other.reciprocal().map(|inv| self.multiply(inv))
    }

    /// True when the imaginary part is exactly zero.
    #[must_use]
    #[inline]
    pub fn is_real(&self) -> bool {
        self.im == 0.0
    }
}

impl core::ops::Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::add(&self, other)
    }
}

impl core::ops::Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::sub(&self, other)
    }
}

impl core::ops::Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl core::ops::Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        self.scale(factor)
    }
}

impl core::ops::Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(other)
    }
}

impl core::ops::AddAssign for Complex {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

/// Ordered pole set, index `k - 1` holds the pole generated for index `k`.
pub type PoleSet = heapless::Vec<Complex, MAX_ORDER>;
