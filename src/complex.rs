//! Complex numbers as plain values.
//!
//! Every operation returns a new value. Division and exponentiation are
//! partial: dividing by zero and raising zero to a complex power are
//! reported as [`ComplexError`] rather than quietly producing NaN.

use std::error::Error;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Real and imaginary parts of a complex number
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// Failures of the partial operations on [`Complex`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplexError {
    /// The divisor was the zero complex number
    DivisionByZero,
    /// The base of `power` was the zero complex number, which has no polar form
    UndefinedPower,
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexError::DivisionByZero => write!(f, "division by the zero complex number"),
            ComplexError::UndefinedPower => write!(f, "power of the zero complex number"),
        }
    }
}

impl Error for ComplexError {}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// A complex number with no imaginary part
    pub const fn real(re: f64) -> Complex {
        Complex { re, im: 0.0 }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    pub fn sum(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    pub fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    pub fn mul(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// `self · conj(other) / |other|²`
    pub fn div(self, other: Complex) -> Result<Complex, ComplexError> {
        if other.is_zero() {
            return Err(ComplexError::DivisionByZero);
        }
        let denominator = other.squared_module();
        Ok(Complex::new(
            (self.re * other.re + self.im * other.im) / denominator,
            (self.im * other.re - self.re * other.im) / denominator,
        ))
    }

    /// Raise to a complex exponent through the polar form.
    ///
    /// For `self = r·e^(iθ)` and `exponent = p + qi` the result has magnitude
    /// `r^p · e^(−qθ)` and angle `p·θ + q·ln r`.
    pub fn power(self, exponent: Complex) -> Result<Complex, ComplexError> {
        if self.is_zero() {
            return Err(ComplexError::UndefinedPower);
        }
        let r = self.squared_module().sqrt();
        let theta = self.im.atan2(self.re);
        let magnitude = r.powf(exponent.re) * (-exponent.im * theta).exp();
        let angle = exponent.re * theta + exponent.im * r.ln();
        Ok(Complex::new(magnitude * angle.cos(), magnitude * angle.sin()))
    }

    pub fn square(self) -> Complex {
        Complex::new(
            self.re * self.re - self.im * self.im,
            self.re * self.im + self.im * self.re,
        )
    }

    pub fn cube(self) -> Complex {
        let (a, b) = (self.re, self.im);
        Complex::new(
            a.powf(3.0) - 3.0 * a * b.powf(2.0),
            3.0 * a.powf(2.0) * b - b.powf(3.0),
        )
    }

    /// `re² + im²`, the squared modulus. Not the modulus itself.
    pub fn squared_module(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Both components multiplied by `factor`
    pub fn scale(self, factor: f64) -> Complex {
        Complex::new(self.re * factor, self.im * factor)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, other: Complex) -> Complex {
        self.sum(other)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, other: Complex) -> Complex {
        Complex::sub(self, other)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, other: Complex) -> Complex {
        Complex::mul(self, other)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
pub(crate) fn close(a: Complex, b: Complex, tolerance: f64) -> bool {
    (a.re - b.re).abs() <= tolerance && (a.im - b.im).abs() <= tolerance
}
