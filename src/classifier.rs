//! Per-point classification policies built on [`iterate`].
//!
//! A classifier decides whether a sample point belongs to the rendered set.
//! The Newton classifier counts a point in when Newton's method converges to
//! a root of `z^n − 1`; the Mandelbrot classifier counts a point in when its
//! orbit stays bounded for the whole budget.

use crate::complex::{Complex, ComplexError};
use crate::iteration::{iterate, Orbit};
use serde::{Deserialize, Serialize};

/// A per-point membership test
pub trait Classifier: Sync {
    /// Run the iteration for the sample point `c`
    fn orbit(&self, c: Complex) -> Result<Orbit, ComplexError>;

    /// Whether a finished orbit puts its point in the set
    fn is_hit(&self, orbit: &Orbit) -> bool;

    /// The iteration budget given to each point
    fn max_iterations(&self) -> u32;

    /// How strongly a hit is drawn, from 0.0 (background) to 1.0 (full colour).
    /// Hits that needed fewer iterations are brighter.
    fn brightness(&self, orbit: &Orbit) -> f64 {
        1.0 - orbit.iterations as f64 / (self.max_iterations() as f64 + 1.0)
    }

    /// The orbit of `c` if `c` is a hit, `None` otherwise
    fn classify(&self, c: Complex) -> Result<Option<Orbit>, ComplexError> {
        let orbit = self.orbit(c)?;
        Ok(if self.is_hit(&orbit) { Some(orbit) } else { None })
    }
}

/// Newton's method on `f(z) = z^degree − 1`
#[derive(Clone, Copy, Debug)]
pub struct NewtonRoots {
    pub degree: u32,
    /// Upper bound on `|f(z)|²` for a value to count as a root
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl NewtonRoots {
    pub fn new(degree: u32, tolerance: f64, max_iterations: u32) -> NewtonRoots {
        NewtonRoots {
            degree,
            tolerance,
            max_iterations,
        }
    }

    /// `z^degree − 1`
    fn value(&self, z: Complex) -> Result<Complex, ComplexError> {
        Ok(z.power(Complex::real(self.degree as f64))?.sub(Complex::ONE))
    }

    /// `degree · z^(degree − 1)`
    fn slope(&self, z: Complex) -> Result<Complex, ComplexError> {
        let reduced = match self.degree.saturating_sub(1) {
            0 => Complex::ONE,
            1 => z,
            2 => z.square(),
            3 => z.cube(),
            k => z.power(Complex::real(k as f64))?,
        };
        Ok(Complex::real(self.degree as f64).mul(reduced))
    }

    fn step(&self, z: Complex) -> Result<Complex, ComplexError> {
        Ok(z.sub(self.value(z)?.div(self.slope(z)?)?))
    }
}

impl Classifier for NewtonRoots {
    fn orbit(&self, c: Complex) -> Result<Orbit, ComplexError> {
        iterate(
            c,
            |z| self.step(z),
            |z| Ok(self.value(z)?.squared_module() <= self.tolerance),
            self.max_iterations,
        )
    }

    fn is_hit(&self, orbit: &Orbit) -> bool {
        orbit.stopped
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// The escape-time test for `z ↦ z² + c` starting from zero
#[derive(Clone, Copy, Debug)]
pub struct Mandelbrot {
    pub escape_radius: f64,
    pub max_iterations: u32,
}

impl Mandelbrot {
    pub fn new(escape_radius: f64, max_iterations: u32) -> Mandelbrot {
        Mandelbrot {
            escape_radius,
            max_iterations,
        }
    }
}

impl Classifier for Mandelbrot {
    fn orbit(&self, c: Complex) -> Result<Orbit, ComplexError> {
        let escape_squared = self.escape_radius * self.escape_radius;
        iterate(
            Complex::ZERO,
            |z| Ok(z.square().sum(c)),
            |z| Ok(z.squared_module() > escape_squared),
            self.max_iterations,
        )
    }

    fn is_hit(&self, orbit: &Orbit) -> bool {
        !orbit.stopped
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Every hit used the whole budget, so shade by where the orbit ended:
    /// the closer to the escape circle, the dimmer.
    fn brightness(&self, orbit: &Orbit) -> f64 {
        let escape_squared = self.escape_radius * self.escape_radius;
        let reach = (orbit.z.squared_module() / escape_squared).clamp(0.0, 1.0);
        1.0 - MANDELBROT_FADE * reach
    }
}

/// Largest share of the colour a bounded orbit can lose when shaded
const MANDELBROT_FADE: f64 = 0.75;

/// Which fractal to render, with its own parameters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fractal {
    Newton { degree: u32, tolerance: f64 },
    Mandelbrot { escape_radius: f64 },
}

impl Fractal {
    pub fn classifier(&self, max_iterations: u32) -> Box<dyn Classifier> {
        match *self {
            Fractal::Newton { degree, tolerance } => {
                Box::new(NewtonRoots::new(degree, tolerance, max_iterations))
            }
            Fractal::Mandelbrot { escape_radius } => {
                Box::new(Mandelbrot::new(escape_radius, max_iterations))
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            Fractal::Newton { degree, .. } => format!("Newton z^{degree}-1"),
            Fractal::Mandelbrot { .. } => String::from("Mandelbrot"),
        }
    }
}
