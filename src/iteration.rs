//! The fixed-budget iteration loop shared by every classifier.

use crate::complex::{Complex, ComplexError};

/// Where an iterated value ended up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Value after the last update
    pub z: Complex,
    /// Number of updates applied
    pub iterations: u32,
    /// Whether the stopping predicate held before the budget ran out
    pub stopped: bool,
}

/// Apply `next` to `start` at most `budget` times, stopping as soon as
/// `predicate` holds.
///
/// The predicate is tested on `start` and then once after every update, so a
/// value that already satisfies it costs no iterations at all. Errors from
/// either closure abort the loop and are handed back to the caller.
pub fn iterate<N, P>(
    start: Complex,
    mut next: N,
    mut predicate: P,
    budget: u32,
) -> Result<Orbit, ComplexError>
where
    N: FnMut(Complex) -> Result<Complex, ComplexError>,
    P: FnMut(Complex) -> Result<bool, ComplexError>,
{
    let mut z = start;
    let mut stopped = predicate(z)?;
    let mut iterations = 0;

    while iterations < budget && !stopped {
        z = next(z)?;
        stopped = predicate(z)?;
        iterations += 1;
    }

    Ok(Orbit {
        z,
        iterations,
        stopped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halve(z: Complex) -> Result<Complex, ComplexError> {
        Ok(z.scale(0.5))
    }

    #[test]
    fn stops_when_the_predicate_holds() {
        let orbit = iterate(
            Complex::real(16.0),
            halve,
            |z| Ok(z.re <= 1.0),
            100,
        )
        .unwrap();
        assert_eq!(orbit.z, Complex::real(1.0));
        assert_eq!(orbit.iterations, 4);
        assert!(orbit.stopped);
    }

    #[test]
    fn exhausting_the_budget_is_not_stopping() {
        let orbit = iterate(Complex::real(16.0), halve, |_| Ok(false), 3).unwrap();
        assert_eq!(orbit.z, Complex::real(2.0));
        assert_eq!(orbit.iterations, 3);
        assert!(!orbit.stopped);
    }

    #[test]
    fn predicate_is_checked_before_the_first_update() {
        let mut updates = 0;
        let orbit = iterate(
            Complex::ONE,
            |z| {
                updates += 1;
                Ok(z)
            },
            |_| Ok(true),
            10,
        )
        .unwrap();
        assert_eq!(updates, 0);
        assert_eq!(orbit.iterations, 0);
        assert!(orbit.stopped);
    }

    #[test]
    fn predicate_runs_once_per_update_plus_once() {
        let mut checks = 0;
        iterate(
            Complex::ONE,
            halve,
            |_| {
                checks += 1;
                Ok(false)
            },
            7,
        )
        .unwrap();
        assert_eq!(checks, 8);
    }

    #[test]
    fn predicate_holding_on_the_last_update_counts() {
        let orbit = iterate(Complex::real(8.0), halve, |z| Ok(z.re <= 1.0), 3).unwrap();
        assert_eq!(orbit.iterations, 3);
        assert!(orbit.stopped);
    }

    #[test]
    fn update_errors_propagate() {
        let result = iterate(
            Complex::ONE,
            |z| z.div(Complex::ZERO),
            |_| Ok(false),
            5,
        );
        assert_eq!(result, Err(ComplexError::DivisionByZero));
    }

    #[test]
    fn zero_budget_only_checks_the_start() {
        let orbit = iterate(Complex::real(2.0), halve, |z| Ok(z.re < 1.0), 0).unwrap();
        assert_eq!(orbit.iterations, 0);
        assert!(!orbit.stopped);
    }
}
