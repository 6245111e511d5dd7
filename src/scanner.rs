//! Walks a rectangle of the complex plane at a fixed step and collects the
//! points a [`Classifier`] accepts.

use crate::classifier::Classifier;
use crate::complex::Complex;
use crate::iteration::Orbit;
use indicatif::ProgressBar;
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The half-open rectangle `[x_min, x_max) × [y_min, y_max)`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) × [{}, {})",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

impl Region {
    /// Sample coordinates along one axis.
    ///
    /// Positions are `min + i·step` rather than a running sum, so the last
    /// sample does not drift past `max`. An empty or inverted range yields
    /// nothing.
    fn axis(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> + Clone {
        let count = if max > min && step > 0.0 {
            ((max - min) / step).ceil() as usize
        } else {
            0
        };
        (0..count)
            .map(move |i| min + i as f64 * step)
            .take_while(move |v| *v < max)
    }

    pub fn xs(&self, step: f64) -> impl Iterator<Item = f64> + Clone {
        Region::axis(self.x_min, self.x_max, step)
    }

    pub fn ys(&self, step: f64) -> impl Iterator<Item = f64> + Clone {
        Region::axis(self.y_min, self.y_max, step)
    }

    /// Every sample point, x outer and y inner, both ascending
    pub fn sample_points(&self, step: f64) -> impl Iterator<Item = Complex> {
        let ys = self.ys(step);
        self.xs(step)
            .flat_map(move |x| ys.clone().map(move |y| Complex::new(x, y)))
    }
}

/// A sample point accepted by the classifier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub point: Complex,
    pub orbit: Orbit,
    /// Shading weight from [`Classifier::brightness`]
    pub brightness: f64,
}

/// Outcome of a whole scan
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Accepted points, in scan order
    pub hits: Vec<Hit>,
    /// Points handed to the classifier
    pub sampled: usize,
    /// Points whose iteration failed and were counted as misses
    pub failures: usize,
}

impl ScanReport {
    fn absorb(&mut self, other: ScanReport) {
        self.hits.extend(other.hits);
        self.sampled += other.sampled;
        self.failures += other.failures;
    }

    fn record(&mut self, point: Complex, classifier: &dyn Classifier) {
        self.sampled += 1;
        match classifier.classify(point) {
            Ok(Some(orbit)) => self.hits.push(Hit {
                point,
                orbit,
                brightness: classifier.brightness(&orbit),
            }),
            Ok(None) => {}
            Err(error) => {
                trace!("skipping {point}: {error}");
                self.failures += 1;
            }
        }
    }
}

/// Number of sample points in `region`, for sizing progress bars
pub fn sample_count(region: &Region, step: f64) -> usize {
    region.xs(step).count() * region.ys(step).count()
}

/// Classify every sample point of `region` on the current thread.
/// `progress` is advanced once per point.
pub fn scan(
    region: &Region,
    step: f64,
    classifier: &dyn Classifier,
    progress: &ProgressBar,
) -> ScanReport {
    let mut report = ScanReport::default();
    for point in region.sample_points(step) {
        report.record(point, classifier);
        progress.inc(1);
    }
    log_report(&report);
    report
}

/// Same result as [`scan`], with columns spread over the current rayon pool
pub fn scan_parallel(
    region: &Region,
    step: f64,
    classifier: &dyn Classifier,
    progress: &ProgressBar,
) -> ScanReport {
    let xs: Vec<f64> = region.xs(step).collect();
    let columns: Vec<ScanReport> = xs
        .par_iter()
        .map(|x| {
            let mut column = ScanReport::default();
            for y in region.ys(step) {
                column.record(Complex::new(*x, y), classifier);
            }
            progress.inc(column.sampled as u64);
            column
        })
        .collect();

    let mut report = ScanReport::default();
    for column in columns {
        report.absorb(column);
    }
    log_report(&report);
    report
}

fn log_report(report: &ScanReport) {
    debug!(
        "scanned {} points: {} hits, {} failures",
        report.sampled,
        report.hits.len(),
        report.failures
    );
}
