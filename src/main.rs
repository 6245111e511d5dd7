//! Render Newton's fractal.
//!
//! Every point of a rectangle of the complex plane is used as the starting
//! value of Newton's method on `z^4 − 1`. Points that settle on a root within
//! the iteration budget are drawn as small squares on a canvas, which is then
//! written out as a PNG. The Mandelbrot set can be drawn the same way.

use crate::canvas::Canvas;
use crate::program_options::ProgramOptions;
use crate::render::draw_hits;
use crate::render_settings::RenderSettings;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::error::Error;
use std::num::NonZeroU32;
use std::path::Path;
use std::thread;

mod canvas;
mod classifier;
mod colour;
mod complex;
mod iteration;
mod program_options;
mod render;
mod render_settings;
mod scanner;

/// Main function that will hopefully give you a nice picture by the end
fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let ProgramOptions {
        render_settings,
        output_path,
        show_progress,
    } = program_options::get_options()?;

    let threads = match render_settings.threads {
        None => NonZeroU32::try_from(thread::available_parallelism()?)?.get(),
        Some(threads) => threads,
    };

    println!("Rendering with settings:\n{render_settings}");

    let progress = if show_progress {
        let progress = ProgressBar::new(0);
        progress.set_style(ProgressStyle::with_template(
            "{spinner:.black.on_blue.bold}{wide_bar:.blue/white} [eta:{eta_precise}] {msg:>40.white.bold}",
        )?);
        progress
    } else {
        ProgressBar::hidden()
    };

    let canvas = render_fractal(render_settings, threads, &progress)?;
    progress.finish_and_clear();

    canvas.write_png(Path::new(&output_path))?;
    info!("wrote {output_path}");
    Ok(())
}

/// Scan the configured region and draw every hit onto a fresh canvas.
/// More than one thread spreads the scan over a rayon pool of that size.
fn render_fractal(
    settings: RenderSettings,
    threads: u32,
    progress: &ProgressBar,
) -> Result<Canvas, Box<dyn Error>> {
    let classifier = settings.fractal.classifier(settings.max_iterations);
    let region = settings.region;

    progress.set_length(scanner::sample_count(&region, settings.step) as u64);
    progress.set_message(format!(
        "Scanning {} on {threads} threads",
        settings.fractal.name()
    ));

    let report = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads as usize)
            .build()?;
        pool.install(|| {
            scanner::scan_parallel(&region, settings.step, classifier.as_ref(), progress)
        })
    } else {
        scanner::scan(&region, settings.step, classifier.as_ref(), progress)
    };
    info!(
        "{} of {} points are in the set ({} could not be iterated)",
        report.hits.len(),
        report.sampled,
        report.failures
    );

    let mut canvas = Canvas::new(settings.width, settings.height, settings.background);
    draw_hits(&mut canvas, &report.hits, &settings.point_style());
    Ok(canvas)
}
