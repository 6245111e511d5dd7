//! Utility for rendering settings

use crate::classifier::Fractal;
use crate::colour::Colour;
use crate::render::{PointStyle, Shading};
use crate::scanner::Region;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};
use serde::{Deserialize, Serialize};
use std::io::Error;
use std::{fmt, fs};

/// Configuration Settings for the main function
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct RenderSettings {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Distance between neighbouring sample points on the complex plane
    pub step: f64,
    /// Iteration budget per sample point
    pub max_iterations: u32,
    /// Pixels per unit of the complex plane
    pub zoom: f64,
    /// Side of the square drawn for each hit, in pixels
    pub point_size: u32,
    pub colour: Colour,
    pub background: Colour,
    pub shading: Shading,
    #[serde(skip)]
    pub threads: Option<u32>,
    /// Area of the complex plane to sample
    pub region: Region,
    pub fractal: Fractal,
}

/// Newton's fractal for `z^4 − 1`, drawn as blue squares
pub const NEWTON_SETTINGS: RenderSettings = RenderSettings {
    width: 800,
    height: 600,
    step: 0.005,
    max_iterations: 25,
    zoom: 150.0,
    point_size: 7,
    colour: Colour::BLUE,
    background: Colour::WHITE,
    shading: Shading::Flat,
    threads: None,
    region: Region {
        x_min: -0.9,
        x_max: 0.9,
        y_min: -0.8,
        y_max: 0.8,
    },
    fractal: Fractal::Newton {
        degree: 4,
        tolerance: 0.001,
    },
};

/// The Mandelbrot set, drawn as royal blue squares
pub const MANDELBROT_SETTINGS: RenderSettings = RenderSettings {
    width: 800,
    height: 600,
    step: 0.01,
    max_iterations: 20,
    zoom: 150.0,
    point_size: 5,
    colour: Colour::ROYAL_BLUE,
    background: Colour::WHITE,
    shading: Shading::Flat,
    threads: None,
    region: Region {
        x_min: -2.0,
        x_max: 1.0,
        y_min: -1.5,
        y_max: 1.5,
    },
    fractal: Fractal::Mandelbrot { escape_radius: 2.0 },
};

impl fmt::Display for RenderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fractal:\t{}\nRegion:\t\t{}\nStep:\t\t{}\nIterations:\t{}\n{}Canvas:\t\t{}x{} (zoom {})\nPoints:\t\t{}px {} on {}",
            self.fractal.name(),
            self.region,
            self.step,
            self.max_iterations,
            match self.threads {
                None => String::from(""),
                Some(threads) => {
                    format!("Threads:\t{threads}\n")
                }
            },
            self.width,
            self.height,
            self.zoom,
            self.point_size,
            self.colour,
            self.background,
        )
    }
}

impl RenderSettings {
    /// Serializes and writes the configuration in TOML format to a file
    pub fn to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(path, self.serialize()?)?;
        Ok(())
    }

    /// Serializes the configuration to TOML
    pub fn serialize(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Opens a TOML file to a [`RenderSettings`]
    pub fn from_file(path: &str) -> Result<RenderSettings, Box<dyn std::error::Error>> {
        let data: String = fs::read_to_string(path)?;
        let settings: RenderSettings = toml::from_str(data.as_str())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects settings that would never finish or could not be drawn.
    /// An empty region is allowed and simply renders nothing.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(format!("Step must be a positive number, got {}", self.step).into());
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(format!("Zoom must be a positive number, got {}", self.zoom).into());
        }
        if self.max_iterations == 0 {
            return Err("The iteration budget must be at least 1".into());
        }
        if self.point_size == 0 {
            return Err("Point size must be at least 1 pixel".into());
        }
        if self.width == 0 || self.height == 0 {
            return Err(format!("Canvas cannot be {}x{}", self.width, self.height).into());
        }
        let bounds = [
            self.region.x_min,
            self.region.x_max,
            self.region.y_min,
            self.region.y_max,
        ];
        if bounds.iter().any(|bound| !bound.is_finite()) {
            return Err(format!("Region bounds must be finite, got {}", self.region).into());
        }
        match self.fractal {
            Fractal::Newton { degree, tolerance } => {
                if degree < 2 {
                    return Err(format!("Newton degree must be at least 2, got {degree}").into());
                }
                if !(tolerance > 0.0) {
                    return Err(format!("Tolerance must be positive, got {tolerance}").into());
                }
            }
            Fractal::Mandelbrot { escape_radius } => {
                if !(escape_radius > 0.0) {
                    return Err(
                        format!("Escape radius must be positive, got {escape_radius}").into(),
                    );
                }
            }
        }
        Ok(())
    }

    /// How hits are drawn under these settings
    pub fn point_style(&self) -> PointStyle {
        PointStyle {
            colour: self.colour,
            background: self.background,
            size: self.point_size,
            zoom: self.zoom,
            shading: self.shading,
        }
    }

    /// Generates a [`RenderSettings`] from a TUI in the terminal
    pub fn from_wizard() -> Result<Option<RenderSettings>, Box<dyn std::error::Error>> {
        let base = match select(
            "Fractal",
            vec![
                ("Newton z^4 - 1", &NEWTON_SETTINGS),
                (
                    "Newton z^3 - 1",
                    &RenderSettings {
                        fractal: Fractal::Newton {
                            degree: 3,
                            tolerance: 0.001,
                        },
                        ..NEWTON_SETTINGS
                    },
                ),
                ("Mandelbrot", &MANDELBROT_SETTINGS),
            ],
            0,
        )? {
            Some(val) => *val,
            None => return Ok(None),
        };

        let step = match select(
            "Quality",
            vec![
                ("Draft", &(base.step * 2.0)),
                ("Normal", &base.step),
                ("Fine", &(base.step / 2.0)),
            ],
            1,
        )? {
            Some(val) => *val,
            None => return Ok(None),
        };

        let colour = match select(
            "Colour",
            vec![
                ("Blue", &Colour::BLUE),
                ("Royal blue", &Colour::ROYAL_BLUE),
                ("Charcoal", &Colour::rgb(0x44, 0x44, 0x44)),
            ],
            0,
        )? {
            Some(val) => *val,
            None => return Ok(None),
        };

        let shading = match select(
            "Shading",
            vec![
                ("Flat", &Shading::Flat),
                ("By iteration count", &Shading::Iterations),
            ],
            0,
        )? {
            Some(val) => *val,
            None => return Ok(None),
        };

        let settings = RenderSettings {
            step,
            colour,
            shading,
            ..base
        };

        if Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Render like this?")
            .default(true)
            .interact()?
        {
            Ok(Some(settings))
        } else {
            Err("Canceled".into())
        }
    }
}

fn select<'a, T>(
    prompt: &str,
    items: Vec<(&str, &'a T)>,
    default: usize,
) -> Result<Option<&'a T>, Error> {
    let (selections, values): (Vec<&str>, Vec<&T>) = items.into_iter().unzip();
    match Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&selections)
        .default(default)
        .interact_on_opt(&Term::stderr())?
    {
        Some(index) => Ok(Some(values[index])),
        None => Ok(None),
    }
}
